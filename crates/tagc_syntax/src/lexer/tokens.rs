//! Token types for the tag-set lexer.

use std::fmt;

use tagc_core::lang::punctuation::{self, PunctuationId, QUOTE};

use crate::ast::Span;

/// How the lexer terminated a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Terminated by whitespace or end of input.
    Word,
    /// Delimited by a pair of double quotes (or by end of input if the closing quote is missing).
    Quoted,
}

/// A token with its text and source span.
///
/// For quoted tokens `text` excludes the quotes while `span` covers them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn word(text: impl Into<String>, span: Span) -> Self {
        Self::new(TokenKind::Word, text, span)
    }

    pub fn quoted(text: impl Into<String>, span: Span) -> Self {
        Self::new(TokenKind::Quoted, text, span)
    }

    /// Return the punctuation id, if this is a structural punctuation word.
    ///
    /// Quoted tokens never count as punctuation.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self.kind {
            TokenKind::Word => punctuation::from_str(&self.text),
            TokenKind::Quoted => None,
        }
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        self.punctuation_id() == Some(id)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Word => write!(f, "{}", self.text),
            TokenKind::Quoted => write!(f, "{QUOTE}{}{QUOTE}", self.text),
        }
    }
}
