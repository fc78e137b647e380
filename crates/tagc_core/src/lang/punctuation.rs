//! Punctuation vocabulary.
//!
//! The tag-set language has exactly three structural punctuation tokens (`{`, `}`, `|`) plus the quote character
//! that the lexer uses to delimit tokens containing whitespace.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact: `{{` is an ordinary word.
//! - Punctuation only has structural meaning as a *word* token. A quoted `"{"` is plain text.
//! - This module is vocabulary only. It does not tokenize source text.

/// Quote character delimiting tokens that may contain whitespace.
pub const QUOTE: char = '"';

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    /// Opens the tag list of a set.
    LBrace,
    /// Closes the tag list of a set.
    RBrace,
    /// Introduces the auxiliary field names of a set.
    Pipe,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    /// Short human-readable name used in diagnostics.
    pub describe: &'static str,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    PunctuationInfo {
        id: PunctuationId::LBrace,
        canonical: "{",
        describe: "opening brace",
    },
    PunctuationInfo {
        id: PunctuationId::RBrace,
        canonical: "}",
        describe: "closing brace",
    },
    PunctuationInfo {
        id: PunctuationId::Pipe,
        canonical: "|",
        describe: "field separator",
    },
];

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Return the diagnostic name for a punctuation token.
pub fn describe(id: PunctuationId) -> &'static str {
    info_for(id).describe
}

/// Return the full metadata entry for a punctuation token.
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    match id {
        PunctuationId::LBrace => &PUNCTUATION[0],
        PunctuationId::RBrace => &PUNCTUATION[1],
        PunctuationId::Pipe => &PUNCTUATION[2],
    }
}

/// Resolve a punctuation spelling to its identifier.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}
