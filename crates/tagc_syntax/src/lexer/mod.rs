//! Lexer for tag-set files
//!
//! Tokens are either whitespace-delimited words or double-quoted strings:
//! - Leading whitespace (Unicode `White_Space`) is skipped.
//! - A token starting with `"` runs to the next `"`; both quotes are dropped from the text. A missing closing quote
//!   is not an error: the token simply runs to end of input.
//! - Any other token runs to the next whitespace character or end of input. A `"` in the middle of a word is
//!   ordinary text.
//!
//! The [`Lexer`] is a lazy iterator owning its cursor into the borrowed source; tokens are produced once, in order,
//! with no backtracking.

pub mod tokens;

pub use tokens::{Token, TokenKind};

use std::iter::FusedIterator;

use tagc_core::lang::punctuation::QUOTE;

use crate::ast::Span;

/// Lazy token stream over a source string.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.source[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn scan_quoted(&mut self, start: usize) -> Token {
        let body_start = start + QUOTE.len_utf8();
        match self.source[body_start..].find(QUOTE) {
            Some(len) => {
                let body_end = body_start + len;
                self.pos = body_end + QUOTE.len_utf8();
                Token::quoted(&self.source[body_start..body_end], Span::new(start, self.pos))
            }
            None => {
                self.pos = self.source.len();
                tracing::debug!(offset = start, "unterminated quote closed at end of input");
                Token::quoted(&self.source[body_start..], Span::new(start, self.pos))
            }
        }
    }

    fn scan_word(&mut self, start: usize) -> Token {
        self.pos = self.source[start..]
            .find(char::is_whitespace)
            .map_or(self.source.len(), |len| start + len);
        Token::word(&self.source[start..self.pos], Span::new(start, self.pos))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.skip_whitespace();
        let start = self.pos;
        let first = self.source[start..].chars().next()?;
        if first == QUOTE {
            Some(self.scan_quoted(start))
        } else {
            Some(self.scan_word(start))
        }
    }
}

impl FusedIterator for Lexer<'_> {}

/// Convenience function to lex a whole source string.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tagc_core::lang::punctuation::PunctuationId;

    fn texts(source: &str) -> Vec<String> {
        lex(source).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_words_split_on_any_whitespace() {
        assert_eq!(texts("a  b\tc\r\nd\u{00a0}e"), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(lex("").is_empty());
        assert!(lex(" \n\t  ").is_empty());
    }

    #[test]
    fn test_quoted_token_keeps_whitespace() {
        let tokens = lex(r#"x "hello world" y"#);
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].kind, TokenKind::Quoted);
        assert_eq!(tokens[1].text, "hello world");
        assert_eq!(tokens[1].span, Span::new(2, 15));
        assert_eq!(tokens[2].text, "y");
    }

    #[test]
    fn test_empty_quoted_token() {
        let tokens = lex(r#""" a"#);
        assert_eq!(tokens[0], Token::quoted("", Span::new(0, 2)));
        assert_eq!(tokens[1].text, "a");
    }

    #[test]
    fn test_unterminated_quote_runs_to_end() {
        let tokens = lex("a \"open ended\n text");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].kind, TokenKind::Quoted);
        assert_eq!(tokens[1].text, "open ended\n text");
        assert_eq!(tokens[1].span.end, 19);
    }

    #[test]
    fn test_quote_inside_word_is_text() {
        assert_eq!(texts(r#"ab"c d"#), [r#"ab"c"#, "d"]);
    }

    #[test]
    fn test_quoted_token_adjacent_to_word() {
        // The closing quote ends the token even without whitespace after it.
        assert_eq!(texts(r#""a b"c"#), ["a b", "c"]);
    }

    #[test]
    fn test_punctuation_only_for_words() {
        let tokens = lex(r#"{ "{" | } {}"#);
        assert!(tokens[0].is_punctuation(PunctuationId::LBrace));
        assert_eq!(tokens[1].punctuation_id(), None);
        assert!(tokens[2].is_punctuation(PunctuationId::Pipe));
        assert!(tokens[3].is_punctuation(PunctuationId::RBrace));
        assert_eq!(tokens[4].punctuation_id(), None);
    }

    #[test]
    fn test_spans_and_position() {
        let mut lexer = Lexer::new("  ab cd");
        assert_eq!(lexer.next().map(|t| t.span), Some(Span::new(2, 4)));
        assert_eq!(lexer.position(), 4);
        assert_eq!(lexer.next().map(|t| t.span), Some(Span::new(5, 7)));
        assert_eq!(lexer.next(), None);
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_non_ascii_words() {
        assert_eq!(texts("café \"naïve tag\" ünï"), ["café", "naïve tag", "ünï"]);
    }

    #[test]
    fn test_token_display() {
        let tokens = lex(r#"word "two words""#);
        assert_eq!(tokens[0].to_string(), "word");
        assert_eq!(tokens[1].to_string(), "\"two words\"");
    }
}
