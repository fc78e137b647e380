//! Syntax errors for tag-set files.
//!
//! Every error is fatal: the parser stops at the first one and the generation run is aborted. Errors carry a
//! [`Span`] and implement [`miette::Diagnostic`] so callers can render them against the source text.

use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

use tagc_core::lang::punctuation::{self, PunctuationId};

use crate::ast::Span;

/// What the parser was looking for when the input ran out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    /// Inside a `|` section: another field name or the `{` opening the tag list.
    FieldName,
    /// Inside a tag list: a tag name or the closing `}`.
    TagOrClose,
    /// A value for auxiliary field `field` of tag `tag`.
    AuxValue { tag: String, field: String },
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::FieldName => write!(f, "a field name or {}", punctuation_phrase(PunctuationId::LBrace)),
            Expected::TagOrClose => write!(f, "a tag name or {}", punctuation_phrase(PunctuationId::RBrace)),
            Expected::AuxValue { tag, field } => write!(f, "a value for field `{field}` of tag `{tag}`"),
        }
    }
}

/// Registry name and spelling of a punctuation token.
fn punctuation_phrase(id: PunctuationId) -> String {
    format!("{} `{}`", punctuation::describe(id), punctuation::as_str(id))
}

/// A fatal error found while lexing or parsing a tag-set file.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SyntaxError {
    #[error("unexpected end of input, expected {expected}")]
    #[diagnostic(code(tagc::syntax::unexpected_eof), help("is a closing `}}` missing?"))]
    UnexpectedEof {
        expected: Expected,
        #[label("input ends here")]
        span: Span,
    },

    #[error("set has no name")]
    #[diagnostic(code(tagc::syntax::missing_set_name), help("write the set name before `{{` or `|`"))]
    MissingSetName {
        #[label("no name before this delimiter")]
        span: Span,
    },

    #[error("tag `{tag}` is declared twice in set `{set}`")]
    #[diagnostic(code(tagc::syntax::duplicate_tag))]
    DuplicateTag {
        set: String,
        tag: String,
        #[label("declared again here")]
        span: Span,
        #[label("first declared here")]
        first: Span,
    },
}

impl SyntaxError {
    /// Primary location of the error.
    pub fn span(&self) -> Span {
        match self {
            SyntaxError::UnexpectedEof { span, .. }
            | SyntaxError::MissingSetName { span }
            | SyntaxError::DuplicateTag { span, .. } => *span,
        }
    }
}

/// Get 1-based line and column numbers for a byte offset.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let col = before[line_start..].chars().count() + 1;
    (line, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_messages() {
        let err = SyntaxError::UnexpectedEof {
            expected: Expected::TagOrClose,
            span: Span::point(3),
        };
        assert_eq!(err.to_string(), "unexpected end of input, expected a tag name or closing brace `}`");

        let err = SyntaxError::UnexpectedEof {
            expected: Expected::AuxValue {
                tag: "bar".to_string(),
                field: "Val".to_string(),
            },
            span: Span::point(3),
        };
        assert_eq!(
            err.to_string(),
            "unexpected end of input, expected a value for field `Val` of tag `bar`"
        );
    }

    #[test]
    fn test_field_name_message_uses_registry() {
        assert_eq!(Expected::FieldName.to_string(), "a field name or opening brace `{`");
    }

    #[test]
    fn test_diagnostic_code() {
        let err = SyntaxError::MissingSetName { span: Span::new(0, 1) };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("tagc::syntax::missing_set_name"));
        assert_eq!(err.span(), Span::new(0, 1));
    }

    #[test]
    fn test_line_col() {
        let source = "A {\n  x y\n}";
        assert_eq!(line_col(source, 0), (1, 1));
        assert_eq!(line_col(source, 6), (2, 3));
        assert_eq!(line_col(source, 100), (3, 2));
    }
}
