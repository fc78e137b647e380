//! Set parser for tag-set files
//!
//! Grammar (no nesting, no separators between entries):
//!
//! ```text
//! run        := setBlock*
//! setBlock   := nameTokens ( '|' fieldName* )? '{' tagEntry* '}'
//! nameTokens := tokens until '{' or '|'; the last one names the set
//! tagEntry   := tagName auxValue{#fieldNames}
//! ```
//!
//! ## Notes
//! - Tokens scanned before the set name are dropped (with a warning), as are stray tokens after the last block.
//! - Entry boundaries are positional: each entry is one tag name followed by exactly one value per field. An unquoted
//!   `}` in a value position is taken as the value (with a warning).
//! - Entries are sorted by tag name when the block closes; an entry's index is its rank.
//! - The parser stops at the first error. There is no recovery.
//!
//! ## Examples
//!
//! ```rust
//! use tagc_syntax::lexer::Lexer;
//! use tagc_syntax::parser::SetParser;
//!
//! let mut sets = SetParser::new(Lexer::new("A { y x } B { z }"));
//! let first = sets.next().unwrap().unwrap();
//! assert_eq!(first.tag_names().collect::<Vec<_>>(), ["x", "y"]);
//! assert_eq!(sets.next().unwrap().unwrap().name, "B");
//! assert!(sets.next().is_none());
//! ```

use std::iter::FusedIterator;

use tagc_core::lang::punctuation::PunctuationId;

use crate::ast::{GenerationRun, Span, TagEntry, TagSet};
use crate::diagnostics::{Expected, SyntaxError};
use crate::lexer::{Lexer, Token};

/// Streaming parser yielding one [`TagSet`] per block.
///
/// Yields `Err` at most once; the stream ends after an error.
pub struct SetParser<I> {
    tokens: I,
    /// End offset of the last consumed token, used to place end-of-input errors.
    last_end: usize,
    failed: bool,
}

impl<I: Iterator<Item = Token>> SetParser<I> {
    /// Create a parser over any token source.
    pub fn new(tokens: I) -> Self {
        Self {
            tokens,
            last_end: 0,
            failed: false,
        }
    }

    // ========================================================================
    // Token helpers
    // ========================================================================

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.next()?;
        self.last_end = token.span.end;
        Some(token)
    }

    /// Consume a token that the grammar requires; end of input is fatal here.
    fn expect_token(&mut self, expected: impl FnOnce() -> Expected) -> Result<Token, SyntaxError> {
        self.advance().ok_or_else(|| SyntaxError::UnexpectedEof {
            expected: expected(),
            span: Span::point(self.last_end),
        })
    }

    // ========================================================================
    // Blocks
    // ========================================================================

    /// Parse the next block, or return `Ok(None)` when the input is exhausted.
    fn set_block(&mut self) -> Result<Option<TagSet>, SyntaxError> {
        let mut name: Option<Token> = None;
        let delimiter = loop {
            let Some(token) = self.advance() else {
                if let Some(stray) = name {
                    tracing::warn!(token = %stray, offset = stray.span.start, "ignoring trailing token after last set");
                }
                return Ok(None);
            };
            match token.punctuation_id() {
                Some(PunctuationId::LBrace | PunctuationId::Pipe) => break token,
                _ => {
                    if let Some(dropped) = name.replace(token) {
                        tracing::warn!(token = %dropped, offset = dropped.span.start, "ignoring token before set name");
                    }
                }
            }
        };

        let Some(name) = name else {
            return Err(SyntaxError::MissingSetName { span: delimiter.span });
        };

        let field_names = if delimiter.is_punctuation(PunctuationId::Pipe) {
            self.field_names(&name)?
        } else {
            Vec::new()
        };

        let (mut entries, close) = self.entries(&field_names)?;
        sort_entries(&name.text, &mut entries)?;

        tracing::debug!(
            set = %name.text,
            tags = entries.len(),
            fields = field_names.len(),
            "parsed tag set"
        );

        Ok(Some(TagSet {
            span: name.span.merge(close.span),
            name: name.text,
            field_names,
            entries,
        }))
    }

    /// Field names after `|`, up to and including the `{`.
    fn field_names(&mut self, name: &Token) -> Result<Vec<String>, SyntaxError> {
        let mut fields = Vec::new();
        loop {
            let token = self.expect_token(|| Expected::FieldName)?;
            if token.is_punctuation(PunctuationId::LBrace) {
                break;
            }
            fields.push(token.text);
        }
        if fields.is_empty() {
            tracing::warn!(set = %name.text, "`|` declares no fields");
        }
        Ok(fields)
    }

    /// Tag entries up to and including the `}`, which is returned alongside them.
    fn entries(&mut self, field_names: &[String]) -> Result<(Vec<TagEntry>, Token), SyntaxError> {
        let mut entries = Vec::new();
        loop {
            let tag = self.expect_token(|| Expected::TagOrClose)?;
            if tag.is_punctuation(PunctuationId::RBrace) {
                return Ok((entries, tag));
            }

            let mut span = tag.span;
            let mut values = Vec::with_capacity(field_names.len());
            for field in field_names {
                let value = self.expect_token(|| Expected::AuxValue {
                    tag: tag.text.clone(),
                    field: field.clone(),
                })?;
                if value.is_punctuation(PunctuationId::RBrace) {
                    tracing::warn!(
                        tag = %tag.text,
                        field = %field,
                        offset = value.span.start,
                        "unquoted `}}` taken as a field value; the tag list stays open"
                    );
                }
                span = span.merge(value.span);
                values.push(value.text);
            }

            entries.push(TagEntry {
                name: tag.text,
                values,
                span,
            });
        }
    }
}

/// Sort entries by tag name and reject duplicates.
///
/// The sort is stable, so of two equal names the first one is the earlier declaration.
fn sort_entries(set: &str, entries: &mut [TagEntry]) -> Result<(), SyntaxError> {
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    for pair in entries.windows(2) {
        let (first, again) = (&pair[0], &pair[1]);
        if first.name == again.name {
            return Err(SyntaxError::DuplicateTag {
                set: set.to_string(),
                tag: again.name.clone(),
                span: again.span,
                first: first.span,
            });
        }
    }
    Ok(())
}

impl<I: Iterator<Item = Token>> Iterator for SetParser<I> {
    type Item = Result<TagSet, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.set_block() {
            Ok(set) => set.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl<I: Iterator<Item = Token>> FusedIterator for SetParser<I> where I: FusedIterator {}

/// Parse a whole source string into a [`GenerationRun`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Errors
/// Returns the first [`SyntaxError`] found; no partial run is returned.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> Result<GenerationRun, SyntaxError> {
    let sets = SetParser::new(Lexer::new(source)).collect::<Result<Vec<_>, _>>()?;
    Ok(GenerationRun { sets })
}
