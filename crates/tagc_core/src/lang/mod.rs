//! Tag-set language vocabulary registries.
//!
//! Callers work with stable IDs (e.g. [`punctuation::PunctuationId`]) and look up spellings via registry tables
//! instead of scattering string comparisons across the lexer, parser and emitter.
//!
//! ## Examples
//! ```rust
//! use tagc_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("|"), Some(PunctuationId::Pipe));
//! assert_eq!(punctuation::as_str(PunctuationId::LBrace), "{");
//! ```

pub mod conventions;
pub mod punctuation;
