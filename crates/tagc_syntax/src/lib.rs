//! Syntax frontend for the tag-set language: lexer, set parser, AST, diagnostics.
//!
//! ## Notes
//! - This crate is "syntax-only": it produces sorted [`ast::TagSet`] values and knows nothing about the emitted
//!   artifacts.
//! - Structural punctuation comes from the `tagc_core::lang` registry.
//!
//! ## Examples
//! ```rust
//! use tagc_syntax::parser;
//!
//! let run = parser::parse("Color { red green blue }").unwrap();
//! assert_eq!(run.sets.len(), 1);
//! assert_eq!(run.sets[0].tag_names().collect::<Vec<_>>(), ["blue", "green", "red"]);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
