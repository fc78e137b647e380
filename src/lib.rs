#![forbid(unsafe_code)]
//! Tag-set compiler
//!
//! tagc reads a small text DSL of named tag sets and generates a C++ declarations file (one integer constant per
//! tag, a count constant and an `extern` lookup table per set) and a matching definitions file holding the table
//! literals. The syntax layer lives in `tagc_syntax`; this crate holds the C++ backend and the CLI.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod backend;
pub mod cli;
pub mod version;

pub use tagc_syntax::ast;
pub use tagc_syntax::diagnostics;
pub use tagc_syntax::lexer;
pub use tagc_syntax::parser;

pub use backend::{Artifacts, CppCodegen, EmitConfig, GenerateError, Generator, RunSummary, generate, generate_artifacts};
