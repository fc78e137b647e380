//! tagc Backend
//!
//! Turns parsed tag sets into the two generated C++ artifacts.
//!
//! The pipeline is:
//! 1. Source text → `tagc_syntax` lexer and set parser → one `TagSet` at a time
//! 2. `CppCodegen` renders each set's declarations and definitions sections
//! 3. `Generator` writes the sections to the two sinks and closes them
//!
//! ## Module Organization
//!
//! - `config` - Emitter configuration (namespace, table type and suffixes)
//! - `writer` - Low-level indented source buffer and C++ string literals
//! - `codegen` - Per-set C++ rendering
//! - `generator` - Streaming driver and in-memory artifact rendering

pub mod codegen;
pub mod config;
pub mod generator;
pub mod writer;

pub use codegen::CppCodegen;
pub use config::EmitConfig;
pub use generator::{Artifacts, GenerateError, Generator, RunSummary, generate, generate_artifacts};
