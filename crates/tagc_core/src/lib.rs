//! Provide the canonical vocabulary shared by the tagc syntax frontend and code generator.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no compiler-specific types.
//! - Current scope: the structural punctuation of the tag-set language and the naming conventions used for emitted
//!   symbols.

pub mod lang;
