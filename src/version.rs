//! tagc version information.
//!
//! The version is a single constant so the CLI and any emitted text agree on one value.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.
//! - Prefer this constant over repeating `env!("CARGO_PKG_VERSION")` in multiple places.

/// The tagc version string (for example, `0.1.0`).
pub const TAGC_VERSION: &str = env!("CARGO_PKG_VERSION");
