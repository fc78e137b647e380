//! CLI module for tagc
//!
//! ## Commands
//!
//! - `gen [INPUT]` - Generate the declarations and definitions artifacts (default action)
//! - `build --compiler <name>` - Configure and build the C++ project with CMake
//! - `--lex FILE` / `--parse FILE` - Debug dumps of the token stream and the parsed sets
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod build;
pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tagc_core::lang::conventions;

use crate::version::TAGC_VERSION;
use build::{BuildPlan, Compiler, DEFAULT_PLATFORM};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Create an error with a custom exit code.
    pub fn with_code(message: impl Into<String>, code: i32) -> Self {
        Self::new(message, ExitCode(code))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Compile tag-set files into C++ tag constants and lookup tables
#[derive(Parser, Debug)]
#[command(name = "tagc")]
#[command(version = TAGC_VERSION)]
#[command(about = "Compile tag-set files into C++ tag constants and lookup tables", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Generation arguments (default action when no subcommand given)
    #[command(flatten)]
    pub gen_args: GenArgs,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "parse_file")]
    pub lex_file: Option<PathBuf>,

    /// Parse only (debug)
    #[arg(long = "parse", value_name = "FILE")]
    pub parse_file: Option<PathBuf>,
}

/// Input, outputs and emitted names of one generation run.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct GenArgs {
    /// Tag-set source file
    #[arg(value_name = "INPUT", default_value = "tags.txt")]
    pub input: PathBuf,

    /// Declarations artifact to write
    #[arg(long, value_name = "PATH", default_value = "tags.h")]
    pub header: PathBuf,

    /// Definitions artifact to write
    #[arg(long, value_name = "PATH", default_value = "tags.cpp")]
    pub source: PathBuf,

    /// Namespace wrapping the generated declarations
    #[arg(long, default_value = conventions::NAMESPACE)]
    pub namespace: String,

    /// Lookup table template name
    #[arg(long, value_name = "TYPE", default_value = conventions::TABLE_TYPE)]
    pub table_type: String,

    /// Suffix of each set's lookup table object
    #[arg(long, value_name = "SUFFIX", default_value = conventions::TABLE_SUFFIX)]
    pub table_suffix: String,

    /// Header declaring the lookup table template
    #[arg(long, value_name = "PATH", default_value = conventions::TABLE_INCLUDE)]
    pub table_include: String,
}

impl Default for GenArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from("tags.txt"),
            header: PathBuf::from("tags.h"),
            source: PathBuf::from("tags.cpp"),
            namespace: conventions::NAMESPACE.to_string(),
            table_type: conventions::TABLE_TYPE.to_string(),
            table_suffix: conventions::TABLE_SUFFIX.to_string(),
            table_include: conventions::TABLE_INCLUDE.to_string(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate tag constants and lookup tables
    Gen(GenArgs),

    /// Configure and build the C++ project with CMake
    Build {
        /// Compiler to build with
        #[arg(long, value_enum)]
        compiler: Compiler,
        /// Platform key of the build directory
        #[arg(long, default_value = DEFAULT_PLATFORM)]
        platform: String,
        /// Repository root containing CMakePresets.json
        #[arg(long, value_name = "DIR", default_value = ".")]
        root: PathBuf,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    // Handle debug flags first
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file);
    }
    if let Some(file) = cli.parse_file {
        return commands::parse_file(&file);
    }

    match cli.command {
        Some(Command::Gen(args)) => commands::generate_files(&args),
        Some(Command::Build {
            compiler,
            platform,
            root,
        }) => commands::build_project(&BuildPlan::new(root, platform, compiler)),
        None => commands::generate_files(&cli.gen_args),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_action_uses_fixed_paths() {
        let cli = Cli::try_parse_from(["tagc"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.gen_args, GenArgs::default());
    }

    #[test]
    fn test_cli_parse_gen() {
        let cli = Cli::try_parse_from([
            "tagc",
            "gen",
            "defs/tags.txt",
            "--header",
            "out/ids.h",
            "--table-suffix",
            "TagDict",
        ])
        .unwrap();
        if let Some(Command::Gen(args)) = cli.command {
            assert_eq!(args.input, PathBuf::from("defs/tags.txt"));
            assert_eq!(args.header, PathBuf::from("out/ids.h"));
            assert_eq!(args.source, PathBuf::from("tags.cpp"));
            assert_eq!(args.table_suffix, "TagDict");
        } else {
            panic!("Expected Gen command");
        }
    }

    #[test]
    fn test_cli_parse_top_level_input() {
        let cli = Cli::try_parse_from(["tagc", "mytags.txt", "--namespace", "Ids"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.gen_args.input, PathBuf::from("mytags.txt"));
        assert_eq!(cli.gen_args.namespace, "Ids");
    }

    #[test]
    fn test_cli_parse_build() {
        let cli = Cli::try_parse_from(["tagc", "build", "--compiler", "gcc"]).unwrap();
        if let Some(Command::Build {
            compiler, platform, ..
        }) = cli.command
        {
            assert_eq!(compiler, Compiler::Gcc);
            assert_eq!(platform, "ubuntu-24.04");
        } else {
            panic!("Expected Build command");
        }
    }

    #[test]
    fn test_cli_rejects_unknown_compiler() {
        assert!(Cli::try_parse_from(["tagc", "build", "--compiler", "msvc"]).is_err());
        assert!(Cli::try_parse_from(["tagc", "build"]).is_err());
    }

    #[test]
    fn test_cli_version_flag_reports_crate_version() {
        let err = Cli::try_parse_from(["tagc", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        assert_eq!(err.to_string().trim(), format!("tagc {TAGC_VERSION}"));
    }

    #[test]
    fn test_cli_parse_debug_flags() {
        let cli = Cli::try_parse_from(["tagc", "--lex", "tags.txt"]).unwrap();
        assert!(cli.lex_file.is_some());

        let cli = Cli::try_parse_from(["tagc", "--parse", "tags.txt"]).unwrap();
        assert!(cli.parse_file.is_some());

        assert!(Cli::try_parse_from(["tagc", "--lex", "a", "--parse", "b"]).is_err());
    }
}
