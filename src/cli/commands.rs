//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::{Path, PathBuf};

use miette::{NamedSource, Report};

use crate::backend::{EmitConfig, GenerateError, generate_artifacts};
use tagc_syntax::diagnostics::{SyntaxError, line_col};
use tagc_syntax::{lexer, parser};

use super::build::{BuildPlan, run_build};
use super::{CliError, CliResult, ExitCode, GenArgs};

/// Maximum source file size (16 MB)
const MAX_SOURCE_SIZE: u64 = 16 * 1024 * 1024;

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if the file cannot be read or exceeds `MAX_SOURCE_SIZE`.
pub fn read_source(file_path: &Path) -> CliResult<String> {
    let metadata = fs::metadata(file_path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path.display(), e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path.display(),
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path)
        .map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path.display(), e)))
}

/// Render a syntax error against its source.
pub fn format_syntax_error(file_path: &Path, source: &str, error: SyntaxError) -> String {
    let (line, column) = line_col(source, error.span().start);
    tracing::debug!(file = %file_path.display(), line, column, "{}", error);
    let report = Report::new(error).with_source_code(NamedSource::new(
        file_path.display().to_string(),
        source.to_string(),
    ));
    format!("{report:?}")
}

/// Emitter configuration for a `gen` invocation.
pub fn emit_config(args: &GenArgs) -> EmitConfig {
    let header_include = args
        .header
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.header.display().to_string());
    EmitConfig::new()
        .with_namespace(&args.namespace)
        .with_table_type(&args.table_type)
        .with_table_suffix(&args.table_suffix)
        .with_table_include(&args.table_include)
        .with_header_include(header_include)
}

/// Generate both artifacts from a tag-set file.
///
/// The artifacts are rendered in memory and written only when the whole run succeeded, so a malformed input
/// leaves any previously generated files untouched. Both files are staged next to their targets and renamed into
/// place only once both were written; only a failure between the two renames can leave a mismatched pair.
pub fn generate_files(args: &GenArgs) -> CliResult<ExitCode> {
    let source = read_source(&args.input)?;
    let config = emit_config(args);

    let artifacts = generate_artifacts(&source, &config).map_err(|e| match e {
        GenerateError::Syntax(err) => CliError::failure(format_syntax_error(&args.input, &source, err)),
        GenerateError::Io(err) => CliError::failure(format!("Error generating artifacts: {}", err)),
    })?;

    let staged_header = stage_artifact(&args.header, &artifacts.declarations)?;
    let staged_source = stage_artifact(&args.source, &artifacts.definitions).inspect_err(|_| {
        let _ = fs::remove_file(&staged_header);
    })?;
    commit_artifact(&staged_header, &args.header).inspect_err(|_| {
        let _ = fs::remove_file(&staged_source);
    })?;
    commit_artifact(&staged_source, &args.source)?;

    tracing::info!(
        sets = artifacts.summary.sets,
        tags = artifacts.summary.tags,
        "generated {} and {}",
        args.header.display(),
        args.source.display()
    );
    println!(
        "Generated {} sets ({} tags) into {} and {}",
        artifacts.summary.sets,
        artifacts.summary.tags,
        args.header.display(),
        args.source.display()
    );
    Ok(ExitCode::SUCCESS)
}

/// Sibling path an artifact is written to before it replaces `path`.
fn staging_path(path: &Path) -> PathBuf {
    let mut staged = path.as_os_str().to_owned();
    staged.push(".tmp");
    PathBuf::from(staged)
}

/// Write `contents` to the staging path of `path`, creating parent directories.
fn stage_artifact(path: &Path, contents: &[u8]) -> CliResult<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| CliError::failure(format!("Error creating directory '{}': {}", parent.display(), e)))?;
    }
    let staged = staging_path(path);
    fs::write(&staged, contents).map_err(|e| {
        let _ = fs::remove_file(&staged);
        CliError::failure(format!("Error writing '{}': {}", path.display(), e))
    })?;
    Ok(staged)
}

fn commit_artifact(staged: &Path, path: &Path) -> CliResult<()> {
    fs::rename(staged, path).map_err(|e| {
        let _ = fs::remove_file(staged);
        CliError::failure(format!("Error writing '{}': {}", path.display(), e))
    })
}

/// Print the token stream of a file (debug).
pub fn lex_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    for token in lexer::lex(&source) {
        println!("{:>6}..{:<6} {:?} {}", token.span.start, token.span.end, token.kind, token);
    }
    Ok(ExitCode::SUCCESS)
}

/// Print the parsed tag sets of a file, auxiliary values included (debug).
pub fn parse_file(file_path: &Path) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let run = parser::parse(&source).map_err(|e| CliError::failure(format_syntax_error(file_path, &source, e)))?;
    for set in &run.sets {
        println!("{set}");
    }
    println!("{} sets, {} tags", run.sets.len(), run.tag_count());
    Ok(ExitCode::SUCCESS)
}

/// Configure and build the C++ project.
pub fn build_project(plan: &BuildPlan) -> CliResult<ExitCode> {
    run_build(plan).map_err(|e| CliError::with_code(format!("Error: {}", e), e.exit_code()))?;
    Ok(ExitCode::SUCCESS)
}
