//! Generation driver: lexer → set parser → both artifacts in one streaming pass.
//!
//! Each set is rendered completely in memory and only then written, so a sink never holds half of a set. The
//! declarations epilogue (closing the namespace) is only written by [`Generator::finish`]; a run that fails
//! before that leaves an artifact without it.

use std::io::{self, Write};

use thiserror::Error;

use tagc_syntax::ast::TagSet;
use tagc_syntax::diagnostics::SyntaxError;
use tagc_syntax::lexer::Lexer;
use tagc_syntax::parser::SetParser;

use super::codegen::CppCodegen;
use super::config::EmitConfig;

/// Errors from a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("failed to write artifact: {0}")]
    Io(#[from] io::Error),
}

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub sets: usize,
    pub tags: usize,
}

/// Writes the declarations artifact to `D` and the definitions artifact to `F`.
pub struct Generator<D: Write, F: Write> {
    codegen: CppCodegen,
    declarations: D,
    definitions: F,
    summary: RunSummary,
}

impl<D: Write, F: Write> Generator<D, F> {
    pub fn new(config: EmitConfig, declarations: D, definitions: F) -> Self {
        Self {
            codegen: CppCodegen::new(config),
            declarations,
            definitions,
            summary: RunSummary::default(),
        }
    }

    /// Write the prologue of both artifacts.
    pub fn begin(&mut self) -> io::Result<()> {
        self.declarations
            .write_all(self.codegen.declarations_prologue().as_bytes())?;
        self.definitions
            .write_all(self.codegen.definitions_prologue().as_bytes())
    }

    /// Write one set to both artifacts.
    pub fn emit_set(&mut self, set: &TagSet) -> io::Result<()> {
        let declarations = self.codegen.declarations_for(set);
        let definitions = self.codegen.definitions_for(set);
        self.declarations.write_all(declarations.as_bytes())?;
        self.definitions.write_all(definitions.as_bytes())?;

        self.summary.sets += 1;
        self.summary.tags += set.len();
        tracing::debug!(set = %set.name, tags = set.len(), "emitted tag set");
        Ok(())
    }

    /// Write the epilogues and flush both sinks.
    pub fn finish(mut self) -> io::Result<RunSummary> {
        self.declarations
            .write_all(self.codegen.declarations_epilogue().as_bytes())?;
        self.declarations.flush()?;
        self.definitions.flush()?;
        Ok(self.summary)
    }
}

/// Run the whole pipeline over `source`, streaming each set into the two sinks as soon as it is parsed.
///
/// ## Errors
/// Stops at the first syntax or I/O error. The sinks may then hold the prologue and the sets before the failing
/// one, but never the closing epilogue; callers must discard them.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn generate<D: Write, F: Write>(
    source: &str,
    config: &EmitConfig,
    declarations: D,
    definitions: F,
) -> Result<RunSummary, GenerateError> {
    let mut generator = Generator::new(config.clone(), declarations, definitions);
    generator.begin()?;
    for set in SetParser::new(Lexer::new(source)) {
        generator.emit_set(&set?)?;
    }
    Ok(generator.finish()?)
}

/// Both artifacts of a successful run, rendered in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub declarations: Vec<u8>,
    pub definitions: Vec<u8>,
    pub summary: RunSummary,
}

/// Run the pipeline into memory buffers; nothing is returned unless the whole run succeeds.
pub fn generate_artifacts(source: &str, config: &EmitConfig) -> Result<Artifacts, GenerateError> {
    let mut declarations = Vec::new();
    let mut definitions = Vec::new();
    let summary = generate(source, config, &mut declarations, &mut definitions)?;
    Ok(Artifacts {
        declarations,
        definitions,
        summary,
    })
}
