//! C++ code generation for tag sets
//!
//! Each set contributes one section to each artifact:
//!
//! ```text
//! // declarations                          // definitions
//! const int <Set><tag> = <rank>;           TagDict<N> Tags::<Set>tagDict({
//! const int <Set>COUNT = <N>;                  "<tag>",
//! extern TagDict<N> <Set>tagDict;          });
//! ```
//!
//! Both sections walk the set's entries in the same (sorted) order, so rank `i` in the declarations is always the
//! string at index `i` of the table literal.

use tagc_core::lang::conventions;
use tagc_syntax::ast::TagSet;

use super::config::EmitConfig;
use super::writer::{CodeWriter, string_literal};

/// First line of both artifacts.
pub const BANNER: &str = "// Generated by tagc. Do not edit.";

/// Renders the text of both artifacts.
#[derive(Debug, Clone)]
pub struct CppCodegen {
    config: EmitConfig,
}

impl CppCodegen {
    pub fn new(config: EmitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmitConfig {
        &self.config
    }

    fn table_type(&self, count: usize) -> String {
        format!("{}<{}>", self.config.table_type, count)
    }

    /// Text before the first set in the declarations artifact.
    pub fn declarations_prologue(&self) -> String {
        let mut w = CodeWriter::new();
        w.line(BANNER);
        w.line("#pragma once");
        w.linef(format_args!("#include {}", string_literal(&self.config.table_include)));
        w.blank_line();
        w.linef(format_args!("namespace {}", self.config.namespace));
        w.line("{");
        w.blank_line();
        w.finish()
    }

    /// Rank constants, count constant and table declaration of one set.
    pub fn declarations_for(&self, set: &TagSet) -> String {
        let mut w = CodeWriter::new();
        for (rank, tag) in set.tag_names().enumerate() {
            w.linef(format_args!(
                "const int {} = {};",
                conventions::tag_constant(&set.name, tag),
                rank
            ));
        }
        w.linef(format_args!(
            "const int {} = {};",
            conventions::count_constant(&set.name, &self.config.count_suffix),
            set.len()
        ));
        w.linef(format_args!(
            "extern {} {};",
            self.table_type(set.len()),
            conventions::table_object(&set.name, &self.config.table_suffix)
        ));
        w.blank_line();
        w.finish()
    }

    /// Text after the last set in the declarations artifact.
    pub fn declarations_epilogue(&self) -> String {
        "} // end namespace\n".to_string()
    }

    /// Text before the first set in the definitions artifact.
    pub fn definitions_prologue(&self) -> String {
        let mut w = CodeWriter::new();
        w.line(BANNER);
        w.linef(format_args!("#include {}", string_literal(&self.config.header_include)));
        w.blank_line();
        w.finish()
    }

    /// Table literal of one set.
    pub fn definitions_for(&self, set: &TagSet) -> String {
        let header = format!(
            "{} {}::{}({{",
            self.table_type(set.len()),
            self.config.namespace,
            conventions::table_object(&set.name, &self.config.table_suffix)
        );
        let mut w = CodeWriter::new();
        w.block(&header, "});", |w| {
            for tag in set.tag_names() {
                w.linef(format_args!("{},", string_literal(tag)));
            }
        });
        w.blank_line();
        w.finish()
    }
}
