//! Emitter configuration
//!
//! Names used in the generated C++: the wrapping namespace, the lookup table template and the suffix of each
//! set's table object. Defaults match the `TagDict` runtime header.

use tagc_core::lang::conventions;

/// Emitter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitConfig {
    /// Namespace wrapping the declarations
    pub namespace: String,
    /// Fixed-capacity lookup table template, instantiated as `<table_type><N>`
    pub table_type: String,
    /// Appended to the set name to form the table object name
    pub table_suffix: String,
    /// Appended to the set name to form the tag count constant
    pub count_suffix: String,
    /// Header declaring `table_type`, included by the declarations artifact
    pub table_include: String,
    /// Declarations artifact as seen from the definitions artifact
    pub header_include: String,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            namespace: conventions::NAMESPACE.to_string(),
            table_type: conventions::TABLE_TYPE.to_string(),
            table_suffix: conventions::TABLE_SUFFIX.to_string(),
            count_suffix: conventions::COUNT_SUFFIX.to_string(),
            table_include: conventions::TABLE_INCLUDE.to_string(),
            header_include: "tags.h".to_string(),
        }
    }
}

impl EmitConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_table_type(mut self, table_type: impl Into<String>) -> Self {
        self.table_type = table_type.into();
        self
    }

    pub fn with_table_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.table_suffix = suffix.into();
        self
    }

    pub fn with_count_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.count_suffix = suffix.into();
        self
    }

    pub fn with_table_include(mut self, include: impl Into<String>) -> Self {
        self.table_include = include.into();
        self
    }

    pub fn with_header_include(mut self, include: impl Into<String>) -> Self {
        self.header_include = include.into();
        self
    }
}
