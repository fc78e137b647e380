//! Naming conventions for emitted symbols.
//!
//! Every symbol the generator writes is derived from a set name and, for per-tag constants, a tag name. The
//! builders here are the single source of truth so the declarations and definitions artifacts always agree.

/// Suffix of the per-set tag count constant (`<Set>COUNT`).
pub const COUNT_SUFFIX: &str = "COUNT";

/// Default suffix of the per-set lookup table object (`<Set>tagDict`).
pub const TABLE_SUFFIX: &str = "tagDict";

/// Default namespace wrapping the generated declarations.
pub const NAMESPACE: &str = "Tags";

/// Default name of the fixed-capacity lookup table template.
pub const TABLE_TYPE: &str = "TagDict";

/// Default include path of the lookup table template.
pub const TABLE_INCLUDE: &str = "util/TagDict.h";

/// Name of the constant holding a tag's rank: the set name followed by the tag name.
///
/// ## Examples
/// ```rust
/// use tagc_core::lang::conventions::tag_constant;
///
/// assert_eq!(tag_constant("GAMESET_", "ARMY"), "GAMESET_ARMY");
/// ```
pub fn tag_constant(set_name: &str, tag_name: &str) -> String {
    format!("{set_name}{tag_name}")
}

/// Name of a set's tag count constant.
pub fn count_constant(set_name: &str, count_suffix: &str) -> String {
    format!("{set_name}{count_suffix}")
}

/// Name of a set's lookup table object.
pub fn table_object(set_name: &str, table_suffix: &str) -> String {
    format!("{set_name}{table_suffix}")
}
