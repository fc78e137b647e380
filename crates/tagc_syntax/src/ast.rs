//! Syntax tree for tag-set files.
//!
//! A file is a [`GenerationRun`]: an ordered list of [`TagSet`] blocks. Each set keeps its entries sorted by tag
//! name, so an entry's index in [`TagSet::entries`] is its rank.

use std::fmt;

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Zero-width span at `offset`.
    pub fn point(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

/// One tag declared inside a set, with one value per auxiliary field of the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    pub name: String,
    pub values: Vec<String>,
    /// Covers the tag name and its values.
    pub span: Span,
}

/// A named `{ ... }` block of tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSet {
    pub name: String,
    /// Auxiliary field names declared after `|`, in declaration order.
    pub field_names: Vec<String>,
    /// Entries sorted ascending by tag name.
    pub entries: Vec<TagEntry>,
    /// From the set name to the closing brace.
    pub span: Span,
}

impl TagSet {
    /// Number of tags in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tag names in rank order.
    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Rank of `tag`, if the set declares it.
    ///
    /// This is the same binary search the generated lookup table performs at runtime.
    pub fn rank_of(&self, tag: &str) -> Option<usize> {
        self.entries.binary_search_by(|e| e.name.as_str().cmp(tag)).ok()
    }

    /// Look up the value of auxiliary field `field` for `tag`.
    pub fn value_of(&self, tag: &str, field: &str) -> Option<&str> {
        let field_idx = self.field_names.iter().position(|f| f == field)?;
        let entry = &self.entries[self.rank_of(tag)?];
        entry.values.get(field_idx).map(String::as_str)
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.field_names.is_empty() {
            write!(f, " | {}", self.field_names.join(" "))?;
        }
        writeln!(f, " {{")?;
        for (rank, entry) in self.entries.iter().enumerate() {
            write!(f, "    {rank:>3}  {}", entry.name)?;
            for value in &entry.values {
                write!(f, " {value:?}")?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

/// All sets of one input file, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationRun {
    pub sets: Vec<TagSet>,
}

impl GenerationRun {
    /// Total number of tags across all sets.
    pub fn tag_count(&self) -> usize {
        self.sets.iter().map(TagSet::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, values: &[&str]) -> TagEntry {
        TagEntry {
            name: name.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
            span: Span::default(),
        }
    }

    fn sample() -> TagSet {
        TagSet {
            name: "Foo".to_string(),
            field_names: vec!["Type".to_string(), "Val".to_string()],
            entries: vec![entry("bar", &["Int", "5"]), entry("baz", &["Str", "hi"])],
            span: Span::default(),
        }
    }

    #[test]
    fn test_rank_of() {
        let set = sample();
        assert_eq!(set.rank_of("bar"), Some(0));
        assert_eq!(set.rank_of("baz"), Some(1));
        assert_eq!(set.rank_of("qux"), None);
    }

    #[test]
    fn test_value_of() {
        let set = sample();
        assert_eq!(set.value_of("baz", "Val"), Some("hi"));
        assert_eq!(set.value_of("bar", "Type"), Some("Int"));
        assert_eq!(set.value_of("bar", "Missing"), None);
        assert_eq!(set.value_of("nope", "Type"), None);
    }

    #[test]
    fn test_display_lists_ranks_and_values() {
        let text = sample().to_string();
        assert!(text.starts_with("Foo | Type Val {"));
        assert!(text.contains("  0  bar \"Int\" \"5\""));
        assert!(text.ends_with('}'));
    }

    #[test]
    fn test_span_merge_and_len() {
        let span = Span::new(4, 6).merge(Span::new(1, 3));
        assert_eq!(span, Span::new(1, 6));
        assert_eq!(span.len(), 5);
        assert!(Span::point(7).is_empty());
    }
}
