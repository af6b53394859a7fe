use crate::domain::version::Version;
use serde::{Deserialize, Serialize};

/// How candidate tags are ordered when picking the latest one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TagOrdering {
    /// Plain string ordering, `v2.0.0` sorts after `v10.0.0`
    Lexical,
    /// Ordering by parsed version, ties broken by the tag string
    #[default]
    Semantic,
}

/// Represents a git tag built from a prefix and a version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a new tag from a string
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Compose a tag name: prefix followed by the version
    pub fn compose(prefix: &str, version: &Version) -> Self {
        Tag {
            name: format!("{}{}", prefix, version),
        }
    }

    /// Version text after the prefix (e.g., "s1v1.2.3" with "s1v" -> "1.2.3")
    pub fn version_part<'a>(&'a self, prefix: &str) -> &'a str {
        self.name.strip_prefix(prefix).unwrap_or(&self.name)
    }
}

/// Pick the latest tag among those starting with `prefix`.
///
/// Returns `None` when no tag carries the prefix.
pub fn select_latest<S: AsRef<str>>(
    prefix: &str,
    existing_tags: &[S],
    ordering: TagOrdering,
) -> Option<String> {
    let mut candidates: Vec<&str> = existing_tags
        .iter()
        .map(|t| t.as_ref())
        .filter(|t| !t.is_empty() && t.starts_with(prefix))
        .collect();

    match ordering {
        TagOrdering::Lexical => candidates.sort_unstable(),
        TagOrdering::Semantic => candidates.sort_by(|a, b| {
            let va = Version::parse_lenient(&a[prefix.len()..]);
            let vb = Version::parse_lenient(&b[prefix.len()..]);
            va.cmp(&vb).then_with(|| a.cmp(b))
        }),
    }

    candidates.last().map(|t| t.to_string())
}
