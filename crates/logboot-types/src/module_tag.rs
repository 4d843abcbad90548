//! Module tags group related log sources
//!
//! A tag is the record target handed to a sink's `enabled` predicate. For
//! records coming through the `log` facade this is the module path of the
//! call site unless the caller overrides `target:`.

use serde::{Deserialize, Serialize};

/// Identifier grouping related log sources
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleTag(String);

impl ModuleTag {
    /// Create a tag from any string-like value
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ModuleTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl std::fmt::Display for ModuleTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_tag_display() {
        let tag = ModuleTag::new("logboot::sink::console");
        assert_eq!(format!("{}", tag), tag.as_str());
    }

    #[test]
    fn test_serialization() {
        let tag = ModuleTag::new("app::db");
        let json = serde_json::to_string(&tag).unwrap();
        let deserialized: ModuleTag = serde_json::from_str(&json).unwrap();
        assert_eq!(tag, deserialized);
    }
}
