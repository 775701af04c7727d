//! Loosely typed metadata values.

use serde::{Deserialize, Serialize};

/// A metadata field that PyPI fills with a string, a list, null, or
/// something else depending on how the package was uploaded.
///
/// Decoding into this type never fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    #[default]
    Null,
    Text(String),
    List(Vec<String>),
    Other(serde_json::Value),
}

impl MetadataValue {
    /// Check if the upstream value was null or absent
    pub fn is_null(&self) -> bool {
        matches!(self, MetadataValue::Null)
    }

    /// Get the value as text, if it was sent as a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetadataValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Get the value as a list of strings.
    ///
    /// A text value becomes a one-element list; null and unrecognised
    /// shapes become an empty one.
    pub fn as_list(&self) -> Vec<&str> {
        match self {
            MetadataValue::Text(text) => vec![text.as_str()],
            MetadataValue::List(items) => items.iter().map(String::as_str).collect(),
            MetadataValue::Null | MetadataValue::Other(_) => Vec::new(),
        }
    }

    /// Get the text value, treating an empty string as absent
    pub fn non_empty_str(&self) -> Option<&str> {
        self.as_str().filter(|text| !text.trim().is_empty())
    }
}

impl From<&str> for MetadataValue {
    fn from(text: &str) -> Self {
        MetadataValue::Text(text.to_string())
    }
}
