//! Tag model

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A unique identifier for a tag
///
/// Ids are opaque: tags handed in by the host keep whatever id it assigned,
/// while tags minted by the form get a random UUID v4. Ids are only ever
/// compared for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagId(String);

impl TagId {
    /// Create a new unique tag ID
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TagId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TagId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TagId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A labeled category attachable to notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Unique identifier
    pub id: TagId,
    /// User-facing label, accepted verbatim
    pub label: String,
    /// Display color
    pub color: String,
}

impl Tag {
    /// Create a brand-new tag with a fresh id
    #[must_use]
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: TagId::new(),
            label: label.into(),
            color: color.into(),
        }
    }

    /// Picker option for this tag
    #[must_use]
    pub fn to_option(&self) -> TagOption {
        TagOption {
            label: self.label.clone(),
            value: self.id.as_str().to_string(),
        }
    }
}

/// A (label, value) pair as shown by the tag picker, where `value` is the tag id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagOption {
    pub label: String,
    pub value: String,
}

impl TagOption {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Rebuild a tag from a picker option.
    ///
    /// Options carry no color, so the given placeholder is used.
    #[must_use]
    pub fn into_tag(self, color: &str) -> Tag {
        Tag {
            id: TagId::from(self.value),
            label: self.label,
            color: color.to_string(),
        }
    }
}
