//! Note models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::{Tag, TagId};
use crate::util::unix_timestamp_millis_now;

/// A unique identifier for a note, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Create a new unique note ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Editable content of one note, as produced by the note form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteData {
    pub title: String,
    pub markdown: String,
    pub tags: Vec<Tag>,
}

/// A note stored by the host application
///
/// Only tag ids are kept; the tags themselves live in the host's tag set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,
    pub title: String,
    pub markdown: String,
    pub tag_ids: Vec<TagId>,
    /// Creation timestamp (Unix ms)
    pub created_at: i64,
    /// Last update timestamp (Unix ms)
    pub updated_at: i64,
}

impl Note {
    /// Create a new note from submitted form data
    #[must_use]
    pub fn from_data(data: NoteData) -> Self {
        let now = unix_timestamp_millis_now();
        Self {
            id: NoteId::new(),
            title: data.title,
            markdown: data.markdown,
            tag_ids: data.tags.into_iter().map(|tag| tag.id).collect(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the note content with freshly submitted form data
    pub fn update(&mut self, data: NoteData) {
        self.title = data.title;
        self.markdown = data.markdown;
        self.tag_ids = data.tags.into_iter().map(|tag| tag.id).collect();
        self.updated_at = unix_timestamp_millis_now().max(self.updated_at);
    }

    /// Look up this note's tags in the host's tag set, in note order.
    ///
    /// Ids the host does not know are skipped.
    #[must_use]
    pub fn resolve_tags(&self, tags: &[Tag]) -> Vec<Tag> {
        self.tag_ids
            .iter()
            .filter_map(|id| tags.iter().find(|tag| &tag.id == id).cloned())
            .collect()
    }

    /// Rebuild the form data for editing this note
    #[must_use]
    pub fn to_data(&self, tags: &[Tag]) -> NoteData {
        NoteData {
            title: self.title.clone(),
            markdown: self.markdown.clone(),
            tags: self.resolve_tags(tags),
        }
    }
}
