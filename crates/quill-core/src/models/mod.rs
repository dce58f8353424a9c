//! Data models for Quill

mod note;
mod tag;

pub use note::{Note, NoteData, NoteId};
pub use tag::{Tag, TagId, TagOption};
