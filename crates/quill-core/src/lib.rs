//! quill-core - Core library for Quill
//!
//! This crate contains the shared models, settings, and the headless note form
//! controller used by the Quill interfaces.

pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod util;

pub use error::{Error, Result};
pub use models::{Note, NoteData, NoteId, Tag, TagId, TagOption};
