//! UI Components
//!
//! Reusable UI components for the desktop application.

mod button;
mod note_card;
mod note_form;
mod tag_badge;
mod tag_select;

pub use button::{Button, ButtonVariant};
pub use note_card::NoteCard;
pub use note_form::NoteForm;
pub use tag_badge::TagBadge;
pub use tag_select::TagSelect;
