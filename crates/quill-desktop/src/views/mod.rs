//! Top-level views

mod edit_note;
mod new_note;
mod note_list;

pub use edit_note::EditNote;
pub use new_note::NewNote;
pub use note_list::NoteListView;
