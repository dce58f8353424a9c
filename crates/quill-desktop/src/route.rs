//! In-app navigation targets

use quill_core::NoteId;

/// Views the desktop app can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// All notes
    #[default]
    NoteList,
    /// Blank note form
    NewNote,
    /// Note form pre-populated from an existing note
    EditNote(NoteId),
}

impl Route {
    /// The view one level up. The note list is its own parent.
    #[must_use]
    pub const fn parent(self) -> Self {
        match self {
            Self::NoteList | Self::NewNote | Self::EditNote(_) => Self::NoteList,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forms_go_up_to_the_note_list() {
        assert_eq!(Route::NewNote.parent(), Route::NoteList);
        assert_eq!(Route::EditNote(NoteId::new()).parent(), Route::NoteList);
    }

    #[test]
    fn note_list_is_its_own_parent() {
        assert_eq!(Route::NoteList.parent(), Route::NoteList);
        assert_eq!(Route::default(), Route::NoteList);
    }
}
