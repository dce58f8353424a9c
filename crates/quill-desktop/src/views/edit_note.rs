//! Edit note view

use dioxus::prelude::*;

use quill_core::{NoteData, NoteId, Tag};

use crate::components::{Button, ButtonVariant, NoteForm};
use crate::route::Route;
use crate::state::AppState;

/// Note form pre-populated from an existing note
#[component]
pub fn EditNote(note_id: NoteId) -> Element {
    let mut state = use_context::<AppState>();
    let available_tags = (state.tags)();

    let Some(note) = state.note(note_id) else {
        return rsx! {
            p { "This note no longer exists." }
            Button {
                variant: ButtonVariant::Secondary,
                onclick: move |_| state.navigate(Route::NoteList),
                "Back to notes"
            }
        };
    };

    let NoteData {
        title,
        markdown,
        tags,
    } = note.to_data(&available_tags);

    rsx! {
        h1 { style: "margin: 0 0 24px; font-size: 24px;", "Edit Note" }

        NoteForm {
            available_tags,
            on_add_tag: move |tag: Tag| state.add_tag(tag),
            on_submit: move |data: NoteData| {
                state.update_note(note_id, data);
            },
            title,
            markdown,
            tags,
        }
    }
}
