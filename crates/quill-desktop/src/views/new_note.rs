//! New note view

use dioxus::prelude::*;

use quill_core::{NoteData, Tag};

use crate::components::NoteForm;
use crate::state::AppState;

/// Blank note form
#[component]
pub fn NewNote() -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        h1 { style: "margin: 0 0 24px; font-size: 24px;", "New Note" }

        NoteForm {
            available_tags: (state.tags)(),
            on_add_tag: move |tag: Tag| state.add_tag(tag),
            on_submit: move |data: NoteData| {
                state.create_note(data);
            },
        }
    }
}
