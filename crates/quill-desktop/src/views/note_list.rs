//! Note list view - the app's home screen

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, NoteCard};
use crate::route::Route;
use crate::state::AppState;

/// All notes, newest first
#[component]
pub fn NoteListView() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let notes = (state.notes)();
    let tags = (state.tags)();

    rsx! {
        div {
            style: "
                display: flex;
                align-items: center;
                justify-content: space-between;
                margin-bottom: 24px;
            ",
            h1 { style: "margin: 0; font-size: 24px;", "Notes" }
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| state.navigate(Route::NewNote),
                "Create"
            }
        }

        if notes.is_empty() {
            div {
                style: "
                    padding: 20px;
                    text-align: center;
                    color: {colors.text_muted};
                ",
                "No notes yet"
            }
        } else {
            for note in notes {
                {
                    let note_id = note.id;
                    let note_tags = note.resolve_tags(&tags);

                    rsx! {
                        NoteCard {
                            key: "{note_id}",
                            title: note.title.clone(),
                            tags: note_tags,
                            onclick: move |_| state.navigate(Route::EditNote(note_id)),
                        }
                    }
                }
            }
        }
    }
}
