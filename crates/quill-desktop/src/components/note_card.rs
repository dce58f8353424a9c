//! Note card component

use dioxus::prelude::*;

use quill_core::Tag;

use super::TagBadge;
use crate::state::AppState;

/// A single note row rendered in the note list.
#[component]
pub fn NoteCard(title: String, tags: Vec<Tag>, onclick: EventHandler<MouseEvent>) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        div {
            class: "note-item",
            style: "
                padding: 12px 16px;
                margin-bottom: 8px;
                border: 1px solid {colors.border};
                border-radius: 8px;
                cursor: pointer;
                background: {colors.bg_secondary};
            ",
            onclick: move |evt| onclick.call(evt),

            div {
                class: "note-title",
                style: "
                    font-weight: 500;
                    margin-bottom: 6px;
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    color: {colors.text_primary};
                ",
                "{title}"
            }

            if !tags.is_empty() {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 4px;",
                    for tag in tags {
                        TagBadge { key: "{tag.id}", label: tag.label.clone() }
                    }
                }
            }
        }
    }
}
