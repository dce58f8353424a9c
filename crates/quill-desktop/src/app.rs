//! Main application component

use dioxus::prelude::*;

use quill_core::config::FormSettings;

use crate::route::Route;
use crate::state::AppState;
use crate::theme::{resolve_theme, ThemeMode};
use crate::views::{EditNote, NewNote, NoteListView};

/// Root application component
#[component]
pub fn App() -> Element {
    let notes = use_signal(Vec::new);
    let tags = use_signal(Vec::new);
    let route = use_signal(Route::default);
    let theme = use_signal(|| resolve_theme(ThemeMode::from_env()));
    let form_settings = use_signal(|| {
        FormSettings::from_env().unwrap_or_else(|error| {
            tracing::warn!("Invalid form settings, using defaults: {}", error);
            FormSettings::default()
        })
    });

    use_context_provider(|| AppState {
        notes,
        tags,
        route,
        theme,
        form_settings,
    });

    let current_theme = theme();
    let colors = current_theme.palette();
    let theme_attr = current_theme.as_attr();

    rsx! {
        div {
            class: "app-container",
            "data-theme": "{theme_attr}",
            style: "
                min-height: 100vh;
                padding: 24px 32px;
                box-sizing: border-box;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",

            {
                match route() {
                    Route::NoteList => rsx! { NoteListView {} },
                    Route::NewNote => rsx! { NewNote {} },
                    Route::EditNote(note_id) => rsx! { EditNote { key: "{note_id}", note_id } },
                }
            }
        }
    }
}
