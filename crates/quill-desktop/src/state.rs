//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use dioxus::prelude::*;

use quill_core::config::FormSettings;
use quill_core::{Note, NoteData, NoteId, Tag};

use crate::route::Route;
use crate::theme::ResolvedTheme;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// All notes held by the app
    pub notes: Signal<Vec<Note>>,
    /// Every tag the app knows about
    pub tags: Signal<Vec<Tag>>,
    /// Currently shown view
    pub route: Signal<Route>,
    /// Resolved theme (light/dark based on settings and system preference)
    pub theme: Signal<ResolvedTheme>,
    /// Note form settings
    pub form_settings: Signal<FormSettings>,
}

impl AppState {
    /// Get a note by id
    #[must_use]
    pub fn note(&self, id: NoteId) -> Option<Note> {
        self.notes.read().iter().find(|note| note.id == id).cloned()
    }

    /// Register a tag created from a note form
    pub fn add_tag(&mut self, tag: Tag) {
        tracing::info!("Added tag {:?} ({})", tag.label, tag.id);
        self.tags.write().push(tag);
    }

    /// Store a newly submitted note
    pub fn create_note(&mut self, data: NoteData) -> NoteId {
        let note = Note::from_data(data);
        let id = note.id;
        tracing::info!("Created note: {}", id);
        self.notes.write().insert(0, note);
        id
    }

    /// Replace an existing note's content. Returns `false` if it is gone.
    pub fn update_note(&mut self, id: NoteId, data: NoteData) -> bool {
        let mut notes = self.notes.write();
        if let Some(note) = notes.iter_mut().find(|note| note.id == id) {
            note.update(data);
            tracing::info!("Updated note: {}", id);
            true
        } else {
            tracing::warn!("Tried to update missing note: {}", id);
            false
        }
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::debug!("Navigating to {:?}", route);
        self.route.set(route);
    }

    /// Go one level up from the current view
    pub fn navigate_up(&mut self) {
        let parent = (self.route)().parent();
        self.navigate(parent);
    }
}
