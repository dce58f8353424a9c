//! Note form component
//!
//! Thin Dioxus shell over [`quill_core::form::NoteForm`]: fields are bound
//! two-way to the controller, and its host effects are routed to the
//! component's callbacks and the app's navigation.

use dioxus::prelude::*;

use quill_core::form::{NoteForm as NoteFormState, NoteFormHost};
use quill_core::{NoteData, Tag, TagOption};

use super::{Button, ButtonVariant, TagSelect};
use crate::state::AppState;

/// Routes form effects to the component's props and app navigation
#[derive(Clone, Copy)]
struct FormHost {
    on_add_tag: EventHandler<Tag>,
    on_submit: EventHandler<NoteData>,
    state: AppState,
}

impl NoteFormHost for FormHost {
    fn add_tag(&mut self, tag: Tag) {
        self.on_add_tag.call(tag);
    }

    fn submit(&mut self, data: NoteData) {
        self.on_submit.call(data);
    }

    fn navigate_up(&mut self) {
        self.state.navigate_up();
    }
}

/// Form for creating or editing a note.
///
/// Leave `title`, `markdown` and `tags` unset for a blank form.
#[component]
pub fn NoteForm(
    available_tags: Vec<Tag>,
    on_add_tag: EventHandler<Tag>,
    on_submit: EventHandler<NoteData>,
    #[props(default)] title: String,
    #[props(default)] markdown: String,
    #[props(default)] tags: Vec<Tag>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let mut form_state = use_signal(|| {
        NoteFormState::new(
            available_tags.clone(),
            NoteData {
                title,
                markdown,
                tags,
            },
            (state.form_settings)(),
        )
    });

    // Keep picker options in step with the host's tag set.
    use_effect(use_reactive((&available_tags,), move |(available_tags,)| {
        form_state.write().set_available_tags(available_tags);
    }));

    let host = FormHost {
        on_add_tag,
        on_submit,
        state,
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let mut host = host;
        if let Err(error) = form_state.read().submit(&mut host) {
            tracing::warn!("Note not submitted: {}", error);
        }
    };

    let handle_cancel = move |_: MouseEvent| {
        let mut host = host;
        form_state.read().cancel(&mut host);
    };

    let handle_create = move |label: String| {
        let mut host = host;
        form_state.write().create_tag(label, &mut host);
    };

    let handle_change = move |options: Vec<TagOption>| {
        form_state.write().change_selection(options);
    };

    let (title_value, markdown_value, options, selected, body_rows) = {
        let form = form_state.read();
        (
            form.title().to_string(),
            form.markdown().to_string(),
            form.options(),
            form.selected_options(),
            form.settings().body_rows,
        )
    };

    let label_style = format!(
        "display: block; margin-bottom: 6px; font-weight: 500; color: {};",
        colors.text_secondary
    );
    let field_style = format!(
        "width: 100%; box-sizing: border-box; padding: 8px 12px; border: 1px solid {}; \
         border-radius: 6px; font-size: 14px; font-family: inherit; background: {}; color: {};",
        colors.border, colors.bg_primary, colors.text_primary
    );

    rsx! {
        form {
            class: "note-form",
            style: "display: flex; flex-direction: column; gap: 24px;",
            onsubmit: handle_submit,

            div {
                style: "display: flex; gap: 16px;",

                div {
                    style: "flex: 1;",
                    label { r#for: "title", style: "{label_style}", "Title" }
                    input {
                        id: "title",
                        r#type: "text",
                        required: true,
                        value: "{title_value}",
                        style: "{field_style}",
                        oninput: move |evt| form_state.write().set_title(evt.value()),
                    }
                }

                div {
                    style: "flex: 1;",
                    label { r#for: "tags", style: "{label_style}", "Tags" }
                    TagSelect {
                        options,
                        selected,
                        on_change: handle_change,
                        on_create: handle_create,
                    }
                }
            }

            div {
                label { r#for: "markdown", style: "{label_style}", "Body" }
                textarea {
                    id: "markdown",
                    required: true,
                    rows: "{body_rows}",
                    value: "{markdown_value}",
                    style: "{field_style} resize: vertical;",
                    oninput: move |evt| form_state.write().set_markdown(evt.value()),
                }
            }

            div {
                style: "display: flex; justify-content: flex-end; gap: 8px;",
                Button {
                    variant: ButtonVariant::Primary,
                    button_type: "submit",
                    "Save"
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: handle_cancel,
                    "Cancel"
                }
            }
        }
    }
}
