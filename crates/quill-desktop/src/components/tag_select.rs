//! Creatable multi-select for tags
//!
//! Shows the selected tags as removable badges, a text input that filters
//! the remaining options, and a dropdown offering matches plus a "Create"
//! entry for labels nobody has used yet.

use dioxus::prelude::*;

use quill_core::TagOption;

use super::TagBadge;
use crate::state::AppState;

/// What pressing Enter in the picker input should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnterAction {
    Select(TagOption),
    Create(String),
    Ignore,
}

fn is_selected(selected: &[TagOption], option: &TagOption) -> bool {
    selected.iter().any(|item| item.value == option.value)
}

fn label_matches(option: &TagOption, query: &str) -> bool {
    option.label.eq_ignore_ascii_case(query)
}

/// Unselected options whose label contains `query`, ignoring case
pub fn filter_options(options: &[TagOption], selected: &[TagOption], query: &str) -> Vec<TagOption> {
    let needle = query.trim().to_lowercase();
    options
        .iter()
        .filter(|option| !is_selected(selected, option))
        .filter(|option| needle.is_empty() || option.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Whether `query` would create a new option.
///
/// Blank input never does, nor does a label that already exists among the
/// options or the current selection.
pub fn can_create(options: &[TagOption], selected: &[TagOption], query: &str) -> bool {
    let query = query.trim();
    !query.is_empty()
        && !options
            .iter()
            .chain(selected)
            .any(|option| label_matches(option, query))
}

pub fn enter_action(options: &[TagOption], selected: &[TagOption], query: &str) -> EnterAction {
    let trimmed = query.trim();
    if let Some(option) = options
        .iter()
        .find(|option| label_matches(option, trimmed))
    {
        return if is_selected(selected, option) {
            EnterAction::Ignore
        } else {
            EnterAction::Select(option.clone())
        };
    }
    if can_create(options, selected, query) {
        EnterAction::Create(query.to_string())
    } else {
        EnterAction::Ignore
    }
}

/// The full selection after adding `option`
pub fn with_option(selected: &[TagOption], option: TagOption) -> Vec<TagOption> {
    let mut next = selected.to_vec();
    next.push(option);
    next
}

/// The full selection after removing the option with id `value`
pub fn without_option(selected: &[TagOption], value: &str) -> Vec<TagOption> {
    selected
        .iter()
        .filter(|option| option.value != value)
        .cloned()
        .collect()
}

/// Tag picker. Every selection change reports the full new selection.
#[component]
pub fn TagSelect(
    options: Vec<TagOption>,
    selected: Vec<TagOption>,
    on_change: EventHandler<Vec<TagOption>>,
    on_create: EventHandler<String>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let mut query = use_signal(String::new);
    let mut open = use_signal(|| false);

    let matches = filter_options(&options, &selected, &query());
    let create_label = can_create(&options, &selected, &query()).then(|| query());
    let show_menu = open() && (!matches.is_empty() || create_label.is_some());

    let on_keydown = {
        let options = options.clone();
        let selected = selected.clone();
        move |evt: KeyboardEvent| match evt.key() {
            Key::Enter => {
                evt.prevent_default();
                match enter_action(&options, &selected, &query()) {
                    EnterAction::Select(option) => {
                        on_change.call(with_option(&selected, option));
                        query.set(String::new());
                    }
                    EnterAction::Create(label) => {
                        on_create.call(label);
                        query.set(String::new());
                    }
                    EnterAction::Ignore => {}
                }
            }
            Key::Backspace if query.read().is_empty() => {
                if let Some(last) = selected.last() {
                    on_change.call(without_option(&selected, &last.value));
                }
            }
            Key::Escape => open.set(false),
            _ => {}
        }
    };

    rsx! {
        div {
            class: "tag-select",
            style: "position: relative;",

            div {
                style: "
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 4px;
                    padding: 6px 8px;
                    border: 1px solid {colors.border};
                    border-radius: 6px;
                    background: {colors.bg_primary};
                ",

                for option in selected.clone() {
                    {
                        let selected = selected.clone();
                        let value = option.value.clone();
                        rsx! {
                            TagBadge {
                                key: "{option.value}",
                                label: option.label.clone(),
                                removable: true,
                                on_remove: move |()| on_change.call(without_option(&selected, &value)),
                            }
                        }
                    }
                }

                input {
                    id: "tags",
                    r#type: "text",
                    placeholder: if selected.is_empty() { "Select or create tags..." } else { "" },
                    value: "{query}",
                    style: "
                        flex: 1;
                        min-width: 120px;
                        border: none;
                        outline: none;
                        font-size: 14px;
                        background: transparent;
                        color: {colors.text_primary};
                    ",
                    oninput: move |evt| {
                        query.set(evt.value());
                        open.set(true);
                    },
                    onfocus: move |_| open.set(true),
                    onblur: move |_| open.set(false),
                    onkeydown: on_keydown,
                }
            }

            if show_menu {
                div {
                    class: "tag-select-menu",
                    style: "
                        position: absolute;
                        top: calc(100% + 4px);
                        left: 0;
                        right: 0;
                        z-index: 10;
                        max-height: 200px;
                        overflow-y: auto;
                        border: 1px solid {colors.border};
                        border-radius: 6px;
                        background: {colors.bg_secondary};
                    ",

                    for option in matches {
                        {
                            let selected = selected.clone();
                            let label = option.label.clone();
                            let key = option.value.clone();
                            rsx! {
                                div {
                                    key: "{key}",
                                    style: "padding: 6px 10px; cursor: pointer;",
                                    onmousedown: move |evt: MouseEvent| {
                                        evt.prevent_default();
                                        on_change.call(with_option(&selected, option.clone()));
                                        query.set(String::new());
                                    },
                                    "{label}"
                                }
                            }
                        }
                    }

                    if let Some(label) = create_label {
                        {
                            let text = format!("Create \"{label}\"");
                            rsx! {
                                div {
                                    style: "
                                        padding: 6px 10px;
                                        cursor: pointer;
                                        color: {colors.text_secondary};
                                    ",
                                    onmousedown: move |evt: MouseEvent| {
                                        evt.prevent_default();
                                        on_create.call(label.clone());
                                        query.set(String::new());
                                    },
                                    "{text}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
