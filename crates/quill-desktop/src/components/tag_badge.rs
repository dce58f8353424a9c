//! Tag badge component

use dioxus::prelude::*;

use crate::state::AppState;

/// Small pill showing a tag label, with an optional remove control
#[component]
pub fn TagBadge(
    label: String,
    #[props(default)] removable: bool,
    #[props(default)] on_remove: EventHandler<()>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    rsx! {
        span {
            class: "tag-badge",
            style: "
                display: inline-flex;
                align-items: center;
                gap: 4px;
                padding: 2px 8px;
                border-radius: 999px;
                font-size: 12px;
                background: {colors.accent};
                color: {colors.accent_text};
            ",
            "{label}"
            if removable {
                span {
                    role: "button",
                    "aria-label": "Remove {label}",
                    style: "cursor: pointer; font-weight: 600;",
                    onmousedown: move |evt: MouseEvent| {
                        evt.prevent_default();
                        on_remove.call(());
                    },
                    "×"
                }
            }
        }
    }
}
