//! Themed button

use dioxus::prelude::*;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

/// Button styled from the active palette.
///
/// Defaults to `type="button"` so it never submits an enclosing form by accident.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "button".to_string(), into)] button_type: String,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let (bg, fg, border) = match variant {
        ButtonVariant::Primary => (colors.accent, colors.accent_text, colors.accent),
        ButtonVariant::Secondary => ("transparent", colors.text_secondary, colors.border),
    };

    rsx! {
        button {
            r#type: "{button_type}",
            style: "
                padding: 8px 16px;
                border-radius: 6px;
                border: 1px solid {border};
                background: {bg};
                color: {fg};
                font-size: 14px;
                cursor: pointer;
            ",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}
