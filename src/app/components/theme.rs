//! Theme switcher component for system/light/dark modes.

use dioxus::prelude::*;

use crate::app::theme::{use_theme, Theme};

const THEME_CHOICES: &[Theme] = &[Theme::System, Theme::Light, Theme::Dark];

/// Theme switcher bound to the theme context. Selection is persisted to
/// localStorage on the client.
#[component]
pub fn ThemeSwitcher() -> Element {
    let ctx = use_theme();
    let current = ctx.get();
    let choices: Vec<(Theme, &'static str)> =
        THEME_CHOICES.iter().map(|t| (*t, t.label())).collect();

    rsx! {
        div { class: "theme-switcher", role: "group",
            for (theme, label) in choices {
                button {
                    class: if theme == current { "" } else { "secondary" },
                    onclick: move |_| ctx.set(theme),
                    "{label}"
                }
            }
        }
    }
}
