//! Loading indicators using the Pico CSS aria-busy spinner pattern.

use dioxus::prelude::*;

/// Inline loading indicator.
#[component]
pub fn Loading(#[props(default = String::from("Loading..."))] label: String) -> Element {
    rsx! {
        p { aria_busy: "true", "{label}" }
    }
}

/// Block-level loading indicator, rendered as a busy card.
#[component]
pub fn LoadingCard(#[props(default = String::from("Loading..."))] label: String) -> Element {
    rsx! {
        article { aria_busy: "true", "{label}" }
    }
}
