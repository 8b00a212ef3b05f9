//! Avatar rendering with initials fallback.
//!
//! The image is requested from the external rendering service; if the load
//! fails for any reason the component swaps in a solid-background initials
//! badge in place. The swap is one way - once fallen back, no further image
//! load is attempted for this render instance.

use dioxus::prelude::*;

use crate::avatar::{staff_name, AvatarIdentity, AvatarSize, AvatarState};

#[derive(Props, Clone, PartialEq)]
pub struct AvatarProps {
    /// Person's display name; drives both the remote rendering and the
    /// fallback badge
    pub name: String,
    /// Display tier (defaults to medium)
    #[props(default)]
    pub size: AvatarSize,
}

/// Deterministic avatar for a display name.
#[component]
pub fn Avatar(props: AvatarProps) -> Element {
    let identity = AvatarIdentity::from_name(&props.name, props.size);
    let mut state = use_signal(AvatarState::default);
    let px = props.size.pixels();
    let tier = props.size.css_class();

    rsx! {
        div {
            class: "avatar {tier}",
            style: "width:{px}px;height:{px}px;",
            if state().is_fallback() {
                span { class: "avatar-initials", "{identity.initials}" }
            } else {
                img {
                    src: "{identity.url}",
                    alt: "{props.name}",
                    width: "{px}",
                    height: "{px}",
                    onerror: move |_| state.set(state().on_load_error()),
                }
            }
        }
    }
}

/// Medium avatar for general entity references (lists, cards).
#[component]
pub fn UserAvatar(name: String) -> Element {
    rsx! {
        Avatar { name, size: AvatarSize::Medium }
    }
}

/// Large avatar for testimonial-style display.
#[component]
pub fn TestimonialAvatar(name: String) -> Element {
    rsx! {
        Avatar { name, size: AvatarSize::Large }
    }
}

/// Avatar for a staff member picked from the fixed roster by wrapped index.
#[component]
pub fn StaffAvatar(index: i64, #[props(default)] size: AvatarSize) -> Element {
    let name = staff_name(index);
    rsx! {
        Avatar { name: name.to_string(), size }
    }
}
