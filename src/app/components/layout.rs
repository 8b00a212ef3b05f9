//! Layout component wrapping all pages with Pico CSS page chrome.

use dioxus::prelude::*;

use super::nav::Nav;
use super::theme::ThemeSwitcher;
use crate::app::theme::use_theme_provider;

/// Small stylesheet on top of classless Pico: avatar sizing/clipping and the
/// initials badge.
const APP_CSS: &str = r#"
.avatar { border-radius: 50%; overflow: hidden; display: inline-flex; align-items: center; justify-content: center; background: var(--pico-secondary-background); flex-shrink: 0; }
.avatar img { width: 100%; height: 100%; object-fit: cover; display: block; }
.avatar-initials { color: var(--pico-secondary-inverse); font-weight: 700; }
.avatar-sm .avatar-initials { font-size: 0.7rem; }
.avatar-md .avatar-initials { font-size: 0.9rem; }
.avatar-lg .avatar-initials { font-size: 1.1rem; }
.staff-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1rem; }
.staff-card { display: flex; gap: 0.75rem; align-items: center; }
small { color: var(--pico-muted-color); }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Active navigation item ID
    pub nav_active: String,
    /// Page content
    pub children: Element,
    /// Show the encoding test link in nav
    #[props(default = false)]
    pub show_encoding: bool,
}

/// Main layout component wrapping all pages.
///
/// Owns the theme context so both SSR handlers and the hydrated client get a
/// provider without page-level wiring.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    use_theme_provider();

    let version = env!("VETCLINIC_VERSION");
    let full_title = format!("{} - VetClinic", props.title);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Link {
            rel: "stylesheet",
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css"
        }

        style { {APP_CSS} }

        // Body content
        header { class: "container",
            Nav {
                active: props.nav_active.clone(),
                show_encoding: props.show_encoding,
            }
        }
        main { class: "container",
            {props.children}
        }
        footer { class: "container",
            small { "VetClinic v{version}" }
            ThemeSwitcher {}
        }
    }
}
