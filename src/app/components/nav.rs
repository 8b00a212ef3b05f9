//! Navigation component for the web UI.

use dioxus::prelude::*;

/// Nav items: (id, label, href)
const NAV_LINKS: &[(&str, &str, &str)] = &[
    ("dashboard", "Dashboard", "/"),
    ("appointments", "Appointments", "/appointments"),
    ("patients", "Patients", "/patients"),
    ("inventory", "Inventory", "/inventory"),
    ("sales", "Sales", "/sales"),
    ("reports", "Reports", "/reports"),
];

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// The currently active page ID (e.g., "dashboard", "patients")
    pub active: String,
    /// Show the UTF-8 encoding test page link (diagnostics)
    #[props(default = false)]
    pub show_encoding: bool,
}

/// Navigation bar component using Pico CSS nav pattern.
#[component]
pub fn Nav(props: NavProps) -> Element {
    rsx! {
        nav {
            ul {
                li {
                    strong { "VetClinic" }
                }
            }
            ul {
                for (id, label, href) in NAV_LINKS.iter().copied() {
                    li {
                        if id == props.active {
                            a { href: "{href}", "aria-current": "page", strong { "{label}" } }
                        } else {
                            a { href: "{href}", "{label}" }
                        }
                    }
                }
                if props.show_encoding {
                    li {
                        if props.active == "encoding" {
                            a { href: "/encoding", "aria-current": "page", strong { "Encoding" } }
                        } else {
                            a { href: "/encoding", "Encoding" }
                        }
                    }
                }
            }
        }
    }
}
