//! Dashboard page component.
//!
//! Landing page: the care team roster with generated avatars and a
//! testimonial card. Data-driven sections render their pending state until a
//! backend is wired up.

use dioxus::prelude::*;

use crate::app::components::{Layout, LoadingCard, StaffAvatar, TestimonialAvatar};
use crate::avatar::STAFF_ROSTER;

/// Dashboard page component.
#[component]
pub fn Dashboard() -> Element {
    let staff: Vec<(i64, &str, String)> = STAFF_ROSTER
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let schedule = format!("/appointments?vet={}", urlencoding::encode(name));
            (i as i64, *name, schedule)
        })
        .collect();

    rsx! {
        Layout {
            title: "Dashboard".to_string(),
            nav_active: "dashboard".to_string(),

            h1 { "Dashboard" }

            section { id: "team",
                hgroup {
                    h2 { "Care team" }
                    p { "Veterinarians and staff on duty today" }
                }
                div { class: "staff-grid",
                    for (index, name, schedule) in staff {
                        article { class: "staff-card",
                            StaffAvatar { index }
                            div {
                                p { strong { "{name}" } }
                                small {
                                    a { href: "{schedule}", "View schedule" }
                                }
                            }
                        }
                    }
                }
            }

            section { id: "appointments",
                hgroup {
                    h2 { "Today's appointments" }
                    p { "Upcoming visits across all veterinarians" }
                }
                LoadingCard { label: "Waiting for backend connection...".to_string() }
            }

            section { id: "testimonial",
                hgroup {
                    h2 { "From our clients" }
                    p { "What pet owners say about the clinic" }
                }
                article {
                    blockquote {
                        "Luna hated every clinic until this one. The team remembered "
                        "her name on the second visit."
                    }
                    footer { class: "staff-card",
                        TestimonialAvatar { name: "María González".to_string() }
                        div {
                            p { strong { "María González" } }
                            small { "Luna's owner" }
                        }
                    }
                }
            }
        }
    }
}
