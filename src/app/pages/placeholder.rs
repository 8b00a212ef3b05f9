//! Placeholder pages for modules whose backend flows are not wired up yet.
//!
//! Each page keeps its final route and nav slot so bookmarks and navigation
//! stay stable when the module lands.

use dioxus::prelude::*;

use crate::app::components::Layout;

#[derive(Props, Clone, PartialEq)]
struct UnderConstructionProps {
    /// Page title and heading
    title: String,
    /// Active nav item ID
    nav_id: String,
    /// One-line description of what the module will do
    blurb: String,
}

/// Shared body for not-yet-implemented module pages.
#[component]
fn UnderConstruction(props: UnderConstructionProps) -> Element {
    rsx! {
        Layout {
            title: props.title.clone(),
            nav_active: props.nav_id.clone(),

            h1 { "{props.title}" }
            article {
                p { "{props.blurb}" }
                footer {
                    small { "This module is under construction." }
                }
            }
        }
    }
}

/// Appointment scheduling placeholder.
#[component]
pub fn Appointments() -> Element {
    rsx! {
        UnderConstruction {
            title: "Appointments".to_string(),
            nav_id: "appointments".to_string(),
            blurb: "Book, confirm and follow up on visits across the care team.".to_string(),
        }
    }
}

/// Patient (pet) records placeholder.
#[component]
pub fn Patients() -> Element {
    rsx! {
        UnderConstruction {
            title: "Patients".to_string(),
            nav_id: "patients".to_string(),
            blurb: "Pets, owners, medical histories, vaccines and radiographs.".to_string(),
        }
    }
}

/// Inventory management placeholder.
#[component]
pub fn Inventory() -> Element {
    rsx! {
        UnderConstruction {
            title: "Inventory".to_string(),
            nav_id: "inventory".to_string(),
            blurb: "Products, suppliers, stock levels and expiry tracking.".to_string(),
        }
    }
}

/// Point-of-sale placeholder.
#[component]
pub fn Sales() -> Element {
    rsx! {
        UnderConstruction {
            title: "Sales".to_string(),
            nav_id: "sales".to_string(),
            blurb: "Tickets, payment methods and cash register sessions.".to_string(),
        }
    }
}

/// Reporting placeholder.
#[component]
pub fn Reports() -> Element {
    rsx! {
        UnderConstruction {
            title: "Reports".to_string(),
            nav_id: "reports".to_string(),
            blurb: "Sales, inventory and appointment summaries by date range.".to_string(),
        }
    }
}
