//! Dioxus application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application with client-side hydration.

use dioxus::prelude::*;

pub mod components;
pub mod pages;
pub mod theme;

use pages::{Appointments, Dashboard, Encoding, Inventory, Patients, Reports, Sales};

/// Root app component with routing. The theme context is provided by
/// `Layout`, which every page mounts.
#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/appointments")]
    Appointments {},
    #[route("/patients")]
    Patients {},
    #[route("/inventory")]
    Inventory {},
    #[route("/sales")]
    Sales {},
    #[route("/reports")]
    Reports {},
    #[route("/encoding")]
    Encoding {},
}
