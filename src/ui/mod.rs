//! Web UI handlers - server-side rendering of the Dioxus pages.
//!
//! Each handler renders its page component to HTML with `dioxus::ssr`. The
//! pages hydrate on the client when the `web` build is served alongside, but
//! render completely without it - only the avatar load-error fallback and the
//! theme switcher need a live client.

use axum::response::{Html, IntoResponse};
use dioxus::prelude::*;

use crate::app::pages::{
    Appointments, Dashboard, Encoding, Inventory, Patients, Reports, Sales,
};

/// Wrap a rendered page body in the document shell.
fn html_doc(body: String) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n{}</html>",
        body
    ))
}

/// GET / - Dashboard with the care team and testimonial
pub async fn dashboard_page() -> impl IntoResponse {
    html_doc(dioxus::ssr::render_element(rsx! { Dashboard {} }))
}

/// GET /appointments - Appointment scheduling (placeholder)
pub async fn appointments_page() -> impl IntoResponse {
    html_doc(dioxus::ssr::render_element(rsx! { Appointments {} }))
}

/// GET /patients - Patient records (placeholder)
pub async fn patients_page() -> impl IntoResponse {
    html_doc(dioxus::ssr::render_element(rsx! { Patients {} }))
}

/// GET /inventory - Inventory management (placeholder)
pub async fn inventory_page() -> impl IntoResponse {
    html_doc(dioxus::ssr::render_element(rsx! { Inventory {} }))
}

/// GET /sales - Point of sale (placeholder)
pub async fn sales_page() -> impl IntoResponse {
    html_doc(dioxus::ssr::render_element(rsx! { Sales {} }))
}

/// GET /reports - Reporting (placeholder)
pub async fn reports_page() -> impl IntoResponse {
    html_doc(dioxus::ssr::render_element(rsx! { Reports {} }))
}

/// GET /encoding - UTF-8 display test
pub async fn encoding_page() -> impl IntoResponse {
    html_doc(dioxus::ssr::render_element(rsx! { Encoding {} }))
}
