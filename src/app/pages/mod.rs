//! Dioxus page components.

mod dashboard;
mod encoding;
mod placeholder;

pub use dashboard::Dashboard;
pub use encoding::Encoding;
pub use placeholder::{Appointments, Inventory, Patients, Reports, Sales};
