//! Shared UI components for the Dioxus web UI.

pub mod avatar;
pub mod layout;
pub mod loading;
pub mod nav;
pub mod theme;

pub use avatar::{Avatar, StaffAvatar, TestimonialAvatar, UserAvatar};
pub use layout::Layout;
pub use loading::{Loading, LoadingCard};
pub use nav::Nav;
pub use theme::ThemeSwitcher;
