//! VickreyChain UI Components
//!
//! Dioxus building blocks for the landing page. The page itself lives in
//! the desktop crate; these are the pieces it repeats.
//!
//! ## Palette
//!
//! - **Indigo (#4f46e5)**: brand, primary actions, links
//! - **Gray (#111827 to #f9fafb)**: text and section backgrounds
//! - **Green (#f0fdf4 / #166534)**: the sign-up confirmation

pub mod components;

pub use components::*;
