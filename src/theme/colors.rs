//! Color constants
//!
//! Indigo-on-white palette. Mirrors the custom properties at the top of
//! `GLOBAL_STYLES` for places that build inline styles in Rust.

#![allow(dead_code)]

// === INDIGO (Brand, Actions) ===
pub const INDIGO_50: &str = "#eef2ff";
pub const INDIGO_200: &str = "#c7d2fe";
pub const INDIGO_500: &str = "#6366f1";
pub const INDIGO_600: &str = "#4f46e5";
pub const INDIGO_700: &str = "#4338ca";
pub const INDIGO_900: &str = "#312e81";

// === PURPLE (Hero art gradient) ===
pub const PURPLE_600: &str = "#9333ea";

// === GRAY (Text, Surfaces) ===
pub const GRAY_50: &str = "#f9fafb";
pub const GRAY_400: &str = "#9ca3af";
pub const GRAY_500: &str = "#6b7280";
pub const GRAY_800: &str = "#1f2937";
pub const GRAY_900: &str = "#111827";

// === GREEN (Confirmation) ===
pub const GREEN_50: &str = "#f0fdf4";
pub const GREEN_400: &str = "#4ade80";
pub const GREEN_800: &str = "#166534";
