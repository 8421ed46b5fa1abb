//! Reusable chrome and overlay widgets.

pub mod footer_bar;
pub mod help_overlay;
pub mod palette_overlay;
