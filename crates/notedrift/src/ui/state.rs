//! UI state types shared between runtime handlers and rendering.

pub mod app_mode;
pub mod palette;
