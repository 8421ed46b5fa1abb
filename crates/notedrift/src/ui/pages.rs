//! Full-area pages routed by the current app mode.

pub mod browse;
pub mod settings;
