//! Per-mode key handlers.

pub(crate) mod browse;
pub(crate) mod help;
pub(crate) mod palette;
pub(crate) mod settings;
