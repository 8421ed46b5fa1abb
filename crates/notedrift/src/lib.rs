pub mod app;
pub mod domain;
pub mod infra;
pub mod ui;

pub mod runtime;

// Re-exports for convenience
pub use domain::sampler;
pub use domain::vault;
pub use infra::settings_file;
pub use infra::vault_scan;
