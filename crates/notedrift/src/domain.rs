//! Core vault model and random-selection logic.

pub mod sampler;
pub mod vault;
