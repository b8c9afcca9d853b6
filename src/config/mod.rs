// src/config/mod.rs

//! Configuration: TOML model, loading and semantic validation.

pub mod loader;
pub mod model;
pub mod validate;

pub use model::{ConfigFile, FailureSection, RunSection};
