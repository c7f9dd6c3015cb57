// src/config/mod.rs

//! Configuration loading and validation for taskviz.
//!
//! - `model.rs` defines the TOML-backed data model.
//! - `loader.rs` reads it from disk and applies the environment override.
//! - `validate.rs` turns a raw config into a checked [`ConfigFile`].

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{API_BASE_ENV, load_and_validate, load_from_path, resolve_config};
pub use model::{AnalysisSection, ApiSection, ConfigFile, DEFAULT_API_BASE, RawConfigFile};
