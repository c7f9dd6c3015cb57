// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::config::validate::validate_api;
use crate::errors::Result;

/// Environment variable that overrides `[api].base_url`.
pub const API_BASE_ENV: &str = "TASKVIZ_API_BASE";

/// Load a configuration file from a given path and return the raw
/// `RawConfigFile`.
///
/// This only performs TOML deserialization; use [`load_and_validate`] for
/// semantic checks.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and validate it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Resolve the configuration the CLI should run with.
///
/// - An explicitly given path must exist.
/// - The default path is optional; when it is missing, defaults are used.
/// - `TASKVIZ_API_BASE`, when set, overrides the base URL either way.
pub fn resolve_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    let mut config = match explicit {
        Some(path) => load_and_validate(path)?,
        None => {
            let path = default_config_path();
            if path.exists() {
                load_and_validate(&path)?
            } else {
                debug!(?path, "no config file found; using defaults");
                ConfigFile::default()
            }
        }
    };

    if let Ok(base) = std::env::var(API_BASE_ENV) {
        if !base.trim().is_empty() {
            debug!(%base, "base URL overridden from environment");
            config.api.base_url = base.trim().to_string();
            validate_api(&config.api)?;
        }
    }

    Ok(config)
}

/// Default config location: `Taskviz.toml` in the working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Taskviz.toml")
}
