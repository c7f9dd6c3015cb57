// src/config/model.rs

use serde::Deserialize;

use crate::types::Strategy;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000/api";

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [api]
/// base_url = "http://127.0.0.1:8000/api"
/// timeout_secs = 30
///
/// [analysis]
/// strategy = "smart_balance"
/// ```
///
/// Every section is optional and has a default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub api: ApiSection,

    #[serde(default)]
    pub analysis: AnalysisSection,
}

/// `[api]` section: where the scoring service lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout. `None` means requests never time out.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

/// `[analysis]` section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisSection {
    /// Strategy used when a command does not pick one.
    #[serde(default)]
    pub strategy: Strategy,
}

/// Validated configuration.
///
/// Only obtainable through `TryFrom<RawConfigFile>` (see
/// [`validate`](super::validate)) or [`ConfigFile::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub api: ApiSection,
    pub analysis: AnalysisSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(api: ApiSection, analysis: AnalysisSection) -> Self {
        Self { api, analysis }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self::new_unchecked(ApiSection::default(), AnalysisSection::default())
    }
}
