// src/config/validate.rs

use reqwest::Url;

use crate::config::model::{ApiSection, ConfigFile, RawConfigFile};
use crate::errors::{Result, TaskvizError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::TaskvizError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.api, raw.analysis))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_api(&cfg.api)?;
    // The strategy is strongly typed and checked during deserialization.
    Ok(())
}

pub(crate) fn validate_api(api: &ApiSection) -> Result<()> {
    let url = Url::parse(&api.base_url).map_err(|e| {
        TaskvizError::Config(format!("[api].base_url '{}' is not a valid URL: {e}", api.base_url))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(TaskvizError::Config(format!(
            "[api].base_url must use http or https (got '{}')",
            url.scheme()
        )));
    }

    if api.timeout_secs == Some(0) {
        return Err(TaskvizError::Config(
            "[api].timeout_secs must be >= 1 (got 0)".to_string(),
        ));
    }

    Ok(())
}
