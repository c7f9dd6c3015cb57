// src/errors.rs

//! Crate-wide error type and status-line helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskvizError {
    /// A manually entered field was rejected. The message is user-facing.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Parse error: {0}")]
    Parse(String),

    /// The bulk payload parsed but was not a JSON array.
    #[error("Shape error: {0}")]
    Shape(String),

    #[error("Network error: {0}")]
    Network(String),

    /// Another analyze/suggest request is still in flight.
    #[error("A request is already in progress")]
    Busy,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for TaskvizError {
    fn from(err: serde_json::Error) -> Self {
        TaskvizError::Parse(err.to_string())
    }
}

impl From<reqwest::Error> for TaskvizError {
    fn from(err: reqwest::Error) -> Self {
        TaskvizError::Network(err.to_string())
    }
}

impl TaskvizError {
    /// The single human-readable line shown to the user for this error.
    ///
    /// Validation messages are already phrased for the user and pass through
    /// verbatim; everything else collapses to a fixed sentence per category.
    pub fn status_message(&self) -> String {
        match self {
            TaskvizError::Validation(msg) => msg.clone(),
            TaskvizError::Parse(_) => "Invalid JSON. Please check your syntax.".to_string(),
            TaskvizError::Shape(_) => "JSON must be an array of task objects.".to_string(),
            TaskvizError::Network(_) => {
                "Request to the scoring service failed. Check logs for details.".to_string()
            }
            TaskvizError::Busy => {
                "Please wait for the current request to finish.".to_string()
            }
            TaskvizError::Config(msg) => format!("Configuration problem: {msg}"),
            other => format!("Unexpected error: {other}"),
        }
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, TaskvizError>;
