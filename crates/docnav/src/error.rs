//! CLI error types.

use docnav_config::{ConfigError, ValidationError};
use docnav_pages::PagesError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Pages(#[from] PagesError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
