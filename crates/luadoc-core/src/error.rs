//! Error type shared by the rendering, configuration and extraction layers.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DocError>;

/// Errors that can occur while producing an API reference.
#[derive(Error, Debug)]
pub enum DocError {
    /// A configured name has no object in the extracted description.
    #[error("no API object named '{0}' in the documentation input")]
    UnknownObject(String),

    #[error("failed to read config file '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{}': {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("external link template '{0}' does not contain '{{name}}'")]
    InvalidLinkTemplate(String),

    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {status}")]
    ToolFailed { program: String, status: ExitStatus },

    #[error("failed to read documentation input: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed documentation input: {0}")]
    Json(#[from] serde_json::Error),
}
