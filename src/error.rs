//! Error types for scoop-search.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using our error type.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Every failure the search can hit. All of them end the run.
#[derive(Error, Debug)]
pub enum SearchError {
    /// A required location (home dir, scoop root) could not be resolved
    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading a bucket directory or manifest failed
    #[error("Cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `bin` had a shape the matcher does not understand
    #[error(
        "Cannot parse \"bin\" attribute in {}. This should not happen. Please open an issue about it with steps to reproduce",
        path.display()
    )]
    MalformedManifest { path: PathBuf },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Remote error: {0}")]
    Remote(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl SearchError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Short machine-readable code used by robot output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingConfig(_) | Self::Config(_) => "config",
            Self::Read { .. } => "io",
            Self::MalformedManifest { .. } => "malformed_manifest",
            Self::Http(_) | Self::Remote(_) => "remote",
            Self::Serialization(_) => "serialization",
            Self::Regex(_) => "regex",
        }
    }
}
