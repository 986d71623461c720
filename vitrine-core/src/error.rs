//! src/error.rs
//! ============================================================================
//! # `AppError`: Unified Error Type for the Catalog Browser
//!
//! This module defines the error enum used across the application. Each
//! variant carries enough context for diagnostics, and all fallible modules
//! are expected to use `Result<T, AppError>` for consistency.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Unified error type for all catalog browser operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Network-level failure while fetching the catalog.
    #[error("Catalog fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The catalog endpoint answered with a non-success status.
    #[error("Catalog endpoint {url} returned status {status}")]
    HttpStatus { url: String, status: u16 },

    /// The catalog payload did not decode as the expected item array.
    #[error("Malformed catalog payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// Config file I/O error with path.
    #[error("Failed to read config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Terminal I/O or rendering error.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Any other error, with description.
    #[error("Unexpected error: {0}")]
    Other(String),
}

impl AppError {
    /// Create a fetch failure error.
    pub fn fetch<S: Into<String>>(url: S, source: reqwest::Error) -> Self {
        Self::Fetch {
            url: url.into(),
            source,
        }
    }

    /// Create a non-success status error.
    pub fn http_status<S: Into<String>>(url: S, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }
}

// Allow conversion from `anyhow::Error` as fallback.
impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        Self::Other(e.to_string())
    }
}
