//! Error types for holiday-export
//!
//! Only a handful of failures are allowed to end a run: an unusable country
//! catalog, a template that cannot be rendered, invalid configuration and I/O
//! failures on the output files. Per-year fetch failures never surface as an
//! [`Error`] past the fetcher; they are reported as
//! [`FetchOutcome::SkippedUnavailable`](crate::types::FetchOutcome).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for holiday-export operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for holiday-export
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "api.base_url")
        key: Option<String>,
    },

    /// Year range where the lower bound is above the upper bound
    #[error("invalid year range: min year {min} is greater than max year {max}")]
    InvalidYearRange {
        /// Requested first year
        min: i32,
        /// Requested last year
        max: i32,
    },

    /// The country catalog could not be loaded; the run cannot continue
    #[error("country catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// The remote API answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Unavailable {
        /// Requested URL
        url: String,
        /// HTTP status code of the response
        status: u16,
    },

    /// Network error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// An endpoint URL could not be built from the configured base URL
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Template could not be parsed or rendered
    #[error("template error: {0}")]
    Render(#[from] minijinja::Error),

    /// Template file could not be read
    #[error("failed to read template {path}: {source}")]
    TemplateRead {
        /// Path of the template file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Output file could not be written
    #[error("failed to write {path}: {source}")]
    Output {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Machine-readable error code, stable across releases
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Config { .. } => "config_error",
            Error::InvalidYearRange { .. } => "invalid_year_range",
            Error::CatalogUnavailable(_) => "catalog_unavailable",
            Error::Unavailable { .. } => "unavailable",
            Error::Network(_) => "network_error",
            Error::InvalidUrl(_) => "invalid_url",
            Error::Serialization(_) => "serialization_error",
            Error::Render(_) | Error::TemplateRead { .. } => "render_error",
            Error::Output { .. } | Error::Io(_) => "io_error",
        }
    }

    /// Process exit status used by the command line front-end
    ///
    /// Usage errors map to 64 (`EX_USAGE`), failures of the remote API to 69
    /// (`EX_UNAVAILABLE`), template failures to 65 (`EX_DATAERR`) and local
    /// I/O failures to 74 (`EX_IOERR`).
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Config { .. } | Error::InvalidYearRange { .. } | Error::InvalidUrl(_) => 64,
            Error::CatalogUnavailable(_)
            | Error::Unavailable { .. }
            | Error::Network(_)
            | Error::Serialization(_) => 69,
            Error::Render(_) | Error::TemplateRead { .. } => 65,
            Error::Output { .. } | Error::Io(_) => 74,
        }
    }
}
