//! Error types for the route generator.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the crate error type.
pub type Result<T> = std::result::Result<T, RoutesError>;

/// Why a string could not be read as an IPv4 CIDR.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CidrError {
    #[error("missing '/' between address and prefix length")]
    MissingSlash,

    #[error("invalid IPv4 address '{0}'")]
    InvalidAddress(String),

    #[error("invalid prefix length '{0}'")]
    InvalidPrefixLength(String),

    #[error("prefix length {0} is longer than 32")]
    PrefixTooLong(u8),
}

/// Main error type. The orchestration layer decides which variants abort the
/// run and which only skip an entry.
#[derive(Error, Debug)]
pub enum RoutesError {
    /// Connection or request failure before a response arrived.
    #[error("failed to open URL {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    /// Response started but the body could not be read.
    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to decode JSON from {url} at '{path}': {source}")]
    Decode {
        url: String,
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read extras file {}: {source}", path.display())]
    ExtrasRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode extras file {} at '{json_path}': {source}", path.display())]
    ExtrasDecode {
        path: PathBuf,
        json_path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid CIDR '{cidr}': {source}")]
    InvalidCidr {
        cidr: String,
        #[source]
        source: CidrError,
    },

    #[error("failed to create output file {}: {source}", path.display())]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{line}' to {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        line: String,
        #[source]
        source: std::io::Error,
    },
}

impl RoutesError {
    /// True for errors that stop the whole run.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            RoutesError::Transport { .. }
                | RoutesError::HttpStatus { .. }
                | RoutesError::Body { .. }
                | RoutesError::Decode { .. }
                | RoutesError::OutputCreate { .. }
        )
    }
}
