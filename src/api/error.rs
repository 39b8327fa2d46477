//! Error types for PokéAPI fetches and record projection.
//!
//! Every variant carries the URL or entry name it failed on, so a skipped
//! item can be identified from the diagnostic line alone.

use thiserror::Error;

/// Errors that can occur while fetching and decoding a PokéAPI resource.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS resolution, connection refused, timeout,
    /// TLS errors, etc.)
    #[error("network error fetching {url}: {source}")]
    Network {
        /// The URL that failed to fetch.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// HTTP error response (4xx client errors, 5xx server errors).
    #[error("HTTP {status} fetching {url}")]
    HttpStatus {
        /// The URL that returned an error status.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// Response body could not be decoded into the expected wire shape
    /// (invalid JSON, or a required field missing or of the wrong type).
    #[error("malformed response body from {url}: {source}")]
    MalformedBody {
        /// The URL whose body failed to decode.
        url: String,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// Detail body decoded cleanly but failed projection into a record.
    #[error("malformed record for {name}: {source}")]
    MalformedRecord {
        /// Name of the entry whose detail failed projection.
        name: String,
        /// The projection failure.
        #[source]
        source: ProjectionError,
    },
}

impl FetchError {
    /// Creates a network error from a reqwest error.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates an HTTP status error.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Creates a malformed-body error from a JSON decode error.
    pub fn malformed_body(url: impl Into<String>, source: serde_json::Error) -> Self {
        Self::MalformedBody {
            url: url.into(),
            source,
        }
    }

    /// Creates a malformed-record error from a projection failure.
    pub fn malformed_record(name: impl Into<String>, source: ProjectionError) -> Self {
        Self::MalformedRecord {
            name: name.into(),
            source,
        }
    }
}

/// Errors projecting a decoded detail body into a flat record.
///
/// A projection failure is an item failure under the harvest skip policy:
/// the entry is dropped, never emitted with defaulted values.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionError {
    /// The detail body listed no types at all.
    #[error("no types listed")]
    MissingPrimaryType,

    /// The stats array is shorter than the positional layout requires.
    #[error("stats array has {actual} entries, need at least {expected}")]
    TruncatedStats {
        /// Minimum number of entries the projection indexes into.
        expected: usize,
        /// Number of entries actually present.
        actual: usize,
    },
}
