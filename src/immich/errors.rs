/// Errors from the Immich HTTP transport layer.
use reqwest::StatusCode;
use thiserror::Error;

use super::models::EntityKind;

/// Typed errors from the API transport.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A lookup by ID for an entity the server does not know.
    #[error("{kind} {id} not found on the server")]
    NotFound {
        /// Which collection was queried.
        kind: EntityKind,
        /// The identifier that was looked up.
        id: String,
    },

    /// The server rejected the credentials (HTTP 401/403).
    #[error("the server rejected the request (status {status}); check the server URL and API key")]
    Unauthorized {
        /// The rejecting status code.
        status: StatusCode,
    },

    /// Any other non-success response.
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus {
        /// The status code the server returned.
        status: StatusCode,
        /// The response body, as far as it could be read.
        body: String,
    },

    /// The request never completed (connect, timeout, decode).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API key contains bytes that cannot travel in an HTTP header.
    #[error("invalid API key: {0}")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),
}
