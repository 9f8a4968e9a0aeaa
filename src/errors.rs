/// Errors surfaced to the user by any subcommand.
use thiserror::Error;

use crate::immich::{ApiError, EntityKind};

/// Everything a command run can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    /// A pattern token matched nothing in the listing.
    #[error("no {kind}s found matching '{token}'")]
    NoMatch {
        /// Which collection was searched.
        kind: EntityKind,
        /// The token as the user typed it.
        token: String,
    },

    /// The token is neither a UUID nor a compilable regular expression.
    #[error("invalid pattern '{pattern}': {source}")]
    BadPattern {
        /// The rejected token.
        pattern: String,
        /// The regex compile error.
        source: regex::Error,
    },

    /// A remote call failed, wrapped with the operation that issued it.
    #[error("{context}: {source}")]
    Api {
        /// What the tool was doing when the call failed.
        context: String,
        /// The transport-layer failure.
        source: ApiError,
    },
}

impl CliError {
    /// Wrap a transport error with the operation that triggered it.
    #[must_use]
    pub fn api(context: impl Into<String>, source: ApiError) -> Self {
        Self::Api {
            context: context.into(),
            source,
        }
    }

    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoMatch { .. } => 4,
            Self::BadPattern { .. } => 2,
            Self::Api { source, .. } => match source {
                ApiError::NotFound { .. } => 4,
                ApiError::Unauthorized { .. } => 3,
                _ => 1,
            },
        }
    }
}
