/// Shared serializable output types for all commands.
///
/// These types are what gets written to stdout — either as JSON or rendered
/// as a table. They are decoupled from the `immich` wire models.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CliError;
use crate::immich::ApiError;

/// One row of `album list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumListOutput {
    /// Server-assigned album ID.
    pub id: Uuid,
    /// Album display name.
    pub name: String,
    /// Whether the album is shared with anyone.
    pub shared: bool,
    /// Number of member associations.
    pub share_count: usize,
    /// Number of assets in the album.
    pub asset_count: u64,
}

/// One row of `user list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListOutput {
    /// Server-assigned user ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Creation time, or null when the server omits it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time, or null when the server omits it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from a `CliError`.
    #[must_use]
    pub fn from_cli_error(err: &CliError) -> Self {
        let code = match err {
            CliError::NoMatch { .. } => "no_match",
            CliError::BadPattern { .. } => "bad_pattern",
            CliError::Api { source, .. } => match source {
                ApiError::NotFound { .. } => "not_found",
                ApiError::Unauthorized { .. } => "unauthorized",
                ApiError::UnexpectedStatus { .. } => "unexpected_status",
                ApiError::Request(_) => "network_error",
                ApiError::InvalidApiKey(_) => "invalid_api_key",
            },
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message: err.to_string(),
            },
        }
    }
}
