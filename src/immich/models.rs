/// Serde models for the Immich resources this tool reads and mutates.
///
/// Field names mirror the server's `camelCase` DTOs. Fields the server only
/// includes on some endpoints (or for admins) are defaulted so every
/// representation deserializes.
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which collection an identifier refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Album,
    User,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Album => f.write_str("album"),
            Self::User => f.write_str("user"),
        }
    }
}

/// Access level a member holds on a shared album.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Can view the album's assets.
    Viewer,
    /// Can also add and remove assets.
    Editor,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Viewer => f.write_str("viewer"),
            Self::Editor => f.write_str("editor"),
        }
    }
}

/// An Immich user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub profile_image_path: String,
    #[serde(default)]
    pub avatar_color: String,
    #[serde(default)]
    pub profile_changed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub storage_label: String,
    #[serde(default)]
    pub should_change_password: bool,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub oauth_id: String,
    #[serde(default)]
    pub quota_size_in_bytes: Option<i64>,
    #[serde(default)]
    pub quota_usage_in_bytes: Option<i64>,
    #[serde(default)]
    pub status: String,
}

/// One user's membership in an album, with the granted role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumUser {
    pub user: User,
    pub role: Role,
}

/// An Immich album with its owner and member associations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_field_names)]
pub struct Album {
    pub id: Uuid,
    pub album_name: String,
    #[serde(default)]
    pub description: String,
    pub owner: User,
    #[serde(default)]
    pub album_users: Vec<AlbumUser>,
    #[serde(default)]
    pub shared: bool,
    #[serde(default)]
    pub asset_count: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
