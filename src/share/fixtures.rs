/// Hand-built entities shared by the sharing-layer tests.
use chrono::Utc;
use uuid::Uuid;

use crate::immich::models::{Album, AlbumUser, Role, User};

/// A user with a deterministic UUID derived from `id`.
pub fn user(id: u128, name: &str) -> User {
    User {
        id: Uuid::from_u128(id),
        email: format!("{}@example.com", name.to_lowercase()),
        name: name.to_owned(),
        profile_image_path: String::new(),
        avatar_color: String::new(),
        profile_changed_at: None,
        storage_label: String::new(),
        should_change_password: false,
        is_admin: false,
        created_at: Some(Utc::now()),
        deleted_at: None,
        updated_at: Some(Utc::now()),
        oauth_id: String::new(),
        quota_size_in_bytes: None,
        quota_usage_in_bytes: None,
        status: "active".to_owned(),
    }
}

/// An album owned by `owner`, not shared, with no members.
pub fn album(id: u128, name: &str, owner: &User) -> Album {
    Album {
        id: Uuid::from_u128(id),
        album_name: name.to_owned(),
        description: String::new(),
        owner: owner.clone(),
        album_users: vec![],
        shared: false,
        asset_count: 0,
        created_at: Some(Utc::now()),
        updated_at: Some(Utc::now()),
    }
}

/// Add `member` to `album` with `role` and mark it shared.
pub fn with_member(mut album: Album, member: &User, role: Role) -> Album {
    album.album_users.push(AlbumUser {
        user: member.clone(),
        role,
    });
    album.shared = true;
    album
}
