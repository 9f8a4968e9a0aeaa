/// Token resolution: convert user-provided album/user tokens to entities.
///
/// A token is classified exactly once, then resolved:
///
/// 1. **UUID**: fetch that entity directly. The listing is never consulted,
///    so a single lookup costs a single request.
/// 2. **Regex**: fetch the full listing and keep the entries whose display
///    name matches (unanchored search), preserving listing order.
///
/// Either way, an empty result is an error rather than an empty set.
use regex::Regex;
use uuid::Uuid;

use crate::errors::CliError;
use crate::immich::{Album, EntityKind, ImmichApi, User};

/// A token classified as an exact identifier or a name pattern.
#[derive(Debug, Clone)]
pub enum Selector {
    /// The token parsed as a UUID; resolve by direct lookup.
    Id(Uuid),
    /// Anything else; resolve by filtering the listing by name.
    Pattern(Regex),
}

impl Selector {
    /// Classify a raw token. UUID parsing wins; everything else must compile
    /// as a regex.
    ///
    /// # Errors
    ///
    /// Returns `CliError::BadPattern` when the token is neither.
    pub fn parse(token: &str) -> Result<Self, CliError> {
        if let Ok(id) = Uuid::parse_str(token) {
            return Ok(Self::Id(id));
        }
        match Regex::new(token) {
            Ok(pattern) => Ok(Self::Pattern(pattern)),
            Err(source) => Err(CliError::BadPattern {
                pattern: token.to_owned(),
                source,
            }),
        }
    }
}

/// Resolve an album token to one album (by ID) or every album whose name
/// matches (by pattern).
///
/// # Errors
///
/// - `CliError::BadPattern` — the token does not classify
/// - `CliError::NoMatch` — the pattern matched no album
/// - `CliError::Api` — a fetch failed (including unknown IDs)
pub fn resolve_albums(api: &impl ImmichApi, token: &str) -> Result<Vec<Album>, CliError> {
    let matched = match Selector::parse(token)? {
        Selector::Id(id) => {
            let album = api
                .get_album_info(id, true)
                .map_err(|e| CliError::api(format!("failed to get album info for {id}"), e))?;
            vec![album]
        }
        Selector::Pattern(pattern) => api
            .get_all_albums()
            .map_err(|e| CliError::api("failed to get all albums", e))?
            .into_iter()
            .filter(|album| pattern.is_match(&album.album_name))
            .collect(),
    };

    if matched.is_empty() {
        return Err(CliError::NoMatch {
            kind: EntityKind::Album,
            token: token.to_owned(),
        });
    }
    Ok(matched)
}

/// Resolve a user token to one user (by ID) or every user whose display name
/// matches (by pattern).
///
/// # Errors
///
/// - `CliError::BadPattern` — the token does not classify
/// - `CliError::NoMatch` — the pattern matched no user
/// - `CliError::Api` — a fetch failed (including unknown IDs)
pub fn resolve_users(api: &impl ImmichApi, token: &str) -> Result<Vec<User>, CliError> {
    let matched = match Selector::parse(token)? {
        Selector::Id(id) => {
            let user = api
                .get_user_info(id)
                .map_err(|e| CliError::api(format!("failed to get user info for {id}"), e))?;
            vec![user]
        }
        Selector::Pattern(pattern) => api
            .get_all_users()
            .map_err(|e| CliError::api("failed to get users", e))?
            .into_iter()
            .filter(|user| pattern.is_match(&user.name))
            .collect(),
    };

    if matched.is_empty() {
        return Err(CliError::NoMatch {
            kind: EntityKind::User,
            token: token.to_owned(),
        });
    }
    Ok(matched)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::immich::{ApiError, Role};
    use crate::share::fixtures;

    /// In-memory API serving fixed listings and counting every fetch.
    struct StubApi {
        albums: Vec<Album>,
        users: Vec<User>,
        album_info_fetches: Cell<u32>,
        album_list_fetches: Cell<u32>,
        user_info_fetches: Cell<u32>,
        user_list_fetches: Cell<u32>,
    }

    impl StubApi {
        fn new(albums: Vec<Album>, users: Vec<User>) -> Self {
            Self {
                albums,
                users,
                album_info_fetches: Cell::new(0),
                album_list_fetches: Cell::new(0),
                user_info_fetches: Cell::new(0),
                user_list_fetches: Cell::new(0),
            }
        }
    }

    impl ImmichApi for StubApi {
        fn get_all_albums(&self) -> Result<Vec<Album>, ApiError> {
            self.album_list_fetches.set(self.album_list_fetches.get() + 1);
            Ok(self.albums.clone())
        }

        fn get_album_info(&self, id: Uuid, _without_assets: bool) -> Result<Album, ApiError> {
            self.album_info_fetches.set(self.album_info_fetches.get() + 1);
            self.albums
                .iter()
                .find(|album| album.id == id)
                .cloned()
                .ok_or_else(|| ApiError::NotFound {
                    kind: EntityKind::Album,
                    id: id.to_string(),
                })
        }

        fn get_all_users(&self) -> Result<Vec<User>, ApiError> {
            self.user_list_fetches.set(self.user_list_fetches.get() + 1);
            Ok(self.users.clone())
        }

        fn get_user_info(&self, id: Uuid) -> Result<User, ApiError> {
            self.user_info_fetches.set(self.user_info_fetches.get() + 1);
            self.users
                .iter()
                .find(|user| user.id == id)
                .cloned()
                .ok_or_else(|| ApiError::NotFound {
                    kind: EntityKind::User,
                    id: id.to_string(),
                })
        }

        fn add_user_to_album(&self, _: Uuid, _: Uuid, _: Role) -> Result<(), ApiError> {
            unimplemented!("resolution never mutates")
        }

        fn remove_user_from_album(&self, _: Uuid, _: Uuid) -> Result<(), ApiError> {
            unimplemented!("resolution never mutates")
        }
    }

    fn stub() -> StubApi {
        let alice = fixtures::user(1, "Alice");
        let bob = fixtures::user(2, "Bob");
        StubApi::new(
            vec![
                fixtures::album(10, "Vacation 2024", &alice),
                fixtures::album(12, "Birthday", &bob),
                fixtures::album(11, "Vacation 2025", &alice),
            ],
            vec![alice, bob, fixtures::user(3, "Carol")],
        )
    }

    #[test]
    fn test_uuid_token_classifies_as_id() {
        let selector = Selector::parse("6c23bdbb-95ed-4603-89b1-a3e16fb4f5a9").unwrap();
        assert!(matches!(selector, Selector::Id(_)));
    }

    #[test]
    fn test_name_token_classifies_as_pattern() {
        let selector = Selector::parse("^Vac").unwrap();
        assert!(matches!(selector, Selector::Pattern(_)));
    }

    #[test]
    fn test_bad_pattern() {
        let result = Selector::parse("[unclosed");
        assert!(matches!(result, Err(CliError::BadPattern { .. })));
    }

    #[test]
    fn test_id_resolves_without_listing() {
        let api = stub();
        let albums = resolve_albums(&api, &Uuid::from_u128(12).to_string()).unwrap();
        assert_eq!(albums.len(), 1);
        assert_eq!(albums[0].album_name, "Birthday");
        assert_eq!(api.album_info_fetches.get(), 1);
        assert_eq!(api.album_list_fetches.get(), 0);
    }

    #[test]
    fn test_unknown_id_is_reported() {
        let api = stub();
        let result = resolve_albums(&api, &Uuid::from_u128(999).to_string());
        assert!(matches!(
            result,
            Err(CliError::Api {
                source: ApiError::NotFound { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_pattern_filters_the_listing_in_order() {
        let api = stub();
        let albums = resolve_albums(&api, "^Vac").unwrap();
        let names: Vec<&str> = albums.iter().map(|a| a.album_name.as_str()).collect();
        assert_eq!(names, ["Vacation 2024", "Vacation 2025"]);
        assert_eq!(api.album_list_fetches.get(), 1);
        assert_eq!(api.album_info_fetches.get(), 0);
    }

    #[test]
    fn test_pattern_search_is_unanchored() {
        let api = stub();
        let albums = resolve_albums(&api, "2024").unwrap();
        assert_eq!(albums.len(), 1);
        assert_eq!(albums[0].album_name, "Vacation 2024");
    }

    #[test]
    fn test_no_match() {
        let api = stub();
        let result = resolve_albums(&api, "^Wedding");
        assert!(matches!(
            result,
            Err(CliError::NoMatch {
                kind: EntityKind::Album,
                ..
            })
        ));
    }

    #[test]
    fn test_users_resolve_by_display_name() {
        let api = stub();
        let users = resolve_users(&api, "^(Alice|Carol)$").unwrap();
        let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Alice", "Carol"]);
        assert_eq!(api.user_list_fetches.get(), 1);
        assert_eq!(api.user_info_fetches.get(), 0);
    }

    #[test]
    fn test_match_all_pattern_reaches_every_user() {
        let api = stub();
        let users = resolve_users(&api, ".*").unwrap();
        assert_eq!(users.len(), 3);
    }
}
