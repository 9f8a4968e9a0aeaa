/// Blocking HTTP client for the Immich REST API.
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::errors::ApiError;
use super::models::{Album, EntityKind, Role, User};

/// Time allowed for the TCP/TLS handshake, separate from the per-request
/// timeout the user controls.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// The remote operations the commands drive.
///
/// The resolver and the bulk orchestrator take this as a bound so tests can
/// run them against in-memory stubs.
pub trait ImmichApi {
    /// Fetch every album visible to the API key.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the request fails or the server rejects it.
    fn get_all_albums(&self) -> Result<Vec<Album>, ApiError>;

    /// Fetch one album by ID. With `without_assets` set the server omits the
    /// asset list, which this tool never needs.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for an unknown ID, other `ApiError`
    /// variants for transport failures.
    fn get_album_info(&self, id: Uuid, without_assets: bool) -> Result<Album, ApiError>;

    /// Fetch every user account on the server.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the request fails or the server rejects it.
    fn get_all_users(&self) -> Result<Vec<User>, ApiError>;

    /// Fetch one user by ID.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for an unknown ID, other `ApiError`
    /// variants for transport failures.
    fn get_user_info(&self, id: Uuid) -> Result<User, ApiError>;

    /// Grant `user_id` access to `album_id` with `role`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the request fails or the server rejects it.
    fn add_user_to_album(&self, album_id: Uuid, user_id: Uuid, role: Role) -> Result<(), ApiError>;

    /// Revoke `user_id`'s access to `album_id`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the request fails or the server rejects it.
    fn remove_user_from_album(&self, album_id: Uuid, user_id: Uuid) -> Result<(), ApiError>;
}

/// Authenticated client for one Immich server.
pub struct ImmichClient {
    http: Client,
    base_url: String,
}

impl ImmichClient {
    /// Build a client for `server`, authenticating every request with
    /// `api_key` and capping each request at `timeout`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidApiKey` if the key cannot be carried in a
    /// header, or `ApiError::Request` if the underlying client cannot be
    /// constructed.
    pub fn new(server: &str, api_key: &str, timeout: Duration) -> Result<Self, ApiError> {
        let mut key = HeaderValue::from_str(api_key)?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: api_base(server),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl ImmichApi for ImmichClient {
    fn get_all_albums(&self) -> Result<Vec<Album>, ApiError> {
        let response = self.http.get(self.url("/albums")).send()?;
        expect_json(response)
    }

    fn get_album_info(&self, id: Uuid, without_assets: bool) -> Result<Album, ApiError> {
        let response = self
            .http
            .get(self.url(&format!("/albums/{id}")))
            .query(&[("withoutAssets", without_assets)])
            .send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                kind: EntityKind::Album,
                id: id.to_string(),
            });
        }
        expect_json(response)
    }

    fn get_all_users(&self) -> Result<Vec<User>, ApiError> {
        let response = self.http.get(self.url("/users")).send()?;
        expect_json(response)
    }

    fn get_user_info(&self, id: Uuid) -> Result<User, ApiError> {
        let response = self.http.get(self.url(&format!("/users/{id}"))).send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                kind: EntityKind::User,
                id: id.to_string(),
            });
        }
        expect_json(response)
    }

    fn add_user_to_album(&self, album_id: Uuid, user_id: Uuid, role: Role) -> Result<(), ApiError> {
        let body = AddUsersRequest {
            album_users: vec![AddAlbumUser { user_id, role }],
        };
        let response = self
            .http
            .put(self.url(&format!("/albums/{album_id}/users")))
            .json(&body)
            .send()?;
        expect_success(response)
    }

    fn remove_user_from_album(&self, album_id: Uuid, user_id: Uuid) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("/albums/{album_id}/user/{user_id}")))
            .send()?;
        expect_success(response)
    }
}

/// Body of `PUT /albums/{id}/users`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddUsersRequest {
    album_users: Vec<AddAlbumUser>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddAlbumUser {
    user_id: Uuid,
    role: Role,
}

/// Decode a JSON body on success, map everything else to a typed error.
fn expect_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    match response.status() {
        status if status.is_success() => Ok(response.json::<T>()?),
        status @ (StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) => {
            Err(ApiError::Unauthorized { status })
        }
        status => Err(ApiError::UnexpectedStatus {
            status,
            body: response.text().unwrap_or_default(),
        }),
    }
}

/// Like `expect_json` for endpoints whose body we discard.
fn expect_success(response: Response) -> Result<(), ApiError> {
    match response.status() {
        status if status.is_success() => Ok(()),
        status @ (StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) => {
            Err(ApiError::Unauthorized { status })
        }
        status => Err(ApiError::UnexpectedStatus {
            status,
            body: response.text().unwrap_or_default(),
        }),
    }
}

/// Normalize a server URL to its API root. Trailing slashes and an already
/// present `/api` suffix are both accepted.
fn api_base(server: &str) -> String {
    let trimmed = server.trim_end_matches('/');
    let trimmed = trimmed.strip_suffix("/api").unwrap_or(trimmed);
    format!("{trimmed}/api")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_appends_the_api_suffix() {
        assert_eq!(
            api_base("https://photos.example.com"),
            "https://photos.example.com/api"
        );
    }

    #[test]
    fn test_api_base_tolerates_trailing_slashes_and_api() {
        assert_eq!(
            api_base("https://photos.example.com/"),
            "https://photos.example.com/api"
        );
        assert_eq!(
            api_base("https://photos.example.com/api"),
            "https://photos.example.com/api"
        );
        assert_eq!(
            api_base("https://photos.example.com/api/"),
            "https://photos.example.com/api"
        );
    }
}
