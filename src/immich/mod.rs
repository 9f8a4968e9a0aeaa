/// Public API for the Immich HTTP layer.
pub mod client;
pub mod errors;
pub mod models;

pub use client::{ImmichApi, ImmichClient};
pub use errors::ApiError;
pub use models::{Album, EntityKind, Role, User};
