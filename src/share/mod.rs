/// Public API for the sharing domain layer.
pub mod bulk;
pub mod membership;
pub mod resolve;

#[cfg(test)]
pub(crate) mod fixtures;

pub use bulk::apply;
pub use membership::ShareOp;
pub use resolve::{resolve_albums, resolve_users};
