/// Membership evaluation and the per-pair share/unshare decision.
use uuid::Uuid;

use crate::immich::{Album, Role, User};

/// Direction of a bulk membership change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOp {
    /// Grant access with the given role.
    Share(Role),
    /// Revoke access.
    Unshare,
}

/// What the orchestrator does for one (album, user) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairAction {
    /// The user owns the album; owners are never share targets.
    SkipOwner,
    /// The album is already shared with the user.
    SkipAlreadyShared,
    /// The album is not shared with the user, nothing to revoke.
    SkipNotShared,
    /// Grant the user access with this role.
    Add(Role),
    /// Revoke the user's access.
    Remove,
}

/// Whether `album` is currently shared with the user identified by `user_id`.
///
/// True only when the album's shared flag is set AND the user appears among
/// its member associations. A listed member on an unshared album does not
/// count, and neither does a bare shared flag.
#[must_use]
pub fn is_album_shared_with(album: &Album, user_id: Uuid) -> bool {
    album.shared
        && album
            .album_users
            .iter()
            .any(|member| member.user.id == user_id)
}

/// Decide the action for one (album, user) pair. Pure and stateless; the
/// owner check always wins.
#[must_use]
pub fn decide(album: &Album, user: &User, op: ShareOp) -> PairAction {
    if user.id == album.owner.id {
        return PairAction::SkipOwner;
    }
    let shared = is_album_shared_with(album, user.id);
    match op {
        ShareOp::Share(role) if !shared => PairAction::Add(role),
        ShareOp::Share(_) => PairAction::SkipAlreadyShared,
        ShareOp::Unshare if shared => PairAction::Remove,
        ShareOp::Unshare => PairAction::SkipNotShared,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::share::fixtures;

    #[test]
    fn test_member_on_unshared_album_does_not_count() {
        let alice = fixtures::user(1, "Alice");
        let bob = fixtures::user(2, "Bob");
        let mut album =
            fixtures::with_member(fixtures::album(10, "Holidays", &alice), &bob, Role::Viewer);
        album.shared = false;
        assert!(!is_album_shared_with(&album, bob.id));
    }

    #[test]
    fn test_shared_flag_without_membership_does_not_count() {
        let alice = fixtures::user(1, "Alice");
        let bob = fixtures::user(2, "Bob");
        let mut album = fixtures::album(10, "Holidays", &alice);
        album.shared = true;
        assert!(!is_album_shared_with(&album, bob.id));
    }

    #[test]
    fn test_shared_with_member() {
        let alice = fixtures::user(1, "Alice");
        let bob = fixtures::user(2, "Bob");
        let album =
            fixtures::with_member(fixtures::album(10, "Holidays", &alice), &bob, Role::Viewer);
        assert!(is_album_shared_with(&album, bob.id));
        assert!(!is_album_shared_with(&album, fixtures::user(3, "Carol").id));
    }

    #[test]
    fn test_owner_always_skipped() {
        let alice = fixtures::user(1, "Alice");
        let album = fixtures::album(10, "Holidays", &alice);
        assert_eq!(
            decide(&album, &alice, ShareOp::Share(Role::Editor)),
            PairAction::SkipOwner
        );
        assert_eq!(decide(&album, &alice, ShareOp::Unshare), PairAction::SkipOwner);
    }

    #[test]
    fn test_share_decisions() {
        let alice = fixtures::user(1, "Alice");
        let bob = fixtures::user(2, "Bob");
        let carol = fixtures::user(3, "Carol");
        let album =
            fixtures::with_member(fixtures::album(10, "Holidays", &alice), &bob, Role::Viewer);

        assert_eq!(
            decide(&album, &carol, ShareOp::Share(Role::Viewer)),
            PairAction::Add(Role::Viewer)
        );
        assert_eq!(
            decide(&album, &bob, ShareOp::Share(Role::Editor)),
            PairAction::SkipAlreadyShared
        );
    }

    #[test]
    fn test_unshare_decisions() {
        let alice = fixtures::user(1, "Alice");
        let bob = fixtures::user(2, "Bob");
        let carol = fixtures::user(3, "Carol");
        let album =
            fixtures::with_member(fixtures::album(10, "Holidays", &alice), &bob, Role::Viewer);

        assert_eq!(decide(&album, &bob, ShareOp::Unshare), PairAction::Remove);
        assert_eq!(decide(&album, &carol, ShareOp::Unshare), PairAction::SkipNotShared);
    }
}
