/// Bulk share/unshare across the album x user cross product.
///
/// Albums drive the outer loop and users the inner one, both in resolver
/// order. Every pair's decision is printed before the corresponding remote
/// call is issued, so when a failure stops the run the output already names
/// the pair that failed. There is no rollback: changes applied before the
/// failure stay applied.
use std::fmt;

use crate::errors::CliError;
use crate::immich::{Album, ImmichApi, User};

use super::membership::{PairAction, ShareOp, decide};

/// One reported decision for an (album, user) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairOutcome {
    /// Album display name.
    pub album: String,
    /// User display name.
    pub user: String,
    /// What was decided for the pair.
    pub action: PairAction,
}

impl fmt::Display for PairOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action {
            PairAction::SkipOwner => write!(
                f,
                "Album {} is owned by user {}...skipping",
                self.album, self.user
            ),
            PairAction::SkipAlreadyShared => write!(
                f,
                "Album {} is already shared with user {}...skipping",
                self.album, self.user
            ),
            PairAction::SkipNotShared => write!(
                f,
                "Album {} is not shared with user {}...skipping",
                self.album, self.user
            ),
            PairAction::Add(role) => write!(
                f,
                "Adding user {} to album {} with role {}",
                self.user, self.album, role
            ),
            PairAction::Remove => write!(
                f,
                "Unsharing user {} from album {}",
                self.user, self.album
            ),
        }
    }
}

/// Apply `op` to every (album, user) pair, printing each decision as the
/// loop reaches it. With `dry_run` set, mutations are reported with a
/// trailing marker but never issued.
///
/// # Errors
///
/// The first failed remote call aborts the run with `CliError::Api`;
/// remaining pairs are not attempted.
pub fn apply(
    api: &impl ImmichApi,
    albums: &[Album],
    users: &[User],
    op: ShareOp,
    dry_run: bool,
) -> Result<Vec<PairOutcome>, CliError> {
    let mut outcomes = Vec::with_capacity(albums.len() * users.len());

    for album in albums {
        for user in users {
            let outcome = PairOutcome {
                album: album.album_name.clone(),
                user: user.name.clone(),
                action: decide(album, user, op),
            };

            let mutates = matches!(outcome.action, PairAction::Add(_) | PairAction::Remove);
            if dry_run && mutates {
                println!("{outcome} [dry-run]");
            } else {
                println!("{outcome}");
            }

            if !dry_run {
                match outcome.action {
                    PairAction::Add(role) => {
                        api.add_user_to_album(album.id, user.id, role)
                            .map_err(|e| CliError::api("can't add the user to the album", e))?;
                    }
                    PairAction::Remove => {
                        api.remove_user_from_album(album.id, user.id).map_err(|e| {
                            CliError::api("can't unshare the user from the album", e)
                        })?;
                    }
                    _ => {}
                }
            }

            outcomes.push(outcome);
        }
    }

    Ok(outcomes)
}
