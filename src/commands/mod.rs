/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod album;
pub mod user;

use crate::cli::OutputCtx;
use crate::cli::args::Command;
use crate::errors::CliError;
use crate::immich::ImmichClient;

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `CliError` on any command failure.
pub fn dispatch(command: &Command, client: &ImmichClient, ctx: &OutputCtx) -> Result<(), CliError> {
    match command {
        Command::Album(cmd) => album::run(cmd, client, ctx),
        Command::User(cmd) => user::run(cmd, client, ctx),
    }
}
