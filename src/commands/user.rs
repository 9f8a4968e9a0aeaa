/// `user` command group: list, get.
use crate::cli::OutputCtx;
use crate::cli::args::{UserCommand, UserGetArgs};
use crate::cli::output::{write_detail, write_users};
use crate::errors::CliError;
use crate::immich::{ImmichApi, ImmichClient, User};
use crate::types::UserListOutput;

/// Helper to convert a `User` to a list row.
fn user_to_row(user: &User) -> UserListOutput {
    UserListOutput {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        created_at: user.created_at,
        updated_at: user.updated_at,
    }
}

/// Run an `immichctl user` subcommand.
///
/// # Errors
///
/// Returns `CliError` on API failure.
pub fn run(cmd: &UserCommand, client: &ImmichClient, ctx: &OutputCtx) -> Result<(), CliError> {
    match cmd {
        UserCommand::List => list(client, ctx),
        UserCommand::Get(args) => get(args, client, ctx),
    }
}

fn list(client: &ImmichClient, ctx: &OutputCtx) -> Result<(), CliError> {
    let _t_list = ctx.timer("get_all_users");
    let users = client
        .get_all_users()
        .map_err(|e| CliError::api("can't get the user list from the server", e))?;
    drop(_t_list);

    let rows: Vec<UserListOutput> = users.iter().map(user_to_row).collect();

    write_users(&rows, ctx);
    Ok(())
}

fn get(args: &UserGetArgs, client: &ImmichClient, ctx: &OutputCtx) -> Result<(), CliError> {
    let _t_get = ctx.timer("get_user_info");
    let user = client
        .get_user_info(args.id)
        .map_err(|e| CliError::api(format!("can't get the user {}", args.id), e))?;
    drop(_t_get);

    write_detail(&user, user.id, ctx);
    Ok(())
}
