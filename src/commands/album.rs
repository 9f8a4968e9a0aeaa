/// `album` command group: list, get, share, unshare.
use regex::Regex;

use crate::cli::OutputCtx;
use crate::cli::args::{AlbumCommand, AlbumGetArgs, AlbumListArgs, ShareArgs, UnshareArgs};
use crate::cli::output::{write_albums, write_detail};
use crate::errors::CliError;
use crate::immich::{Album, ImmichApi, ImmichClient};
use crate::share::{ShareOp, apply, resolve_albums, resolve_users};
use crate::types::AlbumListOutput;

/// Helper to convert an `Album` to a list row.
fn album_to_row(album: &Album) -> AlbumListOutput {
    AlbumListOutput {
        id: album.id,
        name: album.album_name.clone(),
        shared: album.shared,
        share_count: album.album_users.len(),
        asset_count: album.asset_count,
    }
}

/// Run an `immichctl album` subcommand.
///
/// # Errors
///
/// Returns `CliError` on bad tokens, empty matches, or API failure.
pub fn run(cmd: &AlbumCommand, client: &ImmichClient, ctx: &OutputCtx) -> Result<(), CliError> {
    match cmd {
        AlbumCommand::List(args) => list(args, client, ctx),
        AlbumCommand::Get(args) => get(args, client, ctx),
        AlbumCommand::Share(args) => share(args, client, ctx),
        AlbumCommand::Unshare(args) => unshare(args, client, ctx),
    }
}

fn list(args: &AlbumListArgs, client: &ImmichClient, ctx: &OutputCtx) -> Result<(), CliError> {
    let pattern = Regex::new(&args.pattern).map_err(|source| CliError::BadPattern {
        pattern: args.pattern.clone(),
        source,
    })?;

    let _t_list = ctx.timer("get_all_albums");
    let albums = client
        .get_all_albums()
        .map_err(|e| CliError::api("can't get the album list from the server", e))?;
    drop(_t_list);

    let rows: Vec<AlbumListOutput> = albums
        .iter()
        .filter(|album| pattern.is_match(&album.album_name))
        .map(album_to_row)
        .collect();

    write_albums(&rows, ctx);
    Ok(())
}

fn get(args: &AlbumGetArgs, client: &ImmichClient, ctx: &OutputCtx) -> Result<(), CliError> {
    let _t_get = ctx.timer("get_album_info");
    let album = client
        .get_album_info(args.id, true)
        .map_err(|e| CliError::api(format!("can't get the album {}", args.id), e))?;
    drop(_t_get);

    write_detail(&album, album.id, ctx);
    Ok(())
}

fn share(args: &ShareArgs, client: &ImmichClient, ctx: &OutputCtx) -> Result<(), CliError> {
    let _t_albums = ctx.timer("resolve_albums");
    let albums = resolve_albums(client, &args.album)?;
    drop(_t_albums);

    let _t_users = ctx.timer("resolve_users");
    let users = resolve_users(client, &args.user)?;
    drop(_t_users);

    let _t_apply = ctx.timer("apply_share");
    apply(client, &albums, &users, ShareOp::Share(args.role), args.dry_run)?;
    drop(_t_apply);

    Ok(())
}

fn unshare(args: &UnshareArgs, client: &ImmichClient, ctx: &OutputCtx) -> Result<(), CliError> {
    let _t_albums = ctx.timer("resolve_albums");
    let albums = resolve_albums(client, &args.album)?;
    drop(_t_albums);

    let _t_users = ctx.timer("resolve_users");
    let users = resolve_users(client, &args.user)?;
    drop(_t_users);

    let _t_apply = ctx.timer("apply_unshare");
    apply(client, &albums, &users, ShareOp::Unshare, args.dry_run)?;
    drop(_t_apply);

    Ok(())
}
