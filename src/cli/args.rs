/// CLI argument definitions via clap derive.
use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

use crate::immich::Role;

/// immichctl — manage Immich albums and users.
#[derive(Debug, Parser)]
#[command(
    name = "immichctl",
    about = "Manage Immich albums and users from the CLI",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output format. Auto-detects: table when TTY, json when piped.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "auto")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, global = true, conflicts_with = "output")]
    pub json: bool,

    /// Omit table headers (useful for awk/cut processing).
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Print API call timing to stderr for debugging.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(flatten)]
    pub connect: ConnectArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Connection settings, usually supplied through the environment.
#[derive(Debug, Parser)]
pub struct ConnectArgs {
    /// Immich server URL, with or without the /api suffix.
    #[arg(long, env = "IMMICH_SERVER", value_name = "URL")]
    pub server: String,

    /// API key authorized to read albums and users and to share albums.
    #[arg(long, env = "IMMICH_API_KEY", value_name = "KEY", hide_env_values = true)]
    pub api_key: String,

    /// Per-request timeout in seconds.
    #[arg(long, value_name = "SECONDS", default_value_t = 30)]
    pub timeout: u64,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Auto-detect: table when stdout is a TTY, json when piped.
    #[default]
    Auto,
    /// JSON array or object (pretty-printed).
    Json,
    /// Aligned table with headers (human-readable).
    Table,
    /// ID only, one per line (for piping to other commands).
    Id,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Album management commands.
    #[command(subcommand)]
    Album(AlbumCommand),
    /// User management commands.
    #[command(subcommand)]
    User(UserCommand),
}

/// Subcommands of `immichctl album`.
#[derive(Debug, Subcommand)]
pub enum AlbumCommand {
    /// List albums, optionally filtered by a name pattern.
    List(AlbumListArgs),
    /// Show one album as JSON.
    Get(AlbumGetArgs),
    /// Share albums with users.
    Share(ShareArgs),
    /// Remove users' access to albums.
    Unshare(UnshareArgs),
}

/// Subcommands of `immichctl user`.
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List all users on the server.
    List,
    /// Show one user as JSON.
    Get(UserGetArgs),
}

/// Arguments for `immichctl album list`.
#[derive(Debug, Parser)]
pub struct AlbumListArgs {
    /// Regex matched against album names.
    #[arg(long, short = 'p', value_name = "REGEX", default_value = ".*")]
    pub pattern: String,
}

/// Arguments for `immichctl album get`.
#[derive(Debug, Parser)]
pub struct AlbumGetArgs {
    /// Album ID.
    #[arg(value_name = "ALBUM_ID")]
    pub id: Uuid,
}

/// Arguments for `immichctl album share`.
#[derive(Debug, Parser)]
pub struct ShareArgs {
    /// Album ID, or regex matched against album names.
    #[arg(value_name = "ALBUM|PATTERN")]
    pub album: String,

    /// User ID, or regex matched against user display names.
    #[arg(value_name = "USER|PATTERN")]
    pub user: String,

    /// Role granted to each user on each album.
    #[arg(long, short = 'r', value_enum, default_value_t = Role::Viewer)]
    pub role: Role,

    /// Report the per-pair decisions without changing anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for `immichctl album unshare`.
#[derive(Debug, Parser)]
pub struct UnshareArgs {
    /// Album ID, or regex matched against album names.
    #[arg(value_name = "ALBUM|PATTERN")]
    pub album: String,

    /// User ID, or regex matched against user display names.
    #[arg(value_name = "USER|PATTERN")]
    pub user: String,

    /// Report the per-pair decisions without changing anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for `immichctl user get`.
#[derive(Debug, Parser)]
pub struct UserGetArgs {
    /// User ID.
    #[arg(value_name = "USER_ID")]
    pub id: Uuid,
}
