/// Output formatting: JSON, table, id modes. TTY detection.
use std::io::{IsTerminal, Write};

use chrono::{DateTime, Local, Utc};
use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;
use uuid::Uuid;

use super::args::OutputFormat;
use crate::types::{AlbumListOutput, UserListOutput};

/// Resolve the effective output format, handling `--json` flag and TTY auto-detection.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag {
        return OutputFormat::Json;
    }
    if fmt == OutputFormat::Auto {
        if std::io::stdout().is_terminal() {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    } else {
        fmt
    }
}

/// Output context passed to all commands.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
    /// When true, print API timing spans to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, no_header: bool, debug: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            no_header,
            debug,
        }
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

// --- Album rows ---

/// Write `album list` rows to stdout.
pub fn write_albums(albums: &[AlbumListOutput], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(albums),
        OutputFormat::Id => {
            for album in albums {
                println!("{}", album.id);
            }
        }
        OutputFormat::Table | OutputFormat::Auto => write_albums_table(albums, ctx),
    }
}

fn write_albums_table(albums: &[AlbumListOutput], ctx: &OutputCtx) {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if !ctx.no_header {
        table.set_header(["ID", "NAME", "SHARED", "SHARE CNT", "ASSET CNT"]);
    }
    for album in albums {
        table.add_row([
            album.id.to_string(),
            album.name.clone(),
            (if album.shared { "yes" } else { "no" }).to_owned(),
            album.share_count.to_string(),
            album.asset_count.to_string(),
        ]);
    }
    println!("{table}");
}

// --- User rows ---

/// Write `user list` rows to stdout.
pub fn write_users(users: &[UserListOutput], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(users),
        OutputFormat::Id => {
            for user in users {
                println!("{}", user.id);
            }
        }
        OutputFormat::Table | OutputFormat::Auto => write_users_table(users, ctx),
    }
}

fn write_users_table(users: &[UserListOutput], ctx: &OutputCtx) {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if !ctx.no_header {
        table.set_header(["ID", "NAME", "EMAIL", "CREATED AT", "UPDATED AT"]);
    }
    for user in users {
        table.add_row([
            user.id.to_string(),
            user.name.clone(),
            user.email.clone(),
            local_timestamp(user.created_at),
            local_timestamp(user.updated_at),
        ]);
    }
    println!("{table}");
}

/// Render a server timestamp in local time, or empty when absent.
fn local_timestamp(value: Option<DateTime<Utc>>) -> String {
    value.map_or_else(String::new, |t| {
        t.with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S %:z")
            .to_string()
    })
}

// --- Detail output ---

/// Write one fetched entity to stdout. Detail views are pretty JSON in every
/// mode except `id`, which prints just the identifier.
pub fn write_detail<T: Serialize>(value: &T, id: Uuid, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Id => println!("{id}"),
        _ => print_json(value),
    }
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &crate::types::ErrorOutput, format: OutputFormat, json_flag: bool) {
    let fmt = resolve_format(format, json_flag);
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match fmt {
        OutputFormat::Json => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        _ => {
            let _ = writeln!(out, "Error: {}", err.error.message);
        }
    }
}

// --- Debug timer ---

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}

// --- Generic JSON helpers ---

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}
