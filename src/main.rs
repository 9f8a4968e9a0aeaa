#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! immichctl — manage Immich albums and users from the CLI.

mod cli;
mod commands;
mod errors;
mod immich;
mod share;
mod types;

use std::time::Duration;

use clap::Parser;

use cli::{Cli, OutputCtx, write_error};
use errors::CliError;
use immich::ImmichClient;
use types::ErrorOutput;

fn main() {
    let cli = Cli::parse();

    let ctx = OutputCtx::new(cli.output, cli.json, cli.no_header, cli.debug);

    match run(&cli, &ctx) {
        Ok(()) => {}
        Err(err) => {
            let error_output = ErrorOutput::from_cli_error(&err);
            write_error(&error_output, cli.output, cli.json);
            std::process::exit(err.exit_code());
        }
    }
}

fn run(cli: &Cli, ctx: &OutputCtx) -> Result<(), CliError> {
    let client = ImmichClient::new(
        &cli.connect.server,
        &cli.connect.api_key,
        Duration::from_secs(cli.connect.timeout),
    )
    .map_err(|e| CliError::api("can't create the API client", e))?;

    commands::dispatch(&cli.command, &client, ctx)
}
