//! CLI parse and run tests (multi-file, one per subcommand plus command runs).

use super::{Cli, CliCommand};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

pub(super) fn parse_err(args: &[&str]) -> clap::error::ErrorKind {
    Cli::try_parse_from(args).unwrap_err().kind()
}

mod build_query;
mod build_url;
