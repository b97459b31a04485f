//! CLI tests: argument parsing, batch output and the interactive loop.

use super::{Cli, CliCommand};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

mod interactive;
