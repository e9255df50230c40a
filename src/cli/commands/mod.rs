//! CLI command implementations

mod attack;
mod info;
mod validate;


use crate::cli::LogLevel;
use crate::config::{Cli, Command};

/// Resolve the output level from the global flags.
pub(crate) fn log_level(cli: &Cli) -> LogLevel {
    LogLevel::from_flags(cli.quiet, cli.verbose)
}

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = log_level(&cli);

    match cli.command {
        Command::Validate(args) => validate::run_validate(args, log_level),
        Command::Info(args) => info::run_info(args, log_level),
        Command::Attack(args) => attack::run_attack(args, log_level),
    }
}
