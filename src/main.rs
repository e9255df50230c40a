//! Entrenar JSMA CLI
//!
//! # Usage
//!
//! ```bash
//! # Check an attack specification
//! entrenar-jsma validate attack.yaml
//!
//! # Show its parameters
//! entrenar-jsma info attack.yaml --format json
//!
//! # Attack a softmax regression model
//! entrenar-jsma attack attack.yaml --model model.json --inputs x.json --output x_adv.json
//! ```

use clap::Parser;
use entrenar_jsma::cli::{init_tracing, run_command, Cli, LogLevel};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(LogLevel::from_flags(cli.quiet, cli.verbose));

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
