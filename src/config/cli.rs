//! Command-line arguments
//!
//! ```bash
//! entrenar-jsma validate attack.yaml
//! entrenar-jsma info attack.yaml
//! entrenar-jsma attack attack.yaml --model model.json --inputs x.json --output x_adv.json
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Jacobian-based Saliency Map Attack for entrenar classifiers
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "entrenar-jsma")]
#[command(author = "PAIML")]
#[command(version)]
#[command(about = "Craft adversarial examples with the Jacobian-based Saliency Map Attack")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Validate an attack specification without running it
    Validate(ValidateArgs),

    /// Display the parameters of an attack specification
    Info(InfoArgs),

    /// Run the attack against a softmax regression model
    Attack(AttackArgs),
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML specification
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Path to YAML specification
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Output format for info
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Arguments for the attack command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct AttackArgs {
    /// Path to YAML specification
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Model file (JSON: weights, bias, clip_values)
    #[arg(short, long)]
    pub model: PathBuf,

    /// Input tensor file (JSON: shape, data)
    #[arg(short, long)]
    pub inputs: PathBuf,

    /// One-hot target tensor file; random incorrect classes if omitted
    #[arg(short, long)]
    pub targets: Option<PathBuf>,

    /// Where to write the adversarial tensor; stdout if omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override theta
    #[arg(long, allow_negative_numbers = true)]
    pub theta: Option<f32>,

    /// Override gamma
    #[arg(long)]
    pub gamma: Option<f32>,

    /// Override batch size
    #[arg(short, long)]
    pub batch_size: Option<usize>,

    /// Random seed for target selection
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Parse arguments from an iterator (testable entry point)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
