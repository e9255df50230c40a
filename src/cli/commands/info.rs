//! Info command implementation

use crate::attack::Direction;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_spec, AttackSpec, InfoArgs, OutputFormat};

/// Format the attack parameters as text
pub fn format_spec_info(spec: &AttackSpec) -> String {
    let attack = &spec.attack;
    let direction = match attack.direction() {
        Direction::Increase => "increase toward clip max",
        Direction::Decrease => "decrease toward clip min",
    };
    let mut lines = vec![
        format!("  Theta: {} ({direction})", attack.theta),
        format!("  Gamma: {}", attack.gamma),
        format!("  Batch size: {}", attack.batch_size),
    ];
    match spec.seed {
        Some(seed) => lines.push(format!("  Seed: {seed}")),
        None => lines.push("  Seed: random".to_string()),
    }
    lines.join("\n")
}

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let spec = load_spec(&args.config).map_err(|e| format!("Config error: {e}"))?;

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Attack configuration:");
            println!("{}", format_spec_info(&spec));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&spec)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&spec)
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
    }

    Ok(())
}
