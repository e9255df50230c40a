//! Attack command implementation

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::attack::{Attack, AttackReport, SaliencyMapMethod};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{read_spec, AttackArgs, AttackSpec};
use crate::io::{load_model, load_targets, load_tensor, save_tensor, tensor_to_json};

/// Apply command-line overrides on top of the spec file.
pub fn apply_overrides(spec: &mut AttackSpec, args: &AttackArgs) {
    if let Some(theta) = args.theta {
        spec.attack.theta = theta;
    }
    if let Some(gamma) = args.gamma {
        spec.attack.gamma = gamma;
    }
    if let Some(batch_size) = args.batch_size {
        spec.attack.batch_size = batch_size;
    }
    if args.seed.is_some() {
        spec.seed = args.seed;
    }
}

/// Summarize an attack report
pub fn format_report(report: &AttackReport) -> String {
    [
        format!("  Samples: {}", report.n_samples()),
        format!(
            "  Success rate: {:.2}% ({} changed)",
            report.success_rate() * 100.0,
            report.n_success()
        ),
        format!(
            "  Reached target: {} ({:.2}%)",
            report.n_on_target(),
            report.on_target_rate() * 100.0
        ),
        format!("  Changed to another class: {}", report.n_off_target()),
        format!(
            "  Mean perturbed fraction: {:.4}",
            report.mean_perturbed_fraction()
        ),
        format!("  Max iterations: {}", report.max_iterations()),
    ]
    .join("\n")
}

pub fn run_attack(args: AttackArgs, level: LogLevel) -> Result<(), String> {
    let mut spec = read_spec(&args.config).map_err(|e| format!("Config error: {e}"))?;
    apply_overrides(&mut spec, &args);

    let model = load_model(&args.model).map_err(|e| format!("Model error: {e}"))?;
    let x = load_tensor(&args.inputs).map_err(|e| format!("Input error: {e}"))?;
    let y = args
        .targets
        .as_ref()
        .map(load_targets)
        .transpose()
        .map_err(|e| format!("Target error: {e}"))?;

    let attack = SaliencyMapMethod::new(model, spec.attack).map_err(|e| format!("Config error: {e}"))?;
    let mut rng = match spec.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    log(
        level,
        LogLevel::Verbose,
        &format!("Attacking inputs of shape {:?}", x.shape()),
    );
    let (x_adv, report) = attack
        .generate_with_report(&x, y.as_ref(), &mut rng)
        .map_err(|e| format!("Attack failed: {e}"))?;

    match &args.output {
        Some(path) => {
            save_tensor(&x_adv, path).map_err(|e| format!("Output error: {e}"))?;
            log(
                level,
                LogLevel::Normal,
                &format!("Wrote adversarial inputs to {}", path.display()),
            );
        }
        None => {
            let json = tensor_to_json(&x_adv).map_err(|e| format!("Output error: {e}"))?;
            println!("{json}");
        }
    }

    log(level, LogLevel::Normal, "Attack report:");
    log(level, LogLevel::Normal, &format_report(&report));

    Ok(())
}
