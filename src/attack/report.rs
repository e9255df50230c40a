//! Outcome summary of an attack run.

use serde::Serialize;

/// Per-sample outcome of [`generate_with_report`](super::Attack::generate_with_report).
///
/// A sample counts as a success when its final prediction differs from its
/// original one, whether or not it landed on the requested target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttackReport {
    /// Top-1 prediction before the attack
    pub original_predictions: Vec<usize>,
    /// Top-1 prediction after the attack
    pub adversarial_predictions: Vec<usize>,
    /// Target class of every sample
    pub targets: Vec<usize>,
    /// Perturbation steps applied to every sample
    pub iterations: Vec<usize>,
    /// Fraction of features each sample had perturbed
    pub perturbed_fraction: Vec<f32>,
}

impl AttackReport {
    pub fn n_samples(&self) -> usize {
        self.original_predictions.len()
    }

    /// Samples whose prediction changed.
    pub fn n_success(&self) -> usize {
        self.original_predictions
            .iter()
            .zip(&self.adversarial_predictions)
            .filter(|(o, a)| o != a)
            .count()
    }

    /// Samples predicted as their target after the attack.
    pub fn n_on_target(&self) -> usize {
        self.adversarial_predictions
            .iter()
            .zip(&self.targets)
            .filter(|(a, t)| a == t)
            .count()
    }

    /// Samples whose prediction changed to a class other than the target.
    pub fn n_off_target(&self) -> usize {
        self.original_predictions
            .iter()
            .zip(&self.adversarial_predictions)
            .zip(&self.targets)
            .filter(|((o, a), t)| o != a && a != t)
            .count()
    }

    /// Fraction of samples whose prediction changed; zero for an empty run.
    pub fn success_rate(&self) -> f64 {
        match self.n_samples() {
            0 => 0.0,
            n => self.n_success() as f64 / n as f64,
        }
    }

    /// Fraction of samples that reached their target.
    pub fn on_target_rate(&self) -> f64 {
        match self.n_samples() {
            0 => 0.0,
            n => self.n_on_target() as f64 / n as f64,
        }
    }

    /// Longest per-sample run.
    pub fn max_iterations(&self) -> usize {
        self.iterations.iter().copied().max().unwrap_or(0)
    }

    /// Mean perturbed-feature fraction.
    pub fn mean_perturbed_fraction(&self) -> f64 {
        if self.perturbed_fraction.is_empty() {
            return 0.0;
        }
        self.perturbed_fraction.iter().map(|&f| f64::from(f)).sum::<f64>()
            / self.perturbed_fraction.len() as f64
    }
}
