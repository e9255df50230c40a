//! Evasion attacks over a [`Classifier`](crate::Classifier).

mod jsma;
mod report;
mod saliency;
mod state;

#[cfg(test)]
mod tests;

pub use jsma::SaliencyMapMethod;
pub use report::AttackReport;
pub use saliency::{saliency_map, select_features, Direction};
pub use state::{SampleState, StepParams};

use crate::error::Result;
use ndarray::{Array2, ArrayD};
use rand::Rng;

/// An attack that crafts adversarial versions of a batch of inputs.
pub trait Attack {
    /// Generate adversarial inputs together with a per-sample report.
    ///
    /// `y` holds one-hot target rows; when absent, targets are drawn from
    /// `rng` among the classes each sample is not currently predicted as.
    fn generate_with_report<R: Rng>(
        &self,
        x: &ArrayD<f32>,
        y: Option<&Array2<f32>>,
        rng: &mut R,
    ) -> Result<(ArrayD<f32>, AttackReport)>;

    /// Generate adversarial inputs with the same shape as `x`.
    fn generate<R: Rng>(
        &self,
        x: &ArrayD<f32>,
        y: Option<&Array2<f32>>,
        rng: &mut R,
    ) -> Result<ArrayD<f32>> {
        self.generate_with_report(x, y, rng).map(|(x_adv, _)| x_adv)
    }
}
