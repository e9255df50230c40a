//! Saliency attack parameters.

use serde::{Deserialize, Serialize};

use crate::attack::Direction;
use crate::error::{AttackError, Result};

/// Parameters of the Jacobian-based Saliency Map Attack.
///
/// # Example
///
/// ```
/// use entrenar_jsma::SaliencyMapConfig;
///
/// let config = SaliencyMapConfig::new()
///     .with_theta(-0.2)
///     .with_gamma(0.1)
///     .with_batch_size(32);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaliencyMapConfig {
    /// Perturbation added to each selected feature per step. The sign picks
    /// the direction: positive pushes toward the upper clip bound.
    pub theta: f32,
    /// Maximum fraction of features a sample may have perturbed, in (0, 1].
    pub gamma: f32,
    /// Number of samples processed together.
    pub batch_size: usize,
}

impl Default for SaliencyMapConfig {
    fn default() -> Self {
        Self {
            theta: 0.1,
            gamma: 1.0,
            batch_size: 128,
        }
    }
}

impl SaliencyMapConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-step perturbation.
    pub fn with_theta(mut self, theta: f32) -> Self {
        self.theta = theta;
        self
    }

    /// Set the perturbation budget. Not clamped; see [`Self::validate`].
    pub fn with_gamma(mut self, gamma: f32) -> Self {
        self.gamma = gamma;
        self
    }

    /// Set the internal batch size.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Direction in which features are pushed.
    pub fn direction(&self) -> Direction {
        Direction::from_theta(self.theta)
    }

    /// Check the parameters without running anything.
    pub fn validate(&self) -> Result<()> {
        if !self.gamma.is_finite() || self.gamma <= 0.0 || self.gamma > 1.0 {
            return Err(AttackError::config(
                "gamma",
                format!(
                    "{} is not a valid perturbation fraction (must be in (0, 1])",
                    self.gamma
                ),
            ));
        }
        if self.batch_size == 0 {
            return Err(AttackError::config("batch_size", "must be positive"));
        }
        if !self.theta.is_finite() || self.theta == 0.0 {
            return Err(AttackError::config(
                "theta",
                format!("{} is not a valid step (must be finite and non-zero)", self.theta),
            ));
        }
        Ok(())
    }
}
