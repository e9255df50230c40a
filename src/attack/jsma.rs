//! Jacobian-based Saliency Map Attack (Papernot et al., 2016).
//!
//! Each iteration ranks the still-eligible features of every active sample
//! by the gradient of its target-class score, pushes the best two by
//! `theta`, and re-predicts. A sample stops when it reaches its target,
//! exhausts its `gamma` budget, or runs out of eligible features.
//!
//! Batch state is a vector of [`SampleState`] records. Only samples that
//! are still active are gathered into the classifier calls, and the results
//! are scattered back by index.
//!
//! Paper: <https://arxiv.org/abs/1511.07528>

use ndarray::{Array2, ArrayD, IxDyn};
use rand::Rng;
use tracing::{debug, info, trace};

use super::report::AttackReport;
use super::saliency::{saliency_map, select_features};
use super::state::{SampleState, StepParams};
use super::Attack;
use crate::classifier::Classifier;
use crate::config::SaliencyMapConfig;
use crate::error::{AttackError, Result};
use crate::targets::{argmax_rows, random_targets};

/// Saliency map attack bound to one classifier.
#[derive(Debug, Clone)]
pub struct SaliencyMapMethod<C> {
    classifier: C,
    config: SaliencyMapConfig,
}

impl<C: Classifier> SaliencyMapMethod<C> {
    /// Create an attack, validating `config` first.
    pub fn new(classifier: C, config: SaliencyMapConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { classifier, config })
    }

    /// Replace the parameters. The old ones are kept if `config` is invalid.
    pub fn set_params(&mut self, config: SaliencyMapConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &SaliencyMapConfig {
        &self.config
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    fn step_params(&self) -> Result<StepParams> {
        let (clip_min, clip_max) = self.classifier.clip_values();
        if !clip_min.is_finite() || !clip_max.is_finite() {
            return Err(AttackError::config(
                "clip_values",
                format!("bounds must be finite, got ({clip_min}, {clip_max})"),
            ));
        }
        if clip_min > clip_max {
            return Err(AttackError::config(
                "clip_values",
                format!("lower bound {clip_min} exceeds upper bound {clip_max}"),
            ));
        }
        Ok(StepParams {
            theta: self.config.theta,
            gamma: self.config.gamma,
            clip_min,
            clip_max,
            direction: self.config.direction(),
        })
    }

    /// Top-1 labels for a batch, checking the score matrix shape.
    fn predict_labels(&self, x: &ArrayD<f32>) -> Result<Vec<usize>> {
        let n = x.shape()[0];
        let scores = self.classifier.predict(x)?;
        let expected = [n, self.classifier.nb_classes()];
        if scores.shape() != expected {
            return Err(AttackError::ShapeMismatch {
                what: "class scores",
                expected: expected.to_vec(),
                actual: scores.shape().to_vec(),
            });
        }
        Ok(argmax_rows(scores.view()))
    }

    fn resolve_targets<R: Rng>(
        &self,
        predictions: &[usize],
        y: Option<&Array2<f32>>,
        rng: &mut R,
    ) -> Result<Vec<usize>> {
        let nb_classes = self.classifier.nb_classes();
        match y {
            None => random_targets(predictions, nb_classes, rng),
            Some(y) => {
                let expected = [predictions.len(), nb_classes];
                if y.shape() != expected {
                    return Err(AttackError::ShapeMismatch {
                        what: "targets",
                        expected: expected.to_vec(),
                        actual: y.shape().to_vec(),
                    });
                }
                Ok(argmax_rows(y.view()))
            }
        }
    }

    /// Iterate one batch until every sample is done.
    fn run_batch(
        &self,
        states: &mut [SampleState],
        dims: &[usize],
        params: &StepParams,
    ) -> Result<()> {
        let nb_features: usize = dims.iter().product();
        loop {
            let active: Vec<usize> = states
                .iter()
                .enumerate()
                .filter(|(_, s)| !s.is_done())
                .map(|(i, _)| i)
                .collect();
            if active.is_empty() {
                return Ok(());
            }

            let batch = gather(states, &active, dims)?;
            let labels: Vec<usize> = active.iter().map(|&i| states[i].target()).collect();
            let gradients = self.classifier.class_gradient(&batch, &labels)?;
            let gradients = flatten(&gradients, active.len(), nb_features, "gradients")?;

            for (row, &i) in active.iter().enumerate() {
                let state = &mut states[i];
                let saliency = saliency_map(gradients.row(row), state.search_space(), params.direction);
                let selected = select_features(saliency.view(), state.search_space(), params.direction);
                state.perturb(&selected, params);
            }

            let batch = gather(states, &active, dims)?;
            let predictions = self.predict_labels(&batch)?;
            for (&i, prediction) in active.iter().zip(predictions) {
                states[i].refresh(prediction, params.gamma);
            }

            trace!(
                active = active.len(),
                remaining = states.iter().filter(|s| !s.is_done()).count(),
                "JSMA iteration"
            );
        }
    }
}

impl<C: Classifier> Attack for SaliencyMapMethod<C> {
    fn generate_with_report<R: Rng>(
        &self,
        x: &ArrayD<f32>,
        y: Option<&Array2<f32>>,
        rng: &mut R,
    ) -> Result<(ArrayD<f32>, AttackReport)> {
        if x.ndim() == 0 {
            return Err(AttackError::ShapeMismatch {
                what: "inputs without a batch axis",
                expected: vec![0],
                actual: Vec::new(),
            });
        }
        let params = self.step_params()?;
        let n = x.shape()[0];
        let dims = x.shape()[1..].to_vec();
        let nb_features: usize = dims.iter().product();

        let flat = flatten(x, n, nb_features, "inputs")?;
        let original_predictions = if n == 0 {
            Vec::new()
        } else {
            self.predict_labels(x)?
        };
        let targets = self.resolve_targets(&original_predictions, y, rng)?;

        let mut x_adv = flat.clone();
        let mut adversarial_predictions = original_predictions.clone();
        let mut iterations = vec![0; n];
        let mut perturbed_fraction = vec![0.0; n];

        for start in (0..n).step_by(self.config.batch_size) {
            let end = (start + self.config.batch_size).min(n);
            let mut states: Vec<SampleState> = (start..end)
                .map(|i| {
                    SampleState::new(flat.row(i), targets[i], original_predictions[i], &params)
                })
                .collect();

            self.run_batch(&mut states, &dims, &params)?;

            for (offset, state) in states.iter().enumerate() {
                let i = start + offset;
                x_adv.row_mut(i).assign(&state.features());
                adversarial_predictions[i] = state.prediction();
                iterations[i] = state.iterations();
                perturbed_fraction[i] = state.used_fraction();
            }
            debug!(
                start,
                end,
                max_iterations = iterations[start..end].iter().max().copied().unwrap_or(0),
                "JSMA batch complete"
            );
        }

        let x_adv = x_adv
            .into_shape_with_order(x.raw_dim())
            .map_err(|_| AttackError::ShapeMismatch {
                what: "adversarial inputs",
                expected: x.shape().to_vec(),
                actual: vec![n, nb_features],
            })?;

        let report = AttackReport {
            original_predictions,
            adversarial_predictions,
            targets,
            iterations,
            perturbed_fraction,
        };
        info!(
            on_target = report.n_on_target(),
            off_target = report.n_off_target(),
            "Success rate of JSMA attack: {:.2}%",
            report.success_rate() * 100.0
        );

        Ok((x_adv, report))
    }
}

/// Copy the rows of `active` samples into a `[k, *dims]` batch.
fn gather(states: &[SampleState], active: &[usize], dims: &[usize]) -> Result<ArrayD<f32>> {
    let nb_features: usize = dims.iter().product();
    let mut batch = Array2::<f32>::zeros((active.len(), nb_features));
    for (row, &i) in active.iter().enumerate() {
        batch.row_mut(row).assign(&states[i].features());
    }
    let mut shape = Vec::with_capacity(dims.len() + 1);
    shape.push(active.len());
    shape.extend_from_slice(dims);
    batch
        .into_shape_with_order(IxDyn(&shape))
        .map_err(|_| AttackError::ShapeMismatch {
            what: "active batch",
            expected: shape,
            actual: vec![active.len(), nb_features],
        })
}

/// View an `[n, *dims]` tensor as `[n, nb_features]`.
fn flatten(
    x: &ArrayD<f32>,
    n: usize,
    nb_features: usize,
    what: &'static str,
) -> Result<Array2<f32>> {
    if x.shape().first() != Some(&n) || x.len() != n * nb_features {
        return Err(AttackError::ShapeMismatch {
            what,
            expected: vec![n, nb_features],
            actual: x.shape().to_vec(),
        });
    }
    x.as_standard_layout()
        .into_owned()
        .into_shape_with_order((n, nb_features))
        .map_err(|_| AttackError::ShapeMismatch {
            what,
            expected: vec![n, nb_features],
            actual: x.shape().to_vec(),
        })
}
