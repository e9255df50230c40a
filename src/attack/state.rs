//! Per-sample search state.

use ndarray::{Array1, ArrayView1};

use super::saliency::Direction;

/// Clip range and perturbation settings shared by every sample of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepParams {
    pub theta: f32,
    pub gamma: f32,
    pub clip_min: f32,
    pub clip_max: f32,
    pub direction: Direction,
}

/// Working copy and bookkeeping for one sample of a batch.
///
/// The search space only ever loses features and the used mask only ever
/// gains them. Once `done`, a sample is never perturbed again.
#[derive(Debug, Clone)]
pub struct SampleState {
    features: Array1<f32>,
    search_space: Vec<bool>,
    used: Vec<bool>,
    target: usize,
    prediction: usize,
    iterations: usize,
    done: bool,
}

impl SampleState {
    /// Start a sample from its original features and current prediction.
    pub fn new(
        features: ArrayView1<'_, f32>,
        target: usize,
        prediction: usize,
        params: &StepParams,
    ) -> Self {
        let search_space: Vec<bool> = features
            .iter()
            .map(|&v| params.direction.is_eligible(v, params.clip_min, params.clip_max))
            .collect();
        let mut state = Self {
            used: vec![false; features.len()],
            features: features.to_owned(),
            search_space,
            target,
            prediction,
            iterations: 0,
            done: false,
        };
        state.done = state.should_stop(params.gamma);
        state
    }

    /// Current working features.
    pub fn features(&self) -> ArrayView1<'_, f32> {
        self.features.view()
    }

    /// Eligibility mask.
    pub fn search_space(&self) -> &[bool] {
        &self.search_space
    }

    /// Mask of features selected at least once.
    pub fn used(&self) -> &[bool] {
        &self.used
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn prediction(&self) -> usize {
        self.prediction
    }

    /// Number of perturbation steps applied.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn eligible_count(&self) -> usize {
        self.search_space.iter().filter(|&&e| e).count()
    }

    pub fn used_count(&self) -> usize {
        self.used.iter().filter(|&&u| u).count()
    }

    /// Fraction of features selected at least once; zero for empty samples.
    pub fn used_fraction(&self) -> f32 {
        if self.used.is_empty() {
            0.0
        } else {
            self.used_count() as f32 / self.used.len() as f32
        }
    }

    /// Mark `selected` as used, step them by theta and drop saturated ones
    /// from the search space.
    ///
    /// A feature whose value does not move (theta below the float spacing)
    /// is dropped as well, so every step shrinks the search space or moves
    /// a feature towards its bound.
    pub fn perturb(&mut self, selected: &[usize], params: &StepParams) {
        let bound = params.direction.bound(params.clip_min, params.clip_max);
        for &i in selected {
            self.used[i] = true;
            let value = params
                .direction
                .step(self.features[i], params.theta, params.clip_min, params.clip_max);
            let stalled = value == self.features[i];
            self.features[i] = value;
            if value == bound || stalled {
                self.search_space[i] = false;
            }
        }
        self.iterations += 1;
    }

    /// Record a fresh prediction and decide whether the sample stays active.
    pub fn refresh(&mut self, prediction: usize, gamma: f32) {
        self.prediction = prediction;
        self.done = self.should_stop(gamma);
    }

    fn should_stop(&self, gamma: f32) -> bool {
        self.prediction == self.target
            || self.used_fraction() > gamma
            || self.eligible_count() == 0
    }
}
