//! Multinomial logistic regression with analytic input gradients.

use super::Classifier;
use crate::error::ClassifierError;
use ndarray::{Array1, Array2, ArrayD, Axis};

/// Linear softmax classifier: `p = softmax(x W + b)`.
///
/// `weights` is `[nb_features, nb_classes]`. Inputs of any trailing shape are
/// accepted as long as they flatten to `nb_features` values per sample.
#[derive(Debug, Clone, PartialEq)]
pub struct SoftmaxRegression {
    weights: Array2<f32>,
    bias: Array1<f32>,
    clip_values: (f32, f32),
}

impl SoftmaxRegression {
    /// Create a classifier from weights and bias, clipped to `[0, 1]`.
    pub fn new(weights: Array2<f32>, bias: Array1<f32>) -> Result<Self, ClassifierError> {
        if weights.ncols() == 0 {
            return Err(ClassifierError::InvalidModel(
                "weights must have at least one class column".to_string(),
            ));
        }
        if bias.len() != weights.ncols() {
            return Err(ClassifierError::InvalidModel(format!(
                "bias has {} entries but weights have {} classes",
                bias.len(),
                weights.ncols()
            )));
        }
        Ok(Self {
            weights,
            bias,
            clip_values: (0.0, 1.0),
        })
    }

    /// Set the valid feature range.
    pub fn with_clip_values(mut self, min: f32, max: f32) -> Self {
        self.clip_values = (min, max);
        self
    }

    /// Number of input features per sample.
    pub fn nb_features(&self) -> usize {
        self.weights.nrows()
    }

    /// Weight matrix `[nb_features, nb_classes]`.
    pub fn weights(&self) -> &Array2<f32> {
        &self.weights
    }

    /// Bias vector `[nb_classes]`.
    pub fn bias(&self) -> &Array1<f32> {
        &self.bias
    }

    /// Flatten a batch to `[N, nb_features]`.
    fn flatten(&self, x: &ArrayD<f32>) -> Result<Array2<f32>, ClassifierError> {
        let n = x.shape().first().copied().unwrap_or(0);
        let expected = self.nb_features();
        if n == 0 {
            return Ok(Array2::zeros((0, expected)));
        }
        let actual = x.len() / n;
        if actual != expected {
            return Err(ClassifierError::InputShape { expected, actual });
        }
        x.as_standard_layout()
            .into_owned()
            .into_shape_with_order((n, expected))
            .map_err(|e| ClassifierError::Backend(e.to_string()))
    }

    fn probabilities(&self, flat: &Array2<f32>) -> Array2<f32> {
        let mut logits = flat.dot(&self.weights) + &self.bias;
        for mut row in logits.axis_iter_mut(Axis(0)) {
            let max = row.iter().copied().fold(f32::NEG_INFINITY, f32::max);
            row.mapv_inplace(|v| (v - max).exp());
            let sum = row.sum();
            row.mapv_inplace(|v| v / sum);
        }
        logits
    }
}

impl Classifier for SoftmaxRegression {
    fn predict(&self, x: &ArrayD<f32>) -> Result<Array2<f32>, ClassifierError> {
        let flat = self.flatten(x)?;
        Ok(self.probabilities(&flat))
    }

    /// `d p_t / d x = p_t * (W[:, t] - W p)`
    fn class_gradient(
        &self,
        x: &ArrayD<f32>,
        labels: &[usize],
    ) -> Result<ArrayD<f32>, ClassifierError> {
        let flat = self.flatten(x)?;
        if labels.len() != flat.nrows() {
            return Err(ClassifierError::LabelCount {
                labels: labels.len(),
                batch: flat.nrows(),
            });
        }
        let nb_classes = self.nb_classes();
        if let Some(&label) = labels.iter().find(|&&l| l >= nb_classes) {
            return Err(ClassifierError::InvalidLabel { label, nb_classes });
        }

        let probs = self.probabilities(&flat);
        let mut grads = Array2::<f32>::zeros(flat.raw_dim());
        for (i, &label) in labels.iter().enumerate() {
            let p = probs.row(i);
            let expected_weight = self.weights.dot(&p);
            let target_weight = self.weights.column(label);
            let p_t = p[label];
            grads
                .row_mut(i)
                .assign(&((&target_weight - &expected_weight) * p_t));
        }

        grads
            .into_shape_with_order(x.raw_dim())
            .map_err(|e| ClassifierError::Backend(e.to_string()))
    }

    fn clip_values(&self) -> (f32, f32) {
        self.clip_values
    }

    fn nb_classes(&self) -> usize {
        self.weights.ncols()
    }
}
