//! Serializable model and tensor files

use ndarray::{Array1, Array2, ArrayD, IxDyn};
use serde::{Deserialize, Serialize};

use crate::classifier::{Classifier, SoftmaxRegression};
use crate::error::{AttackError, ClassifierError, Result};

/// Softmax regression parameters as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelFile {
    /// Row per input feature, column per class
    pub weights: Vec<Vec<f32>>,
    /// One bias per class
    pub bias: Vec<f32>,
    /// Valid feature range
    #[serde(default = "default_clip_values")]
    pub clip_values: (f32, f32),
}

fn default_clip_values() -> (f32, f32) {
    (0.0, 1.0)
}

impl ModelFile {
    /// Build the classifier described by this file.
    pub fn into_classifier(self) -> Result<SoftmaxRegression> {
        let rows = self.weights.len();
        let cols = self.weights.first().map_or(0, Vec::len);
        if let Some(row) = self.weights.iter().position(|r| r.len() != cols) {
            return Err(ClassifierError::InvalidModel(format!(
                "weight row {row} has {} entries, expected {cols}",
                self.weights[row].len()
            ))
            .into());
        }
        let flat: Vec<f32> = self.weights.into_iter().flatten().collect();
        let weights = Array2::from_shape_vec((rows, cols), flat)
            .map_err(|e| ClassifierError::InvalidModel(e.to_string()))?;
        let (min, max) = self.clip_values;
        Ok(SoftmaxRegression::new(weights, Array1::from(self.bias))?.with_clip_values(min, max))
    }

    /// Describe an existing classifier.
    pub fn from_classifier(model: &SoftmaxRegression) -> Self {
        Self {
            weights: model.weights().rows().into_iter().map(|r| r.to_vec()).collect(),
            bias: model.bias().to_vec(),
            clip_values: model.clip_values(),
        }
    }
}

/// Dense row-major tensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TensorFile {
    pub shape: Vec<usize>,
    pub data: Vec<f32>,
}

impl TensorFile {
    pub fn from_array(array: &ArrayD<f32>) -> Self {
        Self {
            shape: array.shape().to_vec(),
            data: array.iter().copied().collect(),
        }
    }

    pub fn into_array(self) -> Result<ArrayD<f32>> {
        let expected: usize = self.shape.iter().product();
        if expected != self.data.len() {
            return Err(AttackError::ShapeMismatch {
                what: "tensor file",
                expected: self.shape,
                actual: vec![self.data.len()],
            });
        }
        ArrayD::from_shape_vec(IxDyn(&self.shape), self.data).map_err(|e| AttackError::Parse {
            what: "tensor file".to_string(),
            message: e.to_string(),
        })
    }

    /// Interpret as a `[rows, cols]` matrix.
    pub fn into_matrix(self) -> Result<Array2<f32>> {
        if self.shape.len() != 2 {
            return Err(AttackError::ShapeMismatch {
                what: "target matrix",
                expected: vec![0, 0],
                actual: self.shape,
            });
        }
        let (rows, cols) = (self.shape[0], self.shape[1]);
        let array = self.into_array()?;
        array
            .into_shape_with_order((rows, cols))
            .map_err(|e| AttackError::Parse {
                what: "target matrix".to_string(),
                message: e.to_string(),
            })
    }
}
