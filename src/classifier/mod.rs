//! Classifier abstraction consumed by the attacks.
//!
//! An attack only needs forward inference, the gradient of one class score
//! per sample with respect to the input, the valid feature range and the
//! number of classes. Implementations must be free of side effects: the
//! attack calls them repeatedly on overlapping batches.

mod softmax;


pub use softmax::SoftmaxRegression;

use crate::error::ClassifierError;
use ndarray::{Array2, ArrayD};

/// A trained classifier over fixed-shape inputs.
///
/// Inputs are batches shaped `[N, *dims]`.
pub trait Classifier {
    /// Class scores for every sample, shaped `[N, nb_classes]`.
    fn predict(&self, x: &ArrayD<f32>) -> Result<Array2<f32>, ClassifierError>;

    /// Gradient of the score of `labels[i]` with respect to sample `i`.
    ///
    /// The result has the same shape as `x`.
    fn class_gradient(
        &self,
        x: &ArrayD<f32>,
        labels: &[usize],
    ) -> Result<ArrayD<f32>, ClassifierError>;

    /// Valid feature range `(min, max)`.
    fn clip_values(&self) -> (f32, f32);

    /// Number of output classes.
    fn nb_classes(&self) -> usize;
}

impl<C: Classifier + ?Sized> Classifier for &C {
    fn predict(&self, x: &ArrayD<f32>) -> Result<Array2<f32>, ClassifierError> {
        (**self).predict(x)
    }

    fn class_gradient(
        &self,
        x: &ArrayD<f32>,
        labels: &[usize],
    ) -> Result<ArrayD<f32>, ClassifierError> {
        (**self).class_gradient(x, labels)
    }

    fn clip_values(&self) -> (f32, f32) {
        (**self).clip_values()
    }

    fn nb_classes(&self) -> usize {
        (**self).nb_classes()
    }
}

impl<C: Classifier + ?Sized> Classifier for Box<C> {
    fn predict(&self, x: &ArrayD<f32>) -> Result<Array2<f32>, ClassifierError> {
        (**self).predict(x)
    }

    fn class_gradient(
        &self,
        x: &ArrayD<f32>,
        labels: &[usize],
    ) -> Result<ArrayD<f32>, ClassifierError> {
        (**self).class_gradient(x, labels)
    }

    fn clip_values(&self) -> (f32, f32) {
        (**self).clip_values()
    }

    fn nb_classes(&self) -> usize {
        (**self).nb_classes()
    }
}
