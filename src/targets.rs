//! Target-label utilities: argmax decoding, one-hot encoding and random
//! selection of incorrect classes.

use crate::error::{AttackError, Result};
use ndarray::{Array2, ArrayView2, Axis};
use rand::Rng;

/// Index of the largest score in every row.
///
/// Ties resolve to the lowest index; NaN scores never win over a number.
pub fn argmax_rows(scores: ArrayView2<'_, f32>) -> Vec<usize> {
    scores
        .axis_iter(Axis(0))
        .map(|row| {
            let mut best = 0;
            let mut best_score = f32::NEG_INFINITY;
            for (j, &s) in row.iter().enumerate() {
                if s > best_score {
                    best = j;
                    best_score = s;
                }
            }
            best
        })
        .collect()
}

/// One-hot encode `labels` into `[labels.len(), nb_classes]`.
pub fn to_categorical(labels: &[usize], nb_classes: usize) -> Result<Array2<f32>> {
    let mut one_hot = Array2::zeros((labels.len(), nb_classes));
    for (index, &label) in labels.iter().enumerate() {
        if label >= nb_classes {
            return Err(AttackError::InvalidTarget {
                index,
                label,
                nb_classes,
            });
        }
        one_hot[[index, label]] = 1.0;
    }
    Ok(one_hot)
}

/// Draw one target per sample, uniformly among the classes other than the
/// sample's current prediction.
pub fn random_targets<R: Rng>(
    predictions: &[usize],
    nb_classes: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    if nb_classes < 2 {
        return Err(AttackError::config(
            "nb_classes",
            format!("random targets need at least 2 classes, classifier has {nb_classes}"),
        ));
    }
    predictions
        .iter()
        .enumerate()
        .map(|(index, &pred)| {
            if pred >= nb_classes {
                return Err(AttackError::InvalidTarget {
                    index,
                    label: pred,
                    nb_classes,
                });
            }
            // skip over the predicted class
            let draw = rng.random_range(0..nb_classes - 1);
            Ok(if draw >= pred { draw + 1 } else { draw })
        })
        .collect()
}
