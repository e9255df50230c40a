//! Saliency map masking and pairwise feature selection.

use ndarray::{Array1, ArrayView1};

/// Direction in which the attack pushes features, fixed by the sign of theta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Positive theta: features move toward the upper clip bound.
    Increase,
    /// Negative theta: features move toward the lower clip bound.
    Decrease,
}

impl Direction {
    /// Direction for a perturbation step.
    pub fn from_theta(theta: f32) -> Self {
        if theta > 0.0 {
            Direction::Increase
        } else {
            Direction::Decrease
        }
    }

    /// Clip bound a feature saturates at.
    pub fn bound(self, clip_min: f32, clip_max: f32) -> f32 {
        match self {
            Direction::Increase => clip_max,
            Direction::Decrease => clip_min,
        }
    }

    /// Whether a feature with this value can still move.
    pub fn is_eligible(self, value: f32, clip_min: f32, clip_max: f32) -> bool {
        match self {
            Direction::Increase => value < clip_max,
            Direction::Decrease => value > clip_min,
        }
    }

    /// Apply one step of `theta` and clamp at the saturation bound.
    pub fn step(self, value: f32, theta: f32, clip_min: f32, clip_max: f32) -> f32 {
        match self {
            Direction::Increase => (value + theta).min(clip_max),
            Direction::Decrease => (value + theta).max(clip_min),
        }
    }

    /// Saliency value given to features that must never be selected.
    fn masked(self) -> f32 {
        match self {
            Direction::Increase => f32::NEG_INFINITY,
            Direction::Decrease => f32::INFINITY,
        }
    }

    /// Whether saliency `a` ranks strictly before `b`.
    fn ranks_before(self, a: f32, b: f32) -> bool {
        match self {
            Direction::Increase => a > b,
            Direction::Decrease => a < b,
        }
    }
}

/// Mask a per-feature gradient with the search space.
///
/// Ineligible features, and NaN gradients, get the value that ranks last for
/// `direction`.
pub fn saliency_map(
    gradient: ArrayView1<'_, f32>,
    search_space: &[bool],
    direction: Direction,
) -> Array1<f32> {
    gradient
        .iter()
        .zip(search_space)
        .map(|(&g, &eligible)| {
            if eligible && !g.is_nan() {
                g
            } else {
                direction.masked()
            }
        })
        .collect()
}

/// Pick the two best-ranked eligible features.
///
/// Ties go to the lower index. Returns fewer than two indices when fewer
/// features are eligible.
pub fn select_features(
    saliency: ArrayView1<'_, f32>,
    search_space: &[bool],
    direction: Direction,
) -> Vec<usize> {
    let mut best: Option<(usize, f32)> = None;
    let mut second: Option<(usize, f32)> = None;

    for (i, (&s, &eligible)) in saliency.iter().zip(search_space).enumerate() {
        if !eligible {
            continue;
        }
        match best {
            Some((_, b)) if !direction.ranks_before(s, b) => match second {
                Some((_, c)) if !direction.ranks_before(s, c) => {}
                _ => second = Some((i, s)),
            },
            _ => {
                second = best;
                best = Some((i, s));
            }
        }
    }

    best.into_iter().chain(second).map(|(i, _)| i).collect()
}
