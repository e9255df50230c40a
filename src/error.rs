//! Error types for the saliency attack.
//!
//! Configuration problems are reported before any classifier call is made.
//! Classifier failures are never retried; they surface unchanged as
//! [`AttackError::Classifier`].

use thiserror::Error;

/// Errors raised by a [`Classifier`](crate::Classifier) implementation.
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Input has {actual} features per sample, classifier expects {expected}")]
    InputShape { expected: usize, actual: usize },

    #[error("Invalid class label {label} (classifier has {nb_classes} classes)")]
    InvalidLabel { label: usize, nb_classes: usize },

    #[error("Got {labels} labels for a batch of {batch} samples")]
    LabelCount { labels: usize, batch: usize },

    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Classifier backend error: {0}")]
    Backend(String),
}

/// Errors raised while configuring or running an attack.
#[derive(Debug, Error)]
pub enum AttackError {
    #[error("Invalid configuration value for '{field}': {message}")]
    InvalidConfig { field: &'static str, message: String },

    #[error("Classifier call failed: {0}")]
    Classifier(#[from] ClassifierError),

    #[error("Shape mismatch for {what}: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        what: &'static str,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("Invalid target label {label} for sample {index} (classifier has {nb_classes} classes)")]
    InvalidTarget {
        index: usize,
        label: usize,
        nb_classes: usize,
    },

    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {what}: {message}")]
    Parse { what: String, message: String },
}

impl AttackError {
    /// Create a configuration error for `field`.
    pub fn config(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            message: message.into(),
        }
    }

    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Check if this error was caused by the attack parameters.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. })
    }
}

/// Result type for attack operations
pub type Result<T> = std::result::Result<T, AttackError>;
