//! Reading model and tensor files

use std::fs;
use std::path::Path;

use ndarray::{Array2, ArrayD};
use serde::de::DeserializeOwned;

use super::model::{ModelFile, TensorFile};
use crate::classifier::SoftmaxRegression;
use crate::error::{AttackError, Result};

/// Read a JSON or YAML file, picking the format from the extension.
pub fn read_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| AttackError::io(format!("Failed to read {}", path.display()), e))?;
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("json");
    let parse_err = |message: String| AttackError::Parse {
        what: path.display().to_string(),
        message,
    };
    match ext {
        "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| parse_err(e.to_string())),
        _ => serde_json::from_str(&content).map_err(|e| parse_err(e.to_string())),
    }
}

/// Load a softmax regression model.
pub fn load_model(path: impl AsRef<Path>) -> Result<SoftmaxRegression> {
    read_file::<ModelFile>(path)?.into_classifier()
}

/// Load an input tensor.
pub fn load_tensor(path: impl AsRef<Path>) -> Result<ArrayD<f32>> {
    read_file::<TensorFile>(path)?.into_array()
}

/// Load a one-hot target matrix.
pub fn load_targets(path: impl AsRef<Path>) -> Result<Array2<f32>> {
    read_file::<TensorFile>(path)?.into_matrix()
}
