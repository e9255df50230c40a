//! Writing tensors

use std::fs;
use std::path::Path;

use ndarray::ArrayD;

use super::model::TensorFile;
use crate::error::{AttackError, Result};

/// Serialize a tensor as pretty JSON.
pub fn tensor_to_json(array: &ArrayD<f32>) -> Result<String> {
    serde_json::to_string_pretty(&TensorFile::from_array(array)).map_err(|e| AttackError::Parse {
        what: "tensor".to_string(),
        message: format!("JSON serialization failed: {e}"),
    })
}

/// Write a tensor to a JSON file.
pub fn save_tensor(array: &ArrayD<f32>, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = tensor_to_json(array)?;
    fs::write(path, json)
        .map_err(|e| AttackError::io(format!("Failed to write {}", path.display()), e))
}
