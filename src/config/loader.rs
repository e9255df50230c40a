//! YAML attack specification files.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::attack::SaliencyMapConfig;
use crate::error::{AttackError, Result};

/// Contents of an attack specification file.
///
/// ```yaml
/// attack:
///   theta: 0.1
///   gamma: 0.5
///   batch_size: 64
/// seed: 42
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AttackSpec {
    /// Attack parameters
    #[serde(default)]
    pub attack: SaliencyMapConfig,
    /// Seed for random target selection
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Parse a specification from YAML text and validate it.
pub fn parse_spec(yaml: &str) -> Result<AttackSpec> {
    let spec = from_yaml(yaml)?;
    spec.attack.validate()?;
    Ok(spec)
}

/// Load and validate a specification file.
pub fn load_spec<P: AsRef<Path>>(path: P) -> Result<AttackSpec> {
    let spec = read_spec(path)?;
    spec.attack.validate()?;
    Ok(spec)
}

/// Load a specification file without validating it, for callers that
/// apply overrides first.
pub fn read_spec<P: AsRef<Path>>(path: P) -> Result<AttackSpec> {
    let yaml = fs::read_to_string(path.as_ref()).map_err(|e| {
        AttackError::io(
            format!("Failed to read config file {}", path.as_ref().display()),
            e,
        )
    })?;
    from_yaml(&yaml)
}

fn from_yaml(yaml: &str) -> Result<AttackSpec> {
    serde_yaml::from_str(yaml).map_err(|e| AttackError::Parse {
        what: "attack spec".to_string(),
        message: e.to_string(),
    })
}
