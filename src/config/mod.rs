//! Parameter files.
//!
//! A model config is a TOML document with two optional tables:
//!
//! ```toml
//! [parameters]
//! tau_close = 150.0
//! tau_open = 120.0
//! tau_out = 6.0
//! tau_in = 0.3
//! u_gate = 0.13
//!
//! [initial_state]
//! u = 0.0
//! h = 1.0
//! ```
//!
//! Missing tables and missing keys fall back to the model defaults, so a
//! file only needs to name what it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ModelError, Result};
use crate::model::{Parameters, Variables};

/// Parameters plus an initial state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model constants
    #[serde(default)]
    pub parameters: Parameters,
    /// Initial state handed to the integrator
    #[serde(default)]
    pub initial_state: Variables,
}

impl ModelConfig {
    /// Create a config holding the model defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ModelError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded model config from {}", path.display());
        debug!(?config, "parsed config");
        Ok(config)
    }

    /// Render the config as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(|e| ModelError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        })?;
        info!("Saved model config to {}", path.display());
        Ok(())
    }

    /// Apply a single `name=value` override.
    ///
    /// `name` may be a parameter (`tau_in`) or a state variable (`u`).
    pub fn apply_override(&mut self, input: &str) -> Result<()> {
        let (name, value) = parse_override(input)?;

        if Parameters::NAMES.contains(&name) {
            self.parameters.set(name, value)?;
        } else if Variables::NAMES.contains(&name) {
            self.initial_state.set(name, value)?;
        } else {
            return Err(ModelError::invalid_override(
                input,
                format!("'{name}' is neither a parameter nor a state variable"),
            ));
        }

        debug!(name, value, "applied override");
        Ok(())
    }

    /// Apply a list of `name=value` overrides in order.
    pub fn apply_overrides<S: AsRef<str>>(&mut self, overrides: &[S]) -> Result<()> {
        for input in overrides {
            self.apply_override(input.as_ref())?;
        }
        Ok(())
    }

    /// Validate both the parameters and the initial state.
    pub fn validate(&self) -> Result<()> {
        self.parameters.validate()?;
        self.initial_state.validate()?;
        Ok(())
    }
}

/// Split `name=value` into its parts.
fn parse_override(input: &str) -> Result<(&str, f64)> {
    let (name, value) = input
        .split_once('=')
        .ok_or_else(|| ModelError::invalid_override(input, "expected name=value"))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(ModelError::invalid_override(input, "missing name"));
    }

    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| ModelError::invalid_override(input, e.to_string()))?;

    Ok((name, value))
}
