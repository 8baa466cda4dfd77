//! Error types for the Mitchell-Schaeffer model crate.
//!
//! The equation functions themselves are total over `f64` and never fail.
//! [`ModelError`] covers the surfaces around them: named-field access,
//! opt-in validation, parameter files and CLI overrides.

use thiserror::Error;

/// Result type alias using [`ModelError`].
pub type Result<T> = std::result::Result<T, ModelError>;

/// Unified error type for all model operations.
#[derive(Error, Debug)]
pub enum ModelError {
    // ============ Named Field Errors ============
    /// Parameter name is not one of the five model constants
    #[error("Unknown parameter '{name}' (expected one of: tau_close, tau_open, tau_out, tau_in, u_gate)")]
    UnknownParameter { name: String },

    /// State variable name is not `u` or `h`
    #[error("Unknown state variable '{name}' (expected 'u' or 'h')")]
    UnknownVariable { name: String },

    // ============ Validation Errors ============
    /// Parameter value rejected by validation
    #[error("Invalid parameter '{name}' = {value}: {message}")]
    InvalidParameter {
        name: String,
        value: f64,
        message: String,
    },

    /// State variable value rejected by validation
    #[error("Invalid state variable '{name}' = {value}: {message}")]
    InvalidVariable {
        name: String,
        value: f64,
        message: String,
    },

    /// Malformed `name=value` override
    #[error("Invalid override '{input}': {message}")]
    InvalidOverride { input: String, message: String },

    // ============ I/O Errors ============
    /// Error reading a parameter file
    #[error("Failed to read config file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing a parameter file
    #[error("Failed to write config file '{path}': {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Parameter file is not valid TOML for a model config
    #[error("Failed to parse config: {source}")]
    ConfigParseError {
        #[from]
        source: toml::de::Error,
    },

    /// Config could not be rendered as TOML
    #[error("Failed to serialize config: {source}")]
    ConfigSerializeError {
        #[from]
        source: toml::ser::Error,
    },
}

impl ModelError {
    /// Create an unknown parameter error
    pub fn unknown_parameter(name: impl Into<String>) -> Self {
        Self::UnknownParameter { name: name.into() }
    }

    /// Create an unknown state variable error
    pub fn unknown_variable(name: impl Into<String>) -> Self {
        Self::UnknownVariable { name: name.into() }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(name: impl Into<String>, value: f64, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            value,
            message: message.into(),
        }
    }

    /// Create an invalid state variable error
    pub fn invalid_variable(name: impl Into<String>, value: f64, message: impl Into<String>) -> Self {
        Self::InvalidVariable {
            name: name.into(),
            value,
            message: message.into(),
        }
    }

    /// Create an invalid override error
    pub fn invalid_override(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOverride {
            input: input.into(),
            message: message.into(),
        }
    }
}
