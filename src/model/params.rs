//! Parameter and state records.
//!
//! Both records are plain `Copy` values. Every accessor hands out a fresh
//! copy, so a caller mutating its record never affects anybody else's.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Default closing (inactivation) time constant.
pub const DEFAULT_TAU_CLOSE: f64 = 150.0;
/// Default opening (recovery) time constant.
pub const DEFAULT_TAU_OPEN: f64 = 120.0;
/// Default outward current time constant.
pub const DEFAULT_TAU_OUT: f64 = 6.0;
/// Default inward current time constant.
pub const DEFAULT_TAU_IN: f64 = 0.3;
/// Default gate threshold potential.
pub const DEFAULT_U_GATE: f64 = 0.13;

/// The five constants of the Mitchell-Schaeffer model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Inactivation time constant, rate of `h` decay while excited
    pub tau_close: f64,
    /// Recovery time constant, rate of `h` recovery while at rest
    pub tau_open: f64,
    /// Time constant of the repolarizing outward current
    pub tau_out: f64,
    /// Time constant of the depolarizing inward current
    pub tau_in: f64,
    /// Potential at which the gate switches between recovery and decay
    pub u_gate: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            tau_close: DEFAULT_TAU_CLOSE,
            tau_open: DEFAULT_TAU_OPEN,
            tau_out: DEFAULT_TAU_OUT,
            tau_in: DEFAULT_TAU_IN,
            u_gate: DEFAULT_U_GATE,
        }
    }
}

impl Parameters {
    /// Field names, in declaration order.
    pub const NAMES: [&'static str; 5] = ["tau_close", "tau_open", "tau_out", "tau_in", "u_gate"];

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<f64> {
        match name {
            "tau_close" => Some(self.tau_close),
            "tau_open" => Some(self.tau_open),
            "tau_out" => Some(self.tau_out),
            "tau_in" => Some(self.tau_in),
            "u_gate" => Some(self.u_gate),
            _ => None,
        }
    }

    /// Set a parameter by name.
    ///
    /// The value is stored as given; see [`Parameters::validate`] for range checks.
    pub fn set(&mut self, name: &str, value: f64) -> Result<()> {
        let slot = match name {
            "tau_close" => &mut self.tau_close,
            "tau_open" => &mut self.tau_open,
            "tau_out" => &mut self.tau_out,
            "tau_in" => &mut self.tau_in,
            "u_gate" => &mut self.u_gate,
            _ => return Err(ModelError::unknown_parameter(name)),
        };
        *slot = value;
        Ok(())
    }

    /// Iterate over `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        let values = [self.tau_close, self.tau_open, self.tau_out, self.tau_in, self.u_gate];
        Self::NAMES.into_iter().zip(values)
    }

    /// Check that every time constant is finite and strictly positive and
    /// that the gate threshold is finite.
    ///
    /// The equations never call this. Unvalidated evaluation stays the default
    /// so results match reference outputs bit for bit.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("tau_close", self.tau_close),
            ("tau_open", self.tau_open),
            ("tau_out", self.tau_out),
            ("tau_in", self.tau_in),
        ] {
            if !value.is_finite() {
                return Err(ModelError::invalid_parameter(name, value, "must be finite"));
            }
            if value <= 0.0 {
                return Err(ModelError::invalid_parameter(
                    name,
                    value,
                    "time constants must be strictly positive",
                ));
            }
        }

        if !self.u_gate.is_finite() {
            return Err(ModelError::invalid_parameter("u_gate", self.u_gate, "must be finite"));
        }

        Ok(())
    }
}

/// Model state: membrane potential `u` and gating variable `h`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Variables {
    /// Membrane potential, conventionally in [0, 1]
    pub u: f64,
    /// Gating variable, conventionally in [0, 1]
    pub h: f64,
}

impl Default for Variables {
    fn default() -> Self {
        // Resting, fully recovered cell
        Self { u: 0.0, h: 1.0 }
    }
}

impl Variables {
    /// Field names, in declaration order.
    pub const NAMES: [&'static str; 2] = ["u", "h"];

    /// Create a state from its two components.
    pub fn new(u: f64, h: f64) -> Self {
        Self { u, h }
    }

    /// Look up a state variable by name.
    pub fn get(&self, name: &str) -> Option<f64> {
        match name {
            "u" => Some(self.u),
            "h" => Some(self.h),
            _ => None,
        }
    }

    /// Set a state variable by name.
    pub fn set(&mut self, name: &str, value: f64) -> Result<()> {
        match name {
            "u" => self.u = value,
            "h" => self.h = value,
            _ => return Err(ModelError::unknown_variable(name)),
        }
        Ok(())
    }

    /// Check that both components are finite.
    ///
    /// Values outside [0, 1] are accepted; keeping the state in range is the
    /// integrator's job.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("u", self.u), ("h", self.h)] {
            if !value.is_finite() {
                return Err(ModelError::invalid_variable(name, value, "must be finite"));
            }
        }
        Ok(())
    }
}
