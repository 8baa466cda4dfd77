//! # Mitchell-Schaeffer
//!
//! Right-hand side of the Mitchell-Schaeffer two-variable cardiac cell model.
//!
//! This library provides:
//! - Default parameters and initial state as fixed-field records
//! - Pure functions for the gating dynamics and the two transmembrane currents
//! - TOML parameter files with `name=value` overrides
//!
//! It does not integrate in time. A caller-supplied integrator (explicit
//! Euler, Runge-Kutta, ...) evaluates the derivatives once per step and
//! advances the state itself.
//!
//! ## Architecture
//!
//! - [`model`] - Parameter/state records and the equation functions
//! - [`config`] - Loading and saving parameter files
//! - [`error`] - Error type for the non-numeric surfaces
//!
//! ## Usage
//!
//! ### Library
//!
//! ```
//! use mitchell_schaeffer::{calc_dh, calc_j_in, calc_j_out, calc_rhs, get_parameters, get_variables};
//!
//! let p = get_parameters();
//! let mut s = get_variables();
//! s.u = 0.2;
//! let dt = 0.01;
//!
//! let j_in = calc_j_in(s.u, s.h, p.tau_in);
//! let j_out = calc_j_out(s.u, p.tau_out);
//! let du = calc_rhs(j_in, j_out);
//! let dh = calc_dh(s.h, s.u, p.tau_close, p.tau_open, p.u_gate);
//!
//! // Both derivatives came from the old state before either is stepped
//! s.u += dt * du;
//! s.h += dt * dh;
//! assert!(s.u > 0.2);
//! assert!(s.h < 1.0);
//! ```
//!
//! ### Native CLI
//!
//! ```bash
//! mitchell-schaeffer defaults > model.toml
//! mitchell-schaeffer eval --config model.toml --u 0.5 --h 1.0
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmModel } from 'mitchell_schaeffer';
//!
//! const model = new WasmModel();
//! const [du, dh] = model.derivatives(u, h);
//! ```

pub mod config;
pub mod error;
pub mod model;

// Re-export main types for convenience
pub use config::ModelConfig;
pub use error::{ModelError, Result};
pub use model::{
    calc_dh, calc_j_in, calc_j_out, calc_rhs, derivatives, derivatives_with_currents, get_parameters,
    get_variables, Currents, Derivatives, Parameters, Variables,
};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmModel;
