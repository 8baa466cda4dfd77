//! WASM bindings for the Mitchell-Schaeffer model.
//!
//! This module provides JavaScript-friendly bindings for driving the model
//! from an integrator written in JavaScript.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmModel } from 'mitchell_schaeffer';
//!
//! await init();
//!
//! const model = WasmModel.from_toml(`
//!   [parameters]
//!   tau_in = 0.25
//! `);
//!
//! let u = 0.2, h = 1.0;
//! const dt = 0.01;
//! for (let n = 0; n < 1000; n++) {
//!   const [du, dh] = model.derivatives(u, h);
//!   u += dt * du;
//!   h += dt * dh;
//! }
//! ```

use wasm_bindgen::prelude::*;

use crate::config::ModelConfig;
use crate::error::ModelError;
use crate::model::{self, Parameters, Variables};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: ModelError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// WASM-compatible handle on a parameter set.
#[wasm_bindgen]
pub struct WasmModel {
    params: Parameters,
}

#[wasm_bindgen]
impl WasmModel {
    /// Create a model holding the default parameters.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmModel {
        WasmModel {
            params: model::get_parameters(),
        }
    }

    /// Create a model from a TOML parameter file's contents.
    ///
    /// Only the `[parameters]` table is used.
    #[wasm_bindgen]
    pub fn from_toml(input: &str) -> Result<WasmModel, JsValue> {
        let config = ModelConfig::from_toml_str(input).map_err(to_js)?;
        Ok(WasmModel {
            params: config.parameters,
        })
    }

    /// Get a parameter by name, or `undefined` if the name is unknown.
    #[wasm_bindgen]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.params.get(name)
    }

    /// Set a parameter by name.
    #[wasm_bindgen]
    pub fn set(&mut self, name: &str, value: f64) -> Result<(), JsValue> {
        self.params.set(name, value).map_err(to_js)
    }

    /// Check that the time constants are strictly positive.
    #[wasm_bindgen]
    pub fn validate(&self) -> Result<(), JsValue> {
        self.params.validate().map_err(to_js)
    }

    /// Evaluate `[du/dt, dh/dt]` at `(u, h)`.
    #[wasm_bindgen]
    pub fn derivatives(&self, u: f64, h: f64) -> Vec<f64> {
        let d = model::derivatives(&Variables::new(u, h), &self.params);
        vec![d.du, d.dh]
    }

    /// Evaluate `[J_in, J_out]` at `(u, h)`.
    #[wasm_bindgen]
    pub fn currents(&self, u: f64, h: f64) -> Vec<f64> {
        let (c, _) = model::derivatives_with_currents(&Variables::new(u, h), &self.params);
        vec![c.j_in, c.j_out]
    }
}

impl Default for WasmModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Default initial state as `[u, h]`.
#[wasm_bindgen]
pub fn default_state() -> Vec<f64> {
    let s = model::get_variables();
    vec![s.u, s.h]
}

/// Gating variable derivative.
#[wasm_bindgen]
pub fn calc_dh(h: f64, u: f64, tau_close: f64, tau_open: f64, u_gate: f64) -> f64 {
    model::calc_dh(h, u, tau_close, tau_open, u_gate)
}

/// Inward current.
#[wasm_bindgen(js_name = calc_J_in)]
pub fn calc_j_in(u: f64, h: f64, tau_in: f64) -> f64 {
    model::calc_j_in(u, h, tau_in)
}

/// Outward current.
#[wasm_bindgen(js_name = calc_J_out)]
pub fn calc_j_out(u: f64, tau_out: f64) -> f64 {
    model::calc_j_out(u, tau_out)
}

/// Membrane potential derivative.
#[wasm_bindgen]
pub fn calc_rhs(j_in: f64, j_out: f64) -> f64 {
    model::calc_rhs(j_in, j_out)
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
