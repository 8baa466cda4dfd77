//! The Mitchell-Schaeffer model equations.
//!
//! The model tracks a normalized membrane potential `u` and a gating
//! variable `h` that controls how much inward current is available:
//!
//! - [`params`] holds the fixed-field parameter and state records
//! - [`equations`] holds the pure right-hand-side functions
//!
//! Reference: Mitchell, C. C., & Schaeffer, D. G. (2003). A two-current
//! model for the dynamics of cardiac membrane potential. Bulletin of
//! Mathematical Biology, 65, 767-793.

pub mod equations;
pub mod params;

pub use equations::{
    calc_dh, calc_j_in, calc_j_out, calc_rhs, derivatives, derivatives_with_currents, get_parameters,
    get_variables, Currents, Derivatives,
};
pub use params::{Parameters, Variables};
