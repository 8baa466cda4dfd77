//! Right-hand side of the Mitchell-Schaeffer equations.
//!
//! ```text
//! du/dt = J_in + J_out
//! J_in  = h * u^2 * (1 - u) / tau_in
//! J_out = -u / tau_out
//!
//! dh/dt = (1 - h) / tau_open    if u <  u_gate
//!         -h / tau_close        if u >= u_gate
//! ```
//!
//! None of these functions validate their inputs. A zero time constant
//! yields a non-finite result that the caller's integrator will see.

use super::params::{Parameters, Variables};

/// Default initial state, `u = 0`, `h = 1`.
pub fn get_variables() -> Variables {
    Variables::default()
}

/// Default model parameters.
pub fn get_parameters() -> Parameters {
    Parameters::default()
}

/// Time derivative of the gating variable.
///
/// Below the gate threshold the gate recovers toward 1 with time constant
/// `tau_open`; at or above it the gate closes toward 0 with `tau_close`.
#[inline]
pub fn calc_dh(h: f64, u: f64, tau_close: f64, tau_open: f64, u_gate: f64) -> f64 {
    if u < u_gate {
        (1.0 - h) / tau_open
    } else {
        -h / tau_close
    }
}

/// Inward (depolarizing) current.
///
/// Grows with `u`, shuts off as `u -> 1`, and is scaled by the channel
/// availability `h`.
#[inline]
pub fn calc_j_in(u: f64, h: f64, tau_in: f64) -> f64 {
    let c = (u * u) * (1.0 - u);
    h * c / tau_in
}

/// Outward (repolarizing) current.
#[inline]
pub fn calc_j_out(u: f64, tau_out: f64) -> f64 {
    -u / tau_out
}

/// Time derivative of the membrane potential.
///
/// `j_out` already carries its negative sign, so the currents are summed.
#[inline]
pub fn calc_rhs(j_in: f64, j_out: f64) -> f64 {
    j_in + j_out
}

/// Transmembrane currents at one state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Currents {
    /// Inward current `J_in`
    pub j_in: f64,
    /// Outward current `J_out`
    pub j_out: f64,
}

/// Time derivatives of both state variables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derivatives {
    /// `du/dt`
    pub du: f64,
    /// `dh/dt`
    pub dh: f64,
}

/// Evaluate both derivatives at `state`.
///
/// Both components are computed from the same state, so an integrator can
/// step `u` and `h` afterwards without reading a half-updated value.
pub fn derivatives(state: &Variables, params: &Parameters) -> Derivatives {
    derivatives_with_currents(state, params).1
}

/// Evaluate the currents and both derivatives at `state`.
pub fn derivatives_with_currents(state: &Variables, params: &Parameters) -> (Currents, Derivatives) {
    let Variables { u, h } = *state;

    let j_in = calc_j_in(u, h, params.tau_in);
    let j_out = calc_j_out(u, params.tau_out);
    let du = calc_rhs(j_in, j_out);
    let dh = calc_dh(h, u, params.tau_close, params.tau_open, params.u_gate);

    (Currents { j_in, j_out }, Derivatives { du, dh })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_defaults_are_fresh_copies() {
        let mut a = get_variables();
        let b = get_variables();
        a.u = 0.9;
        a.h = 0.1;
        assert_ne!(a, b);
        assert_eq!(b, Variables { u: 0.0, h: 1.0 });
        assert_eq!(get_variables(), Variables { u: 0.0, h: 1.0 });

        let mut p = get_parameters();
        p.tau_in = 99.0;
        let q = get_parameters();
        assert_ne!(p, q);
        assert_eq!(q.tau_close, 150.0);
        assert_eq!(q.tau_open, 120.0);
        assert_eq!(q.tau_out, 6.0);
        assert_eq!(q.tau_in, 0.3);
        assert_eq!(q.u_gate, 0.13);
    }

    #[test]
    fn test_dh_recovery_below_gate() {
        assert_relative_eq!(calc_dh(0.4, 0.05, 150.0, 120.0, 0.13), 0.6 / 120.0);
        assert_relative_eq!(calc_dh(0.0, -0.3, 150.0, 120.0, 0.13), 1.0 / 120.0);
    }

    #[test]
    fn test_dh_decay_above_gate() {
        assert_relative_eq!(
            calc_dh(0.5, 0.2, 150.0, 120.0, 0.13),
            -0.003_333_333,
            max_relative = 1e-6
        );
        assert_eq!(calc_dh(0.5, 0.2, 150.0, 120.0, 0.13), -0.5 / 150.0);
    }

    #[test]
    fn test_dh_boundary_takes_decay_branch() {
        assert_eq!(calc_dh(0.8, 0.13, 150.0, 120.0, 0.13), -0.8 / 150.0);
        let just_below = 0.13 - 1e-12;
        assert_eq!(calc_dh(0.8, just_below, 150.0, 120.0, 0.13), (1.0 - 0.8) / 120.0);
    }

    #[test]
    fn test_dh_nan_potential_takes_decay_branch() {
        // NaN < u_gate is false
        assert_eq!(calc_dh(0.5, f64::NAN, 150.0, 120.0, 0.13), -0.5 / 150.0);
    }

    #[test]
    fn test_j_in_matches_formula() {
        for &(u, h, tau_in) in &[
            (0.0, 1.0, 0.3),
            (0.5, 1.0, 0.3),
            (0.3, 0.7, 0.25),
            (1.0, 0.9, 0.3),
            (1.4, 0.5, 0.3),
            (-0.2, 1.0, 0.3),
        ] {
            let expected = h * (u * u * (1.0 - u)) / tau_in;
            assert_relative_eq!(calc_j_in(u, h, tau_in), expected, max_relative = 1e-15);
        }

        assert_relative_eq!(calc_j_in(0.5, 1.0, 0.3), 0.416_666_666_666, max_relative = 1e-9);
        assert_eq!(calc_j_in(1.0, 1.0, 0.3), 0.0);
        assert_eq!(calc_j_in(0.5, 0.0, 0.3), 0.0);
    }

    #[test]
    fn test_j_out_matches_formula() {
        assert_eq!(calc_j_out(0.0, 6.0), 0.0);
        assert_eq!(calc_j_out(0.6, 6.0), -0.6 / 6.0);
        assert!(calc_j_out(-0.1, 6.0) > 0.0);
    }

    #[test]
    fn test_rhs_is_sum() {
        assert_eq!(calc_rhs(0.0, 0.0), 0.0);
        assert_eq!(calc_rhs(0.4, -0.1), 0.4 + -0.1);
        assert_eq!(calc_rhs(0.4, -0.1), calc_rhs(-0.1, 0.4));
    }

    #[test]
    fn test_resting_state_is_fixed_point() {
        let p = get_parameters();
        let s = get_variables();
        assert_eq!(calc_j_in(s.u, s.h, p.tau_in), 0.0);
        assert_eq!(calc_j_out(s.u, p.tau_out), 0.0);
        assert_eq!(calc_rhs(0.0, 0.0), 0.0);
        assert_eq!(calc_dh(s.h, s.u, p.tau_close, p.tau_open, p.u_gate), 0.0);

        let d = derivatives(&s, &p);
        assert_eq!(d, Derivatives { du: 0.0, dh: 0.0 });
    }

    #[test]
    fn test_derivatives_compose_the_free_functions() {
        let p = get_parameters();
        let s = Variables::new(0.35, 0.8);
        let (currents, d) = derivatives_with_currents(&s, &p);

        assert_eq!(currents.j_in, calc_j_in(0.35, 0.8, p.tau_in));
        assert_eq!(currents.j_out, calc_j_out(0.35, p.tau_out));
        assert_eq!(d.du, calc_rhs(currents.j_in, currents.j_out));
        assert_eq!(d.dh, calc_dh(0.8, 0.35, p.tau_close, p.tau_open, p.u_gate));
        assert_eq!(derivatives(&s, &p), d);
    }

    #[test]
    fn test_zero_time_constant_is_not_guarded() {
        assert_eq!(calc_j_out(0.5, 0.0), f64::NEG_INFINITY);
        assert_eq!(calc_j_in(0.5, 1.0, 0.0), f64::INFINITY);
        assert_eq!(calc_dh(0.5, 0.0, 150.0, 0.0, 0.13), f64::INFINITY);
        assert_eq!(calc_dh(0.5, 0.5, 0.0, 120.0, 0.13), f64::NEG_INFINITY);
        // 0/0
        assert!(calc_j_out(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_concurrent_evaluation() {
        let p = get_parameters();
        let states: Vec<Variables> = (0..64)
            .map(|i| Variables::new(i as f64 / 63.0, 1.0 - i as f64 / 63.0))
            .collect();
        let serial: Vec<Derivatives> = states.iter().map(|s| derivatives(s, &p)).collect();

        let parallel: Vec<Derivatives> = std::thread::scope(|scope| {
            let handles: Vec<_> = states
                .chunks(16)
                .map(|chunk| scope.spawn(move || chunk.iter().map(|s| derivatives(s, &p)).collect::<Vec<_>>()))
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        assert_eq!(serial, parallel);
    }

    /// Forward Euler driven from the outside, the way an integrator uses the API.
    fn euler(mut s: Variables, p: &Parameters, dt: f64, steps: usize, stim: impl Fn(usize) -> f64) -> Vec<Variables> {
        let mut trace = Vec::with_capacity(steps);
        for n in 0..steps {
            let d = derivatives(&s, p);
            s = Variables::new(s.u + dt * (d.du + stim(n)), s.h + dt * d.dh);
            trace.push(s);
        }
        trace
    }

    #[test]
    fn test_action_potential_under_euler() {
        let p = get_parameters();
        let dt = 0.01;
        // 1 time unit stimulus pulse
        let trace = euler(get_variables(), &p, dt, 100_000, |n| if n < 100 { 0.5 } else { 0.0 });

        let peak = trace.iter().map(|s| s.u).fold(f64::MIN, f64::max);
        assert!(peak > 0.9, "no upstroke, peak u = {peak}");

        // Gate closes during the plateau
        let min_h = trace.iter().map(|s| s.h).fold(f64::MAX, f64::min);
        assert!(min_h < 0.5);

        // Back near rest with the gate recovering
        let last = trace[trace.len() - 1];
        assert_abs_diff_eq!(last.u, 0.0, epsilon = 1e-3);
        assert!(last.h > min_h);
    }

    #[test]
    fn test_subthreshold_stimulus_decays() {
        let p = get_parameters();
        let s = Variables::new(0.03, 1.0);
        let trace = euler(s, &p, 0.01, 10_000, |_| 0.0);
        let peak = trace.iter().map(|s| s.u).fold(f64::MIN, f64::max);
        assert!(peak < 0.13);
        assert_abs_diff_eq!(trace[trace.len() - 1].u, 0.0, epsilon = 1e-3);
    }
}
