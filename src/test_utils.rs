//! Test utilities for the gravity sandbox.
//!
//! Fixtures build small reference systems; assertions compute the
//! conserved quantities the tests check against.

use glam::DVec2;

use crate::state::SimState;
use crate::types::SimulationConfig;

/// Fixtures for creating reference body systems.
pub mod fixtures {
    use super::*;

    /// Two equal bodies on a head-on collision course along the x axis,
    /// starting just outside contact distance.
    pub fn head_on_pair() -> SimState {
        let mut state = SimState::new();
        state.add_body(20.0, DVec2::new(-21.0, 0.0), DVec2::new(10.0, 0.0));
        state.add_body(20.0, DVec2::new(21.0, 0.0), DVec2::new(-10.0, 0.0));
        state
    }

    /// Four equal bodies on the corners of a square of circumradius
    /// `ring_radius`, each on a near-circular tangential orbit around the
    /// common barycenter.
    pub fn square_ring(ring_radius: f64) -> SimState {
        let mut state = SimState::new();
        let body_radius = 20.0;
        let mass = crate::types::mass_from_radius(body_radius);
        // Net inward pull on a corner from the other three:
        // two neighbors at sqrt(2)*R and the opposite corner at 2R.
        let inward = mass * (1.0 / std::f64::consts::SQRT_2 + 0.25) / (ring_radius * ring_radius);
        let speed = (inward * ring_radius).sqrt();

        for k in 0..4 {
            let angle = std::f64::consts::FRAC_PI_2 * k as f64;
            state.add_body(
                body_radius,
                DVec2::new(angle.cos(), angle.sin()) * ring_radius,
                DVec2::new(-angle.sin(), angle.cos()) * speed,
            );
        }
        state
    }
}

/// Assertions over physical invariants.
pub mod assertions {
    use super::*;

    /// Total linear momentum of the system.
    pub fn total_momentum(state: &SimState) -> DVec2 {
        state
            .velocities()
            .iter()
            .zip(state.masses())
            .map(|(v, m)| *v * *m)
            .fold(DVec2::ZERO, |a, b| a + b)
    }

    /// Total mechanical energy (kinetic plus softened potential).
    pub fn total_energy(state: &SimState, config: &SimulationConfig) -> f64 {
        crate::energy::kinetic(state) + crate::energy::potential(state, config)
    }

    /// Smallest center distance over all unordered pairs, as a fraction of
    /// the pair's combined radius. Below 1.0 means penetration.
    pub fn min_separation_ratio(state: &SimState) -> f64 {
        let n = state.len();
        let mut min = f64::INFINITY;
        for i in 0..n {
            for j in (i + 1)..n {
                let distance = (state.positions()[j] - state.positions()[i]).length();
                let combined = state.radii()[i] + state.radii()[j];
                min = min.min(distance / combined);
            }
        }
        min
    }
}
