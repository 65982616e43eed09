//! Energy and barycenter accounting.
//!
//! Pure read-side functions over the current state, used for diagnostics
//! plots. An empty body set is a valid, persistent condition here, not an
//! anomaly: both energies are defined as 0 and the barycenter is absent.

use glam::DVec2;

use crate::state::SimState;
use crate::types::SimulationConfig;

/// Total kinetic energy, `sum of m/2 * |v|^2`.
pub fn kinetic(state: &SimState) -> f64 {
    state
        .velocities
        .iter()
        .zip(&state.masses)
        .map(|(v, m)| 0.5 * m * v.length_squared())
        .sum()
}

/// Total gravitational potential energy over unordered pairs.
///
/// Pair distances are clamped by the same softening floor the force loop
/// uses, so the two never disagree about a near-coincident pair.
pub fn potential(state: &SimState, config: &SimulationConfig) -> f64 {
    let n = state.len();
    let mut sum = 0.0;
    for i in 0..n {
        for j in (i + 1)..n {
            let r_sq = (state.positions[j] - state.positions[i])
                .length_squared()
                .max(config.softening_sq);
            sum -= state.masses[i] * state.masses[j] / r_sq.sqrt();
        }
    }
    config.g * sum
}

/// Mass-weighted center of the body set, absent when there are no bodies.
pub fn center_of_mass(state: &SimState) -> Option<DVec2> {
    if state.is_empty() {
        return None;
    }
    let total: f64 = state.masses.iter().sum();
    let weighted = state
        .positions
        .iter()
        .zip(&state.masses)
        .fold(DVec2::ZERO, |acc, (p, m)| acc + *p * *m);
    Some(weighted / total)
}
