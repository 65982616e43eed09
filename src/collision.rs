//! Pairwise elastic collision resolution.
//!
//! One pass over all unordered pairs per call. Overlapping pairs are
//! separated along the contact normal proportional to the opposite body's
//! mass share. If, and only if, the pair is still closing, an elastic
//! impulse then swaps momentum along the normal.
//!
//! Ordering within a pair is fixed and documented: positions are corrected
//! first, then the impulse is applied, and the dampening factor scales the
//! impulse before it reaches either velocity. Separating pairs are left
//! alone even while still geometrically overlapping, so a pair that was
//! resolved last sub-step does not get a second kick on the way out.
//!
//! Simultaneous multi-body overlaps are resolved pair by pair in a single
//! pass; there is no iterative constraint solver, and dense pile-ups can
//! tunnel. That trade is accepted for a sandbox of tens of bodies.

use glam::DVec2;

use crate::state::SimState;
use crate::types::SimulationConfig;

/// Detect and resolve all overlapping pairs. Returns the number of pairs
/// that received an impulse.
pub fn resolve_collisions(state: &mut SimState, config: &SimulationConfig) -> usize {
    let n = state.len();
    let mut impulses = 0;

    for i in 0..n {
        for j in (i + 1)..n {
            let delta = state.positions[j] - state.positions[i];
            let distance = delta.length();
            let combined = state.radii[i] + state.radii[j];
            if distance >= combined {
                continue;
            }

            // Contact normal from i toward j; coincident centers get an
            // arbitrary fixed direction instead of a zero divide.
            let normal = if distance > 0.0 {
                delta / distance
            } else {
                DVec2::X
            };

            let mass_i = state.masses[i];
            let mass_j = state.masses[j];
            let total = mass_i + mass_j;

            // De-penetrate: each body backs off by the other's mass share,
            // so the heavier body moves less.
            let overlap = combined - distance;
            state.positions[i] -= normal * (overlap * (mass_j / total));
            state.positions[j] += normal * (overlap * (mass_i / total));

            // Closing speed along the normal; separating pairs get nothing.
            let closing = (state.velocities[i] - state.velocities[j]).dot(normal);
            if closing > 0.0 {
                let impulse = 2.0 * closing / total * config.dampening;
                state.velocities[i] -= normal * (impulse * mass_j);
                state.velocities[j] += normal * (impulse * mass_i);
                impulses += 1;
            }
        }
    }

    impulses
}
