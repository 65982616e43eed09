//! Pairwise gravitational acceleration.
//!
//! Plain O(n^2) Newtonian gravity over the struct-of-arrays state. The
//! inner accumulation runs four source bodies at a time on `f64x4` lanes;
//! a scalar implementation of the same sum backs the unit tests.
//!
//! The softening floor is applied to every squared pair distance. That one
//! clamp covers three degenerate cases at once: coincident pairs cannot
//! divide by zero, near-contact pairs cannot produce unbounded kicks, and
//! the self-pair (zero displacement, nonzero mass) contributes a zero
//! vector because the direction is zero.

use glam::DVec2;
use wide::f64x4;

use crate::state::SimState;
use crate::types::SimulationConfig;

const LANES: usize = 4;

/// Compute per-body gravitational acceleration into `out`.
///
/// `out` is cleared and resized to the body count; an empty state yields an
/// empty result and no work.
pub fn accelerations_into(state: &SimState, config: &SimulationConfig, out: &mut Vec<DVec2>) {
    let n = state.len();
    out.clear();
    out.resize(n, DVec2::ZERO);
    if n < 2 {
        return;
    }

    // Pad the source arrays to a lane multiple. Padding lanes carry zero
    // mass, so they fall out of the sum.
    let padded = n.div_ceil(LANES) * LANES;
    let mut xs = vec![0.0f64; padded];
    let mut ys = vec![0.0f64; padded];
    let mut ms = vec![0.0f64; padded];
    for i in 0..n {
        xs[i] = state.positions[i].x;
        ys[i] = state.positions[i].y;
        ms[i] = state.masses[i];
    }

    let softening = f64x4::splat(config.softening_sq);

    for (i, acc) in out.iter_mut().enumerate() {
        let xi = f64x4::splat(xs[i]);
        let yi = f64x4::splat(ys[i]);
        let mut ax = f64x4::splat(0.0);
        let mut ay = f64x4::splat(0.0);

        for j in (0..padded).step_by(LANES) {
            let xj = f64x4::from([xs[j], xs[j + 1], xs[j + 2], xs[j + 3]]);
            let yj = f64x4::from([ys[j], ys[j + 1], ys[j + 2], ys[j + 3]]);
            let mj = f64x4::from([ms[j], ms[j + 1], ms[j + 2], ms[j + 3]]);

            let dx = xj - xi;
            let dy = yj - yi;
            let r_sq = (dx * dx + dy * dy).max(softening);
            // a = m_j / r^2 toward j; dx/r supplies the direction.
            let f = mj / (r_sq * r_sq.sqrt());
            ax += dx * f;
            ay += dy * f;
        }

        *acc = DVec2::new(ax.reduce_add(), ay.reduce_add()) * config.g;
    }
}

/// Scalar reference for the lane kernel above. Test-only.
#[cfg(test)]
pub(crate) fn accelerations_scalar(state: &SimState, config: &SimulationConfig) -> Vec<DVec2> {
    let n = state.len();
    let mut out = vec![DVec2::ZERO; n];
    if n < 2 {
        return out;
    }
    for i in 0..n {
        let mut acc = DVec2::ZERO;
        for j in 0..n {
            if i == j {
                continue;
            }
            let delta = state.positions[j] - state.positions[i];
            let r_sq = delta.length_squared().max(config.softening_sq);
            acc += delta * (state.masses[j] / (r_sq * r_sq.sqrt()));
        }
        out[i] = acc * config.g;
    }
    out
}
