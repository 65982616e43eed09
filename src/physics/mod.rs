//! Physics stepping for the gravity sandbox.
//!
//! `advance` is the one entry point the engine and the forecaster share:
//! it runs the requested number of sub-steps, each being one integrator
//! step optionally followed by one collision-resolution pass.

pub mod gravity;
pub mod integrator;

#[cfg(test)]
mod proptest_physics;

pub use gravity::accelerations_into;
pub use integrator::{euler_step, rk4_step};

use crate::collision;
use crate::state::SimState;
use crate::types::{DIVERGENCE_LIMIT, Integrator, SimulationConfig, StepConfig};

/// Advance the state by `step.substeps` sub-steps of `step.dt`.
///
/// Collision resolution, when enabled, runs after each sub-step's
/// integration, never between RK4 stages.
pub fn advance(state: &mut SimState, step: &StepConfig, config: &SimulationConfig) {
    if state.is_empty() {
        return;
    }
    for _ in 0..step.substeps {
        match step.integrator {
            Integrator::Euler => integrator::euler_step(state, step.dt, config),
            Integrator::Rk4 => integrator::rk4_step(state, step.dt, config),
        }
        if step.collisions {
            collision::resolve_collisions(state, config);
        }
    }
}

/// Scan for numerically diverged state.
///
/// True when any position or velocity has gone non-finite, or any body has
/// strayed beyond `DIVERGENCE_LIMIT` from the origin. The scan only reads;
/// surfacing the signal and deciding what to do about it is the host's job.
pub fn is_diverged(state: &SimState) -> bool {
    state.positions.iter().zip(&state.velocities).any(|(p, v)| {
        !p.is_finite() || !v.is_finite() || p.length_squared() > DIVERGENCE_LIMIT * DIVERGENCE_LIMIT
    })
}
