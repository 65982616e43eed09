//! Time integration over the struct-of-arrays state.
//!
//! Two schemes, selected per call:
//!
//! - Semi-implicit Euler: one force evaluation, velocity first, then
//!   position from the updated velocity. Fine for interactive poking,
//!   drifts over long runs.
//! - Classic RK4: four force evaluations at trial states, combined with
//!   the 1/6, 1/3, 1/3, 1/6 weights for both position and velocity. The
//!   trial states advance positions with the previous stage's velocity
//!   and velocities with the previous stage's acceleration, so every
//!   stage sees accelerations evaluated at trial positions.
//!
//! Collision handling is not this module's business: the step driver runs
//! the resolver after the sub-step, never between stages.

use glam::DVec2;

use crate::physics::gravity;
use crate::state::SimState;
use crate::types::SimulationConfig;

/// One semi-implicit Euler step.
pub fn euler_step(state: &mut SimState, dt: f64, config: &SimulationConfig) {
    let mut acc = Vec::new();
    gravity::accelerations_into(state, config, &mut acc);
    for i in 0..state.len() {
        state.velocities[i] += acc[i] * dt;
        state.positions[i] += state.velocities[i] * dt;
    }
}

/// One classic 4th-order Runge-Kutta step.
pub fn rk4_step(state: &mut SimState, dt: f64, config: &SimulationConfig) {
    let n = state.len();
    if n == 0 {
        return;
    }
    let half = dt * 0.5;
    let pos0 = state.positions.clone();
    let vel0 = state.velocities.clone();

    // Stage 1 at the current state.
    let mut k1_acc = Vec::new();
    gravity::accelerations_into(state, config, &mut k1_acc);
    let k1_vel = vel0.clone();

    // Stage 2 at t + dt/2.
    set_trial(state, &pos0, &vel0, &k1_vel, &k1_acc, half);
    let mut k2_acc = Vec::new();
    gravity::accelerations_into(state, config, &mut k2_acc);
    let k2_vel = state.velocities.clone();

    // Stage 3 at t + dt/2, from stage 2 derivatives.
    set_trial(state, &pos0, &vel0, &k2_vel, &k2_acc, half);
    let mut k3_acc = Vec::new();
    gravity::accelerations_into(state, config, &mut k3_acc);
    let k3_vel = state.velocities.clone();

    // Stage 4 at t + dt.
    set_trial(state, &pos0, &vel0, &k3_vel, &k3_acc, dt);
    let mut k4_acc = Vec::new();
    gravity::accelerations_into(state, config, &mut k4_acc);
    let k4_vel = state.velocities.clone();

    let sixth = dt / 6.0;
    for i in 0..n {
        state.positions[i] =
            pos0[i] + (k1_vel[i] + 2.0 * k2_vel[i] + 2.0 * k3_vel[i] + k4_vel[i]) * sixth;
        state.velocities[i] =
            vel0[i] + (k1_acc[i] + 2.0 * k2_acc[i] + 2.0 * k3_acc[i] + k4_acc[i]) * sixth;
    }
}

/// Load a trial state: positions advanced by the stage velocity, velocities
/// by the stage acceleration, both over `h`.
fn set_trial(
    state: &mut SimState,
    pos0: &[DVec2],
    vel0: &[DVec2],
    stage_vel: &[DVec2],
    stage_acc: &[DVec2],
    h: f64,
) {
    for i in 0..pos0.len() {
        state.positions[i] = pos0[i] + stage_vel[i] * h;
        state.velocities[i] = vel0[i] + stage_acc[i] * h;
    }
}
