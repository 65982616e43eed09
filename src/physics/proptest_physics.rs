//! Property-based tests for the physics core.
//!
//! These check physical invariants across randomized body configurations
//! rather than single hand-picked cases.

use glam::DVec2;
use proptest::prelude::*;

use crate::collision::resolve_collisions;
use crate::physics::gravity;
use crate::prediction;
use crate::state::SimState;
use crate::test_utils::assertions;
use crate::types::{ForecastConfig, SimulationConfig};

/// Strategy: a body as (radius, position, velocity) with tame magnitudes.
fn body_strategy() -> impl Strategy<Value = (f64, DVec2, DVec2)> {
    (
        1.0f64..50.0,
        (-500.0f64..500.0, -500.0f64..500.0),
        (-20.0f64..20.0, -20.0f64..20.0),
    )
        .prop_map(|(r, (px, py), (vx, vy))| (r, DVec2::new(px, py), DVec2::new(vx, vy)))
}

fn state_from(bodies: &[(f64, DVec2, DVec2)]) -> SimState {
    let mut state = SimState::new();
    for &(radius, position, velocity) in bodies {
        state.add_body(radius, position, velocity);
    }
    state
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Collision resolution never changes total linear momentum, with or
    /// without overlaps in the input and regardless of the dampening
    /// factor (the impulse is applied equal and opposite).
    #[test]
    fn prop_collisions_conserve_momentum(
        bodies in prop::collection::vec(body_strategy(), 2..8),
    ) {
        let config = SimulationConfig::default();
        let mut state = state_from(&bodies);
        let before = assertions::total_momentum(&state);

        resolve_collisions(&mut state, &config);

        let after = assertions::total_momentum(&state);
        let scale = before.length().max(1.0);
        prop_assert!(
            (after - before).length() / scale < 1e-9,
            "momentum drifted from {before:?} to {after:?}"
        );
    }

    /// After one resolution pass, every pair that was resolved in
    /// isolation is separated. Dense pile-ups may re-overlap when a body
    /// participates in several pairs, so restrict to two bodies here.
    #[test]
    fn prop_resolved_pair_is_separated(
        a in body_strategy(),
        b in body_strategy(),
    ) {
        let config = SimulationConfig::default();
        let mut state = state_from(&[a, b]);

        resolve_collisions(&mut state, &config);

        prop_assert!(
            assertions::min_separation_ratio(&state) >= 1.0 - 1e-9,
            "pair still penetrating"
        );
    }

    /// Adding a body and removing it again restores every observable
    /// array to its prior value.
    #[test]
    fn prop_add_remove_round_trip(
        bodies in prop::collection::vec(body_strategy(), 1..6),
        extra in body_strategy(),
    ) {
        let mut state = state_from(&bodies);
        let before = state.clone();

        let index = state.add_body(extra.0, extra.1, extra.2);
        state.remove_body(index).unwrap();

        prop_assert_eq!(state.positions(), before.positions());
        prop_assert_eq!(state.velocities(), before.velocities());
        prop_assert_eq!(state.masses(), before.masses());
        prop_assert_eq!(state.radii(), before.radii());
    }

    /// Forecasting reads the state but never writes it.
    #[test]
    fn prop_forecast_is_pure(
        bodies in prop::collection::vec(body_strategy(), 1..6),
        steps in 1usize..60,
    ) {
        let config = SimulationConfig::default();
        let state = state_from(&bodies);
        let before = state.clone();

        let _ = prediction::forecast(
            &state,
            &ForecastConfig { steps, ..Default::default() },
            &config,
        );

        prop_assert_eq!(state.positions(), before.positions());
        prop_assert_eq!(state.velocities(), before.velocities());
    }

    /// The lane-vectorized force kernel agrees with the scalar sum for
    /// any body count, including remainder-lane sizes.
    #[test]
    fn prop_lane_kernel_matches_scalar(
        bodies in prop::collection::vec(body_strategy(), 2..12),
    ) {
        let config = SimulationConfig::default();
        let state = state_from(&bodies);

        let mut simd = Vec::new();
        gravity::accelerations_into(&state, &config, &mut simd);
        let scalar = gravity::accelerations_scalar(&state, &config);

        for (a, b) in simd.iter().zip(&scalar) {
            let scale = b.length().max(1e-12);
            prop_assert!(
                (*a - *b).length() / scale < 1e-9,
                "lane kernel {a:?} != scalar {b:?}"
            );
        }
    }
}
