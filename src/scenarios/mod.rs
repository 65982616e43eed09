//! Preset starting arrangements.
//!
//! A scenario is just a recipe producing body seeds; spawning them into a
//! `Simulation` is a one-liner. Deterministic presets live in `presets`;
//! `random_cloud` reproduces the sandbox spawner's randomized bodies and
//! takes the caller's RNG so runs stay reproducible.

pub mod presets;

use glam::DVec2;
use rand::Rng;

use crate::engine::Simulation;

pub use presets::{figure_eight, ngon};

/// Initial conditions for one body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodySeed {
    pub radius: f64,
    pub position: DVec2,
    pub velocity: DVec2,
}

/// Add every seed to the simulation, in order.
pub fn spawn(sim: &mut Simulation, seeds: &[BodySeed]) {
    for seed in seeds {
        sim.add_body(seed.radius, seed.position, seed.velocity);
    }
}

/// Randomized sandbox bodies: radius in [5, 50), position in [0, 500)^2,
/// velocity in [-1, 1)^2.
pub fn random_cloud<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<BodySeed> {
    (0..count)
        .map(|_| BodySeed {
            radius: rng.random_range(5.0..50.0),
            position: DVec2::new(rng.random_range(0.0..500.0), rng.random_range(0.0..500.0)),
            velocity: DVec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_spawn_adds_all_seeds() {
        let mut sim = Simulation::default();
        spawn(&mut sim, &ngon(4));
        assert_eq!(sim.body_count(), 4);
    }

    #[test]
    fn test_random_cloud_is_reproducible() {
        let a = random_cloud(10, &mut StdRng::seed_from_u64(7));
        let b = random_cloud(10, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert!(a.iter().all(|s| (5.0..50.0).contains(&s.radius)));
    }
}
