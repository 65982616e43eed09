//! Core types and configuration for the gravity sandbox.
//!
//! All quantities are in abstract simulation units: distance in world units,
//! time in ticks, mass proportional to disc area (`mass = pi * radius^2`).

use glam::DVec2;
use std::f64::consts::PI;

/// Default gravitational constant.
pub const DEFAULT_G: f64 = 1.0;

/// Default softening floor on squared pair distance.
///
/// Every distance-derived quantity (force, potential) clamps the squared
/// separation to at least this value, so coincident bodies never produce
/// infinities or unbounded acceleration spikes.
pub const DEFAULT_SOFTENING_SQ: f64 = 1.0;

/// Default collision dampening factor.
///
/// Scales the elastic impulse slightly below 1 to bleed off the numerical
/// energy gain that discrete-time collision resolution injects.
pub const DEFAULT_DAMPENING: f64 = 0.999;

/// Default number of retained history snapshots.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Position magnitude beyond which the simulation is considered diverged.
///
/// The interactive world is on the order of hundreds of units across; 1e12
/// leaves room for slingshot ejections while still catching runaway state
/// long before f64 precision degrades.
pub const DIVERGENCE_LIMIT: f64 = 1e12;

/// Mass of a body from its radius (area-proportional mass model).
///
/// This is the only place the mass model lives; every radius mutation must
/// go back through it.
#[inline]
pub fn mass_from_radius(radius: f64) -> f64 {
    PI * radius * radius
}

/// Numerical integration scheme, selected per `step` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Integrator {
    /// Semi-implicit Euler: one force evaluation per step. Cheap, drifts.
    #[default]
    Euler,
    /// Classic 4th-order Runge-Kutta: four force evaluations per step,
    /// materially better energy conservation for the same dt.
    Rk4,
}

/// Engine-level configuration, fixed at construction.
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Gravitational constant.
    pub g: f64,
    /// Softening floor on squared pair distance.
    pub softening_sq: f64,
    /// Collision impulse dampening factor (< 1).
    pub dampening: f64,
    /// Number of past snapshots retained for trail rendering.
    pub history_capacity: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            g: DEFAULT_G,
            softening_sq: DEFAULT_SOFTENING_SQ,
            dampening: DEFAULT_DAMPENING,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

/// Per-call stepping parameters.
///
/// Everything that varies between ticks travels in the call itself, so a
/// step is reproducible from its arguments alone.
#[derive(Clone, Copy, Debug)]
pub struct StepConfig {
    /// Time step per sub-step.
    pub dt: f64,
    /// Integration scheme.
    pub integrator: Integrator,
    /// Whether to resolve collisions after each sub-step.
    pub collisions: bool,
    /// Number of sub-steps per call.
    pub substeps: u32,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            dt: 1.0,
            integrator: Integrator::Euler,
            collisions: false,
            substeps: 1,
        }
    }
}

/// Per-call trajectory forecast parameters.
#[derive(Clone, Copy, Debug)]
pub struct ForecastConfig {
    /// Time step per forecast step.
    pub dt: f64,
    /// Number of forward steps to simulate.
    pub steps: usize,
    /// Integration scheme for the forward run.
    pub integrator: Integrator,
    /// Whether the forward run resolves collisions.
    pub collisions: bool,
    /// Points closer than this to the last accepted point are dropped.
    pub min_segment_len: f64,
    /// Gaps wider than this start a new polyline segment.
    pub max_segment_len: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            dt: 1.0,
            steps: 100,
            integrator: Integrator::Euler,
            collisions: false,
            min_segment_len: 1.0,
            max_segment_len: 100.0,
        }
    }
}

/// Read-only view of one body, as returned by the engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    /// Position in world units.
    pub position: DVec2,
    /// Velocity in world units per tick.
    pub velocity: DVec2,
    /// Disc radius.
    pub radius: f64,
    /// Derived mass (`pi * radius^2`).
    pub mass: f64,
}
