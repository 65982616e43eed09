//! The simulation engine facade.
//!
//! `Simulation` owns the body arrays, the rolling history, and the
//! engine-level configuration, and keeps them in lockstep: body add and
//! remove mutate the state arrays and the history columns as one logical
//! update, and every `step` appends one history snapshot.
//!
//! The engine is single-threaded by contract: the host drives it with at
//! most one mutating call in flight. Forecasts run on a private deep copy
//! and are safe to move to another thread once the copy is taken under
//! the same discipline.

use glam::DVec2;
use log::warn;

use crate::history::{HistoryBuffer, HistorySnapshot};
use crate::physics;
use crate::prediction::{self, Polyline};
use crate::state::{SimError, SimState};
use crate::energy;
use crate::types::{Body, ForecastConfig, SimulationConfig, StepConfig};

/// A gravity sandbox: bodies, their bounded history, and the knobs.
#[derive(Clone, Debug)]
pub struct Simulation {
    state: SimState,
    history: HistoryBuffer,
    config: SimulationConfig,
    diverged: bool,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Self {
        let history = HistoryBuffer::new(config.history_capacity);
        Self {
            state: SimState::new(),
            history,
            config,
            diverged: false,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn body_count(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Add a body and backfill its history column. Returns its index.
    pub fn add_body(&mut self, radius: f64, position: DVec2, velocity: DVec2) -> usize {
        let index = self.state.add_body(radius, position, velocity);
        self.history.add_column(position, velocity);
        index
    }

    /// Remove a body and its history column; later indices shift down.
    pub fn remove_body(&mut self, index: usize) -> Result<(), SimError> {
        self.state.remove_body(index)?;
        self.history.remove_column(index);
        Ok(())
    }

    /// Resize a body; its mass is recomputed in the same update.
    pub fn set_radius(&mut self, index: usize, radius: f64) -> Result<(), SimError> {
        self.state.set_radius(index, radius)
    }

    /// Advance the simulation and record the resulting snapshot.
    ///
    /// The step itself is defined entirely by `step` plus the engine
    /// config. After stepping, the state is scanned for divergence; the
    /// flag is sticky and the state is left exactly as the physics
    /// produced it; deciding to reset is the host's call.
    pub fn step(&mut self, step: &StepConfig) {
        if self.state.is_empty() {
            return;
        }
        physics::advance(&mut self.state, step, &self.config);
        self.history.push(HistorySnapshot {
            positions: self.state.positions().to_vec(),
            velocities: self.state.velocities().to_vec(),
        });
        if !self.diverged && physics::is_diverged(&self.state) {
            self.diverged = true;
            warn!("simulation diverged: non-finite or runaway body state");
        }
    }

    /// Read-only views of every body, in index order.
    pub fn bodies(&self) -> impl ExactSizeIterator<Item = Body> + '_ {
        (0..self.state.len()).map(|i| self.state.body(i).expect("index in range"))
    }

    pub fn body(&self, index: usize) -> Result<Body, SimError> {
        self.state.body(index)
    }

    /// Direct access to the underlying state arrays.
    pub fn state(&self) -> &SimState {
        &self.state
    }

    /// The raw snapshot ring, for hosts that want velocities too.
    pub fn history_buffer(&self) -> &HistoryBuffer {
        &self.history
    }

    /// Past positions of body `index`, oldest to newest. Empty until the
    /// first step, then grows up to the history capacity.
    pub fn history(&self, index: usize) -> Result<Vec<DVec2>, SimError> {
        if index >= self.state.len() {
            return Err(SimError::InvalidIndex {
                index,
                len: self.state.len(),
            });
        }
        Ok(self.history.column(index))
    }

    /// Forecast every body's path on a private copy of the state.
    pub fn forecast(&self, forecast: &ForecastConfig) -> Vec<Polyline> {
        prediction::forecast(&self.state, forecast, &self.config)
    }

    pub fn kinetic_energy(&self) -> f64 {
        energy::kinetic(&self.state)
    }

    pub fn potential_energy(&self) -> f64 {
        energy::potential(&self.state, &self.config)
    }

    pub fn center_of_mass(&self) -> Option<DVec2> {
        energy::center_of_mass(&self.state)
    }

    /// Sticky divergence signal. The engine never clamps or resets state
    /// behind the host's back; once this reads true, the host decides
    /// whether to rebuild the simulation.
    pub fn diverged(&self) -> bool {
        self.diverged
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}
