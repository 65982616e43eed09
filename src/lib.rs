//! Gravibox - 2-D N-body gravity sandbox core
//!
//! A headless simulation library: extended bodies under mutual Newtonian
//! gravity, pairwise elastic collisions, a bounded rolling history for
//! trail rendering, and non-mutating trajectory forecasts. Windowing,
//! input, cameras and drawing are the host's business; it drives the
//! [`Simulation`] facade once per tick and reads state back.

pub mod collision;
pub mod energy;
pub mod engine;
pub mod history;
pub mod physics;
pub mod prediction;
pub mod scenarios;
pub mod state;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use engine::Simulation;
pub use history::{HistoryBuffer, HistorySnapshot};
pub use prediction::{Polyline, TrajectoryPoint};
pub use state::{SimError, SimState};
pub use types::{Body, ForecastConfig, Integrator, SimulationConfig, StepConfig};
