//! Trajectory forecasting.
//!
//! Forward-simulates a deep copy of the live state and turns each body's
//! path into polyline segments ready for rendering. The copy means the
//! live simulation is never touched; every call recomputes from scratch
//! and the output carries no identity across frames.
//!
//! Raw per-step points are decimated before they become polylines:
//!
//! - a leading run of giant jumps is skipped entirely (a body that was
//!   just placed or teleported produces meaningless first segments),
//! - points closer than `min_segment_len` to the last accepted point are
//!   dropped as visual noise,
//! - a gap wider than `max_segment_len` ends the current segment and
//!   starts a new one, rendering as a visible break.
//!
//! Every accepted point carries a progress fraction in (0, 1] so the host
//! can fade the line toward the far future.

use glam::DVec2;

use crate::physics;
use crate::state::SimState;
use crate::types::{ForecastConfig, SimulationConfig, StepConfig};

/// Leading jumps longer than this multiple of `max_segment_len` are
/// treated as placement artifacts and skipped.
const DISCONTINUITY_FACTOR: f64 = 4.0;

/// One accepted forecast point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectoryPoint {
    /// Predicted position in world units.
    pub position: DVec2,
    /// Fraction of the forecast horizon elapsed, in (0, 1].
    pub progress: f64,
}

/// A drawable run of forecast points for one body.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    /// Index of the body this segment belongs to.
    pub body: usize,
    /// At least two points, consecutive gaps within the configured band.
    pub points: Vec<TrajectoryPoint>,
}

/// Forecast every body's path over `forecast.steps` steps of `forecast.dt`.
///
/// The input state is cloned; the live arrays are never mutated.
pub fn forecast(
    state: &SimState,
    forecast: &ForecastConfig,
    config: &SimulationConfig,
) -> Vec<Polyline> {
    let n = state.len();
    let steps = forecast.steps;
    if n == 0 || steps == 0 {
        return Vec::new();
    }

    let mut scratch = state.clone();
    let step = StepConfig {
        dt: forecast.dt,
        integrator: forecast.integrator,
        collisions: forecast.collisions,
        substeps: 1,
    };

    let mut tracks: Vec<Vec<TrajectoryPoint>> = vec![Vec::with_capacity(steps); n];
    for index in 1..=steps {
        physics::advance(&mut scratch, &step, config);
        let progress = index as f64 / steps as f64;
        for (body, track) in tracks.iter_mut().enumerate() {
            track.push(TrajectoryPoint {
                position: scratch.positions[body],
                progress,
            });
        }
    }

    let mut polylines = Vec::new();
    for (body, track) in tracks.into_iter().enumerate() {
        decimate(body, &track, forecast, &mut polylines);
    }
    polylines
}

/// Turn one body's raw track into zero or more polyline segments.
fn decimate(
    body: usize,
    track: &[TrajectoryPoint],
    forecast: &ForecastConfig,
    out: &mut Vec<Polyline>,
) {
    let discontinuity = forecast.max_segment_len * DISCONTINUITY_FACTOR;

    // Skip the leading run of placement jumps.
    let mut start = 0;
    while start + 1 < track.len()
        && track[start]
            .position
            .distance(track[start + 1].position)
            > discontinuity
    {
        start += 1;
    }
    let Some(first) = track.get(start) else {
        return;
    };

    let mut current = vec![*first];
    let mut last_accepted = first.position;

    for point in &track[start + 1..] {
        let gap = point.position.distance(last_accepted);
        if gap < forecast.min_segment_len {
            continue;
        }
        if gap > forecast.max_segment_len {
            flush(body, &mut current, out);
            current.push(*point);
        } else {
            current.push(*point);
        }
        last_accepted = point.position;
    }
    flush(body, &mut current, out);
}

/// Emit `current` as a polyline if it can be drawn, and reset it.
fn flush(body: usize, current: &mut Vec<TrajectoryPoint>, out: &mut Vec<Polyline>) {
    if current.len() >= 2 {
        out.push(Polyline {
            body,
            points: std::mem::take(current),
        });
    } else {
        current.clear();
    }
}
