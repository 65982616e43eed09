//! Struct-of-arrays body storage.
//!
//! Bodies live in four parallel arrays (positions, velocities, masses,
//! radii) indexed by insertion order. The arrays stay index-aligned at
//! every observable point: add and remove mutate all four together, and
//! removal shifts later indices down by one. Callers holding an index
//! across a removal must treat it as invalidated.

use glam::DVec2;

use crate::types::{Body, mass_from_radius};

/// Errors surfaced by body management and read access.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
    #[error("body index {index} out of range ({len} bodies)")]
    InvalidIndex { index: usize, len: usize },
}

/// The simulation state: every body's position, velocity, mass and radius.
///
/// Mass is derived from radius and recomputed whenever the radius changes;
/// it is stored separately only so the force loop reads a flat array.
#[derive(Clone, Debug, Default)]
pub struct SimState {
    pub(crate) positions: Vec<DVec2>,
    pub(crate) velocities: Vec<DVec2>,
    pub(crate) masses: Vec<f64>,
    pub(crate) radii: Vec<f64>,
}

impl SimState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Append a body to all four arrays. Returns its index.
    ///
    /// Radius must be positive and finite; mass is derived from it.
    pub fn add_body(&mut self, radius: f64, position: DVec2, velocity: DVec2) -> usize {
        debug_assert!(radius > 0.0 && radius.is_finite());
        self.positions.push(position);
        self.velocities.push(velocity);
        self.masses.push(mass_from_radius(radius));
        self.radii.push(radius);
        self.positions.len() - 1
    }

    /// Remove a body from all four arrays, shifting later indices down.
    ///
    /// Rejected with `InvalidIndex` before any array is touched.
    pub fn remove_body(&mut self, index: usize) -> Result<(), SimError> {
        if index >= self.len() {
            return Err(SimError::InvalidIndex {
                index,
                len: self.len(),
            });
        }
        self.positions.remove(index);
        self.velocities.remove(index);
        self.masses.remove(index);
        self.radii.remove(index);
        Ok(())
    }

    /// Resize a body, recomputing its mass in the same call.
    pub fn set_radius(&mut self, index: usize, radius: f64) -> Result<(), SimError> {
        debug_assert!(radius > 0.0 && radius.is_finite());
        if index >= self.len() {
            return Err(SimError::InvalidIndex {
                index,
                len: self.len(),
            });
        }
        self.radii[index] = radius;
        self.masses[index] = mass_from_radius(radius);
        Ok(())
    }

    pub fn positions(&self) -> &[DVec2] {
        &self.positions
    }

    pub fn velocities(&self) -> &[DVec2] {
        &self.velocities
    }

    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    pub fn radii(&self) -> &[f64] {
        &self.radii
    }

    /// Read-only view of one body.
    pub fn body(&self, index: usize) -> Result<Body, SimError> {
        if index >= self.len() {
            return Err(SimError::InvalidIndex {
                index,
                len: self.len(),
            });
        }
        Ok(Body {
            position: self.positions[index],
            velocity: self.velocities[index],
            radius: self.radii[index],
            mass: self.masses[index],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_add_body_aligns_arrays() {
        let mut state = SimState::new();
        let a = state.add_body(20.0, DVec2::new(1.0, 2.0), DVec2::new(3.0, 4.0));
        let b = state.add_body(5.0, DVec2::ZERO, DVec2::ZERO);
        assert_eq!((a, b), (0, 1));
        assert_eq!(state.len(), 2);
        assert_eq!(state.positions().len(), state.velocities().len());
        assert_eq!(state.masses().len(), state.radii().len());
        assert_relative_eq!(state.masses()[0], PI * 400.0);
    }

    #[test]
    fn test_remove_shifts_later_indices() {
        let mut state = SimState::new();
        state.add_body(1.0, DVec2::new(0.0, 0.0), DVec2::ZERO);
        state.add_body(2.0, DVec2::new(1.0, 0.0), DVec2::ZERO);
        state.add_body(3.0, DVec2::new(2.0, 0.0), DVec2::ZERO);

        state.remove_body(1).unwrap();
        assert_eq!(state.len(), 2);
        assert_eq!(state.radii(), &[1.0, 3.0]);
        assert_eq!(state.positions()[1], DVec2::new(2.0, 0.0));
    }

    #[test]
    fn test_remove_out_of_range_is_rejected() {
        let mut state = SimState::new();
        state.add_body(1.0, DVec2::ZERO, DVec2::ZERO);
        let before = state.clone();

        let err = state.remove_body(5).unwrap_err();
        assert_eq!(err, SimError::InvalidIndex { index: 5, len: 1 });
        assert_eq!(state.positions(), before.positions());
        assert_eq!(state.radii(), before.radii());
    }

    #[test]
    fn test_set_radius_recomputes_mass() {
        let mut state = SimState::new();
        state.add_body(10.0, DVec2::ZERO, DVec2::ZERO);
        state.set_radius(0, 20.0).unwrap();
        assert_relative_eq!(state.masses()[0], PI * 400.0);
        assert!(state.set_radius(3, 1.0).is_err());
    }
}
