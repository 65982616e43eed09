//! Bounded rolling history of past simulation states.
//!
//! The engine pushes one snapshot per step; once the buffer is full the
//! oldest snapshot falls off. Each snapshot holds one column per body, and
//! the columns are kept aligned with the live body set: adding a body
//! backfills its column into every retained snapshot with its current
//! state (it has no real past), removing a body deletes its column
//! everywhere. `column(i)` is then always a valid oldest-to-newest time
//! series for live body `i`.

use std::collections::VecDeque;

use glam::DVec2;

/// Positions and velocities of every body at one past step.
#[derive(Clone, Debug, PartialEq)]
pub struct HistorySnapshot {
    pub positions: Vec<DVec2>,
    pub velocities: Vec<DVec2>,
}

/// Fixed-capacity ring of snapshots, oldest first.
#[derive(Clone, Debug)]
pub struct HistoryBuffer {
    snapshots: VecDeque<HistorySnapshot>,
    capacity: usize,
}

impl HistoryBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            snapshots: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Append a snapshot, evicting the oldest once past capacity.
    pub fn push(&mut self, snapshot: HistorySnapshot) {
        debug_assert_eq!(snapshot.positions.len(), snapshot.velocities.len());
        self.snapshots.push_back(snapshot);
        if self.snapshots.len() > self.capacity {
            self.snapshots.pop_front();
        }
    }

    /// Past positions of body `index`, oldest to newest.
    ///
    /// Index validity against the live body set is the engine's check;
    /// here an absent column simply yields an empty series.
    pub fn column(&self, index: usize) -> Vec<DVec2> {
        self.snapshots
            .iter()
            .filter_map(|snap| snap.positions.get(index).copied())
            .collect()
    }

    /// Backfill a column for a newly added body.
    ///
    /// The body has no real past, so every retained slot gets its current
    /// state.
    pub fn add_column(&mut self, position: DVec2, velocity: DVec2) {
        for snap in &mut self.snapshots {
            snap.positions.push(position);
            snap.velocities.push(velocity);
        }
    }

    /// Delete the column of a removed body from every retained snapshot.
    pub fn remove_column(&mut self, index: usize) {
        for snap in &mut self.snapshots {
            if index < snap.positions.len() {
                snap.positions.remove(index);
                snap.velocities.remove(index);
            }
        }
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
