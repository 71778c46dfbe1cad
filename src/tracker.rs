//! This module defines the `RunTracker`, the per-run accumulator of step
//! counts, head moves, and the visited-state path. It is mutated only by the
//! execution engine and read by reporting collaborators after a run.

use crate::types::{State, INITIAL_STATE};
use serde::{Deserialize, Serialize};

/// Counters and the state path for one simulation run.
///
/// Invariants on a clean run: counters are monotonic, `head_move_count()` is
/// at most `step_count()`, and the path holds one entry per step plus the
/// seeded initial state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunTracker {
    step_count: usize,
    head_move_count: usize,
    path: Vec<State>,
}

impl RunTracker {
    /// Creates a tracker seeded with the initial state.
    pub fn new() -> Self {
        Self {
            step_count: 0,
            head_move_count: 0,
            path: vec![INITIAL_STATE],
        }
    }

    /// Counts one attempted transition. Called before rule lookup, so a step
    /// that fails with a missing rule is still counted.
    pub(crate) fn count_step(&mut self) {
        self.step_count += 1;
    }

    /// Counts one non-Stay head displacement.
    pub(crate) fn count_head_move(&mut self) {
        self.head_move_count += 1;
    }

    /// Appends the state entered by a completed transition.
    pub(crate) fn visit(&mut self, state: State) {
        self.path.push(state);
    }

    /// The number of attempted transitions so far.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// The number of transitions whose direction actually moved the head.
    pub fn head_move_count(&self) -> usize {
        self.head_move_count
    }

    /// The ordered sequence of control states visited, starting at state 1.
    pub fn path(&self) -> &[State] {
        &self.path
    }
}

impl Default for RunTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tracker_is_seeded_with_initial_state() {
        let tracker = RunTracker::new();

        assert_eq!(tracker.step_count(), 0);
        assert_eq!(tracker.head_move_count(), 0);
        assert_eq!(tracker.path(), &[INITIAL_STATE]);
    }

    #[test]
    fn test_path_length_tracks_step_count() {
        let mut tracker = RunTracker::new();

        tracker.count_step();
        tracker.visit(2);
        tracker.count_step();
        tracker.visit(0);

        assert_eq!(tracker.path().len(), tracker.step_count() + 1);
        assert_eq!(tracker.path(), &[1, 2, 0]);
    }

    #[test]
    fn test_head_moves_never_exceed_steps() {
        let mut tracker = RunTracker::new();

        tracker.count_step();
        tracker.count_head_move();
        tracker.visit(2);

        assert!(tracker.head_move_count() <= tracker.step_count());
    }
}
