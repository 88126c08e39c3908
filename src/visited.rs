//! Session-scoped visited-stop tracking.

use std::collections::HashSet;

use crate::traits::Id;

/// The set of stop identifiers excluded from planning.
///
/// One log per session; the host owns it and passes it explicitly to
/// [`plan`](crate::planner::plan). The log never validates identifiers
/// against the stop repository, so marking an unknown id simply records it.
///
/// `revision` increases exactly when the set's contents change, letting
/// hosts detect that previously computed trayectos are stale without
/// diffing the set itself.
#[derive(Debug, Clone)]
pub struct VisitLog<I: Id> {
    visited: HashSet<I>,
    revision: u64,
}

impl<I: Id> VisitLog<I> {
    pub fn new() -> Self {
        Self {
            visited: HashSet::new(),
            revision: 0,
        }
    }

    /// Record a stop as visited. Idempotent: re-marking an already visited
    /// stop changes nothing and leaves the revision untouched.
    ///
    /// Returns `true` if the stop was newly marked.
    pub fn mark_visited(&mut self, stop_id: I) -> bool {
        let changed = self.visited.insert(stop_id);
        if changed {
            self.revision += 1;
        }
        changed
    }

    pub fn is_visited(&self, stop_id: &I) -> bool {
        self.visited.contains(stop_id)
    }

    /// Clear the log entirely. Resetting an already empty log is a no-op.
    pub fn reset(&mut self) {
        if !self.visited.is_empty() {
            self.visited.clear();
            self.revision += 1;
        }
    }

    /// Monotone counter bumped on every effective mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }
}

impl<I: Id> Default for VisitLog<I> {
    fn default() -> Self {
        Self::new()
    }
}
