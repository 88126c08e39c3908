//! Core domain traits for the trayecto planner.
//!
//! These are intentionally minimal and domain-agnostic. Concrete apps should
//! implement them for their own data models.

use std::hash::Hash;

/// Unique identifier for planner entities.
pub trait Id: Clone + Eq + Hash {}

impl<T> Id for T where T: Clone + Eq + Hash {}

/// A stop is a single geocoded location to be visited.
pub trait Stop {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    /// Display name for checklists and map popups.
    fn name(&self) -> &str;

    /// Location coordinates (lat, lng).
    ///
    /// Both coordinates must be present and numeric before a stop reaches
    /// the planner; upstream loading is responsible for dropping records
    /// with missing coordinates.
    fn location(&self) -> (f64, f64);
}
