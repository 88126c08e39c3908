//! Test fixtures for trayecto-planner.
//!
//! Provides realistic school stops from the Santo Domingo area, matching
//! the shape of the production dataset.

pub mod santo_domingo_stops;

pub use santo_domingo_stops::*;
