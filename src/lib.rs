//! trayecto-planner core
//!
//! Partitions pending school stops into bounded-size trayectos and sequences
//! each one into a visitable order, tracking visited stops across
//! recomputations.

pub mod traits;
pub mod planner;
pub mod visited;
pub mod record;
