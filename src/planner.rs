//! Trayecto planner engine (longitude sweep + nearest-neighbour sequencing).
//!
//! The engine is a pure function of its inputs: identical stops, visit log
//! and options always produce identical output. Callers mutate the
//! [`VisitLog`](crate::visited::VisitLog) first, then call [`plan`] again
//! for fresh output.

use thiserror::Error;
use tracing::debug;

use crate::traits::Stop;
use crate::visited::VisitLog;

#[derive(Debug, Clone)]
pub struct PlanOptions {
    /// Maximum number of stops per trayecto.
    pub group_size: usize,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self { group_size: 5 }
    }
}

/// One trayecto: a bounded-size cluster of stops in visiting order.
///
/// `trayecto` is the 1-based position of the group in the west-to-east
/// sweep and is stable across recomputations with identical inputs, so
/// external consumers may key colours or labels on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGroup<I> {
    pub trayecto: u32,
    pub stop_ids: Vec<I>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    /// Group capacity below 1 is a configuration mistake; it is surfaced
    /// rather than clamped.
    #[error("group size must be at least 1, got {0}")]
    InvalidGroupSize(usize),
}

/// Split pending stops into contiguous chunks of at most `group_size`,
/// swept west to east.
///
/// The sort is stable: stops sharing a longitude keep their input order,
/// so repeated calls over the same input chunk identically. An empty input
/// yields no chunks.
pub fn partition<'a, S: Stop>(
    pending: &[&'a S],
    group_size: usize,
) -> Result<Vec<Vec<&'a S>>, PlanError> {
    if group_size < 1 {
        return Err(PlanError::InvalidGroupSize(group_size));
    }

    let mut swept: Vec<&S> = pending.to_vec();
    swept.sort_by(|a, b| a.location().1.total_cmp(&b.location().1));

    Ok(swept.chunks(group_size).map(|chunk| chunk.to_vec()).collect())
}

/// Order one chunk of stops for visiting (greedy nearest neighbour).
///
/// Starts from the chunk's first stop (the westernmost after the sweep) and
/// repeatedly appends the closest unplaced stop by squared planar distance.
/// Equidistant candidates resolve to the earliest in input order. The output
/// is always a permutation of the input.
pub fn sequence<'a, S: Stop>(chunk: Vec<&'a S>) -> Vec<&'a S> {
    if chunk.len() < 2 {
        return chunk;
    }

    let mut remaining = chunk;
    let mut current = remaining.remove(0);
    let mut ordered = vec![current];

    while !remaining.is_empty() {
        let here = current.location();
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (i, candidate) in remaining.iter().enumerate() {
            let dist = squared_distance(here, candidate.location());
            // Strict comparison keeps the first of any equidistant pair.
            if dist < best_dist {
                best_dist = dist;
                best = i;
            }
        }
        current = remaining.remove(best);
        ordered.push(current);
    }

    ordered
}

/// Compute the full set of trayectos for the stops not yet visited.
///
/// Filters `all_stops` through `visit_log`, partitions the pending stops
/// and sequences each chunk, attaching its 1-based trayecto index. Every
/// pending stop appears in exactly one group.
pub fn plan<S: Stop>(
    all_stops: &[S],
    visit_log: &VisitLog<S::Id>,
    options: PlanOptions,
) -> Result<Vec<RouteGroup<S::Id>>, PlanError> {
    let pending: Vec<&S> = all_stops
        .iter()
        .filter(|stop| !visit_log.is_visited(stop.id()))
        .collect();

    debug!(
        total = all_stops.len(),
        pending = pending.len(),
        "filtered visited stops"
    );

    let chunks = partition(&pending, options.group_size)?;

    debug!(
        groups = chunks.len(),
        group_size = options.group_size,
        "partitioned pending stops"
    );

    Ok(chunks
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| RouteGroup {
            trayecto: (i + 1) as u32,
            stop_ids: sequence(chunk)
                .into_iter()
                .map(|stop| stop.id().clone())
                .collect(),
        })
        .collect())
}

fn squared_distance(from: (f64, f64), to: (f64, f64)) -> f64 {
    let d_lat = from.0 - to.0;
    let d_lng = from.1 - to.1;
    d_lat * d_lat + d_lng * d_lng
}
