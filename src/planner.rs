//! Minimum-risk route planning over the proximity graph.
//!
//! A* from the start's nearest sample to the end's nearest sample. The
//! heuristic is plain geodesic distance to the goal node; every edge weight
//! is at least its underlying geodesic distance, so the heuristic never
//! overestimates remaining cost and the search returns the minimum-weight
//! path whenever one exists.
//!
//! Planning never fails for reachability reasons: an empty dataset or an
//! exhausted frontier resolves to the degenerate two-point path
//! `[start, end]`.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::NavError;
use crate::graph::{nearest_sample, ProximityGraph, DEFAULT_CONNECTION_RADIUS_M};
use crate::models::{Coordinate, HazardSample};
use crate::smoother::{smooth_route, DEFAULT_SMOOTHING_FACTOR};
use crate::spatial::haversine_distance;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutePlannerConfig {
    /// Maximum geodesic distance between two samples that still produces a
    /// graph edge.
    pub connection_radius_m: f64,
    /// Factor handed to the smoothing pass by [`plan_smoothed_route`].
    pub smoothing_factor: f64,
}

impl Default for RoutePlannerConfig {
    fn default() -> Self {
        Self {
            connection_radius_m: DEFAULT_CONNECTION_RADIUS_M,
            smoothing_factor: DEFAULT_SMOOTHING_FACTOR,
        }
    }
}

/// Total order over f64 for use inside the frontier heap.
#[derive(Debug, Clone, Copy)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenNode {
    node: usize,
    g_score: FloatOrd,
    f_score: FloatOrd,
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_score
            .cmp(&other.f_score)
            .then_with(|| self.g_score.cmp(&other.g_score))
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Plan a minimum-risk-weighted path from `start` to `end`.
///
/// The returned path begins with the literal `start`, ends with the literal
/// `end`, and carries zero or more hazard sample coordinates in between in
/// traversal order. Errors only on invalid input coordinates; all search
/// failures resolve to the `[start, end]` fallback.
pub fn plan_route(
    start: Coordinate,
    end: Coordinate,
    samples: &[HazardSample],
    config: &RoutePlannerConfig,
) -> Result<Vec<Coordinate>, NavError> {
    start.validate()?;
    end.validate()?;

    let (Some((start_idx, _)), Some((goal_idx, goal_sample))) =
        (nearest_sample(start, samples), nearest_sample(end, samples))
    else {
        tracing::debug!("empty hazard dataset, returning direct path");
        return Ok(vec![start, end]);
    };

    let graph = ProximityGraph::build(samples, config.connection_radius_m);
    let goal_coord = goal_sample.coordinate();

    match search(&graph, samples, start_idx, goal_idx, goal_coord) {
        Some(intermediates) => {
            let mut path = Vec::with_capacity(intermediates.len() + 2);
            path.push(start);
            path.extend(
                intermediates
                    .into_iter()
                    .map(|node| samples[node].coordinate()),
            );
            path.push(end);
            Ok(path)
        }
        None => {
            tracing::debug!(start_idx, goal_idx, "goal unreachable, returning direct path");
            Ok(vec![start, end])
        }
    }
}

/// Plan and smooth in one call, mirroring how the host application displays
/// routes.
pub fn plan_smoothed_route(
    start: Coordinate,
    end: Coordinate,
    samples: &[HazardSample],
    config: &RoutePlannerConfig,
) -> Result<Vec<Coordinate>, NavError> {
    let path = plan_route(start, end, samples, config)?;
    Ok(smooth_route(&path, config.smoothing_factor))
}

/// A* over the proximity graph.
///
/// Returns the traversed node indices from the start node up to (and
/// excluding) the goal node, in forward order; the literal end point stands
/// in for the goal node's coordinate. `None` when the frontier empties
/// before reaching the goal.
///
/// The frontier tolerates duplicate entries: relaxation pushes a fresh entry
/// whenever a node's gScore improves, and a popped entry whose recorded
/// gScore is stale is skipped. This keeps the best-scored pop authoritative
/// without decrease-key support.
fn search(
    graph: &ProximityGraph,
    samples: &[HazardSample],
    start_idx: usize,
    goal_idx: usize,
    goal_coord: Coordinate,
) -> Option<Vec<usize>> {
    let mut open_set: BinaryHeap<Reverse<OpenNode>> = BinaryHeap::new();
    let mut closed_set: HashSet<usize> = HashSet::new();
    let mut came_from: HashMap<usize, usize> = HashMap::new();
    let mut g_score: HashMap<usize, f64> = HashMap::new();

    let start_h = haversine_distance(samples[start_idx].coordinate(), goal_coord);
    g_score.insert(start_idx, 0.0);
    open_set.push(Reverse(OpenNode {
        node: start_idx,
        g_score: FloatOrd(0.0),
        f_score: FloatOrd(start_h),
    }));

    while let Some(Reverse(current)) = open_set.pop() {
        if closed_set.contains(&current.node) {
            continue;
        }
        // Stale duplicate: a better entry for this node was already pushed.
        if g_score
            .get(&current.node)
            .is_some_and(|best| current.g_score.0 > *best)
        {
            continue;
        }

        if current.node == goal_idx {
            let mut intermediates = Vec::new();
            let mut node = current.node;
            while let Some(&prev) = came_from.get(&node) {
                node = prev;
                intermediates.push(node);
            }
            intermediates.reverse();
            return Some(intermediates);
        }

        closed_set.insert(current.node);

        for edge in graph.neighbors(current.node) {
            if closed_set.contains(&edge.to) {
                continue;
            }

            let tentative_g = current.g_score.0 + edge.weight;
            let improved = g_score
                .get(&edge.to)
                .map_or(true, |best| tentative_g < *best);
            if !improved {
                continue;
            }

            came_from.insert(edge.to, current.node);
            g_score.insert(edge.to, tentative_g);

            let h = haversine_distance(samples[edge.to].coordinate(), goal_coord);
            open_set.push(Reverse(OpenNode {
                node: edge.to,
                g_score: FloatOrd(tentative_g),
                f_score: FloatOrd(tentative_g + h),
            }));
        }
    }

    None
}
