//! Proximity graph over the hazard sample set.
//!
//! Nodes are indices into the sample collection; undirected edges connect
//! pairs within a fixed geodesic radius. Edge weight combines distance with
//! the mean risk of the two endpoints, so risk only ever penalizes a path.
//! The graph is rebuilt fresh for each planning call; the O(n²) pairwise
//! build is acceptable for a small, static dataset. A spatial index would be
//! the replacement if the dataset grows.

use crate::models::{Coordinate, HazardSample};
use crate::risk::risk_score;
use crate::spatial::haversine_distance;

pub const DEFAULT_CONNECTION_RADIUS_M: f64 = 500.0;

/// Divisor converting mean risk into a weight multiplier:
/// `weight = distance * (1 + avg_risk / 50)`.
const RISK_WEIGHT_DIVISOR: f64 = 50.0;

#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub to: usize,
    pub weight: f64,
}

#[derive(Debug, Clone)]
pub struct ProximityGraph {
    adjacency: Vec<Vec<Edge>>,
}

impl ProximityGraph {
    /// Build the graph over `samples`, connecting every unordered pair whose
    /// geodesic distance is within `radius_m`.
    ///
    /// Isolated nodes are valid; they are simply unreachable from the rest.
    /// Risk scores are computed once per sample for the build.
    pub fn build(samples: &[HazardSample], radius_m: f64) -> Self {
        let risks: Vec<f64> = samples.iter().map(risk_score).collect();
        let mut adjacency: Vec<Vec<Edge>> = vec![Vec::new(); samples.len()];
        let mut edge_count = 0usize;

        for i in 0..samples.len() {
            for j in (i + 1)..samples.len() {
                let distance =
                    haversine_distance(samples[i].coordinate(), samples[j].coordinate());
                if distance <= radius_m {
                    let avg_risk = (risks[i] + risks[j]) / 2.0;
                    let weight = distance * (1.0 + avg_risk / RISK_WEIGHT_DIVISOR);
                    adjacency[i].push(Edge { to: j, weight });
                    adjacency[j].push(Edge { to: i, weight });
                    edge_count += 1;
                }
            }
        }

        tracing::debug!(
            nodes = samples.len(),
            edges = edge_count,
            radius_m,
            "proximity graph built"
        );

        Self { adjacency }
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn neighbors(&self, node: usize) -> &[Edge] {
        &self.adjacency[node]
    }
}

/// Nearest hazard sample to `point` by geodesic distance.
///
/// Linear scan; ties resolve to the first-encountered sample. `None` only
/// when the collection is empty.
pub fn nearest_sample<'a>(
    point: Coordinate,
    samples: &'a [HazardSample],
) -> Option<(usize, &'a HazardSample)> {
    let mut nearest: Option<(usize, &HazardSample)> = None;
    let mut min_distance = f64::INFINITY;

    for (index, sample) in samples.iter().enumerate() {
        let distance = haversine_distance(point, sample.coordinate());
        if distance < min_distance {
            min_distance = distance;
            nearest = Some((index, sample));
        }
    }

    nearest
}
