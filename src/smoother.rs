//! Display smoothing for planned routes.

use crate::models::Coordinate;

pub const DEFAULT_SMOOTHING_FACTOR: f64 = 0.5;

/// Pull each interior point toward the midpoint of its original neighbors.
///
/// Endpoints are preserved exactly. The pass reads only the *original* path,
/// so earlier smoothed outputs never feed later interior computations.
/// `factor = 0` is the identity; `factor = 1` replaces each interior point
/// with the exact midpoint of its original neighbors. Paths of two or fewer
/// points are returned unchanged.
pub fn smooth_route(path: &[Coordinate], factor: f64) -> Vec<Coordinate> {
    if path.len() <= 2 {
        return path.to_vec();
    }

    let mut smoothed = Vec::with_capacity(path.len());
    smoothed.push(path[0]);

    for i in 1..path.len() - 1 {
        let prev = path[i - 1];
        let current = path[i];
        let next = path[i + 1];

        smoothed.push(Coordinate::new(
            current.latitude * (1.0 - factor) + (prev.latitude + next.latitude) / 2.0 * factor,
            current.longitude * (1.0 - factor) + (prev.longitude + next.longitude) / 2.0 * factor,
        ));
    }

    smoothed.push(path[path.len() - 1]);
    smoothed
}
