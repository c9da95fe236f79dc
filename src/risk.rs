//! Hazard risk scoring.
//!
//! Converts one sample's raw road metrics into a scalar score of roughly
//! [0, 100]. The score is deterministic and recomputed on demand; inputs are
//! immutable so callers may memoize it per sample.

use crate::models::HazardSample;

const POTHOLE_WEIGHT: f64 = 0.3;
const BARRICADE_WEIGHT: f64 = 0.2;
const VISIBILITY_WEIGHT: f64 = 0.3;
const VEHICLE_WEIGHT: f64 = 0.2;

const POTHOLE_SCALE: f64 = 10.0;
const VISIBILITY_SCALE_M: f64 = 5000.0;
const VEHICLE_SCALE: f64 = 50.0;

/// Weighted risk score for a hazard sample.
///
/// No clamping is applied: extreme inputs (e.g. 40 potholes) can push the
/// score outside the nominal [0, 100] range. That is accepted behavior; the
/// planner only needs risk to penalize edge weights monotonically.
pub fn risk_score(sample: &HazardSample) -> f64 {
    let potholes = f64::from(sample.potholes) / POTHOLE_SCALE;
    let barricades = f64::from(sample.barricades);
    let visibility = 1.0 - sample.visibility_m / VISIBILITY_SCALE_M;
    let vehicles = f64::from(sample.big_vehicles + sample.parked_vehicles) / VEHICLE_SCALE;

    (potholes * POTHOLE_WEIGHT
        + barricades * BARRICADE_WEIGHT
        + visibility * VISIBILITY_WEIGHT
        + vehicles * VEHICLE_WEIGHT)
        * 100.0
}
