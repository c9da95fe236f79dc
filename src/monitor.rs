//! Proximity alert engine for live navigation.
//!
//! One `HazardMonitor` is one navigation session: the host creates it when
//! navigation starts, feeds it every position update, and drops or resets it
//! when navigation ends. Keeping sessions as explicit values (rather than a
//! process-wide set) lets concurrent sessions coexist; a host sharing one
//! session across threads wraps it in a lock, since `check_proximity`
//! mutates the notified set.

use std::collections::HashSet;

use chrono::Utc;

use crate::error::NavError;
use crate::models::{Coordinate, HazardSample, HazardWarning};
use crate::spatial::haversine_distance;

pub const DEFAULT_ALERT_RADIUS_M: f64 = 200.0;

const POTHOLE_ALERT_THRESHOLD: u32 = 5;
const LOW_VISIBILITY_THRESHOLD_M: f64 = 2000.0;
const BIG_VEHICLE_ALERT_THRESHOLD: u32 = 10;
const PARKED_VEHICLE_ALERT_THRESHOLD: u32 = 20;

/// Stateful hazard-proximity alert engine.
#[derive(Debug, Clone)]
pub struct HazardMonitor {
    alert_radius_m: f64,
    notified: HashSet<String>,
}

impl Default for HazardMonitor {
    fn default() -> Self {
        Self::new(DEFAULT_ALERT_RADIUS_M)
    }
}

impl HazardMonitor {
    pub fn new(alert_radius_m: f64) -> Self {
        Self {
            alert_radius_m,
            notified: HashSet::new(),
        }
    }

    /// Evaluate one live position update against the hazard set.
    ///
    /// Emits at most one combined warning per hazard per session. A sample
    /// inside the radius that trips no threshold rule stays un-notified and
    /// is re-evaluated on the next call. Invoked once per position update,
    /// not on a timer.
    pub fn check_proximity(
        &mut self,
        position: Coordinate,
        samples: &[HazardSample],
    ) -> Result<Vec<HazardWarning>, NavError> {
        position.validate()?;

        let mut warnings = Vec::new();

        for sample in samples {
            let distance_m = haversine_distance(position, sample.coordinate());
            if distance_m >= self.alert_radius_m {
                continue;
            }

            let hazard_id = sample.hazard_id();
            if self.notified.contains(&hazard_id) {
                continue;
            }

            let messages = threshold_messages(sample);
            if messages.is_empty() {
                continue;
            }

            let warning = HazardWarning {
                hazard_id: hazard_id.clone(),
                coordinate: sample.coordinate(),
                message: messages.join(". "),
                distance_m,
                issued_at: Utc::now(),
            };
            tracing::debug!(hazard_id = %warning.hazard_id, distance_m, "hazard alert emitted");
            self.notified.insert(hazard_id);
            warnings.push(warning);
        }

        Ok(warnings)
    }

    /// Forget all notified hazards; the next proximity pass may warn on them
    /// again.
    pub fn reset(&mut self) {
        self.notified.clear();
    }

    pub fn notified_count(&self) -> usize {
        self.notified.len()
    }
}

fn threshold_messages(sample: &HazardSample) -> Vec<String> {
    let mut messages = Vec::new();

    if sample.potholes > POTHOLE_ALERT_THRESHOLD {
        messages.push(format!("Warning: {} potholes ahead", sample.potholes));
    }
    if sample.barricades > 0 {
        messages.push("Caution: Barricades present".to_string());
    }
    if sample.visibility_m < LOW_VISIBILITY_THRESHOLD_M {
        messages.push("Warning: Low visibility area".to_string());
    }
    if sample.big_vehicles > BIG_VEHICLE_ALERT_THRESHOLD {
        messages.push("Heavy vehicle traffic ahead".to_string());
    }
    if sample.parked_vehicles > PARKED_VEHICLE_ALERT_THRESHOLD {
        messages.push("High parking congestion".to_string());
    }

    messages
}
