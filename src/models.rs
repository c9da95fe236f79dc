//! Core data models for hazard-aware navigation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// A geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Reject NaN/infinite values and out-of-range latitudes or longitudes.
    ///
    /// Called at every library boundary so a bad fix from the location
    /// collaborator cannot propagate NaN through distance math.
    pub fn validate(&self) -> Result<(), NavError> {
        let in_range = self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude);
        if in_range {
            Ok(())
        } else {
            Err(NavError::InvalidCoordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}

/// One geotagged road-condition record.
///
/// The collection is loaded once from the host application's bundled JSON
/// resource and treated as read-only for the lifetime of a session. Field
/// names follow that resource's keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardSample {
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Potholes")]
    pub potholes: u32,
    #[serde(rename = "Barricades")]
    pub barricades: u32,
    #[serde(rename = "Visibility")]
    pub visibility_m: f64,
    #[serde(rename = "Big Vehicles")]
    pub big_vehicles: u32,
    #[serde(rename = "Parked Vehicles")]
    pub parked_vehicles: u32,
}

impl HazardSample {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Stable identifier used for alert deduplication, derived from the
    /// coordinate pair.
    pub fn hazard_id(&self) -> String {
        format!("{}-{}", self.latitude, self.longitude)
    }
}

/// Parse the bundled hazard dataset and fail fast on invalid coordinates.
pub fn load_samples(json: &str) -> Result<Vec<HazardSample>, NavError> {
    let samples: Vec<HazardSample> = serde_json::from_str(json)?;
    for (index, sample) in samples.iter().enumerate() {
        if sample.coordinate().validate().is_err() {
            return Err(NavError::InvalidSample {
                index,
                latitude: sample.latitude,
                longitude: sample.longitude,
            });
        }
    }
    Ok(samples)
}

/// A deduplicated proximity warning for one hazard sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardWarning {
    pub hazard_id: String,
    pub coordinate: Coordinate,
    /// Combined message, individual rule messages joined with ". ".
    pub message: String,
    /// Distance from the traveler's position when the warning fired.
    pub distance_m: f64,
    pub issued_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET: &str = r#"[
        {
            "Latitude": 19.11889,
            "Longitude": 72.82115,
            "Potholes": 8,
            "Barricades": 1,
            "Visibility": 1500,
            "Big Vehicles": 12,
            "Parked Vehicles": 25
        },
        {
            "Latitude": 19.12100,
            "Longitude": 72.82300,
            "Potholes": 0,
            "Barricades": 0,
            "Visibility": 5000,
            "Big Vehicles": 2,
            "Parked Vehicles": 3
        }
    ]"#;

    #[test]
    fn loads_samples_with_resource_field_names() {
        let samples = load_samples(DATASET).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].potholes, 8);
        assert_eq!(samples[0].big_vehicles, 12);
        assert!((samples[1].visibility_m - 5000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_out_of_range_sample_coordinate() {
        let bad = r#"[{
            "Latitude": 95.0,
            "Longitude": 72.8,
            "Potholes": 0,
            "Barricades": 0,
            "Visibility": 5000,
            "Big Vehicles": 0,
            "Parked Vehicles": 0
        }]"#;
        let err = load_samples(bad).unwrap_err();
        assert!(matches!(err, NavError::InvalidSample { index: 0, .. }));
    }

    #[test]
    fn coordinate_validation_rejects_nan() {
        assert!(Coordinate::new(f64::NAN, 0.0).validate().is_err());
        assert!(Coordinate::new(0.0, 181.0).validate().is_err());
        assert!(Coordinate::new(19.11889, 72.82115).validate().is_ok());
    }

    #[test]
    fn hazard_id_derives_from_coordinate_pair() {
        let samples = load_samples(DATASET).unwrap();
        assert_eq!(samples[0].hazard_id(), "19.11889-72.82115");
    }
}
