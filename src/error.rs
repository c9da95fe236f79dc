//! Error taxonomy for the navigation core.
//!
//! The taxonomy is deliberately narrow: empty datasets and unreachable goals
//! are handled by the planner's fallback path and never surface as errors.
//! Only malformed input — unparseable dataset JSON or NaN/out-of-range
//! coordinates — is rejected at the boundary, before it can corrupt distance
//! computations or frontier ordering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavError {
    /// A latitude/longitude pair was NaN or outside valid ranges.
    #[error("invalid coordinate: lat {latitude}, lon {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// A hazard dataset record carried an invalid coordinate.
    #[error("hazard sample {index} has invalid coordinate: lat {latitude}, lon {longitude}")]
    InvalidSample {
        index: usize,
        latitude: f64,
        longitude: f64,
    },

    /// The hazard dataset resource could not be parsed.
    #[error("failed to parse hazard dataset: {0}")]
    DatasetParse(#[from] serde_json::Error),
}
