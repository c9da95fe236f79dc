//! Hazard-aware route planning core.
//!
//! Consumes a read-only set of geotagged road-hazard samples plus start/end
//! coordinates, and produces risk-weighted routes and deduplicated proximity
//! warnings. Rendering, sensors, and delivery channels are the host
//! application's concern; this crate is a pure library boundary.

pub mod error;
pub mod graph;
pub mod models;
pub mod monitor;
pub mod planner;
pub mod risk;
pub mod smoother;
pub mod spatial;

pub use error::NavError;
pub use graph::{nearest_sample, ProximityGraph, DEFAULT_CONNECTION_RADIUS_M};
pub use models::{load_samples, Coordinate, HazardSample, HazardWarning};
pub use monitor::{HazardMonitor, DEFAULT_ALERT_RADIUS_M};
pub use planner::{plan_route, plan_smoothed_route, RoutePlannerConfig};
pub use risk::risk_score;
pub use smoother::{smooth_route, DEFAULT_SMOOTHING_FACTOR};
pub use spatial::haversine_distance;
