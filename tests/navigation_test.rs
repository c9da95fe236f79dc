//! End-to-end navigation flow: load the bundled-style dataset, plan and
//! smooth a route, then drive proximity monitoring along it.

use safenav_core::{
    load_samples, plan_smoothed_route, Coordinate, HazardMonitor, RoutePlannerConfig,
};

/// Five samples in a ~260m-spaced chain, matching the shape of the host
/// application's bundled JSON resource.
const DATASET: &str = r#"[
    {
        "Latitude": 19.11889,
        "Longitude": 72.82115,
        "Potholes": 2,
        "Barricades": 0,
        "Visibility": 5000,
        "Big Vehicles": 1,
        "Parked Vehicles": 4
    },
    {
        "Latitude": 19.12123,
        "Longitude": 72.82115,
        "Potholes": 8,
        "Barricades": 1,
        "Visibility": 1500,
        "Big Vehicles": 12,
        "Parked Vehicles": 25
    },
    {
        "Latitude": 19.12357,
        "Longitude": 72.82115,
        "Potholes": 0,
        "Barricades": 0,
        "Visibility": 5000,
        "Big Vehicles": 0,
        "Parked Vehicles": 0
    },
    {
        "Latitude": 19.12123,
        "Longitude": 72.82265,
        "Potholes": 1,
        "Barricades": 0,
        "Visibility": 4500,
        "Big Vehicles": 2,
        "Parked Vehicles": 5
    },
    {
        "Latitude": 19.12591,
        "Longitude": 72.82115,
        "Potholes": 6,
        "Barricades": 0,
        "Visibility": 3000,
        "Big Vehicles": 3,
        "Parked Vehicles": 2
    }
]"#;

#[test]
fn plan_smooth_and_monitor_full_session() {
    let samples = load_samples(DATASET).unwrap();

    let start = Coordinate::new(19.11880, 72.82115);
    let end = Coordinate::new(19.12600, 72.82115);
    let config = RoutePlannerConfig::default();

    let route = plan_smoothed_route(start, end, &samples, &config).unwrap();

    // Smoothing keeps the literal endpoints and the route is a real
    // multi-point traversal, not the degenerate fallback.
    assert_eq!(route.first(), Some(&start));
    assert_eq!(route.last(), Some(&end));
    assert!(route.len() > 2, "expected a connected route: {route:?}");

    // Drive the monitor along the route as if position updates arrived from
    // the location collaborator.
    let mut monitor = HazardMonitor::default();
    let mut all_warnings = Vec::new();
    for position in &route {
        let warnings = monitor.check_proximity(*position, &samples).unwrap();
        all_warnings.extend(warnings);
    }

    assert!(
        !all_warnings.is_empty(),
        "route passes hazards that must warn"
    );

    // Deduplication holds across the whole session.
    let mut ids: Vec<&str> = all_warnings.iter().map(|w| w.hazard_id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), all_warnings.len());

    // Replaying the same route emits nothing new until the session resets.
    for position in &route {
        assert!(monitor.check_proximity(*position, &samples).unwrap().is_empty());
    }

    monitor.reset();
    let mut replayed = Vec::new();
    for position in &route {
        replayed.extend(monitor.check_proximity(*position, &samples).unwrap());
    }
    assert_eq!(replayed.len(), all_warnings.len());
}

#[test]
fn fallback_and_planned_routes_share_endpoint_contract() {
    let samples = load_samples(DATASET).unwrap();
    let config = RoutePlannerConfig::default();

    // Far outside the dataset: both endpoints resolve to the same nearest
    // sample, so the planner returns the two-point fallback.
    let start = Coordinate::new(18.9000, 72.8000);
    let end = Coordinate::new(18.9010, 72.8000);
    let route = plan_smoothed_route(start, end, &samples, &config).unwrap();
    assert_eq!(route, vec![start, end]);
}
