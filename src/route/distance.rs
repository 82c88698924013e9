//! Great-circle distance helpers

use haversine::{Location as HaversineLocation, Units, distance};

use crate::models::GeoPoint;

/// Great-circle distance between two points in kilometers
#[must_use]
pub fn great_circle_km(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let from_haversine = HaversineLocation {
        latitude: from.latitude,
        longitude: from.longitude,
    };
    let to_haversine = HaversineLocation {
        latitude: to.latitude,
        longitude: to.longitude,
    };
    distance(from_haversine, to_haversine, Units::Kilometers)
}

/// Total great-circle length of a path in kilometers
#[must_use]
pub fn total_route_km(points: &[GeoPoint]) -> f64 {
    points
        .windows(2)
        .map(|leg| great_circle_km(&leg[0], &leg[1]))
        .sum()
}
