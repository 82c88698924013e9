//! Greedy visit-order selection using great-circle distance

use crate::models::GeoPoint;
use crate::route::distance::great_circle_km;

/// Order destinations by repeatedly stepping to the nearest unvisited point.
///
/// The first input point stays first. Inputs of length two or fewer are
/// returned unchanged. Ties resolve to the earliest remaining point.
#[must_use]
pub fn optimize_route(points: Vec<GeoPoint>) -> Vec<GeoPoint> {
    if points.len() <= 2 {
        return points;
    }

    let mut remaining = points;
    let mut ordered = Vec::with_capacity(remaining.len());
    let mut current = remaining.remove(0);

    while !remaining.is_empty() {
        let mut nearest_idx = 0;
        let mut nearest_km = great_circle_km(&current, &remaining[0]);

        for (idx, candidate) in remaining.iter().enumerate().skip(1) {
            let km = great_circle_km(&current, candidate);
            if km < nearest_km {
                nearest_km = km;
                nearest_idx = idx;
            }
        }

        let next = remaining.remove(nearest_idx);
        ordered.push(current);
        current = next;
    }

    ordered.push(current);
    ordered
}
