//! Route path client
//!
//! Fetches a drivable path over the ordered destinations from an
//! OSRM-compatible routing service.

use anyhow::Result;
use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::TripWeaverError;
use crate::api;
use crate::config::RoutingConfig;
use crate::models::GeoPoint;

/// A fetched route path
#[derive(Debug, Clone)]
pub struct RoutePath {
    /// GeoJSON geometry of the path
    pub geometry: String,
    /// Road distance in kilometers
    pub distance_km: f64,
}

/// Client for the routing service
pub struct RoutingClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct RouteResponse {
    routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
struct Route {
    geometry: serde_json::Value,
    distance: f64,
}

impl RoutingClient {
    /// Create a new routing client
    pub fn new(config: &RoutingConfig) -> Result<Self> {
        Ok(Self {
            client: api::build_http_client(config.timeout_seconds)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the driving path through the given points in order
    #[instrument(skip(self, points), fields(waypoints = points.len()))]
    pub async fn fetch_route(&self, points: &[GeoPoint]) -> Result<RoutePath> {
        let coordinates = points
            .iter()
            .map(|point| format!("{},{}", point.longitude, point.latitude))
            .collect::<Vec<_>>()
            .join(";");

        let url = format!(
            "{}/route/v1/driving/{}?overview=full&geometries=geojson",
            self.base_url, coordinates
        );
        debug!("Routing request URL: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| TripWeaverError::routing(format!("Route request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(TripWeaverError::routing(format!(
                "Routing service returned HTTP {}",
                response.status()
            ))
            .into());
        }

        let route_response: RouteResponse = response
            .json()
            .await
            .map_err(|e| TripWeaverError::routing(format!("Invalid routing response: {e}")))?;

        let Some(route) = route_response.routes.into_iter().next() else {
            return Err(TripWeaverError::routing("No routes in response").into());
        };

        let geometry = serde_json::to_string(&route.geometry)
            .map_err(|e| TripWeaverError::routing(format!("Unencodable route geometry: {e}")))?;
        let distance_km = route.distance / 1000.0;

        info!(
            "Fetched route path: {:.1} km over {} waypoints",
            distance_km,
            points.len()
        );

        Ok(RoutePath {
            geometry,
            distance_km,
        })
    }
}

/// Straight-line GeoJSON LineString through the points, used when the
/// routing service is unavailable.
#[must_use]
pub fn straight_line_geometry(points: &[GeoPoint]) -> String {
    let coordinate_pairs = points
        .iter()
        .map(|point| format!("[{},{}]", point.longitude, point.latitude))
        .collect::<Vec<_>>()
        .join(",");

    format!(r#"{{"type":"LineString","coordinates":[{coordinate_pairs}]}}"#)
}
