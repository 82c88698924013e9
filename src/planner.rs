//! Trip planning pipeline
//!
//! Owns the API clients and configuration as explicit application state
//! and drives a plan end to end: joint destination lookup, visiting-order
//! selection, route path, day allocation and sequential generation.

use anyhow::Result;
use futures::future;
use tracing::{debug, info, instrument, warn};

use crate::TripWeaverError;
use crate::api::{GeocodingClient, RoutingClient, TextGenerationClient, routing};
use crate::config::TripWeaverConfig;
use crate::itinerary::{allocate_days, parse_itinerary};
use crate::models::{CityItinerary, GeoPoint, TripPlan};
use crate::route::optimize_route;

/// How the visiting order is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMode {
    /// Keep destinations in the order they were entered
    Sequential,
    /// Greedy nearest-neighbor ordering from the first destination
    Optimized,
}

/// A trip to plan
#[derive(Debug, Clone)]
pub struct TripRequest {
    /// Destination names in entry order; the first is the starting point
    pub destinations: Vec<String>,
    /// Total trip length in days
    pub num_days: u32,
    /// Visiting-order selection
    pub route_mode: RouteMode,
}

/// Plans trips against the configured external services
pub struct TripPlanner {
    geocoding: GeocodingClient,
    generation: TextGenerationClient,
    routing: RoutingClient,
}

impl TripPlanner {
    /// Create a planner with clients built from the configuration
    pub fn new(config: &TripWeaverConfig) -> Result<Self> {
        Ok(Self {
            geocoding: GeocodingClient::new(&config.geocoding)?,
            generation: TextGenerationClient::new(&config.generation)?,
            routing: RoutingClient::new(&config.routing)?,
        })
    }

    /// Plan a trip end to end
    #[instrument(
        skip(self, request),
        fields(destinations = request.destinations.len(), days = request.num_days)
    )]
    pub async fn plan(&self, request: &TripRequest) -> Result<TripPlan> {
        if request.num_days == 0 {
            return Err(
                TripWeaverError::validation("Trip length must be at least one day").into(),
            );
        }

        let names: Vec<&str> = request
            .destinations
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .collect();
        if names.is_empty() {
            return Err(TripWeaverError::validation("No destinations given").into());
        }

        let points = self.resolve_destinations(&names).await;
        if points.len() < 2 {
            return Err(TripWeaverError::validation(
                "Please enter at least two valid destinations",
            )
            .into());
        }

        let ordered = match request.route_mode {
            RouteMode::Sequential => points,
            RouteMode::Optimized => optimize_route(points),
        };
        debug!(
            "Visiting order: {:?}",
            ordered
                .iter()
                .map(|point| point.display_name.as_str())
                .collect::<Vec<_>>()
        );

        let (route_geometry, route_distance_km) = match self.routing.fetch_route(&ordered).await {
            Ok(path) => (path.geometry, Some(path.distance_km)),
            Err(e) => {
                warn!("Route fetch failed, falling back to straight lines: {e}");
                (routing::straight_line_geometry(&ordered), None)
            }
        };

        let cities = self.generate_cities(&ordered, request.num_days).await;

        info!(
            "Planned a {}-day trip across {} destinations",
            request.num_days,
            ordered.len()
        );

        Ok(TripPlan {
            total_days: request.num_days,
            route: ordered,
            route_geometry,
            route_distance_km,
            cities,
        })
    }

    /// Look up every destination concurrently and await the batch jointly.
    ///
    /// Destinations that fail to resolve are dropped with a warning.
    async fn resolve_destinations(&self, names: &[&str]) -> Vec<GeoPoint> {
        let lookups = names.iter().map(|name| self.geocoding.lookup(name));

        future::join_all(lookups)
            .await
            .into_iter()
            .zip(names)
            .filter_map(|(result, name)| match result {
                Ok(point) => Some(point),
                Err(e) => {
                    warn!("Dropping destination '{}': {e}", name);
                    None
                }
            })
            .collect()
    }

    /// Generate each destination's days strictly in sequence.
    ///
    /// A failed generation yields a fallback message for that city only;
    /// the remaining destinations are still generated.
    async fn generate_cities(&self, ordered: &[GeoPoint], total_days: u32) -> Vec<CityItinerary> {
        let allocation = allocate_days(total_days, ordered.len());
        let mut cities = Vec::with_capacity(ordered.len());
        let mut current_day = 1;

        for (point, &days_here) in ordered.iter().zip(&allocation) {
            let city = if days_here == 0 {
                CityItinerary {
                    place: point.clone(),
                    days_allocated: 0,
                    days: Vec::new(),
                    generation_error: None,
                }
            } else {
                match self
                    .generation
                    .generate_itinerary_text(&point.display_name, days_here)
                    .await
                {
                    Ok(text) => {
                        let days = parse_itinerary(&text, days_here, current_day);
                        CityItinerary {
                            place: point.clone(),
                            days_allocated: days_here,
                            days,
                            generation_error: None,
                        }
                    }
                    Err(e) => {
                        warn!(
                            "Itinerary generation failed for '{}': {e}",
                            point.display_name
                        );
                        CityItinerary {
                            place: point.clone(),
                            days_allocated: days_here,
                            days: Vec::new(),
                            generation_error: Some(format!(
                                "Could not generate an itinerary for {}. Please try again.",
                                point.display_name
                            )),
                        }
                    }
                }
            };

            cities.push(city);
            current_day += days_here;
        }

        cities
    }
}
