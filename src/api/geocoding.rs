//! Place-name lookup client
//!
//! Resolves free-form destination names to coordinates through a
//! Nominatim-compatible search endpoint.

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use crate::TripWeaverError;
use crate::api;
use crate::config::GeocodingConfig;
use crate::models::GeoPoint;

/// Client for the place-name lookup service
pub struct GeocodingClient {
    client: reqwest::Client,
    base_url: String,
}

/// Raw search result; coordinates arrive as strings
#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
    display_name: String,
}

impl GeocodingClient {
    /// Create a new lookup client
    pub fn new(config: &GeocodingConfig) -> Result<Self> {
        Ok(Self {
            client: api::build_http_client(config.timeout_seconds)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve a place name to a `GeoPoint`.
    ///
    /// The first search result wins; an empty result set is a lookup
    /// failure for this destination.
    #[instrument(skip(self))]
    pub async fn lookup(&self, place: &str) -> Result<GeoPoint> {
        debug!("Looking up destination: '{}'", place);

        let url = format!(
            "{}/search?format=json&q={}",
            self.base_url,
            urlencoding::encode(place)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| TripWeaverError::lookup(format!("Request for '{place}' failed: {e}")))?;

        if !response.status().is_success() {
            return Err(TripWeaverError::lookup(format!(
                "Lookup for '{}' returned HTTP {}",
                place,
                response.status()
            ))
            .into());
        }

        let results: Vec<SearchResult> = response.json().await.map_err(|e| {
            TripWeaverError::lookup(format!("Invalid lookup response for '{place}': {e}"))
        })?;

        let Some(first) = results.into_iter().next() else {
            warn!("No results found for destination '{}'", place);
            return Err(TripWeaverError::lookup(format!("No results for '{place}'")).into());
        };

        let point = parse_search_result(&first)
            .with_context(|| format!("Malformed coordinates for '{place}'"))?;

        info!(
            "Resolved '{}' to {} at {}",
            place,
            point.display_name,
            point.format_coordinates()
        );

        Ok(point)
    }
}

/// Convert a raw search result into a `GeoPoint`.
///
/// The display name keeps only the segment before the first comma.
fn parse_search_result(result: &SearchResult) -> Result<GeoPoint> {
    let latitude = result
        .lat
        .parse::<f64>()
        .with_context(|| format!("Invalid latitude: {}", result.lat))?;
    let longitude = result
        .lon
        .parse::<f64>()
        .with_context(|| format!("Invalid longitude: {}", result.lon))?;

    let display_name = result
        .display_name
        .split(',')
        .next()
        .unwrap_or(&result.display_name)
        .trim()
        .to_string();

    Ok(GeoPoint::new(latitude, longitude, display_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_result() {
        let result = SearchResult {
            lat: "48.8588897".to_string(),
            lon: "2.3200410".to_string(),
            display_name: "Paris, Île-de-France, Metropolitan France, France".to_string(),
        };

        let point = parse_search_result(&result).unwrap();
        assert_eq!(point.display_name, "Paris");
        assert!((point.latitude - 48.8588897).abs() < 1e-9);
        assert!((point.longitude - 2.3200410).abs() < 1e-9);
    }

    #[test]
    fn test_parse_search_result_without_commas() {
        let result = SearchResult {
            lat: "45.4641943".to_string(),
            lon: "9.1896346".to_string(),
            display_name: "Milano".to_string(),
        };

        let point = parse_search_result(&result).unwrap();
        assert_eq!(point.display_name, "Milano");
    }

    #[test]
    fn test_parse_search_result_bad_coordinates() {
        let result = SearchResult {
            lat: "not-a-number".to_string(),
            lon: "9.1896346".to_string(),
            display_name: "Milano".to_string(),
        };

        assert!(parse_search_result(&result).is_err());
    }

    #[test]
    fn test_search_result_deserialization() {
        let payload = r#"[{"lat": "41.8933203", "lon": "12.4829321", "display_name": "Roma, Lazio, Italia"}]"#;
        let results: Vec<SearchResult> = serde_json::from_str(payload).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].display_name, "Roma, Lazio, Italia");
    }
}
