//! Geographic point resolved from a place-name lookup

use serde::{Deserialize, Serialize};

/// A destination resolved to coordinates.
///
/// Immutable once resolved; the display name is the leading segment of
/// whatever the lookup service reported.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GeoPoint {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Human-readable destination name
    pub display_name: String,
}

impl GeoPoint {
    /// Create a new resolved point
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, display_name: String) -> Self {
        Self {
            latitude,
            longitude,
            display_name,
        }
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_coordinates() {
        let point = GeoPoint::new(48.8566, 2.3522, "Paris".to_string());
        assert_eq!(point.format_coordinates(), "48.8566, 2.3522");
    }

    #[test]
    fn test_format_coordinates_rounds() {
        let point = GeoPoint::new(45.464_211, 9.189_982, "Milan".to_string());
        assert_eq!(point.format_coordinates(), "45.4642, 9.1900");
    }
}
