//! Itinerary model produced by the day-segment parser

use serde::{Deserialize, Serialize};

use crate::models::GeoPoint;

/// Part of the day an activity belongs to
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    /// Slot order used for parsing and rendering
    pub const ALL: [TimeOfDay; 3] = [
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
    ];

    /// The label used in generated text and rendered output
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
        }
    }

    /// Parse a bare slot label such as "Afternoon"
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Morning" => Some(TimeOfDay::Morning),
            "Afternoon" => Some(TimeOfDay::Afternoon),
            "Evening" => Some(TimeOfDay::Evening),
            _ => None,
        }
    }
}

/// One structured day of a generated itinerary
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ItineraryDay {
    /// Global day number across the whole trip
    pub day_number: u32,
    /// Morning activities in generated order
    pub morning: Vec<String>,
    /// Afternoon activities in generated order
    pub afternoon: Vec<String>,
    /// Evening activities in generated order
    pub evening: Vec<String>,
}

impl ItineraryDay {
    /// Create an empty day entry
    #[must_use]
    pub fn new(day_number: u32) -> Self {
        Self {
            day_number,
            morning: Vec::new(),
            afternoon: Vec::new(),
            evening: Vec::new(),
        }
    }

    /// Activities for one time slot
    #[must_use]
    pub fn slot(&self, slot: TimeOfDay) -> &[String] {
        match slot {
            TimeOfDay::Morning => &self.morning,
            TimeOfDay::Afternoon => &self.afternoon,
            TimeOfDay::Evening => &self.evening,
        }
    }

    /// Mutable activities for one time slot
    pub fn slot_mut(&mut self, slot: TimeOfDay) -> &mut Vec<String> {
        match slot {
            TimeOfDay::Morning => &mut self.morning,
            TimeOfDay::Afternoon => &mut self.afternoon,
            TimeOfDay::Evening => &mut self.evening,
        }
    }

    /// True when no slot holds any activity
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.morning.is_empty() && self.afternoon.is_empty() && self.evening.is_empty()
    }
}

/// Generated days for one visited destination
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CityItinerary {
    /// The resolved destination
    pub place: GeoPoint,
    /// Days allocated to this destination
    pub days_allocated: u32,
    /// Parsed day entries, at most `days_allocated`
    pub days: Vec<ItineraryDay>,
    /// User-facing message when generation failed for this destination
    pub generation_error: Option<String>,
}

/// A complete planned trip
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TripPlan {
    /// Total trip length in days
    pub total_days: u32,
    /// Destinations in visiting order
    pub route: Vec<GeoPoint>,
    /// GeoJSON geometry of the route path
    pub route_geometry: String,
    /// Road distance in kilometers, when the routing service answered
    pub route_distance_km: Option<f64>,
    /// Per-destination itineraries in visiting order
    pub cities: Vec<CityItinerary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_accessors() {
        let mut day = ItineraryDay::new(3);
        assert!(day.is_empty());

        day.slot_mut(TimeOfDay::Afternoon)
            .push("Museum visit".to_string());

        assert!(!day.is_empty());
        assert!(day.slot(TimeOfDay::Morning).is_empty());
        assert_eq!(day.slot(TimeOfDay::Afternoon), ["Museum visit"]);
        assert_eq!(day.day_number, 3);
    }

    #[test]
    fn test_from_label() {
        assert_eq!(TimeOfDay::from_label("Morning"), Some(TimeOfDay::Morning));
        assert_eq!(TimeOfDay::from_label("Evening"), Some(TimeOfDay::Evening));
        assert_eq!(TimeOfDay::from_label("Night"), None);
        assert_eq!(TimeOfDay::from_label("morning"), None);
    }

    #[test]
    fn test_slot_order() {
        let labels: Vec<&str> = TimeOfDay::ALL.iter().map(|slot| slot.label()).collect();
        assert_eq!(labels, ["Morning", "Afternoon", "Evening"]);
    }
}
