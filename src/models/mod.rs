//! Data models for the tripweaver application
//!
//! This module contains the core domain models organized by concern:
//! - Location: destination coordinates resolved from a place-name lookup
//! - Itinerary: day/time-slot breakdown of a planned trip

pub mod itinerary;
pub mod location;

// Re-export all public types for convenient access
pub use itinerary::{CityItinerary, ItineraryDay, TimeOfDay, TripPlan};
pub use location::GeoPoint;
