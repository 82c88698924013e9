//! `Tripweaver` - multi-city trip planning with AI-generated itineraries
//!
//! This library provides the core functionality for destination lookup,
//! visiting-order selection, itinerary generation and report rendering.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod itinerary;
pub mod models;
pub mod planner;
pub mod report;
pub mod route;

// Re-export core types for public API
pub use config::TripWeaverConfig;
pub use error::TripWeaverError;
pub use models::{CityItinerary, GeoPoint, ItineraryDay, TimeOfDay, TripPlan};
pub use planner::{RouteMode, TripPlanner, TripRequest};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
