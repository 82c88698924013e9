//! Itinerary text parsing, day allocation and rendering
//!
//! Parsing turns loosely structured generated text into `ItineraryDay`
//! entries; rendering is a separate pure pass over the parsed model.

pub mod allocation;
pub mod parser;
pub mod render;

pub use allocation::allocate_days;
pub use parser::parse_itinerary;
pub use render::{render_city, render_day, render_trip};
