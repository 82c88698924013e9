//! Visiting-order computation over resolved destinations
//!
//! - distance: great-circle distance helpers
//! - optimizer: greedy nearest-neighbor ordering

pub mod distance;
pub mod optimizer;

pub use distance::{great_circle_km, total_route_km};
pub use optimizer::optimize_route;
