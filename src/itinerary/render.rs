//! Pure HTML rendering of the itinerary model
//!
//! Rendering never touches the network or filesystem; `report` composes
//! these fragments into a full document.

use crate::models::{CityItinerary, ItineraryDay, TimeOfDay, TripPlan};

/// Escape text for safe inclusion in HTML
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render one day as an itinerary card.
///
/// Only slots that hold activities are emitted, in Morning, Afternoon,
/// Evening order.
#[must_use]
pub fn render_day(day: &ItineraryDay, place: &str) -> String {
    let mut html = format!(
        "<div class=\"itinerary-day\">\n<h3>Day {} in {}</h3>\n",
        day.day_number,
        escape_html(place)
    );

    for slot in TimeOfDay::ALL {
        let activities = day.slot(slot);
        if activities.is_empty() {
            continue;
        }

        html.push_str(&format!("<h4>{}</h4>\n<ul>\n", slot.label()));
        for activity in activities {
            html.push_str(&format!("<li>{}</li>\n", escape_html(activity)));
        }
        html.push_str("</ul>\n");
    }

    html.push_str("</div>\n");
    html
}

/// Render one destination: header plus its days, or the fallback message
/// when generation failed for it.
#[must_use]
pub fn render_city(city: &CityItinerary, position: usize) -> String {
    let mut html = format!(
        "<div class=\"city-header\">\n<h3>{}. {} ({} days)</h3>\n</div>\n",
        position,
        escape_html(&city.place.display_name),
        city.days_allocated
    );

    if let Some(message) = &city.generation_error {
        html.push_str(&format!(
            "<p class=\"error\">{}</p>\n",
            escape_html(message)
        ));
        return html;
    }

    for day in &city.days {
        html.push_str(&render_day(day, &city.place.display_name));
    }

    html
}

/// Render the whole trip: summary line, every destination, travel tips
#[must_use]
pub fn render_trip(plan: &TripPlan) -> String {
    let stops = plan
        .route
        .iter()
        .map(|point| escape_html(&point.display_name))
        .collect::<Vec<_>>()
        .join(", ");

    let mut html = format!(
        "<h2>Multi-City Travel Itinerary</h2>\n\
         <p class=\"itinerary-summary\">Your {}-day journey through {}</p>\n",
        plan.total_days, stops
    );

    for (idx, city) in plan.cities.iter().enumerate() {
        html.push_str(&render_city(city, idx + 1));
    }

    html.push_str(TRAVEL_TIPS);
    html
}

const TRAVEL_TIPS: &str = "<div class=\"travel-tips\">\n\
    <h3>Travel Tips</h3>\n\
    <ul>\n\
    <li>Pack light and versatile clothing for multiple destinations</li>\n\
    <li>Consider rail passes if traveling between cities in Europe</li>\n\
    <li>Notify your bank of your travel plans to avoid card issues</li>\n\
    <li>Download offline maps for each destination</li>\n\
    <li>Learn basic phrases in the local languages</li>\n\
    </ul>\n\
    </div>\n";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeoPoint;

    fn sample_city(name: &str, days_allocated: u32) -> CityItinerary {
        CityItinerary {
            place: GeoPoint::new(48.8566, 2.3522, name.to_string()),
            days_allocated,
            days: Vec::new(),
            generation_error: None,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>\"Fish & Chips\"</b>"),
            "&lt;b&gt;&quot;Fish &amp; Chips&quot;&lt;/b&gt;"
        );
        assert_eq!(escape_html("Plain text"), "Plain text");
    }

    #[test]
    fn test_render_day_skips_empty_slots() {
        let mut day = ItineraryDay::new(2);
        day.evening.push("Dinner by the river".to_string());

        let html = render_day(&day, "Paris");

        assert!(html.contains("Day 2 in Paris"));
        assert!(html.contains("<h4>Evening</h4>"));
        assert!(html.contains("<li>Dinner by the river</li>"));
        assert!(!html.contains("<h4>Morning</h4>"));
        assert!(!html.contains("<h4>Afternoon</h4>"));
    }

    #[test]
    fn test_render_day_escapes_activities() {
        let mut day = ItineraryDay::new(1);
        day.morning.push("<script>alert(1)</script>".to_string());

        let html = render_day(&day, "Paris");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_render_city_with_fallback_message() {
        let mut city = sample_city("Rome", 3);
        city.generation_error = Some("Could not generate an itinerary for Rome.".to_string());

        let html = render_city(&city, 2);

        assert!(html.contains("2. Rome (3 days)"));
        assert!(html.contains("class=\"error\""));
        assert!(html.contains("Could not generate an itinerary for Rome."));
    }

    #[test]
    fn test_render_trip_summary_and_tips() {
        let plan = TripPlan {
            total_days: 7,
            route: vec![
                GeoPoint::new(48.8566, 2.3522, "Paris".to_string()),
                GeoPoint::new(45.4642, 9.19, "Milan".to_string()),
            ],
            route_geometry: String::new(),
            route_distance_km: None,
            cities: vec![sample_city("Paris", 4), sample_city("Milan", 3)],
        };

        let html = render_trip(&plan);

        assert!(html.contains("Your 7-day journey through Paris, Milan"));
        assert!(html.contains("1. Paris (4 days)"));
        assert!(html.contains("2. Milan (3 days)"));
        assert!(html.contains("Travel Tips"));
    }
}
