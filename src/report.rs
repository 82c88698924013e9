//! Standalone HTML trip report
//!
//! Writes the planned trip as a self-contained Leaflet page: route
//! geometry, numbered destination markers and the rendered itinerary.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;

use crate::itinerary::render::{escape_html, render_trip};
use crate::models::TripPlan;

/// Write the trip report to `path`
pub fn write_html_report(plan: &TripPlan, path: &Path) -> Result<()> {
    let document = render_document(plan);
    fs::write(path, document)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    info!("Wrote trip report to {}", path.display());
    Ok(())
}

/// Render the complete report document
#[must_use]
pub fn render_document(plan: &TripPlan) -> String {
    let itinerary = render_trip(plan);
    let markers = marker_script(plan);
    let distance_note = plan
        .route_distance_km
        .map(|km| format!("<p class=\"route-distance\">Road distance: {km:.0} km</p>\n"))
        .unwrap_or_default();
    let generated = Utc::now().format("%Y-%m-%d");

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8" />
  <title>Trip Plan</title>
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
  <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
  <style>
    body {{ margin: 0; font-family: sans-serif; color: #222; }}
    #map {{ width: 100%; height: 55vh; }}
    #itinerary {{ max-width: 760px; margin: 0 auto; padding: 1rem; }}
    .itinerary-summary {{ color: #555; }}
    .route-distance {{ color: #555; }}
    .city-header h3 {{ border-bottom: 2px solid #6c5ce7; padding-bottom: 0.3rem; }}
    .itinerary-day {{ margin: 1rem 0; padding: 0.5rem 1rem; background: #f8f8fc; border-radius: 6px; }}
    .error {{ color: #b00020; }}
    .travel-tips {{ margin-top: 2rem; }}
    footer {{ color: #888; font-size: 0.8rem; text-align: center; padding: 1rem; }}
  </style>
</head>
<body>
  <div id="map"></div>
  <div id="itinerary">
{distance_note}{itinerary}
  </div>
  <footer>Generated {generated}</footer>
  <script>
    var map = L.map('map').setView([48.8566, 2.3522], 4);
    L.tileLayer('https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
      attribution: '&copy; OpenStreetMap contributors'
    }}).addTo(map);
    var route = {geometry};
    var routeLayer = L.geoJSON(route, {{ style: {{ color: '#6c5ce7', weight: 5, opacity: 0.9 }} }}).addTo(map);
{markers}    var bounds = routeLayer.getBounds();
    if (bounds.isValid()) {{
      map.fitBounds(bounds, {{ padding: [50, 50] }});
    }}
  </script>
</body>
</html>"#,
        geometry = plan.route_geometry,
    )
}

/// One numbered marker per destination, in visiting order
fn marker_script(plan: &TripPlan) -> String {
    let mut script = String::new();
    for (idx, point) in plan.route.iter().enumerate() {
        script.push_str(&format!(
            "    L.marker([{lat}, {lon}]).addTo(map).bindPopup('<b>{number}. {label}</b>');\n",
            lat = point.latitude,
            lon = point.longitude,
            number = idx + 1,
            label = escape_html(&point.display_name),
        ));
    }
    script
}
