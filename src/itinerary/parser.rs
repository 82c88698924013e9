//! Day-segment parsing of generated itinerary text

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{ItineraryDay, TimeOfDay};

/// Marker separating day segments in generated text
static DAY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Day \d+:").expect("day marker pattern"));

/// Leading time-slot label, optionally followed by an activity on the same line
static SLOT_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(Morning|Afternoon|Evening):\s*(.*)$").expect("slot label pattern"));

/// Parse generated text into at most `num_days` structured day entries.
///
/// Day numbering starts at `start_day` so that numbering stays contiguous
/// across a multi-destination trip. Text with no `Day N:` marker yields no
/// entries; that is not an error, the caller decides what to show instead.
#[must_use]
pub fn parse_itinerary(raw: &str, num_days: u32, start_day: u32) -> Vec<ItineraryDay> {
    let mut segments = DAY_MARKER.split(raw);
    // Everything before the first marker is preamble, not a day
    segments.next();

    segments
        .take(num_days as usize)
        .enumerate()
        .map(|(offset, segment)| parse_day_segment(segment, start_day + offset as u32))
        .collect()
}

/// Classify a day segment's lines into time slots.
///
/// A slot-label line switches the current slot; lines before the first
/// recognized label are discarded.
fn parse_day_segment(segment: &str, day_number: u32) -> ItineraryDay {
    let mut day = ItineraryDay::new(day_number);
    let mut current_slot: Option<TimeOfDay> = None;

    for line in segment.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if let Some(captures) = SLOT_LABEL.captures(line) {
            if let Some(slot) = TimeOfDay::from_label(&captures[1]) {
                current_slot = Some(slot);
                let rest = captures[2].trim();
                if !rest.is_empty() {
                    day.slot_mut(slot).push(rest.to_string());
                }
            }
        } else if let Some(slot) = current_slot {
            day.slot_mut(slot).push(line.to_string());
        }
    }

    day
}
