//! Display formatting for fetched player data.
//!
//! Every label shown on the screen is produced here so all frontends render
//! identical text:
//! - "Health: 87.5%"
//! - "Position: (1, 2, 3)"
//! - "Created: Jul 04, 2024 14:30"
//! - "Qty: 3" / "Weight: 7.5"

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use player_data::Position;
use thiserror::Error;

use crate::config::{DisplayConfig, DisplayTimeZone};

/// Output pattern for creation timestamps, e.g. "Jul 04, 2024 14:30".
pub const TIMESTAMP_FORMAT: &str = "%b %d, %Y %H:%M";

/// Offset-carrying layouts RFC 3339 parsing misses: minutes-only times and
/// offsets without a colon. `%#z` also accepts `Z`.
const OFFSET_LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M%#z",
];

/// Accepted layouts for timestamps without an offset.
const NAIVE_LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// `createdAt` could not be read as an ISO-8601 date or date-time.
///
/// Only the creation label is affected; the rest of the screen still renders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised timestamp {input:?}")]
pub struct TimestampFormatError {
    pub input: String,
}

/// Format an ISO-8601 timestamp as "Mon DD, YYYY HH:MM".
///
/// Zoned timestamps are converted into `zone` first; naive ones are shown as
/// written. A bare date is shown at midnight.
pub fn format_timestamp(raw: &str, zone: DisplayTimeZone) -> Result<String, TimestampFormatError> {
    let raw = raw.trim();

    let zoned = DateTime::parse_from_rfc3339(raw).ok().or_else(|| {
        OFFSET_LAYOUTS
            .iter()
            .find_map(|layout| DateTime::parse_from_str(raw, layout).ok())
    });

    if let Some(zoned) = zoned {
        let formatted = match zone {
            DisplayTimeZone::Utc => zoned.with_timezone(&Utc).format(TIMESTAMP_FORMAT),
            DisplayTimeZone::Local => zoned.with_timezone(&Local).format(TIMESTAMP_FORMAT),
        };
        return Ok(formatted.to_string());
    }

    NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(raw, layout).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.format(TIMESTAMP_FORMAT).to_string())
        .ok_or_else(|| TimestampFormatError {
            input: raw.to_string(),
        })
}

pub fn created_at_label(raw: &str, display: &DisplayConfig) -> String {
    match format_timestamp(raw, display.time_zone) {
        Ok(formatted) => format!("Created: {}", formatted),
        Err(e) => {
            tracing::warn!("Falling back to placeholder: {}", e);
            format!("Created: {}", display.timestamp_placeholder)
        }
    }
}

pub fn health_label(health: f32) -> String {
    format!("Health: {}%", health)
}

/// Health as a fill fraction for bars and sliders.
pub fn health_percent(health: f32) -> f32 {
    (health / 100.0).clamp(0.0, 1.0)
}

pub fn position_label(position: &Position) -> String {
    format!("Position: ({}, {}, {})", position.x, position.y, position.z)
}

pub fn quantity_label(quantity: u32) -> String {
    format!("Qty: {}", quantity)
}

pub fn weight_label(weight: f32) -> String {
    format!("Weight: {}", weight)
}
