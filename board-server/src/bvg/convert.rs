//! Conversion from BVG DTOs to board trips.

use chrono::{DateTime, FixedOffset};
use tracing::{debug, warn};

use crate::domain::Trip;

use super::types::Departure;

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Missing required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Convert a list of departures, in API order.
///
/// Departures that cannot be displayed are logged and skipped rather than
/// failing the whole station.
pub fn convert_departures(departures: &[Departure]) -> Vec<Trip> {
    let mut trips = Vec::with_capacity(departures.len());

    for departure in departures {
        match convert_departure(departure) {
            Ok(trip) => trips.push(trip),
            Err(e) => {
                warn!(
                    trip_id = departure.trip_id.as_deref().unwrap_or("?"),
                    "skipping departure: {e}"
                );
            }
        }
    }

    trips
}

/// Reduce a single departure to a display record.
pub fn convert_departure(departure: &Departure) -> Result<Trip, ConversionError> {
    let line = departure
        .line
        .as_ref()
        .ok_or(ConversionError::MissingField("line"))?;

    let time = departure.planned_when.as_deref().and_then(parse_timestamp);

    let platform = departure
        .platform
        .clone()
        .or_else(|| departure.planned_platform.clone());

    Ok(Trip {
        product: line.product_name.clone().unwrap_or_default(),
        name: line.name.clone().unwrap_or_default(),
        direction: departure.direction.clone(),
        time,
        delay: departure.delay,
        platform,
        cancelled: departure.cancelled,
    })
}

/// Parse an ISO 8601 timestamp with offset, as the API sends them.
fn parse_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    match DateTime::parse_from_rfc3339(s) {
        Ok(t) => Some(t),
        Err(e) => {
            debug!(value = s, "unparseable timestamp: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bvg::types::Line;

    fn line() -> Line {
        Line {
            name: Some("S47".into()),
            product_name: Some("S".into()),
            product: Some("suburban".into()),
            mode: Some("train".into()),
        }
    }

    fn departure() -> Departure {
        Departure {
            trip_id: Some("1|2|3".into()),
            when: Some("2024-05-02T12:04:00+02:00".into()),
            planned_when: Some("2024-05-02T12:03:00+02:00".into()),
            delay: Some(60),
            platform: Some("2".into()),
            planned_platform: Some("1".into()),
            direction: Some("S Spindlersfeld".into()),
            line: Some(line()),
            cancelled: false,
        }
    }

    #[test]
    fn convert_full_departure() {
        let trip = convert_departure(&departure()).unwrap();

        assert_eq!(trip.product, "S");
        assert_eq!(trip.name, "S47");
        assert_eq!(trip.direction.as_deref(), Some("S Spindlersfeld"));
        assert_eq!(trip.delay, Some(60));
        assert_eq!(trip.platform.as_deref(), Some("2"));
        assert!(!trip.cancelled);

        let time = trip.time.unwrap();
        assert_eq!(time.format("%H:%M").to_string(), "12:03");
    }

    #[test]
    fn time_is_planned_not_realtime() {
        let trip = convert_departure(&departure()).unwrap();
        assert_eq!(
            trip.time,
            DateTime::parse_from_rfc3339("2024-05-02T12:03:00+02:00").ok()
        );
    }

    #[test]
    fn platform_falls_back_to_planned() {
        let dep = Departure {
            platform: None,
            ..departure()
        };
        let trip = convert_departure(&dep).unwrap();
        assert_eq!(trip.platform.as_deref(), Some("1"));
    }

    #[test]
    fn missing_line_is_an_error() {
        let dep = Departure {
            line: None,
            ..departure()
        };
        assert_eq!(
            convert_departure(&dep),
            Err(ConversionError::MissingField("line"))
        );
    }

    #[test]
    fn bad_timestamp_becomes_none() {
        let dep = Departure {
            planned_when: Some("tomorrow-ish".into()),
            ..departure()
        };
        let trip = convert_departure(&dep).unwrap();
        assert!(trip.time.is_none());
    }

    #[test]
    fn cancelled_flag_carried() {
        let dep = Departure {
            cancelled: true,
            when: None,
            delay: None,
            ..departure()
        };
        let trip = convert_departure(&dep).unwrap();
        assert!(trip.cancelled);
        assert!(trip.delay.is_none());
    }

    #[test]
    fn convert_list_skips_invalid_and_keeps_order() {
        let second = Departure {
            direction: Some("S Waidmannslust".into()),
            ..departure()
        };
        let broken = Departure {
            line: None,
            ..departure()
        };

        let trips = convert_departures(&[departure(), broken, second]);
        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].direction.as_deref(), Some("S Spindlersfeld"));
        assert_eq!(trips[1].direction.as_deref(), Some("S Waidmannslust"));
    }
}
