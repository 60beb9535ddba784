//! Text labels for trips on the board.
//!
//! These are the plain-text forms; the HTML templates wrap the delay in a
//! `label-delay` span but otherwise show exactly these strings.

use chrono::{DateTime, FixedOffset};

use super::Trip;

/// Shown in place of a time the API did not provide.
pub const MISSING_TIME: &str = "--:--";

/// Shown in place of a trip that could not be read.
pub const NO_INFO: &str = "No info";

/// Format a departure time as `HH:MM`.
///
/// Times are shown in the offset they carry, which for BVG data is the
/// station's local time, so the board reads the same wherever the server runs.
pub fn time_label(time: Option<&DateTime<FixedOffset>>) -> String {
    match time {
        Some(t) => t.format("%H:%M").to_string(),
        None => MISSING_TIME.to_string(),
    }
}

/// Convert a delay in seconds to whole minutes, rounding to nearest.
///
/// Returns `None` when there is no delay worth showing.
pub fn delay_minutes(secs: Option<i64>) -> Option<i64> {
    let secs = secs?;
    let mins = (secs as f64 / 60.0).round() as i64;
    (mins != 0).then_some(mins)
}

/// Format a delay as `+N'` or `-N'`, or an empty string when on time.
pub fn delay_label(secs: Option<i64>) -> String {
    match delay_minutes(secs) {
        Some(mins) if mins < 0 => format!("{mins}'"),
        Some(mins) => format!("+{mins}'"),
        None => String::new(),
    }
}

/// Full one-line label for a trip, e.g. `12:03 +2' — Bus M11 (S Schöneweide)`.
pub fn trip_label(trip: Option<&Trip>) -> String {
    let Some(trip) = trip else {
        return NO_INFO.to_string();
    };

    let mut label = time_label(trip.time.as_ref());

    let delay = delay_label(trip.delay);
    if !delay.is_empty() {
        label.push(' ');
        label.push_str(&delay);
    }

    label.push_str(" — ");
    label.push_str(&trip.line_label());

    if let Some(direction) = trip.direction.as_deref().filter(|d| !d.is_empty()) {
        label.push_str(" (");
        label.push_str(direction);
        label.push(')');
    }

    label
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn trip() -> Trip {
        Trip {
            product: "Bus".into(),
            name: "M11".into(),
            direction: Some("S Schöneweide".into()),
            time: Some(at("2024-05-02T12:03:00+02:00")),
            delay: None,
            platform: None,
            cancelled: false,
        }
    }

    #[test]
    fn time_label_uses_own_offset() {
        assert_eq!(time_label(Some(&at("2024-05-02T07:05:00+02:00"))), "07:05");
        assert_eq!(time_label(Some(&at("2024-12-24T23:59:00+01:00"))), "23:59");
    }

    #[test]
    fn time_label_missing() {
        assert_eq!(time_label(None), "--:--");
    }

    #[test]
    fn delay_absent_or_zero_is_empty() {
        assert_eq!(delay_label(None), "");
        assert_eq!(delay_label(Some(0)), "");
        assert_eq!(delay_label(Some(20)), "");
        assert_eq!(delay_label(Some(-20)), "");
    }

    #[test]
    fn delay_positive() {
        assert_eq!(delay_label(Some(60)), "+1'");
        assert_eq!(delay_label(Some(300)), "+5'");
        assert_eq!(delay_label(Some(100)), "+2'");
    }

    #[test]
    fn delay_negative() {
        assert_eq!(delay_label(Some(-60)), "-1'");
        assert_eq!(delay_label(Some(-180)), "-3'");
    }

    #[test]
    fn trip_label_on_time() {
        assert_eq!(
            trip_label(Some(&trip())),
            "12:03 — Bus M11 (S Schöneweide)"
        );
    }

    #[test]
    fn trip_label_delayed() {
        let t = Trip {
            delay: Some(120),
            ..trip()
        };
        assert_eq!(trip_label(Some(&t)), "12:03 +2' — Bus M11 (S Schöneweide)");
    }

    #[test]
    fn trip_label_early() {
        let t = Trip {
            delay: Some(-60),
            ..trip()
        };
        assert_eq!(trip_label(Some(&t)), "12:03 -1' — Bus M11 (S Schöneweide)");
    }

    #[test]
    fn trip_label_without_direction() {
        let t = Trip {
            direction: None,
            ..trip()
        };
        assert_eq!(trip_label(Some(&t)), "12:03 — Bus M11");
    }

    #[test]
    fn trip_label_missing_trip() {
        assert_eq!(trip_label(None), "No info");
    }
}
