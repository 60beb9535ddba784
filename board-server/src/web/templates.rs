//! Askama templates for the board page.

use askama::Template;

use crate::board::StationBoard;
use crate::domain::{Station, Trip, delay_label, time_label};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// The board: one section per station.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub sections: Vec<StationSection>,
    pub refresh_secs: u64,
}

// ============================================================================
// Fragment Templates (fetched by the page, no base.html)
// ============================================================================

/// The contents of one station's list.
#[derive(Template)]
#[template(path = "departures.html")]
pub struct DeparturesTemplate {
    pub list: ListView,
    pub duration_mins: u32,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// A station's section on the page, with its list already rendered.
#[derive(Debug, Clone)]
pub struct StationSection {
    pub name: String,
    pub list: String,
    pub items_html: String,
}

/// What a station's list currently shows.
#[derive(Debug, Clone)]
pub enum ListView {
    Pending,
    Empty,
    Trips(Vec<TripView>),
    Error(String),
}

impl ListView {
    /// Create from a station's board.
    pub fn from_board(board: &StationBoard) -> Self {
        match board {
            StationBoard::Pending => ListView::Pending,
            StationBoard::Ready { trips, .. } if trips.is_empty() => ListView::Empty,
            StationBoard::Ready { trips, .. } => {
                ListView::Trips(trips.iter().map(TripView::from_trip).collect())
            }
            StationBoard::Failed { message, .. } => ListView::Error(message.clone()),
        }
    }
}

/// Trip view model for templates.
#[derive(Debug, Clone)]
pub struct TripView {
    pub time: String,
    /// Delay label, e.g. "+2'"; absent when on time.
    pub delay: Option<String>,
    pub line: String,
    pub direction: Option<String>,
    pub platform: Option<String>,
    pub cancelled: bool,
}

impl TripView {
    /// Create from a domain Trip.
    pub fn from_trip(trip: &Trip) -> Self {
        let delay = delay_label(trip.delay);

        Self {
            time: time_label(trip.time.as_ref()),
            delay: (!delay.is_empty()).then_some(delay),
            line: trip.line_label(),
            direction: trip.direction.clone().filter(|d| !d.is_empty()),
            platform: trip.platform.clone(),
            cancelled: trip.cancelled,
        }
    }
}

/// Render a station's list contents.
pub fn render_list(board: &StationBoard, duration_mins: u32) -> askama::Result<String> {
    DeparturesTemplate {
        list: ListView::from_board(board),
        duration_mins,
    }
    .render()
}

/// Build a page section for a station.
pub fn station_section(
    station: &Station,
    board: &StationBoard,
    duration_mins: u32,
) -> askama::Result<StationSection> {
    Ok(StationSection {
        name: station.name.clone(),
        list: station.list.clone(),
        items_html: render_list(board, duration_mins)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    use crate::domain::default_stations;

    fn trip() -> Trip {
        Trip {
            product: "Bus".into(),
            name: "M11".into(),
            direction: Some("S Schöneweide".into()),
            time: DateTime::parse_from_rfc3339("2024-05-02T12:03:00+02:00").ok(),
            delay: None,
            platform: None,
            cancelled: false,
        }
    }

    #[test]
    fn trip_view_on_time() {
        let view = TripView::from_trip(&trip());
        assert_eq!(view.time, "12:03");
        assert!(view.delay.is_none());
        assert_eq!(view.line, "Bus M11");
        assert_eq!(view.direction.as_deref(), Some("S Schöneweide"));
    }

    #[test]
    fn trip_view_delayed() {
        let view = TripView::from_trip(&Trip {
            delay: Some(240),
            ..trip()
        });
        assert_eq!(view.delay.as_deref(), Some("+4'"));
    }

    #[test]
    fn render_trips() {
        let html = render_list(&StationBoard::ready(vec![trip()]), 60).unwrap();

        assert!(html.contains(r#"<li class="label-trip">"#));
        assert!(html.contains("12:03"));
        assert!(html.contains("Bus M11"));
        assert!(html.contains("(S Schöneweide)"));
        assert!(!html.contains("label-delay"));
    }

    #[test]
    fn render_delay_span() {
        let delayed = Trip {
            delay: Some(-60),
            ..trip()
        };
        let html = render_list(&StationBoard::ready(vec![delayed]), 60).unwrap();
        assert!(html.contains(r#"<span class="label-delay">"#));
        assert!(html.contains("-1"));
    }

    #[test]
    fn render_cancelled() {
        let cancelled = Trip {
            cancelled: true,
            ..trip()
        };
        let html = render_list(&StationBoard::ready(vec![cancelled]), 60).unwrap();
        assert!(html.contains("label-cancelled"));
    }

    #[test]
    fn render_error() {
        let html = render_list(&StationBoard::failed(), 60).unwrap();
        assert!(html.contains(r#"<p class="label-error">"#));
        assert!(html.contains("Departures are currently unavailable."));
        assert!(!html.contains("label-trip"));
    }

    #[test]
    fn render_empty_and_pending() {
        let html = render_list(&StationBoard::ready(vec![]), 45).unwrap();
        assert!(html.contains("No departures in the next 45 minutes"));

        let html = render_list(&StationBoard::Pending, 60).unwrap();
        assert!(html.contains("label-pending"));
    }

    #[test]
    fn direction_is_escaped() {
        let nasty = Trip {
            direction: Some("<script>alert(1)</script>".into()),
            ..trip()
        };
        let html = render_list(&StationBoard::ready(vec![nasty]), 60).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn index_page_has_every_station() {
        let stations = default_stations();
        let sections = stations
            .iter()
            .map(|s| station_section(s, &StationBoard::Pending, 60).unwrap())
            .collect();

        let html = IndexTemplate {
            sections,
            refresh_secs: 10,
        }
        .render()
        .unwrap();

        assert!(html.contains(r#"id="list-britzer-str""#));
        assert!(html.contains(r#"id="list-schoeneweide""#));
        assert!(html.contains(r#"id="list-hbf""#));
        assert!(html.contains("S+U Hauptbahnhof"));
        assert!(html.contains(r#"data-refresh-secs="10""#));
    }
}
