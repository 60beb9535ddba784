//! Data transfer objects for JSON responses.

use serde::Serialize;

use crate::board::StationBoard;
use crate::domain::{Station, Trip, trip_label};

/// A configured station.
#[derive(Debug, Serialize)]
pub struct StationResult {
    /// Display name
    pub name: String,

    /// BVG stop id
    pub id: String,

    /// Id of the list the station renders into
    pub list: String,
}

impl StationResult {
    /// Create from a configured Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            name: station.name.clone(),
            id: station.id.as_str().to_string(),
            list: station.list.clone(),
        }
    }
}

/// A departure in a station's board.
#[derive(Debug, Serialize)]
pub struct TripResult {
    /// Product name, e.g. "Bus"
    pub product: String,

    /// Line name, e.g. "M11"
    pub name: String,

    /// Headsign
    pub direction: Option<String>,

    /// Planned departure (RFC 3339)
    pub time: Option<String>,

    /// Delay in seconds
    pub delay: Option<i64>,

    /// Platform or stand
    pub platform: Option<String>,

    /// Whether the departure is cancelled
    pub cancelled: bool,

    /// One-line label as shown on the page
    pub label: String,
}

impl TripResult {
    /// Create from a domain Trip.
    pub fn from_trip(trip: &Trip) -> Self {
        Self {
            product: trip.product.clone(),
            name: trip.name.clone(),
            direction: trip.direction.clone(),
            time: trip.time.map(|t| t.to_rfc3339()),
            delay: trip.delay,
            platform: trip.platform.clone(),
            cancelled: trip.cancelled,
            label: trip_label(Some(trip)),
        }
    }
}

/// Response for a station's departures.
#[derive(Debug, Serialize)]
pub struct DeparturesResponse {
    /// The station
    pub station: StationResult,

    /// "pending", "ready" or "error"
    pub status: &'static str,

    /// When the board last changed (RFC 3339)
    pub updated_at: Option<String>,

    /// Departures, empty unless status is "ready"
    pub departures: Vec<TripResult>,

    /// Error message, present only when status is "error"
    pub error: Option<String>,
}

impl DeparturesResponse {
    /// Create from a station and its current board.
    pub fn from_board(station: &Station, board: &StationBoard) -> Self {
        let (departures, error) = match board {
            StationBoard::Pending => (Vec::new(), None),
            StationBoard::Ready { trips, .. } => {
                (trips.iter().map(TripResult::from_trip).collect(), None)
            }
            StationBoard::Failed { message, .. } => (Vec::new(), Some(message.clone())),
        };

        Self {
            station: StationResult::from_station(station),
            status: board.status(),
            updated_at: board.updated_at().map(|t| t.to_rfc3339()),
            departures,
            error,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
