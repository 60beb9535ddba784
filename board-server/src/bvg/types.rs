//! BVG REST API response DTOs.
//!
//! These map the departures endpoint of the HAFAS-based BVG API. Only the
//! fields the board uses are declared; serde ignores the rest. Nearly
//! everything is optional because the API omits or nulls fields freely,
//! for example `when` and `delay` on cancelled departures.

use serde::Deserialize;

/// Body of `GET /stops/{id}/departures`.
///
/// Older API versions answer with a bare array, newer ones wrap it in an
/// object alongside `realtimeDataUpdatedAt`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DeparturesResponse {
    List(Vec<Departure>),
    Wrapped { departures: Vec<Departure> },
}

impl DeparturesResponse {
    /// The departures, whichever shape the response had.
    pub fn into_departures(self) -> Vec<Departure> {
        match self {
            DeparturesResponse::List(departures) => departures,
            DeparturesResponse::Wrapped { departures } => departures,
        }
    }
}

/// A single departure at a stop.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Departure {
    /// HAFAS trip identifier.
    pub trip_id: Option<String>,

    /// Realtime departure (ISO 8601 with offset), if known.
    pub when: Option<String>,

    /// Planned departure (ISO 8601 with offset).
    pub planned_when: Option<String>,

    /// Delay in seconds against `planned_when`.
    pub delay: Option<i64>,

    /// Realtime platform.
    pub platform: Option<String>,

    /// Planned platform.
    pub planned_platform: Option<String>,

    /// Headsign.
    pub direction: Option<String>,

    /// The line serving this departure.
    pub line: Option<Line>,

    /// Present and `true` only for cancelled departures.
    #[serde(default)]
    pub cancelled: bool,
}

/// Line information attached to a departure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    /// Line name, e.g. "M11".
    pub name: Option<String>,

    /// Human-readable product, e.g. "Bus" or "S".
    pub product_name: Option<String>,

    /// Product identifier, e.g. "bus" or "suburban".
    pub product: Option<String>,

    /// Transport mode, e.g. "bus" or "train".
    pub mode: Option<String>,
}
