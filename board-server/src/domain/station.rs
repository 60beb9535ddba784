//! Configured stations.

use serde::{Deserialize, Serialize};

use super::StopId;

/// Error returned when a station entry is unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidStation {
    #[error("station name must not be empty")]
    EmptyName,

    #[error("invalid list id {0:?}: use lowercase letters, digits, '-' or '_'")]
    InvalidSlug(String),
}

/// A station shown on the board.
///
/// `list` is the id of the element its departures are rendered into. It
/// appears in URLs as well as in the page, so it is restricted to a
/// URL- and id-safe alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    pub id: StopId,
    pub list: String,
}

impl Station {
    /// Create a validated station entry.
    pub fn new(
        name: impl Into<String>,
        id: StopId,
        list: impl Into<String>,
    ) -> Result<Self, InvalidStation> {
        let station = Self {
            name: name.into(),
            id,
            list: list.into(),
        };
        station.validate()?;
        Ok(station)
    }

    /// Check the invariants `new` enforces. Used for entries read from files.
    pub fn validate(&self) -> Result<(), InvalidStation> {
        if self.name.trim().is_empty() {
            return Err(InvalidStation::EmptyName);
        }
        if !is_valid_slug(&self.list) {
            return Err(InvalidStation::InvalidSlug(self.list.clone()));
        }
        Ok(())
    }
}

fn is_valid_slug(s: &str) -> bool {
    !s.is_empty()
        && s
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_')
}

/// The stations the board shows when no station file is configured.
pub fn default_stations() -> Vec<Station> {
    [
        ("Britzer Str.", "900000192504", "list-britzer-str"),
        ("S Schöneweide", "900000192001", "list-schoeneweide"),
        ("S+U Hauptbahnhof", "900000003201", "list-hbf"),
    ]
    .into_iter()
    .filter_map(|(name, id, list)| {
        let id = StopId::parse(id).ok()?;
        Station::new(name, id, list).ok()
    })
    .collect()
}
