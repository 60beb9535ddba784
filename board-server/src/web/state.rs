//! Application state for the web layer.

use std::sync::Arc;

use crate::board::BoardStore;
use crate::domain::Station;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Current board per station, written by the poller
    pub store: BoardStore,

    /// Configured stations, in page order
    pub stations: Arc<Vec<Station>>,

    /// How often the page re-fetches each list, in seconds
    pub refresh_secs: u64,

    /// Look-ahead window of the departures shown, in minutes
    pub duration_mins: u32,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        store: BoardStore,
        stations: Vec<Station>,
        refresh_secs: u64,
        duration_mins: u32,
    ) -> Self {
        Self {
            store,
            stations: Arc::new(stations),
            refresh_secs,
            duration_mins,
        }
    }

    /// Look up a configured station by its list id.
    pub fn station(&self, list: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.list == list)
    }
}
