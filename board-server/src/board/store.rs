//! The current board for every station.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::{Station, Trip};

/// Shown in place of the departures when a fetch fails.
pub const UNAVAILABLE_MESSAGE: &str = "Departures are currently unavailable.";

/// The latest known state of one station's departures.
#[derive(Debug, Clone, PartialEq)]
pub enum StationBoard {
    /// Not fetched yet.
    Pending,

    /// The departures from the most recent successful fetch.
    Ready {
        trips: Vec<Trip>,
        fetched_at: DateTime<Utc>,
    },

    /// The most recent fetch failed.
    Failed {
        message: String,
        failed_at: DateTime<Utc>,
    },
}

impl StationBoard {
    /// A board holding freshly fetched trips.
    pub fn ready(trips: Vec<Trip>) -> Self {
        StationBoard::Ready {
            trips,
            fetched_at: Utc::now(),
        }
    }

    /// A board showing the static error message.
    pub fn failed() -> Self {
        StationBoard::Failed {
            message: UNAVAILABLE_MESSAGE.to_string(),
            failed_at: Utc::now(),
        }
    }

    /// Short status name, as used in JSON responses.
    pub fn status(&self) -> &'static str {
        match self {
            StationBoard::Pending => "pending",
            StationBoard::Ready { .. } => "ready",
            StationBoard::Failed { .. } => "error",
        }
    }

    /// When this board was last updated, if ever.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        match self {
            StationBoard::Pending => None,
            StationBoard::Ready { fetched_at, .. } => Some(*fetched_at),
            StationBoard::Failed { failed_at, .. } => Some(*failed_at),
        }
    }
}

/// Thread-safe map from list id to that station's current board.
///
/// Holds an entry for every configured station and nothing else. Each
/// update replaces the previous board for that station wholesale.
#[derive(Debug, Clone)]
pub struct BoardStore {
    inner: Arc<RwLock<HashMap<String, StationBoard>>>,
}

impl BoardStore {
    /// Create a store with every station pending.
    pub fn new(stations: &[Station]) -> Self {
        let map = stations
            .iter()
            .map(|s| (s.list.clone(), StationBoard::Pending))
            .collect();

        Self {
            inner: Arc::new(RwLock::new(map)),
        }
    }

    /// The current board for a station, or `None` for an unknown list id.
    pub async fn get(&self, list: &str) -> Option<StationBoard> {
        let guard = self.inner.read().await;
        guard.get(list).cloned()
    }

    /// Replace a station's board.
    ///
    /// Returns `false`, leaving the store untouched, for an unknown list id.
    pub async fn set(&self, list: &str, board: StationBoard) -> bool {
        let mut guard = self.inner.write().await;
        match guard.get_mut(list) {
            Some(slot) => {
                *slot = board;
                true
            }
            None => false,
        }
    }
}
