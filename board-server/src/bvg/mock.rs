//! Mock BVG client for running without network access.
//!
//! Loads recorded departure responses from JSON files and serves them as if
//! they were live API responses.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::domain::{StopId, Trip};

use super::convert::convert_departures;
use super::error::BvgError;
use super::types::{Departure, DeparturesResponse};

/// Mock client that serves departures from JSON files.
#[derive(Debug, Clone)]
pub struct MockBvgClient {
    /// Pre-loaded departures, keyed by stop.
    departures: Arc<HashMap<StopId, Vec<Departure>>>,
}

impl MockBvgClient {
    /// Create a mock client by loading JSON files from a directory.
    ///
    /// Expects files named `{stop id}.json` (e.g. `900000003201.json`), each
    /// holding a departures response in either shape the API uses.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, BvgError> {
        let data_dir = data_dir.as_ref();
        let mut departures = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| {
            BvgError::Mock(format!(
                "failed to read mock data directory {}: {e}",
                data_dir.display()
            ))
        })?;

        for entry in entries {
            let entry =
                entry.map_err(|e| BvgError::Mock(format!("failed to read directory entry: {e}")))?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| BvgError::Mock(format!("bad file name: {}", path.display())))?;

            let stop = StopId::parse(stem)
                .map_err(|e| BvgError::Mock(format!("{}: {e}", path.display())))?;

            let json = std::fs::read_to_string(&path)
                .map_err(|e| BvgError::Mock(format!("failed to read {}: {e}", path.display())))?;

            let response: DeparturesResponse = serde_json::from_str(&json)
                .map_err(|e| BvgError::Mock(format!("failed to parse {}: {e}", path.display())))?;

            departures.insert(stop, response.into_departures());
        }

        if departures.is_empty() {
            return Err(BvgError::Mock(format!(
                "no mock departure files found in {}",
                data_dir.display()
            )));
        }

        debug!(stops = departures.len(), "loaded mock departures");

        Ok(Self {
            departures: Arc::new(departures),
        })
    }

    /// Get departures at a stop, converted for display.
    ///
    /// Mimics `BvgClient::get_departures`. Stops without a file fail the
    /// way an API error would.
    pub async fn get_departures(&self, stop: &StopId) -> Result<Vec<Trip>, BvgError> {
        let departures = self.departures.get(stop).ok_or_else(|| BvgError::Api {
            status: 404,
            message: format!("no mock data for stop {stop}"),
        })?;

        Ok(convert_departures(departures))
    }

    /// List stops available in the mock data.
    pub fn available_stops(&self) -> Vec<StopId> {
        self.departures.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const BOARD: &str = r#"[
        {
            "tripId": "1",
            "plannedWhen": "2024-05-02T12:03:00+02:00",
            "delay": 0,
            "direction": "S Schöneweide",
            "line": { "name": "M11", "productName": "Bus" }
        },
        {
            "tripId": "2",
            "plannedWhen": "2024-05-02T12:08:00+02:00",
            "delay": null,
            "direction": "U Dahlem-Dorf",
            "line": { "name": "M11", "productName": "Bus" }
        }
    ]"#;

    #[tokio::test]
    async fn load_and_serve() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("900000192504.json"), BOARD).unwrap();
        std::fs::write(dir.path().join("README.txt"), "ignored").unwrap();

        let client = MockBvgClient::new(dir.path()).unwrap();
        assert_eq!(
            client.available_stops(),
            vec![StopId::parse("900000192504").unwrap()]
        );

        let trips = client
            .get_departures(&StopId::parse("900000192504").unwrap())
            .await
            .unwrap();
        assert_eq!(trips.len(), 2);
        assert_eq!(trips[1].direction.as_deref(), Some("U Dahlem-Dorf"));
    }

    #[tokio::test]
    async fn unknown_stop_returns_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("900000192504.json"), BOARD).unwrap();

        let client = MockBvgClient::new(dir.path()).unwrap();
        let result = client
            .get_departures(&StopId::parse("900000003201").unwrap())
            .await;

        assert!(matches!(result, Err(BvgError::Api { status: 404, .. })));
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            MockBvgClient::new(dir.path()),
            Err(BvgError::Mock(_))
        ));
    }

    #[test]
    fn bad_file_name_is_an_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("hauptbahnhof.json"), BOARD).unwrap();
        assert!(MockBvgClient::new(dir.path()).is_err());
    }

    #[test]
    fn bundled_mock_data_loads() {
        let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/data/mock_departures");
        let client = MockBvgClient::new(dir).unwrap();
        assert_eq!(client.available_stops().len(), 3);
    }
}
