//! Periodic refresh of every station's board.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::bvg::DepartureSource;
use crate::domain::Station;

use super::store::{BoardStore, StationBoard};

/// Fetch one station's departures and turn the outcome into a board.
///
/// Any failure becomes the static error board; the cause is only logged.
pub async fn refresh_station(source: &DepartureSource, station: &Station) -> StationBoard {
    match source.get_departures(&station.id).await {
        Ok(trips) => {
            debug!(station = %station.name, count = trips.len(), "departures refreshed");
            StationBoard::ready(trips)
        }
        Err(e) => {
            warn!(station = %station.name, stop = %station.id, "failed to fetch departures: {e}");
            StationBoard::failed()
        }
    }
}

/// Start one independent refresh task per station.
///
/// Each task writes its result to the store as soon as it finishes; there is
/// no ordering between stations.
pub fn spawn_refreshes(
    source: &DepartureSource,
    stations: &[Station],
    store: &BoardStore,
) -> Vec<JoinHandle<()>> {
    stations
        .iter()
        .map(|station| {
            let source = source.clone();
            let station = station.clone();
            let store = store.clone();
            tokio::spawn(async move {
                let board = refresh_station(&source, &station).await;
                store.set(&station.list, board).await;
            })
        })
        .collect()
}

/// Refresh every station now and then every `period`, forever.
///
/// Stations are not waited for between ticks: a slow station never holds
/// back the others or the next tick.
pub fn spawn_poller(
    source: DepartureSource,
    stations: Vec<Station>,
    store: BoardStore,
    period: Duration,
) -> JoinHandle<()> {
    info!(
        stations = stations.len(),
        period_secs = period.as_secs(),
        source = source.kind(),
        "starting departure poller"
    );

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            // First tick is immediate.
            interval.tick().await;
            spawn_refreshes(&source, &stations, &store);
        }
    })
}
