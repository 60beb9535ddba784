//! Where departures come from: the live API or recorded mock data.

use crate::domain::{StopId, Trip};

use super::client::BvgClient;
use super::error::BvgError;
use super::mock::MockBvgClient;

/// A source of departures for the board.
#[derive(Debug, Clone)]
pub enum DepartureSource {
    Live(BvgClient),
    Mock(MockBvgClient),
}

impl DepartureSource {
    /// Get upcoming departures at a stop.
    pub async fn get_departures(&self, stop: &StopId) -> Result<Vec<Trip>, BvgError> {
        match self {
            DepartureSource::Live(client) => client.get_departures(stop).await,
            DepartureSource::Mock(client) => client.get_departures(stop).await,
        }
    }

    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            DepartureSource::Live(_) => "live",
            DepartureSource::Mock(_) => "mock",
        }
    }
}

impl From<BvgClient> for DepartureSource {
    fn from(client: BvgClient) -> Self {
        DepartureSource::Live(client)
    }
}

impl From<MockBvgClient> for DepartureSource {
    fn from(client: MockBvgClient) -> Self {
        DepartureSource::Mock(client)
    }
}
