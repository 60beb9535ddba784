//! BVG departures API client.
//!
//! The BVG REST API is a HAFAS wrapper. The board only uses one endpoint,
//! `GET /stops/{id}/departures`, which lists upcoming departures at a stop
//! within a look-ahead window. Notes:
//! - Times carry the station's UTC offset
//! - `delay` is in seconds and is `null` when no realtime data exists
//! - Cancelled departures keep `plannedWhen` but lose `when` and `delay`

mod client;
mod convert;
mod error;
mod mock;
mod source;
mod types;

pub use client::{BvgClient, BvgConfig, DEFAULT_BASE_URL, DEFAULT_DURATION_MINS};
pub use convert::{ConversionError, convert_departure, convert_departures};
pub use error::BvgError;
pub use mock::MockBvgClient;
pub use source::DepartureSource;
pub use types::{Departure, DeparturesResponse, Line};
