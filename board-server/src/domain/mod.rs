//! Domain types for the departure board.
//!
//! Stations come from configuration; trips are what remains of an API
//! departure once it has been reduced to what the board displays.

mod label;
mod station;
mod stop;
mod trip;

pub use label::{MISSING_TIME, NO_INFO, delay_label, delay_minutes, time_label, trip_label};
pub use station::{InvalidStation, Station, default_stations};
pub use stop::{InvalidStopId, StopId};
pub use trip::Trip;
