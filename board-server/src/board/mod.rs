//! The fetch, transform and render-or-error pipeline, run per station.
//!
//! The poller refreshes each station on a fixed period. Each refresh either
//! replaces the station's board with fresh trips or with the static error
//! message; nothing else is kept between refreshes.

mod poller;
mod store;

pub use poller::{refresh_station, spawn_poller, spawn_refreshes};
pub use store::{BoardStore, StationBoard, UNAVAILABLE_MESSAGE};
