//! The display record for a single departure.

use chrono::{DateTime, FixedOffset};

/// One upcoming departure, reduced to what the board shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    /// Product name of the line, e.g. "Bus" or "S".
    pub product: String,

    /// Line name, e.g. "M11" or "S47".
    pub name: String,

    /// Headsign shown on the vehicle.
    pub direction: Option<String>,

    /// Planned departure time, in the station's local offset.
    pub time: Option<DateTime<FixedOffset>>,

    /// Delay against the planned time, in seconds. Negative means early.
    pub delay: Option<i64>,

    /// Platform or stand, if the API reports one.
    pub platform: Option<String>,

    /// Whether the departure has been cancelled.
    pub cancelled: bool,
}

impl Trip {
    /// Line designation as displayed, e.g. "Bus M11".
    ///
    /// Either part may be missing from the API; the other is used alone.
    pub fn line_label(&self) -> String {
        match (self.product.is_empty(), self.name.is_empty()) {
            (false, false) => format!("{} {}", self.product, self.name),
            (false, true) => self.product.clone(),
            (true, false) => self.name.clone(),
            (true, true) => String::new(),
        }
    }
}
