//! Web layer for the departure board.
//!
//! Serves the board page, per-station list fragments the page re-fetches,
//! and JSON views of the same data.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
