//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path as UrlPath, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::{error, warn};

use crate::board::StationBoard;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/stations/:list/departures", get(station_departures))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The board page, rendered with every station's current departures.
async fn index_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let mut sections = Vec::with_capacity(state.stations.len());

    for station in state.stations.iter() {
        let board = state
            .store
            .get(&station.list)
            .await
            .unwrap_or(StationBoard::Pending);
        sections.push(station_section(station, &board, state.duration_mins)?);
    }

    let html = IndexTemplate {
        sections,
        refresh_secs: state.refresh_secs,
    }
    .render()?;

    Ok(Html(html).into_response())
}

/// Configured stations.
async fn list_stations(State(state): State<AppState>) -> Json<Vec<StationResult>> {
    Json(
        state
            .stations
            .iter()
            .map(StationResult::from_station)
            .collect(),
    )
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// One station's current departures: the list fragment for the page, or JSON.
async fn station_departures(
    State(state): State<AppState>,
    headers: HeaderMap,
    UrlPath(list): UrlPath<String>,
) -> Result<Response, AppError> {
    let not_found = || AppError::NotFound {
        message: format!("Unknown station list: {list}"),
    };

    let station = state.station(&list).ok_or_else(not_found)?;
    let board = state.store.get(&list).await.ok_or_else(not_found)?;

    let mut response = if accepts_html(&headers) {
        let html = render_list(&board, state.duration_mins)?;
        Html(html).into_response()
    } else {
        Json(DeparturesResponse::from_board(station, &board)).into_response()
    };

    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));

    Ok(response)
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String },
    Internal { message: String },
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Internal {
            message: format!("Template error: {e}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound { message } => {
                warn!(%message, "not found");
                (StatusCode::NOT_FOUND, message)
            }
            AppError::Internal { message } => {
                error!(%message, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
