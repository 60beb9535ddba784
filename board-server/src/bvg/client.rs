//! BVG REST API HTTP client.
//!
//! Provides async access to the departures endpoint of the public BVG API.

use std::time::Duration;

use tracing::debug;

use crate::domain::{StopId, Trip};

use super::convert::convert_departures;
use super::error::BvgError;
use super::types::{Departure, DeparturesResponse};

/// Default base URL for the BVG REST API.
pub const DEFAULT_BASE_URL: &str = "https://v5.bvg.transport.rest";

/// Default look-ahead window for departures, in minutes.
pub const DEFAULT_DURATION_MINS: u32 = 60;

/// Default request timeout, in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Longest body excerpt kept in errors.
const BODY_EXCERPT_CHARS: usize = 500;

/// Configuration for the BVG client.
#[derive(Debug, Clone)]
pub struct BvgConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Show departures for this many minutes ahead
    pub duration_mins: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl BvgConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the look-ahead window.
    pub fn with_duration(mut self, mins: u32) -> Self {
        self.duration_mins = mins;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for BvgConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            duration_mins: DEFAULT_DURATION_MINS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// BVG departures API client.
#[derive(Debug, Clone)]
pub struct BvgClient {
    http: reqwest::Client,
    base_url: String,
    duration_mins: u32,
}

impl BvgClient {
    /// Create a new BVG client with the given configuration.
    pub fn new(config: BvgConfig) -> Result<Self, BvgError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            duration_mins: config.duration_mins,
        })
    }

    /// Get upcoming departures at a stop, converted for display.
    pub async fn get_departures(&self, stop: &StopId) -> Result<Vec<Trip>, BvgError> {
        let departures = self.get_departures_raw(stop).await?;
        Ok(convert_departures(&departures))
    }

    /// Get the raw departures at a stop.
    pub async fn get_departures_raw(&self, stop: &StopId) -> Result<Vec<Departure>, BvgError> {
        let url = format!("{}/stops/{}/departures", self.base_url, stop.as_str());

        let response = self
            .http
            .get(&url)
            .query(&[
                ("duration", self.duration_mins.to_string()),
                ("linesOfStops", "false".to_string()),
                ("remarks", "false".to_string()),
                ("language", "en".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(BvgError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BvgError::Api {
                status: status.as_u16(),
                message: body.chars().take(BODY_EXCERPT_CHARS).collect(),
            });
        }

        let body = response.text().await?;

        let parsed: DeparturesResponse =
            serde_json::from_str(&body).map_err(|e| BvgError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(BODY_EXCERPT_CHARS).collect()),
            })?;

        let departures = parsed.into_departures();
        debug!(stop = %stop, count = departures.len(), "fetched departures");

        Ok(departures)
    }
}
