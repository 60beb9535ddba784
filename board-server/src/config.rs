//! Server configuration.
//!
//! Everything has a default showing the three stock Berlin stations, so
//! the server runs with no configuration at all. Overrides come from the
//! environment (a `.env` file is honoured by `main`):
//!
//! | Variable              | Meaning                                  |
//! |-----------------------|------------------------------------------|
//! | `BOARD_API_URL`       | BVG API base URL                         |
//! | `BOARD_DURATION_MINS` | Look-ahead window for departures         |
//! | `BOARD_REFRESH_SECS`  | Poll period                              |
//! | `BOARD_TIMEOUT_SECS`  | HTTP request timeout                     |
//! | `BOARD_LISTEN_ADDR`   | Address to serve the page on             |
//! | `BOARD_MOCK_DIR`      | Serve recorded departures from this dir  |
//! | `BOARD_STATIC_DIR`    | Static assets directory                  |
//! | `BOARD_STATIONS_FILE` | JSON file replacing the station list     |

use std::collections::HashSet;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::bvg::BvgConfig;
use crate::domain::{InvalidStation, Station, default_stations};

/// Default poll period, in seconds.
const DEFAULT_REFRESH_SECS: u64 = 10;

/// Static assets shipped with the crate.
const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Errors in the server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable had an unusable value
    #[error("invalid value {value:?} for {var}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },

    /// The stations file could not be read
    #[error("failed to read stations file {}: {source}", .path.display())]
    StationsFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The stations file was not a JSON list of stations
    #[error("failed to parse stations file {}: {source}", .path.display())]
    StationsJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A station entry was invalid
    #[error("station {index}: {source}")]
    Station {
        index: usize,
        source: InvalidStation,
    },

    /// Two stations render into the same list
    #[error("duplicate list id {0:?}")]
    DuplicateList(String),

    /// No stations to show
    #[error("no stations configured")]
    NoStations,

    /// Polling every zero seconds
    #[error("refresh period must be at least one second")]
    ZeroRefresh,

    /// Empty look-ahead window
    #[error("departure window must be at least one minute")]
    ZeroDuration,

    /// Every request would time out at once
    #[error("request timeout must be at least one second")]
    ZeroTimeout,
}

/// Configuration for the whole server.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// BVG API client settings
    pub bvg: BvgConfig,

    /// How often every station is refreshed, in seconds.
    pub refresh_secs: u64,

    /// Address the page is served on.
    pub listen_addr: SocketAddr,

    /// Serve recorded departures from this directory instead of the API.
    pub mock_dir: Option<PathBuf>,

    /// Static assets (stylesheet, refresh script).
    pub static_dir: PathBuf,

    /// Stations shown on the board, in page order.
    pub stations: Vec<Station>,
}

impl BoardConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = lookup("BOARD_API_URL") {
            config.bvg.base_url = url;
        }
        if let Some(mins) = parse_var(&lookup, "BOARD_DURATION_MINS")? {
            config.bvg.duration_mins = mins;
        }
        if let Some(secs) = parse_var(&lookup, "BOARD_TIMEOUT_SECS")? {
            config.bvg.timeout_secs = secs;
        }
        if let Some(secs) = parse_var(&lookup, "BOARD_REFRESH_SECS")? {
            config.refresh_secs = secs;
        }
        if let Some(addr) = parse_var(&lookup, "BOARD_LISTEN_ADDR")? {
            config.listen_addr = addr;
        }
        if let Some(dir) = lookup("BOARD_MOCK_DIR").filter(|d| !d.is_empty()) {
            config.mock_dir = Some(PathBuf::from(dir));
        }
        if let Some(dir) = lookup("BOARD_STATIC_DIR").filter(|d| !d.is_empty()) {
            config.static_dir = PathBuf::from(dir);
        }
        if let Some(path) = lookup("BOARD_STATIONS_FILE").filter(|p| !p.is_empty()) {
            config.stations = load_stations(&path)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stations.is_empty() {
            return Err(ConfigError::NoStations);
        }
        if self.refresh_secs == 0 {
            return Err(ConfigError::ZeroRefresh);
        }
        if self.bvg.duration_mins == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if self.bvg.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        let mut seen = HashSet::new();
        for (index, station) in self.stations.iter().enumerate() {
            station
                .validate()
                .map_err(|source| ConfigError::Station { index, source })?;
            if !seen.insert(station.list.as_str()) {
                return Err(ConfigError::DuplicateList(station.list.clone()));
            }
        }

        Ok(())
    }

    /// The poll period as a Duration.
    pub fn refresh_period(&self) -> Duration {
        Duration::from_secs(self.refresh_secs)
    }

    /// Whether a hanging request can outlive the next tick.
    ///
    /// Each tick starts fresh fetches regardless of earlier ones, so with
    /// such a timeout up to `timeout / refresh` fetches per station may be
    /// in flight against an unresponsive API.
    pub fn fetches_may_overlap(&self) -> bool {
        self.bvg.timeout_secs > self.refresh_secs
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            bvg: BvgConfig::default(),
            refresh_secs: DEFAULT_REFRESH_SECS,
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            mock_dir: None,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            stations: default_stations(),
        }
    }
}

/// Load a station list from a JSON file.
///
/// The file holds an array of `{ "name", "id", "list" }` objects, the same
/// shape the board's `/api/stations` endpoint returns.
pub fn load_stations(path: impl AsRef<Path>) -> Result<Vec<Station>, ConfigError> {
    let path = path.as_ref();

    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::StationsFile {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&json).map_err(|source| ConfigError::StationsJson {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = lookup(var) else {
        return Ok(None);
    };

    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|e: T::Err| ConfigError::InvalidValue {
            var,
            reason: e.to_string(),
            value,
        })
}
