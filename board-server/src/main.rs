use board_server::board::{BoardStore, spawn_poller};
use board_server::bvg::{BvgClient, DepartureSource, MockBvgClient};
use board_server::config::BoardConfig;
use board_server::web::{AppState, create_router};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load .env before reading configuration or the log filter
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match BoardConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {e}");
            std::process::exit(2);
        }
    };

    if config.fetches_may_overlap() {
        warn!(
            timeout_secs = config.bvg.timeout_secs,
            refresh_secs = config.refresh_secs,
            "request timeout exceeds refresh period; fetches to a slow API will pile up"
        );
    }

    // Pick the departure source
    let source: DepartureSource = match &config.mock_dir {
        Some(dir) => {
            info!(dir = %dir.display(), "serving recorded departures");
            match MockBvgClient::new(dir) {
                Ok(client) => {
                    for stop in client.available_stops() {
                        info!(%stop, "mock departures available");
                    }
                    client.into()
                }
                Err(e) => {
                    error!("failed to load mock departures: {e}");
                    std::process::exit(1);
                }
            }
        }
        None => match BvgClient::new(config.bvg.clone()) {
            Ok(client) => client.into(),
            Err(e) => {
                error!("failed to create BVG client: {e}");
                std::process::exit(1);
            }
        },
    };

    // Start polling; the first refresh happens immediately
    let store = BoardStore::new(&config.stations);
    spawn_poller(
        source,
        config.stations.clone(),
        store.clone(),
        config.refresh_period(),
    );

    // Build app state and router
    let state = AppState::new(
        store,
        config.stations.clone(),
        config.refresh_secs,
        config.bvg.duration_mins,
    );
    let app = create_router(state, &config.static_dir);

    let listener = match tokio::net::TcpListener::bind(config.listen_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.listen_addr, "failed to bind: {e}");
            std::process::exit(1);
        }
    };

    info!("Departure board listening on http://{}", config.listen_addr);
    for station in &config.stations {
        info!(station = %station.name, stop = %station.id, list = %station.list, "showing station");
    }

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        std::process::exit(1);
    }
}
