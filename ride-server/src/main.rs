use ride_server::config::ServerConfig;
use ride_server::directions::{
    DirectionsBackend, DirectionsClient, DirectionsConfig, MockDirectionsClient,
};
use ride_server::link::{LinkConfig, LinkResolver};
use ride_server::pipeline::{RideParser, TransferRule};
use ride_server::stations::StationRegistry;
use ride_server::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::from_env()?;

    // Create directions source
    let directions: DirectionsBackend = match &config.mock_directions_path {
        Some(path) => {
            info!(path = %path.display(), "serving canned directions");
            MockDirectionsClient::from_file(path)?.into()
        }
        None => {
            let api_key = config.api_key.clone().unwrap_or_else(|| {
                warn!("GOOGLE_MAPS_API_KEY not set, directions requests will fail");
                String::new()
            });
            let directions_config =
                DirectionsConfig::new(api_key).with_timeout(config.directions_timeout_secs);
            DirectionsClient::new(directions_config)?.into()
        }
    };

    let link_config = LinkConfig::default().with_timeout(config.directions_timeout_secs);
    let resolver = LinkResolver::new(link_config)?;
    let rule = TransferRule::new(config.transfer_min_shared_words);
    let parser = RideParser::new(resolver, directions, rule);

    let stations = StationRegistry::load(&config.stations_path);

    let app = create_router(AppState::new(parser, stations));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "ride server listening");
    info!("  GET  /health           - Health check");
    info!("  POST /parse-url        - Parse a shared map link into rides");
    info!("  POST /suggest-stations - Suggest stations for a name");

    axum::serve(listener, app).await?;
    Ok(())
}
