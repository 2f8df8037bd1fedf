use std::net::SocketAddr;
use std::sync::Arc;

use fuel_server::cache::{CacheConfig, CachedOrsClient};
use fuel_server::ors::{OrsClient, OrsConfig};
use fuel_server::planner::PlanConfig;
use fuel_server::stations::StationStore;
use fuel_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Get credentials from environment
    let api_key = std::env::var("ORS_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: ORS_API_KEY not set. Geocoding and directions calls will fail.");
        String::new()
    });

    let csv_path = std::env::var("STATIONS_CSV").unwrap_or_else(|_| "stations.csv".to_string());

    // Create ORS client with caching
    let ors_config = OrsConfig::new(&api_key);
    let ors_client = OrsClient::new(ors_config).expect("Failed to create ORS client");
    let cached_ors = Arc::new(CachedOrsClient::new(ors_client, &CacheConfig::default()));

    // Load the station price sheet (fail fast if unavailable)
    println!("Loading stations from {csv_path}...");
    let stations = StationStore::load(&csv_path).expect("Failed to load station price sheet");
    println!(
        "Loaded {} stations ({} with coordinates)",
        stations.len().await,
        stations.geocoded().await.len()
    );

    // Spawn a background task to geocode stations the sheet left
    // unlocated. One attempt each; failures are logged and skipped.
    let geocode_stations = stations.clone();
    let geocode_client = cached_ors.clone();
    tokio::spawn(async move {
        let saved = geocode_stations.geocode_missing(geocode_client.as_ref()).await;
        if saved > 0 {
            println!("Geocoded {saved} stations at startup");
        }
    });

    // Build app state
    let state = AppState::new(cached_ors, stations, PlanConfig::default());

    // Create router
    let app = create_router(state, "static");

    // Bind and serve
    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

    println!("Fuel Route Planner listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the web interface.");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health        - Health check");
    println!("  GET  /api/stations  - List imported stations");
    println!("  POST /route/plan    - Plan a route with fuel stops");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
