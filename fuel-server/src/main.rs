use std::net::SocketAddr;

use fuel_server::directions::{DirectionsClient, DirectionsConfig};
use fuel_server::finder::FinderConfig;
use fuel_server::places::{PlacesClient, PlacesConfig};
use fuel_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fuel_server=info".into()),
        )
        .init();

    // Get the API credential from the environment
    let api_key = std::env::var("GOOGLE_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: GOOGLE_API_KEY not set. API calls will fail.");
        String::new()
    });

    // Create the routing client
    let directions_config = DirectionsConfig::new(&api_key);
    let directions =
        DirectionsClient::new(directions_config).expect("Failed to create Directions client");

    // Create the places client
    let places_config = PlacesConfig::new(&api_key);
    let places = PlacesClient::new(places_config).expect("Failed to create Places client");

    // Build app state with the default sampling configuration
    let state = AppState::new(directions, places, FinderConfig::default());

    // Create router
    let static_dir =
        std::env::var("STATIC_DIR").unwrap_or_else(|_| "fuel-server/static".to_string());
    let app = create_router(state, &static_dir);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Fuel-Stop Finder listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the web interface.");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health        - Health check");
    println!("  GET  /search        - HTML search results");
    println!("  GET  /api/stations  - JSON search results");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
