use std::net::SocketAddr;

use fuel_server::tanker::{TankerClient, TankerConfig};
use fuel_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Get the API credential from the environment
    let api_key = std::env::var("TANKER_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: TANKER_API_KEY not set. API calls will fail.");
        String::new()
    });

    // Create the price API client
    let config = TankerConfig::new(&api_key);
    let client = TankerClient::new(config).expect("Failed to create price API client");

    // Build app state
    let state = AppState::new(client);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Fuel price lookup listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health    - Health check");
    println!("  GET  /stations  - Look up stations");
    println!("                    (lat, lng, rad, type, sort_by_price, place)");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
