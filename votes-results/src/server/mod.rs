// Server module - HTTP server setup and routing
pub mod handlers;
pub mod state;

use axum::{Router, routing::get};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing::info;

use self::state::AppState;

/// Creates the axum application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/results", get(handlers::get_results))
        .route("/health", get(handlers::health_check))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Runs the server on the specified address until the process exits.
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), std::io::Error> {
    info!("Result app listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}
