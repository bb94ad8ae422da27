use dotenv::dotenv;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use votes_repository::PostgresVotesRepository;
use votes_results::server::state::AppState;
use votes_results::server::{create_app, run_server};
use votes_results::{ResultsConfig, ResultsError};

/// Initialize tracing/logging.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("votes_results=info,votes_repository=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

#[tokio::main]
async fn main() -> Result<(), ResultsError> {
    dotenv().ok();
    init_tracing();

    info!("Starting result service");

    let config = ResultsConfig::from_env();
    let pool = match PgPoolOptions::new()
        .max_connections(config.pool_size)
        .connect(&config.database_url())
        .await
    {
        Ok(pool) => {
            info!("Connected to PostgreSQL database");
            pool
        }
        Err(e) => {
            error!(error = %e, "Failed to connect to PostgreSQL");
            return Err(e.into());
        }
    };

    let repository = Arc::new(PostgresVotesRepository::new(pool).await?);
    let state = AppState { repository };
    let app = create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    run_server(app, addr).await?;
    Ok(())
}
