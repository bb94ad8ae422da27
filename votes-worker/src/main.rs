use dotenv::dotenv;
use tokio::sync::broadcast;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use votes_worker::{Dependencies, WorkerConfig, WorkerError};

/// Initialize tracing/logging.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("votes_worker=info,votes_pipeline=info,votes_repository=info")
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Resolves when the process receives SIGINT or SIGTERM.
async fn wait_for_termination() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        let mut sigterm =
            signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> Result<(), WorkerError> {
    dotenv().ok();
    init_tracing();

    info!("Starting worker service");

    let config = WorkerConfig::from_env();
    let dependencies = match Dependencies::new(&config).await {
        Ok(dependencies) => {
            info!("Dependencies initialized successfully");
            dependencies
        }
        Err(e) => {
            error!(error = %e, "Failed to initialize dependencies");
            return Err(e);
        }
    };

    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    tokio::spawn(async move {
        wait_for_termination().await;
        info!("Termination signal received, shutting down gracefully");
        let _ = shutdown_tx.send(());
    });

    dependencies.orchestrator.run(shutdown_rx).await?;
    info!("Worker shut down cleanly");
    Ok(())
}
