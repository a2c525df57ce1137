use cafe_server::{AppState, Metrics, build_router, error::ServerError, logger};

use std::error::Error;

use log::{error, info};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional; real environment wins
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = cafe_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    let log_file_path = config.log_file_path()?;
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting cafe-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Prometheus recorder backing GET /metrics
    let prometheus = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::metrics(e.to_string()))?;

    // Initialize database pool (migrations run on connect)
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = cafe_db::connect(&database_path)
        .await
        .map_err(ServerError::from)?;
    info!("Database ready");

    // Build application state
    let app_state = AppState {
        pool,
        validation: config.validation.clone(),
        default_language: config.site.language()?,
        metrics: Metrics::new(),
        prometheus: Some(prometheus),
    };

    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|source| ServerError::Io {
            message: format!("Failed to bind {}", bind_addr),
            source,
        })?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
