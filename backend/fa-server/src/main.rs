use fa_config::Config;
use fa_server::{AppState, build_router, error::ServerError, logger};

use std::error::Error;
use std::path::PathBuf;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<PathBuf> = if let Some(ref filename) = config.logging.file {
        let log_dir = Config::config_dir()?.join(&config.logging.dir);

        std::fs::create_dir_all(&log_dir)
            .map_err(|e| ServerError::io(format!("Failed to create {}", log_dir.display()), e))?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting fa-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open database and run migrations
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = fa_db::connect(&database_path, config.database.max_connections)
        .await
        .map_err(ServerError::from)?;

    // validate() guarantees the secret is present
    let Some(ref jwt_secret) = config.auth.jwt_secret else {
        return Err(fa_config::ConfigError::auth("jwt_secret is required").into());
    };

    let app_state = AppState::new(pool.clone(), &config, jwt_secret);
    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| ServerError::io(format!("Failed to bind {}", bind_addr), e))?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
