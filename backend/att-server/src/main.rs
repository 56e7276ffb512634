use att_config::Config;
use att_face::FaceRecognitionClient;
use att_hub::{ShutdownCoordinator, spawn_sweeper};
use att_server::{AppState, ServerError, build_router, logger};

use std::error::Error;
use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path = match config.logging.file {
        Some(ref filename) => {
            let log_dir = config.log_dir()?;
            std::fs::create_dir_all(&log_dir)?;
            Some(log_dir.join(filename))
        }
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting att-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Database
    let database_path = config.database_path()?;
    info!("Opening database: {}", database_path.display());
    let pool = att_db::open_pool(&database_path).await?;
    info!("Database ready");

    // Metrics recorder for /metrics
    let metrics_handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Metrics {
            message: e.to_string(),
        })?;

    // Face recognition client
    let recognizer = FaceRecognitionClient::new(&config.face_api.url, config.face_api.timeout()?)?;
    info!("Face recognition service: {}", recognizer.base_url());

    let shutdown = ShutdownCoordinator::new();
    let app_state = AppState::from_config(&config, pool, Arc::new(recognizer), shutdown.clone())?
        .with_metrics(metrics_handle);
    let registry = app_state.registry.clone();

    // Background sweep of dead stream subscribers
    let sweeper = spawn_sweeper(
        registry.clone(),
        Duration::from_secs(config.stream.sweep_interval_secs),
        shutdown.subscribe_guard(),
    );

    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Signal handler: stop accepting, then end every open stream
    let shutdown_for_signal = shutdown.clone();
    let registry_for_signal = registry.clone();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown_for_signal.shutdown();
        let closed = registry_for_signal.close_all().await;
        info!("Closed {} stream subscriber(s)", closed);
    });

    let drain_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);
    let mut shutdown_guard = shutdown.subscribe_guard();
    let mut drain_guard = shutdown.subscribe_guard();

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_guard.wait().await;
            info!("Shutting down server...");
        })
        .into_future();

    info!("Server ready to accept connections");
    tokio::select! {
        result = server => result?,
        _ = async {
            drain_guard.wait().await;
            tokio::time::sleep(drain_timeout).await;
        } => {
            warn!(
                "Connections still open after {}, forcing shutdown",
                humantime::format_duration(drain_timeout)
            );
        }
    }

    if let Err(e) = sweeper.await {
        error!("Sweeper task failed: {}", e);
    }

    info!("Server exited");
    Ok(())
}

/// Resolve on SIGINT (Ctrl+C) or, on unix, SIGTERM.
async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown"),
    }
}
