use std::net::SocketAddr;

use hourglass_lib::utils::logging::init_logging;
use hourglass_lib::{build_router, AppContext};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    init_logging();

    // --- Configuration ---
    let config = hourglass_infra::config::load().expect("Failed to load configuration");
    tracing::info!(
        store_path = %config.store.path,
        bind_addr = %config.server.bind_addr,
        "Loaded configuration"
    );

    let addr: SocketAddr = config.server.bind_addr.parse().expect("Invalid bind address");

    // --- Document store + tracker ---
    let context = AppContext::new(config).await.expect("Failed to open document store");
    tracing::info!("Tracker document loaded");

    // --- Router ---
    let app = build_router(context);

    // --- Start server ---
    tracing::info!(%addr, "Starting server");

    let listener =
        tokio::net::TcpListener::bind(addr).await.expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
