/// Axum webserver implementation
///
/// Main server lifecycle management including startup and graceful
/// shutdown.
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tower_http::cors::CorsLayer;

use crate::{
    arguments,
    config::with_config,
    logger::{self, LogTag},
    webserver::{routes, state::AppState},
};

/// Global shutdown notifier
static SHUTDOWN_NOTIFY: once_cell::sync::Lazy<Arc<Notify>> =
    once_cell::sync::Lazy::new(|| Arc::new(Notify::new()));

/// Start the webserver
///
/// This function blocks until the server is shut down.
pub async fn start_server(state: Arc<AppState>) -> Result<(), String> {
    let (host, mut port) = with_config(|cfg| (cfg.server.host.clone(), cfg.server.port));

    if let Some(override_port) = arguments::get_port_override() {
        port = override_port;
    }

    let app = build_app(state);

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e| format!("Invalid bind address {}:{}: {}", host, port, e))?;

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::AddrInUse => format!(
                "Failed to bind to {}: Address already in use.\n\
                 Another tokenscope instance is probably running on this port.",
                addr
            ),
            _ => format!("Failed to bind to {}: {}", addr, e),
        })?;

    logger::info(
        LogTag::Webserver,
        &format!("🌐 Listening on http://{}", addr),
    );
    logger::info(
        LogTag::Webserver,
        &format!("📊 Analysis endpoint at http://{}/api/analyze", addr),
    );

    let shutdown_signal = async {
        SHUTDOWN_NOTIFY.notified().await;
        logger::info(LogTag::Webserver, "Received shutdown signal, stopping...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    logger::info(LogTag::Webserver, "Webserver stopped gracefully");

    Ok(())
}

/// Trigger webserver shutdown
pub fn shutdown() {
    SHUTDOWN_NOTIFY.notify_one();
}

/// Build the Axum application with all routes and middleware
fn build_app(state: Arc<AppState>) -> Router {
    routes::create_router(state).layer(CorsLayer::permissive())
}
