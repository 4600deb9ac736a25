//! Middleware stack, binding and serving.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::Router;
use footprint_config::ServerConfig;
use owo_colors::OwoColorize;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::{self, AppState};
use crate::error::ServerError;

/// Builds the full application: API routes, the static form as fallback,
/// request tracing and, when enabled, permissive CORS.
pub fn app(config: &ServerConfig, state: Arc<AppState>) -> Router {
    let mut app = api::router(state)
        .fallback_service(ServeDir::new(static_dir(&config.static_dir)))
        .layer(TraceLayer::new_for_http());

    if config.enable_cors {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    app
}

/// Resolves the form directory. A configured directory that does not exist
/// falls back to the form bundled with this crate.
pub fn static_dir(configured: &Path) -> PathBuf {
    if configured.is_dir() {
        configured.to_path_buf()
    } else {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("static")
    }
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let addr = config.socket_addr()?;
    let app = app(&config, Arc::new(AppState::new()));

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    let local = listener.local_addr()?;

    println!(
        "{} Server listening on {}",
        "▸".bright_green(),
        format!("http://{}", local).bright_cyan().underline()
    );
    println!(
        "{} Open {} in your browser\n",
        "▸".bright_green(),
        format!("http://localhost:{}", local.port()).bright_cyan().underline()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // Without a signal handler, serve until the process is killed.
        std::future::pending::<()>().await;
    }
}
