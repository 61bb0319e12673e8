//! Server execution logic.

use std::{path::PathBuf, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use super::{
    handler::{analyze_tactics, debug_session_state, health_check, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

pub const DEFAULT_STATIC_DIR: &str = "public";

/// Tactical board server
///
/// Serves the live sync WebSocket, the analysis API and the board's static files.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(app_state).with_static_dir("public");
/// server.run("0.0.0.0".to_string(), 10000).await?;
/// ```
pub struct Server {
    state: Arc<AppState>,
    static_dir: PathBuf,
}

impl Server {
    /// Create a new Server instance serving static files from `public`
    pub fn new(state: AppState) -> Self {
        Self {
            state: Arc::new(state),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }

    /// Serve static files from `static_dir` instead
    pub fn with_static_dir(mut self, static_dir: impl Into<PathBuf>) -> Self {
        self.static_dir = static_dir.into();
        self
    }

    /// Build the application router
    pub fn router(&self) -> Router {
        let index = self.static_dir.join("index.html");

        Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/ai/analyze", post(analyze_tactics))
            .route("/api/health", get(health_check))
            .route("/debug/session", get(debug_session_state))
            // 静的ファイル
            .route_service("/", ServeFile::new(index))
            .fallback_service(ServeDir::new(&self.static_dir))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Run the server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "0.0.0.0")
    /// * `port` - The port number to bind to (e.g., 10000)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();

        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        tracing::info!("Touchline server listening on {}", listener.local_addr()?);
        tracing::info!("Live sync: ws://{}/ws", bind_addr);
        tracing::info!("Serving static files from {}", self.static_dir.display());

        // Set up graceful shutdown signal handler
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
