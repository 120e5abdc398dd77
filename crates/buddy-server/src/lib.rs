//! Finance Buddy Web Server
//!
//! Axum-based read-only REST API over a transaction snapshot:
//! - `GET /transactions` - raw transaction feed
//! - `GET /summary?monthly_income=N` - analytics dashboard
//! - `GET /tips` - savings tips and a daily encouragement
//!
//! The snapshot is loaded before the listener is bound and dropped after
//! graceful shutdown; handlers only ever read it.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::{error, info};

use buddy_core::Snapshot;

mod handlers;

/// Server configuration
#[derive(Clone, Debug, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = any origin)
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Parse a comma-separated origin list, e.g. from `BUDDY_ALLOWED_ORIGINS`
    pub fn with_origins(input: &str) -> Self {
        let allowed_origins = input
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty() && *s != "*")
            .map(str::to_string)
            .collect();
        Self { allowed_origins }
    }
}

/// Shared application state
pub struct AppState {
    pub snapshot: Arc<Snapshot>,
}

/// Create the application router
pub fn create_router(snapshot: Arc<Snapshot>, config: ServerConfig) -> Router {
    let cors = cors_layer(&config);

    let state = Arc::new(AppState { snapshot });

    Router::new()
        .route("/transactions", get(handlers::list_transactions))
        .route("/summary", get(handlers::get_summary))
        .route("/tips", get(handlers::get_tips))
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if config.allowed_origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

/// Start the server, serving until Ctrl+C
pub async fn serve(
    snapshot: Snapshot,
    host: &str,
    port: u16,
    config: ServerConfig,
) -> anyhow::Result<()> {
    if snapshot.is_empty() {
        info!("Snapshot is empty; /summary and /tips will answer 404");
    }

    let app = create_router(Arc::new(snapshot), config);
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Starting server at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;

    info!("Shutting down, releasing transaction snapshot");

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn not_found(msg: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();

        // Client-facing core errors keep their message
        match err.downcast_ref::<buddy_core::Error>() {
            Some(buddy_core::Error::NoData(msg)) => return Self::not_found(msg),
            Some(buddy_core::Error::InvalidInput(msg)) => return Self::bad_request(msg),
            _ => {}
        }

        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            // Keep full error for logging
            internal: Some(err),
        }
    }
}
