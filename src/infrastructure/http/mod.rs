pub mod request_id;

use axum::{
    body::Body,
    http::{HeaderValue, Method, Request},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::controllers::{
    health::{self, HealthState},
    history::HistoryController,
    speech::PremiumSpeakController,
};
use crate::infrastructure::config::Config;
use crate::infrastructure::db::DbPool;

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

/// Assemble every route with its state and the shared middleware stack
pub fn build_router(
    pool: Arc<DbPool>,
    config: &Config,
    speech_controller: Arc<PremiumSpeakController>,
    history_controller: Arc<HistoryController>,
) -> Router {
    let speech_routes = Router::new()
        .route("/api/premium-speak", post(PremiumSpeakController::premium_speak))
        .with_state(speech_controller);

    let history_routes = Router::new()
        .route("/api/history", get(HistoryController::list_history))
        .with_state(history_controller);

    let health_state = Arc::new(HealthState {
        pool,
        premium_delay_ms: config.premium_delay_ms,
    });

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(health_state)
        .merge(speech_routes)
        .merge(history_routes)
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(middleware::from_fn(request_id_middleware))
}

fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.as_str())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id
    )
}

fn cors_layer(config: &Config) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    match config
        .cors_allowed_origin
        .as_deref()
        .and_then(|origin| HeaderValue::from_str(origin).ok())
    {
        Some(origin) => layer.allow_origin(origin),
        None => layer.allow_origin(Any),
    }
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    pool: Arc<DbPool>,
    config: Arc<Config>,
    speech_controller: Arc<PremiumSpeakController>,
    history_controller: Arc<HistoryController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(pool, &config, speech_controller, history_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
