//! Rise Gum Platform Server
//!
//! Production server for the landing page REST APIs:
//! - Waitlist sign-ups and listing
//! - Static marketing content
//! - Generic status-check log
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `RG_API_PORT` | `8080` | HTTP API port |
//! | `RG_MONGO_URL` | `mongodb://localhost:27017` | MongoDB connection URL |
//! | `RG_MONGO_DB` | `risegum` | MongoDB database name |
//! | `RG_CORS_ORIGINS` | `*` | Comma-separated allowed origins |
//! | `RUST_LOG` | `info` | Log level |

use std::sync::Arc;

use anyhow::Result;
use axum::http::HeaderValue;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use tokio::{net::TcpListener, signal};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use rg_platform::api::{
    content_router, status_router, waitlist_router, ApiDoc, StatusState, WaitlistState,
};
use rg_platform::repository::{MongoWaitlistRepository, StatusCheckRepository};
use rg_platform::service::RegistrationService;

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_or_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn cors_layer(origins: &str) -> CorsLayer {
    if origins.trim() == "*" {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .split(',')
            .filter_map(|o| o.trim().parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(parsed))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting Rise Gum Platform Server");

    // Configuration from environment
    let api_port: u16 = env_or_parse("RG_API_PORT", 8080);
    let mongo_url = env_or("RG_MONGO_URL", "mongodb://localhost:27017");
    let mongo_db = env_or("RG_MONGO_DB", "risegum");
    let cors_origins = env_or("RG_CORS_ORIGINS", "*");

    // Connect to MongoDB
    info!("Connecting to MongoDB: {}/{}", mongo_url, mongo_db);
    let mongo_client = mongodb::Client::with_uri_str(&mongo_url).await?;
    let db = mongo_client.database(&mongo_db);

    // Initialize repositories; the unique email index backs duplicate
    // detection under concurrent submissions
    let waitlist_repo = Arc::new(MongoWaitlistRepository::new(&db));
    waitlist_repo.ensure_indexes().await?;
    let status_repo = Arc::new(StatusCheckRepository::new(&db));
    info!("Repositories initialized");

    let registration = Arc::new(RegistrationService::new(waitlist_repo));

    let waitlist_state = WaitlistState { registration };
    let status_state = StatusState { status_repo };

    // Build API router
    let app = Router::new()
        .nest("/api/waitlist", waitlist_router(waitlist_state))
        .nest("/api/content", content_router())
        .nest("/api/status", status_router(status_state))
        .route("/api/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        // OpenAPI / Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/q/openapi", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&cors_origins));

    let api_addr = format!("0.0.0.0:{}", api_port);
    info!("API server listening on http://{}", api_addr);

    let listener = TcpListener::bind(&api_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Connection pool is dropped here, after the server has drained
    info!("Rise Gum Platform Server shutdown complete");
    Ok(())
}

async fn root_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Hello World"
    }))
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "UP",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn ready_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "READY"
    }))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
