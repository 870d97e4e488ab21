//! API server setup and configuration.

use std::net::{IpAddr, SocketAddr};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

use crate::error::{IdocrError, Result};
use crate::models::config::IdocrConfig;

use super::{
    handlers::{extract_handler, health_handler},
    types::ApiState,
};

/// Create the API router with all routes configured.
///
/// This is public so the router can be nested in a larger application or
/// driven directly in tests.
pub fn create_router(state: ApiState) -> Router {
    let limit = state.max_upload_bytes;

    Router::new()
        .route("/extract", post(extract_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(limit))
        .layer(RequestBodyLimitLayer::new(limit))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the API server on the host and port from the configuration.
pub async fn serve(config: &IdocrConfig) -> Result<()> {
    let ip: IpAddr = config
        .server
        .host
        .parse()
        .map_err(|e| IdocrError::Config(format!("Invalid host address: {}", e)))?;

    let addr = SocketAddr::new(ip, config.server.port);
    let app = create_router(ApiState::from_config(config));

    if !config.has_ocr_models() {
        tracing::warn!(
            "OCR models not found in {}; image uploads will be rejected",
            config.models.model_dir.display()
        );
    }

    tracing::info!(
        "Upload size limit: {} bytes",
        config.server.max_upload_bytes
    );
    tracing::info!("Starting idocr API server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_router() {
        let _router = create_router(ApiState::from_config(&IdocrConfig::default()));
    }

    #[tokio::test]
    async fn test_serve_rejects_bad_host() {
        let mut config = IdocrConfig::default();
        config.server.host = "not a host".to_string();

        let err = serve(&config).await.unwrap_err();
        assert!(matches!(err, IdocrError::Config(_)));
    }
}
