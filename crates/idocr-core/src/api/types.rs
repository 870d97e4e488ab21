//! API request and response types.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ingest::{DocumentIngestor, NativeIngestor};
use crate::models::config::IdocrConfig;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Health status
    pub status: String,
    /// API version
    pub version: String,
}

/// Error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error type name
    pub error_type: String,
    /// Error message
    pub message: String,
}

/// API server state.
///
/// One ingestor is shared by every request; it owns the lazily loaded OCR engine.
#[derive(Clone)]
pub struct ApiState {
    /// Turns uploads into text
    pub ingestor: Arc<dyn DocumentIngestor>,
    /// Maximum request body size in bytes
    pub max_upload_bytes: usize,
}

impl ApiState {
    /// Create state around any ingestor.
    pub fn new(ingestor: Arc<dyn DocumentIngestor>, max_upload_bytes: usize) -> Self {
        Self {
            ingestor,
            max_upload_bytes,
        }
    }

    /// Create state with a [`NativeIngestor`] built from the configuration.
    pub fn from_config(config: &IdocrConfig) -> Self {
        Self::new(
            Arc::new(NativeIngestor::new(config.clone())),
            config.server.max_upload_bytes,
        )
    }
}
