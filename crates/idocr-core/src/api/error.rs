//! API error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::IngestError;

use super::types::ErrorResponse;

/// Error returned by API handlers, rendered as a JSON [`ErrorResponse`].
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code
    pub status: StatusCode,
    /// Error type name
    pub error_type: &'static str,
    /// Error message
    pub message: String,
}

impl ApiError {
    /// Malformed request (400).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error_type: "ValidationError",
            message: message.into(),
        }
    }

    /// Unexpected server failure (500).
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error_type: "InternalError",
            message: message.into(),
        }
    }
}

impl From<IngestError> for ApiError {
    fn from(err: IngestError) -> Self {
        let (status, error_type) = match &err {
            IngestError::OcrUnavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "OcrUnavailable"),
            IngestError::Empty | IngestError::UnsupportedFormat(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "UnsupportedDocument")
            }
            IngestError::Pdf(_) => (StatusCode::UNPROCESSABLE_ENTITY, "PdfError"),
            IngestError::Ocr(_) => (StatusCode::UNPROCESSABLE_ENTITY, "OcrError"),
            IngestError::Image(_) => (StatusCode::UNPROCESSABLE_ENTITY, "ImageError"),
        };

        Self {
            status,
            error_type,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!("{} ({}): {}", self.error_type, self.status, self.message);
        } else {
            tracing::debug!("{} ({}): {}", self.error_type, self.status, self.message);
        }

        let body = ErrorResponse {
            error_type: self.error_type.to_string(),
            message: self.message,
        };

        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PdfError;

    #[test]
    fn test_ingest_error_status_codes() {
        let err = ApiError::from(IngestError::OcrUnavailable("no models".to_string()));
        assert_eq!(err.status, StatusCode::SERVICE_UNAVAILABLE);

        let err = ApiError::from(IngestError::Pdf(PdfError::InvalidPassword));
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.message, "incorrect PDF password");

        let err = ApiError::from(IngestError::Pdf(PdfError::UnsupportedEncryption(
            "V=5 R=6 Length=256".to_string(),
        )));
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.message, "unsupported PDF encryption: V=5 R=6 Length=256");

        let err = ApiError::from(IngestError::Empty);
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_validation_is_bad_request() {
        let response = ApiError::validation("missing file").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
