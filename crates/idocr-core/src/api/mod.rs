//! HTTP server for identity document extraction.
//!
//! # Endpoints
//!
//! - `POST /extract` - Extract fields from an uploaded document (multipart form data)
//! - `GET /health` - Health check endpoint
//!
//! # cURL Examples
//!
//! ```bash
//! # Scanned card
//! curl -F "file=@card.jpg" http://localhost:8000/extract
//!
//! # Password-protected e-document
//! curl -F "file=@eaadhaar.pdf" -F "password=ABCD1990" http://localhost:8000/extract
//!
//! # Health check
//! curl http://localhost:8000/health
//! ```

mod error;
mod handlers;
mod server;
mod types;

pub use error::ApiError;
pub use server::{create_router, serve};
pub use types::{ApiState, ErrorResponse, HealthResponse};
