//! # REST API Interface Layer
//!
//! HTTP endpoints for the alumni service. Handlers decode requests, call the
//! domain services, and translate domain errors into status codes with a JSON
//! `{"error": ...}` body.

pub mod alumni_apis;
pub mod export_apis;

pub use alumni_apis::{create_alumni, list_alumni};
pub use export_apis::export_alumni;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::ErrorResponse;
use tracing::{error, warn};

use crate::error::AlumniError;

impl IntoResponse for AlumniError {
    fn into_response(self) -> Response {
        if self.is_client_error() {
            warn!("Request rejected: {}", self);
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(self.to_string()))).into_response()
        } else {
            // Storage and export details are logged, not sent to the client
            error!("Request failed: {}", self);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Internal server error")),
            )
                .into_response()
        }
    }
}
