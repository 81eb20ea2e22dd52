//! # REST API for Alumni Records
//!
//! `POST /api/alumni` creates a record, `GET /api/alumni` lists them all.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use shared::CreateAlumniRequest;

use crate::error::AlumniError;
use crate::AppState;

/// Create a new alumni record
pub async fn create_alumni(
    State(state): State<AppState>,
    payload: Result<Json<CreateAlumniRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            return AlumniError::validation(format!("Invalid request body: {}", rejection.body_text()))
                .into_response();
        }
    };

    info!("POST /api/alumni - email: {:?}", request.email);

    match state.alumni_service.add_alumni(request).await {
        Ok(response) => (StatusCode::CREATED, Json(response)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// List all alumni records in insertion order
pub async fn list_alumni(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/alumni");

    match state.alumni_service.list_alumni().await {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(e) => e.into_response(),
    }
}
