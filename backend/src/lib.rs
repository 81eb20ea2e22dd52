//! # Alumni Backend
//!
//! A small web service for alumni contact records: add a record, list every
//! record, and export the whole table as a spreadsheet.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST handlers)
//!     ↓
//! Domain Layer (validation, listing, export)
//!     ↓
//! Storage Layer (SQLite, one connection per operation)
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod storage;

#[cfg(test)]
mod test_utils;

use std::path::Path;

use anyhow::{Context, Result};
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::domain::{AlumniService, ExportService};
use crate::storage::DbConnection;

/// Main application state that holds all services
#[derive(Clone, Debug)]
pub struct AppState {
    pub alumni_service: AlumniService,
    pub export_service: ExportService,
}

/// Open the database (creating the schema if needed) and build the services
pub async fn initialize_backend(database_path: &Path) -> Result<AppState> {
    info!("Setting up database");
    let db = DbConnection::new(database_path)
        .await
        .with_context(|| format!("failed to open database at {}", database_path.display()))?;

    info!("Setting up domain model");
    let alumni_service = AlumniService::new(db);
    let existing = alumni_service
        .count_alumni()
        .await
        .context("failed to count stored alumni")?;
    info!("Database holds {} alumni", existing);

    Ok(AppState {
        alumni_service,
        export_service: ExportService::new(),
    })
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    // Any origin may call the API; the export filename header must be readable
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .expose_headers([header::CONTENT_DISPOSITION]);

    let api_routes = Router::new()
        .route("/alumni", get(io::list_alumni).post(io::create_alumni))
        .route("/export_alumni", get(io::export_alumni));

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state)
}
