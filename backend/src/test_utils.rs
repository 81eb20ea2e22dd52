//! Test infrastructure shared by the unit tests.
//!
//! Each [`TestEnvironment`] owns a temporary directory holding its own database
//! file. An in-memory database would vanish between the per-operation
//! connections, so tests use a real file that is removed when the environment
//! is dropped.

use std::io::Cursor;

use axum::body::{to_bytes, Body, Bytes};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use calamine::{Data, Reader, Xlsx};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use crate::storage::DbConnection;
use crate::{create_router, initialize_backend, AppState};

pub struct TestEnvironment {
    /// Kept alive so the database file outlives the test body
    _temp_dir: TempDir,
    pub db: DbConnection,
    pub state: AppState,
}

impl TestEnvironment {
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("alumni.db");

        let state = initialize_backend(&path)
            .await
            .expect("Failed to initialize backend");
        let db = DbConnection::new(&path)
            .await
            .expect("Failed to open test database");

        Self {
            _temp_dir: temp_dir,
            db,
            state,
        }
    }

    pub fn router(&self) -> Router {
        create_router(self.state.clone())
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
        let response = self
            .router()
            .oneshot(request)
            .await
            .expect("Router failed to respond");

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");

        (status, headers, body)
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        let (status, _, bytes) = self.send(request).await;
        (status, serde_json::from_slice(&bytes).expect("Response was not JSON"))
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let (status, _, bytes) = self.get_bytes(uri).await;
        (status, serde_json::from_slice(&bytes).expect("Response was not JSON"))
    }

    pub async fn get_bytes(&self, uri: &str) -> (StatusCode, HeaderMap, Bytes) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.send(request).await
    }
}

/// Read the first worksheet of an xlsx file back into rows of cells
pub fn read_sheet(bytes: &[u8]) -> Vec<Vec<Data>> {
    let mut workbook: Xlsx<_> =
        Xlsx::new(Cursor::new(bytes.to_vec())).expect("Export was not a valid xlsx file");
    let range = workbook
        .worksheet_range("Sheet1")
        .expect("Export has no Sheet1");

    range.rows().map(|row| row.to_vec()).collect()
}
