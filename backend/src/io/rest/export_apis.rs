//! # REST API for Data Export
//!
//! `GET /api/export_alumni` downloads every record as an `.xlsx` attachment.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use tracing::info;

use crate::domain::export_service::XLSX_CONTENT_TYPE;
use crate::AppState;

/// Export all alumni as a spreadsheet download
pub async fn export_alumni(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/export_alumni");

    match state.export_service.export_alumni(&state.alumni_service).await {
        Ok(export) => {
            info!(
                "Sending {} with {} alumni",
                export.filename, export.record_count
            );
            let disposition = format!("attachment; filename=\"{}\"", export.filename);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                export.content,
            )
                .into_response()
        }
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{read_sheet, TestEnvironment};
    use calamine::Data;
    use serde_json::json;
    use shared::ALUMNI_FIELDS;

    #[tokio::test]
    async fn test_export_returns_attachment() {
        let env = TestEnvironment::new().await;

        let (status, headers, bytes) = env.get_bytes("/api/export_alumni").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], XLSX_CONTENT_TYPE);

        let disposition = headers[header::CONTENT_DISPOSITION].to_str().unwrap();
        assert!(disposition.starts_with("attachment; filename=\"alumni_data_"));
        assert!(disposition.ends_with(".xlsx\""));

        // alumni_data_YYYYMMDD_HHMMSS.xlsx
        let filename = disposition
            .trim_start_matches("attachment; filename=\"")
            .trim_end_matches('"');
        assert_eq!(filename.len(), "alumni_data_20240101_000000.xlsx".len());

        assert_eq!(read_sheet(&bytes).len(), 1);
    }

    #[tokio::test]
    async fn test_export_after_n_adds_has_n_plus_one_rows() {
        let env = TestEnvironment::new().await;

        for (name, email) in [("Jo", "jo@x.com"), ("Sam", "sam@x.com")] {
            env.post_json(
                "/api/alumni",
                json!({"name": name, "email": email, "graduation_year": 2020, "company": "Acme"}),
            )
            .await;
        }

        let (status, _, bytes) = env.get_bytes("/api/export_alumni").await;
        assert_eq!(status, StatusCode::OK);

        let rows = read_sheet(&bytes);
        assert_eq!(rows.len(), 3);

        let header: Vec<String> = rows[0].iter().map(|c| c.to_string()).collect();
        assert_eq!(header, ALUMNI_FIELDS);

        assert_eq!(rows[1][1], Data::String("Jo".to_string()));
        assert_eq!(rows[2][1], Data::String("Sam".to_string()));
        assert_eq!(rows[2][5], Data::String("Acme".to_string()));
    }
}
