//! Error type shared by the storage, domain and REST layers.

use thiserror::Error;

/// Message returned when a required field is missing or blank.
pub const MISSING_FIELDS_MESSAGE: &str = "Name, email, and graduation year are required";

#[derive(Debug, Error)]
pub enum AlumniError {
    /// Request failed presence checks or could not be decoded.
    #[error("{0}")]
    Validation(String),

    /// Another record already uses this email.
    #[error("Email already exists")]
    DuplicateEmail,

    #[error("database error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("spreadsheet export failed: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),
}

pub type Result<T> = std::result::Result<T, AlumniError>;

impl AlumniError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether the caller is at fault (4xx) rather than the server (5xx).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::DuplicateEmail)
    }
}
