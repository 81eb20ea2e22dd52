use serde::{Deserialize, Serialize};

/// Column names in declaration order. Used for the export header row.
pub const ALUMNI_FIELDS: [&str; 9] = [
    "id",
    "name",
    "email",
    "graduation_year",
    "job_title",
    "company",
    "linkedin",
    "phone",
    "address",
];

/// One alumnus as stored and as returned by `GET /api/alumni`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlumniRecord {
    /// UUID v4 assigned by the store on creation
    pub id: String,
    pub name: String,
    /// Unique across all records
    pub email: String,
    pub graduation_year: i64,
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub linkedin: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Body of `POST /api/alumni`.
///
/// Required fields are still `Option` here so a missing field reaches validation
/// and produces the service's own error message instead of a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateAlumniRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub graduation_year: Option<i64>,
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub linkedin: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAlumniResponse {
    pub message: String,
    pub id: String,
}

/// Body of every 4xx/5xx response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
