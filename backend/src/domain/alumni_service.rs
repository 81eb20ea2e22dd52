use tracing::info;

use shared::{AlumniRecord, CreateAlumniRequest, CreateAlumniResponse};

use crate::domain::models::NewAlumni;
use crate::error::Result;
use crate::storage::{AlumniRepository, DbConnection};

/// Success message returned with the id of a new record
pub const CREATED_MESSAGE: &str = "Alumni added successfully";

/// Service for adding and listing alumni records
#[derive(Clone, Debug)]
pub struct AlumniService {
    repository: AlumniRepository,
}

impl AlumniService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            repository: AlumniRepository::new(db),
        }
    }

    /// Validate and store a new record. Nothing is written if validation fails.
    pub async fn add_alumni(&self, request: CreateAlumniRequest) -> Result<CreateAlumniResponse> {
        let alumni = NewAlumni::try_from(request)?;

        info!("Adding alumni: name={}, email={}", alumni.name, alumni.email);
        let id = self.repository.insert(&alumni).await?;
        info!("Added alumni {} with ID: {}", alumni.email, id);

        Ok(CreateAlumniResponse {
            message: CREATED_MESSAGE.to_string(),
            id,
        })
    }

    pub async fn list_alumni(&self) -> Result<Vec<AlumniRecord>> {
        let records = self.repository.list_all().await?;
        info!("Found {} alumni", records.len());
        Ok(records)
    }

    pub async fn count_alumni(&self) -> Result<i64> {
        self.repository.count().await
    }
}
