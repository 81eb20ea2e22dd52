use sqlx::sqlite::SqliteRow;
use sqlx::{Connection, Row};
use tracing::{debug, warn};
use uuid::Uuid;

use shared::AlumniRecord;

use crate::domain::models::NewAlumni;
use crate::error::{AlumniError, Result};
use crate::storage::connection::DbConnection;

/// Repository for the `alumni` table
#[derive(Clone, Debug)]
pub struct AlumniRepository {
    db: DbConnection,
}

impl AlumniRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Insert a record under a freshly generated id and return that id.
    ///
    /// Fails with [`AlumniError::DuplicateEmail`] if the email is already
    /// stored, whether the lookup finds it or the unique index rejects it.
    /// The lookup and the insert are separate autocommit statements; the
    /// unique index catches an insert racing past the lookup.
    pub async fn insert(&self, alumni: &NewAlumni) -> Result<String> {
        let mut conn = self.db.open().await?;

        let existing = sqlx::query("SELECT email FROM alumni WHERE email = ?")
            .bind(&alumni.email)
            .fetch_optional(&mut conn)
            .await?;

        if existing.is_some() {
            warn!("Rejected duplicate email: {}", alumni.email);
            return Err(AlumniError::DuplicateEmail);
        }

        let id = Uuid::new_v4().to_string();

        let inserted = sqlx::query(
            r#"
            INSERT INTO alumni (id, name, email, graduation_year, job_title, company, linkedin, phone, address)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&alumni.name)
        .bind(&alumni.email)
        .bind(alumni.graduation_year)
        .bind(&alumni.job_title)
        .bind(&alumni.company)
        .bind(&alumni.linkedin)
        .bind(&alumni.phone)
        .bind(&alumni.address)
        .execute(&mut conn)
        .await;

        match inserted {
            Ok(_) => {}
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                warn!("Unique index rejected email: {}", alumni.email);
                return Err(AlumniError::DuplicateEmail);
            }
            Err(e) => return Err(e.into()),
        }

        conn.close().await?;

        debug!("Stored alumni {}", id);
        Ok(id)
    }

    /// Every stored record in insertion order
    pub async fn list_all(&self) -> Result<Vec<AlumniRecord>> {
        let mut conn = self.db.open().await?;

        let rows = sqlx::query(
            r#"
            SELECT id, name, email, graduation_year, job_title, company, linkedin, phone, address
            FROM alumni
            ORDER BY rowid ASC
            "#,
        )
        .fetch_all(&mut conn)
        .await?;

        conn.close().await?;

        let records = rows
            .iter()
            .map(row_to_record)
            .collect::<std::result::Result<Vec<_>, sqlx::Error>>()?;

        Ok(records)
    }

    pub async fn count(&self) -> Result<i64> {
        let mut conn = self.db.open().await?;

        let count: i64 = sqlx::query("SELECT COUNT(*) AS count FROM alumni")
            .fetch_one(&mut conn)
            .await?
            .try_get("count")?;

        conn.close().await?;
        Ok(count)
    }
}

fn row_to_record(row: &SqliteRow) -> std::result::Result<AlumniRecord, sqlx::Error> {
    Ok(AlumniRecord {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        graduation_year: row.try_get("graduation_year")?,
        job_title: row.try_get("job_title")?,
        company: row.try_get("company")?,
        linkedin: row.try_get("linkedin")?,
        phone: row.try_get("phone")?,
        address: row.try_get("address")?,
    })
}
