use std::path::{Path, PathBuf};

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use tracing::info;

use crate::error::Result;

/// Opens a fresh SQLite connection for every store operation.
///
/// Nothing is pooled: callers acquire a connection with [`DbConnection::open`],
/// run one operation on it, and close it. A connection dropped on an early
/// return is released by its destructor.
#[derive(Clone, Debug)]
pub struct DbConnection {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl DbConnection {
    /// Point at the database file, creating it and the schema if needed
    pub async fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);

        let db = Self { path, options };
        db.setup_schema().await?;

        info!("Database ready at {}", db.path.display());
        Ok(db)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Acquire a connection scoped to a single operation
    pub async fn open(&self) -> Result<SqliteConnection> {
        Ok(self.options.connect().await?)
    }

    /// Set up the required database schema
    async fn setup_schema(&self) -> Result<()> {
        let mut conn = self.open().await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS alumni (
                id TEXT PRIMARY KEY,
                name TEXT,
                email TEXT,
                graduation_year INTEGER,
                job_title TEXT,
                company TEXT,
                linkedin TEXT,
                phone TEXT,
                address TEXT
            );
            "#,
        )
        .execute(&mut conn)
        .await?;

        // Backs the duplicate-email check against concurrent inserts
        sqlx::query(
            r#"
            CREATE UNIQUE INDEX IF NOT EXISTS idx_alumni_email
            ON alumni(email);
            "#,
        )
        .execute(&mut conn)
        .await?;

        conn.close().await?;
        Ok(())
    }
}
