//! Resume Store: read-only access to resume documents owned by the persistence layer.
//!
//! `AppState` holds an `Arc<dyn ResumeStore>`. Production uses `PgResumeStore`;
//! tests swap in an in-memory store without touching handlers.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeRow;

#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// `Ok(None)` when no resume has this id.
    async fn fetch_resume(&self, id: Uuid) -> Result<Option<ResumeRow>, AppError>;
}

/// Reads from the `resumes` table; `data` is a JSONB column holding the builder record.
pub struct PgResumeStore {
    pool: PgPool,
}

const MAX_CONNECTIONS: u32 = 10;

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        info!("Connecting to PostgreSQL...");
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await?;
        info!("PostgreSQL connection pool established");
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn fetch_resume(&self, id: Uuid) -> Result<Option<ResumeRow>, AppError> {
        debug!(%id, "fetching resume");
        let row = sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
