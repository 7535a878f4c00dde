//! Job repository

use async_trait::async_trait;
use jobboard_common::RepositoryError;
use sqlx::AnyPool;

use super::JobStore;
use crate::domain::entities::{Job, NewJob};

#[derive(Clone)]
pub struct JobRepository {
    pool: AnyPool,
}

impl JobRepository {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    /// Insert a job posting. Postings are seeded out-of-band; no route
    /// reaches this.
    pub async fn create(&self, job: &NewJob) -> Result<Job, RepositoryError> {
        let row = sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO jobs (title, description, company)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, company
            "#,
        )
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.company)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}

#[async_trait]
impl JobStore for JobRepository {
    async fn list_all(&self) -> Result<Vec<Job>, RepositoryError> {
        // No ORDER BY: callers must not rely on row order
        let rows = sqlx::query_as::<_, Job>(
            r#"
            SELECT id, title, description, company
            FROM jobs
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
