//! Job listing API handler

use axum::{extract::State, Json};
use jobboard_common::Result;
use serde::Serialize;

use crate::api::middleware::JobsState;
use crate::domain::entities::Job;

/// Job response DTO
#[derive(Debug, Serialize)]
pub struct JobResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub company: String,
}

impl From<Job> for JobResponse {
    fn from(j: Job) -> Self {
        Self {
            id: j.id,
            title: j.title,
            description: j.description,
            company: j.company,
        }
    }
}

/// GET /api/jobs — List every job posting
pub async fn list_jobs(State(state): State<JobsState>) -> Result<Json<Vec<JobResponse>>> {
    let jobs = state.jobs.list_all().await?;

    tracing::debug!(count = jobs.len(), "Listed jobs");

    let responses: Vec<JobResponse> = jobs.into_iter().map(Into::into).collect();
    Ok(Json(responses))
}
