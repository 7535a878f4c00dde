//! Repository implementations for Jobs domain

pub mod jobs;

use async_trait::async_trait;
use jobboard_common::RepositoryError;

use crate::domain::entities::Job;

pub use jobs::JobRepository;

/// Store operations the listing handler depends on
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Every job posting, in whatever order the store yields them
    async fn list_all(&self) -> Result<Vec<Job>, RepositoryError>;
}
