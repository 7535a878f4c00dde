//! Job domain entities for Jobboard
//!
//! Jobs are created out-of-band and are read-only through the API.

use jobboard_common::{Error, Result};
use serde::{Deserialize, Serialize};

/// Storage limit of the `jobs.title` column
pub const MAX_TITLE_LENGTH: usize = 120;

/// Storage limit of the `jobs.company` column
pub const MAX_COMPANY_LENGTH: usize = 120;

/// Job entity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::FromRow)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub company: String,
}

/// A job posting that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub company: String,
}

impl NewJob {
    /// Create a new job posting with validation
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        company: impl Into<String>,
    ) -> Result<Self> {
        let job = Self {
            title: title.into(),
            description: description.into(),
            company: company.into(),
        };
        job.validate()?;
        Ok(job)
    }

    /// Check the column limits
    pub fn validate(&self) -> Result<()> {
        check_length("title", &self.title, Some(MAX_TITLE_LENGTH))?;
        check_length("description", &self.description, None)?;
        check_length("company", &self.company, Some(MAX_COMPANY_LENGTH))?;
        Ok(())
    }
}

fn check_length(field: &str, value: &str, max: Option<usize>) -> Result<()> {
    if value.is_empty() {
        return Err(Error::Validation(format!("Job {field} is required")));
    }
    if let Some(max) = max {
        if value.chars().count() > max {
            return Err(Error::Validation(format!(
                "Job {field} must be at most {max} characters"
            )));
        }
    }
    Ok(())
}
