//! Jobs domain state

use crate::JobStore;
use std::sync::Arc;

/// Application state for the Jobs domain
#[derive(Clone)]
pub struct JobsState {
    pub jobs: Arc<dyn JobStore>,
}
