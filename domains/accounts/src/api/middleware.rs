//! Accounts domain state

use crate::UserStore;
use jobboard_auth::AuthBackend;
use std::sync::Arc;

/// Application state for the Accounts domain
#[derive(Clone)]
pub struct AccountsState {
    pub users: Arc<dyn UserStore>,
    pub auth: AuthBackend,
}
