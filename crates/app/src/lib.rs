//! Jobboard application composition root
//!
//! Composes all domain routers into a single application.

use axum::Router;
use jobboard_accounts::{AccountsState, UserRepository};
use jobboard_auth::{AuthBackend, AuthConfig};
use jobboard_common::{connect, run_migrations, Backend, Config};
use jobboard_jobs::{JobRepository, JobsState};
use sqlx::AnyPool;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Connect to the configured store and, unless disabled, apply migrations
pub async fn init_store(config: &Config) -> Result<AnyPool, anyhow::Error> {
    let backend = Backend::from_url(&config.database_url)?;
    let pool = connect(&config.database_url, config.database_max_connections).await?;

    if config.run_migrations {
        run_migrations(&pool, backend).await?;
    }

    Ok(pool)
}

/// Create the main application router with all routes
pub fn create_app(config: &Config, pool: AnyPool) -> Router {
    let auth = AuthBackend::new(AuthConfig::from(config));

    let accounts_state = AccountsState {
        users: Arc::new(UserRepository::new(pool.clone())),
        auth,
    };

    let jobs_state = JobsState {
        jobs: Arc::new(JobRepository::new(pool)),
    };

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .merge(jobboard_accounts::routes().with_state(accounts_state))
        .merge(jobboard_jobs::routes().with_state(jobs_state))
}

/// Request tracing plus permissive CORS: any origin may call the API
pub fn with_middleware(app: Router) -> Router {
    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .into_inner(),
    )
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
