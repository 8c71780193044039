//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{config::Config, services::PgRequirementService};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Database connection pool
    db: PgPool,

    /// Application configuration
    config: Config,

    /// "Has category" requirement service
    requirements: PgRequirementService,
}

impl AppState {
    /// Create a new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        let requirements = PgRequirementService::from_pool(&db);
        Self {
            inner: Arc::new(AppStateInner {
                db,
                config,
                requirements,
            }),
        }
    }

    /// Get a reference to the database pool
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get a reference to the requirement service
    pub fn requirements(&self) -> &PgRequirementService {
        &self.inner.requirements
    }
}
