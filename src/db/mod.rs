//! Database module
//!
//! This module handles database connections, migrations, repositories and the
//! PostgreSQL-backed collaborators of the requirement service.

pub mod connection;
pub mod providers;
pub mod repositories;

use sqlx::PgPool;

pub use connection::*;
pub use providers::{PgCartProvider, PgDiscountStore, PgSettingsStore};

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
