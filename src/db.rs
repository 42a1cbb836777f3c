use std::{future::Future, time::Duration};

use anyhow::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use crate::{
    error::{AppError, AppResult},
    migration::Migrator,
};

/// Create a SeaORM connection pool.
pub async fn create_orm_conn(database_url: &str, max_connections: u32) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(database_url);
    options
        .max_connections(max_connections)
        .sqlx_logging(false);
    let conn = Database::connect(options).await?;
    Ok(conn)
}

/// Bring the schema up to date. Tables are derived from the entity definitions and carry no
/// foreign keys; references between collections are checked by the services instead.
pub async fn run_migrations(conn: &DatabaseConnection) -> Result<()> {
    Migrator::up(conn, None).await?;
    Ok(())
}

/// Run `work` under `limit`, turning an elapsed deadline into [`AppError::StoreTimeout`].
pub async fn with_deadline<T, F>(limit: Duration, work: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    match tokio::time::timeout(limit, work).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(limit_ms = %limit.as_millis(), "store operation exceeded deadline");
            Err(AppError::StoreTimeout)
        }
    }
}
