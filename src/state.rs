use std::{future::Future, sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;

use crate::{config::AppConfig, db::with_deadline, error::AppResult};

#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
    pub jwt_secret: Arc<str>,
    pub store_timeout: Duration,
}

impl AppState {
    pub fn new(orm: DatabaseConnection, config: &AppConfig) -> Self {
        Self {
            orm,
            jwt_secret: Arc::from(config.jwt_secret.as_str()),
            store_timeout: config.store_timeout,
        }
    }

    /// Bound the store work of one request by the configured deadline.
    pub async fn bounded<T, F>(&self, work: F) -> AppResult<T>
    where
        F: Future<Output = AppResult<T>>,
    {
        with_deadline(self.store_timeout, work).await
    }
}
