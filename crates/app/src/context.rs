//! App Context

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db},
    domain::influencers::{InfluencersService, PgInfluencersService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] sqlx::migrate::MigrateError),
}

/// Options applied while building the context.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppInitOptions {
    /// Apply pending migrations before serving.
    pub run_migrations: bool,
}

#[derive(Clone)]
pub struct AppContext {
    pub influencers: Arc<dyn InfluencersService>,
}

impl AppContext {
    /// Build a context around an already constructed service.
    #[must_use]
    pub fn new(influencers: Arc<dyn InfluencersService>) -> Self {
        Self { influencers }
    }

    /// Build application context from a database URL.
    ///
    /// Connects once, pings the deployment and optionally migrates. Nothing here
    /// reconnects later; callers treat an error as fatal.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing or verifying the database connection fails.
    pub async fn from_database_url(
        url: &str,
        options: AppInitOptions,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::ping(&pool).await.map_err(AppInitError::Database)?;

        info!("database connection verified");

        if options.run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrations)?;

            info!("database migrations applied");
        }

        Ok(Self::new(Arc::new(PgInfluencersService::new(Db::new(pool)))))
    }
}
