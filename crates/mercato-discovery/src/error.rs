use std::time::Duration;

use mercato_core::ConfigError;
use mercato_db::DbError;
use thiserror::Error;

/// Why a candidate source could not produce shops.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("remote shop store is not configured")]
    NotConfigured,

    #[error("remote shop query timed out after {0:?}")]
    Timeout(Duration),

    #[error("remote shop query failed: {0}")]
    Db(#[from] DbError),

    #[error("fixture shops unavailable: {0}")]
    Fixtures(#[from] ConfigError),
}

impl From<sqlx::Error> for SourceError {
    fn from(err: sqlx::Error) -> Self {
        Self::Db(DbError::Sqlx(err))
    }
}

/// The only failure discovery surfaces: the last-resort dataset is broken.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("fallback shop dataset unavailable: {0}")]
    FallbackUnavailable(#[source] SourceError),
}
