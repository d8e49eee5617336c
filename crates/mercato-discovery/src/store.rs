//! Boundary to the remote shop store.

use async_trait::async_trait;
use mercato_db::ShopRow;
use sqlx::PgPool;

use crate::error::SourceError;

/// Read access to the remote shop table.
#[async_trait]
pub trait ShopStore: Send + Sync {
    /// Whether credentials/endpoint are available at all.
    fn is_configured(&self) -> bool;

    /// Fetch every shop row with both coordinate columns populated.
    async fn query_shops_with_coordinates(&self) -> Result<Vec<ShopRow>, SourceError>;
}

/// [`ShopStore`] backed by a Postgres pool. Built without a pool, it reports
/// itself as not configured.
#[derive(Debug, Clone, Default)]
pub struct PgShopStore {
    pool: Option<PgPool>,
}

impl PgShopStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool: Some(pool) }
    }

    #[must_use]
    pub fn unconfigured() -> Self {
        Self { pool: None }
    }
}

#[async_trait]
impl ShopStore for PgShopStore {
    fn is_configured(&self) -> bool {
        self.pool.is_some()
    }

    async fn query_shops_with_coordinates(&self) -> Result<Vec<ShopRow>, SourceError> {
        let pool = self.pool.as_ref().ok_or(SourceError::NotConfigured)?;
        Ok(mercato_db::list_shops_with_coordinates(pool).await?)
    }
}
