use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mercato_core::{Coordinate, ShopRecord};
use mercato_db::ShopRow;

use super::CandidateSource;
use crate::error::SourceError;
use crate::store::ShopStore;

/// Candidates from the remote store, bounded by a query timeout.
pub struct RemoteSource {
    store: Arc<dyn ShopStore>,
    timeout: Duration,
}

impl RemoteSource {
    #[must_use]
    pub fn new(store: Arc<dyn ShopStore>, timeout: Duration) -> Self {
        Self { store, timeout }
    }
}

#[async_trait]
impl CandidateSource for RemoteSource {
    fn name(&self) -> &'static str {
        "remote"
    }

    fn is_available(&self) -> bool {
        self.store.is_configured()
    }

    async fn candidates(&self) -> Result<Vec<ShopRecord>, SourceError> {
        let rows = tokio::time::timeout(self.timeout, self.store.query_shops_with_coordinates())
            .await
            .map_err(|_| SourceError::Timeout(self.timeout))??;

        Ok(rows.into_iter().map(shop_record_from_row).collect())
    }
}

/// Reshape a storage row into a domain record.
///
/// Coordinates outside the valid degree ranges are dropped so the shop is
/// excluded from ranking instead of poisoning it.
#[must_use]
pub fn shop_record_from_row(row: ShopRow) -> ShopRecord {
    let location = match Coordinate::from_optional(row.latitude, row.longitude) {
        Ok(location) => location,
        Err(e) => {
            tracing::warn!(shop_id = %row.id, error = %e, "ignoring malformed shop coordinates");
            None
        }
    };

    ShopRecord {
        id: row.id,
        name: row.name,
        address: row.address,
        phone: row.phone,
        email: row.email,
        description: row.description,
        owner_id: row.owner_id,
        location,
        is_active: row.is_active,
        is_approved: row.is_approved,
        created_at: Some(row.created_at),
    }
}
