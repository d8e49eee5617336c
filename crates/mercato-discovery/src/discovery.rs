//! Entry point for "shops near me" queries.

use std::sync::Arc;
use std::time::Duration;

use mercato_core::{rank, AppConfig, Coordinate, RankedShopRecord};

use crate::error::DiscoveryError;
use crate::resolver::CandidateResolver;
use crate::sources::{LocalSource, RemoteSource};
use crate::store::ShopStore;

/// Radius used when the caller does not pass one.
pub const DEFAULT_RADIUS_KM: f64 = 10.0;

/// Resolves candidates and ranks them around an origin.
///
/// Every call re-resolves the candidate list; cache at the call site if
/// repeated queries matter.
pub struct Discovery {
    resolver: CandidateResolver,
}

impl Discovery {
    #[must_use]
    pub fn new(resolver: CandidateResolver) -> Self {
        Self { resolver }
    }

    /// Wire a remote store and the configured fallback dataset together.
    ///
    /// Uses `fixtures_path` when set, otherwise the bundled dataset.
    #[must_use]
    pub fn from_app_config(config: &AppConfig, store: Arc<dyn ShopStore>) -> Self {
        let remote = RemoteSource::new(store, Duration::from_secs(config.remote_timeout_secs));
        let local = match &config.fixtures_path {
            Some(path) => LocalSource::from_path(path.clone()),
            None => LocalSource::bundled(),
        };
        Self::new(CandidateResolver::new(Arc::new(remote), Arc::new(local)))
    }

    /// Shops within `radius_km` of `origin`, nearest first.
    ///
    /// `radius_km` defaults to [`DEFAULT_RADIUS_KM`]. `limit` keeps only the
    /// nearest `n` matches.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::FallbackUnavailable`] only when the remote
    /// tier was skipped and the fallback dataset could not be loaded.
    pub async fn find_nearby_shops(
        &self,
        origin: Coordinate,
        radius_km: Option<f64>,
        limit: Option<usize>,
    ) -> Result<Vec<RankedShopRecord>, DiscoveryError> {
        let radius_km = radius_km.unwrap_or(DEFAULT_RADIUS_KM);
        let resolution = self.resolver.resolve_candidates().await?;
        let candidate_count = resolution.candidates.len();

        let ranked = rank(origin, radius_km, resolution.candidates, limit);

        tracing::debug!(
            %origin,
            radius_km,
            ?limit,
            origin_tier = ?resolution.origin,
            candidates = candidate_count,
            matches = ranked.len(),
            "ranked nearby shops"
        );

        Ok(ranked)
    }

    /// The `n` closest shops regardless of distance.
    ///
    /// # Errors
    ///
    /// Same as [`Discovery::find_nearby_shops`].
    pub async fn nearest_shops(
        &self,
        origin: Coordinate,
        n: usize,
    ) -> Result<Vec<RankedShopRecord>, DiscoveryError> {
        self.find_nearby_shops(origin, Some(f64::INFINITY), Some(n))
            .await
    }
}
