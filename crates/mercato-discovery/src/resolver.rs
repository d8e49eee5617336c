//! Remote-first candidate resolution with a local fallback tier.
//!
//! Precedence:
//! 1. primary unavailable (not configured) → fallback
//! 2. primary query error or timeout → fallback
//! 3. primary returned zero shops → fallback
//! 4. otherwise the primary result
//!
//! Primary failures are logged here and nowhere else. Only a failing
//! fallback escapes as an error.

use std::sync::Arc;

use mercato_core::ShopRecord;

use crate::error::{DiscoveryError, SourceError};
use crate::sources::CandidateSource;

/// Which tier produced the candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateOrigin {
    Primary,
    Fallback,
}

/// Why the primary tier was passed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    NotConfigured,
    QueryFailed,
    Empty,
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackReason::NotConfigured => write!(f, "not_configured"),
            FallbackReason::QueryFailed => write!(f, "query_failed"),
            FallbackReason::Empty => write!(f, "empty"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Resolution {
    pub origin: CandidateOrigin,
    pub fallback_reason: Option<FallbackReason>,
    pub candidates: Vec<ShopRecord>,
}

pub struct CandidateResolver {
    primary: Arc<dyn CandidateSource>,
    fallback: Arc<dyn CandidateSource>,
}

impl CandidateResolver {
    #[must_use]
    pub fn new(primary: Arc<dyn CandidateSource>, fallback: Arc<dyn CandidateSource>) -> Self {
        Self { primary, fallback }
    }

    /// Produce the candidate list for one discovery call.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::FallbackUnavailable`] only when the primary
    /// tier was passed over and the fallback source itself fails.
    pub async fn resolve_candidates(&self) -> Result<Resolution, DiscoveryError> {
        let reason = match self.try_primary().await {
            Ok(candidates) => {
                tracing::debug!(
                    source = self.primary.name(),
                    count = candidates.len(),
                    "resolved candidates"
                );
                return Ok(Resolution {
                    origin: CandidateOrigin::Primary,
                    fallback_reason: None,
                    candidates,
                });
            }
            Err(reason) => reason,
        };

        let candidates = self
            .fallback
            .candidates()
            .await
            .map_err(DiscoveryError::FallbackUnavailable)?;

        tracing::info!(
            source = self.fallback.name(),
            reason = %reason,
            count = candidates.len(),
            "resolved candidates from fallback"
        );

        Ok(Resolution {
            origin: CandidateOrigin::Fallback,
            fallback_reason: Some(reason),
            candidates,
        })
    }

    async fn try_primary(&self) -> Result<Vec<ShopRecord>, FallbackReason> {
        if !self.primary.is_available() {
            tracing::info!(
                source = self.primary.name(),
                "primary candidate source not configured"
            );
            return Err(FallbackReason::NotConfigured);
        }

        match self.primary.candidates().await {
            Ok(candidates) if candidates.is_empty() => {
                tracing::info!(
                    source = self.primary.name(),
                    "primary candidate source returned no shops"
                );
                Err(FallbackReason::Empty)
            }
            Ok(candidates) => Ok(candidates),
            Err(SourceError::NotConfigured) => {
                tracing::info!(
                    source = self.primary.name(),
                    "primary candidate source not configured"
                );
                Err(FallbackReason::NotConfigured)
            }
            Err(e) => {
                tracing::warn!(
                    source = self.primary.name(),
                    error = %e,
                    "primary candidate source failed"
                );
                Err(FallbackReason::QueryFailed)
            }
        }
    }
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
