//! Candidate sources the resolver chains together.

mod local;
mod remote;

use async_trait::async_trait;
use mercato_core::ShopRecord;

use crate::error::SourceError;

pub use local::LocalSource;
pub use remote::{shop_record_from_row, RemoteSource};

/// Anything that can hand the resolver a list of shops to rank.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    /// Whether the source is worth trying. Unavailable sources are skipped
    /// without a call to [`CandidateSource::candidates`].
    fn is_available(&self) -> bool {
        true
    }

    async fn candidates(&self) -> Result<Vec<ShopRecord>, SourceError>;
}
