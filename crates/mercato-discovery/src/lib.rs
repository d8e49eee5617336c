//! Location-based shop discovery.
//!
//! Candidates come from the remote shop store when it is configured and
//! answers with located shops; otherwise from a local fixture dataset.
//! They are then ranked by great-circle distance around the caller's origin.

pub mod discovery;
pub mod error;
pub mod resolver;
pub mod sources;
pub mod store;

pub use discovery::{Discovery, DEFAULT_RADIUS_KM};
pub use error::{DiscoveryError, SourceError};
pub use resolver::{CandidateOrigin, CandidateResolver, FallbackReason, Resolution};
pub use sources::{shop_record_from_row, CandidateSource, LocalSource, RemoteSource};
pub use store::{PgShopStore, ShopStore};
