use std::path::PathBuf;

use async_trait::async_trait;
use mercato_core::{load_fixture_shops, parse_fixture_shops, ShopRecord};

use super::CandidateSource;
use crate::error::SourceError;

const BUNDLED_SHOPS: &str = include_str!("../../fixtures/shops.yaml");

#[derive(Debug, Clone)]
enum Dataset {
    Bundled,
    File(PathBuf),
    InMemory(Vec<ShopRecord>),
}

/// The static fallback dataset.
///
/// Read fresh on every call; nothing is cached between discoveries.
#[derive(Debug, Clone)]
pub struct LocalSource {
    dataset: Dataset,
}

impl LocalSource {
    /// Shops compiled into the binary.
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            dataset: Dataset::Bundled,
        }
    }

    /// Shops read from a fixtures YAML file at call time.
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            dataset: Dataset::File(path.into()),
        }
    }

    #[must_use]
    pub fn from_shops(shops: Vec<ShopRecord>) -> Self {
        Self {
            dataset: Dataset::InMemory(shops),
        }
    }
}

#[async_trait]
impl CandidateSource for LocalSource {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn candidates(&self) -> Result<Vec<ShopRecord>, SourceError> {
        let shops = match &self.dataset {
            Dataset::Bundled => parse_fixture_shops(BUNDLED_SHOPS)?,
            Dataset::File(path) => load_fixture_shops(path)?,
            Dataset::InMemory(shops) => shops.clone(),
        };
        Ok(shops)
    }
}
