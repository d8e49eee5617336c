use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shops::{Coordinate, ShopRecord};
use crate::ConfigError;

fn default_true() -> bool {
    true
}

/// One shop entry in a fixtures YAML file.
///
/// Coordinates are stored as two loose columns, matching the remote schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureShop {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub owner_id: Option<Uuid>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default = "default_true")]
    pub is_approved: bool,
}

impl FixtureShop {
    /// Convert into a domain record. Malformed coordinates become `None`.
    #[must_use]
    pub fn into_shop_record(self) -> ShopRecord {
        let location = match Coordinate::from_optional(self.latitude, self.longitude) {
            Ok(location) => location,
            Err(e) => {
                tracing::warn!(shop_id = %self.id, error = %e, "ignoring malformed fixture coordinates");
                None
            }
        };
        ShopRecord {
            id: self.id,
            name: self.name,
            address: self.address,
            phone: self.phone,
            email: self.email,
            description: self.description,
            owner_id: self.owner_id,
            location,
            is_active: self.is_active,
            is_approved: self.is_approved,
            created_at: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FixturesFile {
    pub shops: Vec<FixtureShop>,
}

/// Parse and validate a fixtures document.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML cannot be parsed or fails validation.
pub fn parse_fixture_shops(content: &str) -> Result<Vec<ShopRecord>, ConfigError> {
    let file: FixturesFile = serde_yaml::from_str(content)?;
    validate_fixtures(&file)?;
    Ok(file
        .shops
        .into_iter()
        .map(FixtureShop::into_shop_record)
        .collect())
}

/// Load and validate a fixtures YAML file from disk.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_fixture_shops(path: &Path) -> Result<Vec<ShopRecord>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FixturesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_fixture_shops(&content)
}

fn validate_fixtures(file: &FixturesFile) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for shop in &file.shops {
        if shop.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "shop {} has an empty name",
                shop.id
            )));
        }

        if !seen_ids.insert(shop.id) {
            return Err(ConfigError::Validation(format!(
                "duplicate shop id: {} ('{}')",
                shop.id, shop.name
            )));
        }
    }

    Ok(())
}
