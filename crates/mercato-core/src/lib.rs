pub mod app_config;
pub mod config;
pub mod fixtures;
pub mod geo;
pub mod ranking;
pub mod shops;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use fixtures::{load_fixture_shops, parse_fixture_shops, FixtureShop, FixturesFile};
pub use geo::{distance_km, format_distance, EARTH_RADIUS_KM};
pub use ranking::{rank, RankedShopRecord};
pub use shops::{Coordinate, ShopRecord};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read fixtures file {path}: {source}")]
    FixturesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse fixtures file: {0}")]
    FixturesFileParse(#[from] serde_yaml::Error),

    #[error("fixtures validation failed: {0}")]
    Validation(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("invalid coordinate ({latitude}, {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
}
