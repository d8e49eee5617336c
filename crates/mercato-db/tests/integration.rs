//! Offline unit tests for mercato-db pool configuration and row types.
//! These tests do not require a live database connection.

use mercato_core::{AppConfig, Environment};
use mercato_db::{PoolConfig, ShopRow};

#[test]
fn pool_config_from_app_config_uses_core_values() {
    let app_config = AppConfig {
        database_url: Some("postgres://example".to_string()),
        env: Environment::Test,
        log_level: "info".to_string(),
        db_max_connections: 42,
        db_min_connections: 7,
        db_acquire_timeout_secs: 9,
        remote_timeout_secs: 5,
        default_radius_km: 10.0,
        fixtures_path: None,
    };

    let pool_config = PoolConfig::from_app_config(&app_config);
    assert_eq!(pool_config.max_connections, 42);
    assert_eq!(pool_config.min_connections, 7);
    assert_eq!(pool_config.acquire_timeout_secs, 9);
}

#[tokio::test]
async fn connect_pool_from_app_config_without_url_fails() {
    let app_config = AppConfig {
        database_url: None,
        env: Environment::Test,
        log_level: "info".to_string(),
        db_max_connections: 1,
        db_min_connections: 0,
        db_acquire_timeout_secs: 1,
        remote_timeout_secs: 1,
        default_radius_km: 10.0,
        fixtures_path: None,
    };

    let result = mercato_db::connect_pool_from_app_config(&app_config).await;
    assert!(matches!(result, Err(mercato_db::DbError::MissingDatabaseUrl)));
}

/// Compile-time smoke test: confirm that [`ShopRow`] has all expected
/// fields with the correct types. No database required.
#[test]
fn shop_row_has_expected_fields() {
    use chrono::Utc;
    use uuid::Uuid;

    let row = ShopRow {
        id: Uuid::new_v4(),
        name: "Bottega Brera".to_string(),
        address: "Via Brera 12, Milano".to_string(),
        phone: Some("+39 02 1234567".to_string()),
        email: None,
        description: None,
        owner_id: None,
        latitude: Some(45.4719),
        longitude: Some(9.1881),
        is_active: true,
        is_approved: false,
        created_at: Utc::now(),
    };

    assert_eq!(row.name, "Bottega Brera");
    assert_eq!(row.latitude, Some(45.4719));
    assert_eq!(row.longitude, Some(9.1881));
    assert!(row.is_active);
    assert!(!row.is_approved);
    assert!(row.email.is_none());
}
