//! Read operations for the `shops` table.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// A row from the `shops` table as the discovery engine reads it.
///
/// `latitude`/`longitude` are nullable until the owner places the shop on
/// the map; both are cast to `float8` in the query.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ShopRow {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub owner_id: Option<Uuid>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_active: bool,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

/// Return every shop with both coordinate columns populated.
///
/// Status flags are not filtered here; callers receive active, inactive,
/// approved and pending shops alike. Ordered by `name ASC`.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn list_shops_with_coordinates(pool: &PgPool) -> Result<Vec<ShopRow>, sqlx::Error> {
    sqlx::query_as::<_, ShopRow>(
        "SELECT \
            s.id, s.name, \
            COALESCE(s.address, '') AS address, \
            s.phone, s.email, s.description, s.owner_id, \
            s.latitude::float8 AS latitude, \
            s.longitude::float8 AS longitude, \
            s.is_active, s.is_approved, s.created_at \
         FROM shops s \
         WHERE s.latitude IS NOT NULL \
           AND s.longitude IS NOT NULL \
         ORDER BY s.name ASC",
    )
    .fetch_all(pool)
    .await
}
