use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::CoreError;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Build a coordinate without range checks.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build a coordinate, rejecting non-finite or out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCoordinate`] when latitude is outside
    /// `[-90, 90]`, longitude is outside `[-180, 180]`, or either is NaN/infinite.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, CoreError> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        if valid {
            Ok(Self::new(latitude, longitude))
        } else {
            Err(CoreError::InvalidCoordinate {
                latitude,
                longitude,
            })
        }
    }

    /// Combine two nullable storage columns into an optional coordinate.
    ///
    /// Returns `Ok(None)` when either half is missing.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCoordinate`] when both halves are present
    /// but fail [`Coordinate::try_new`].
    pub fn from_optional(
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Option<Self>, CoreError> {
        match (latitude, longitude) {
            (Some(lat), Some(lng)) => Self::try_new(lat, lng).map(Some),
            _ => Ok(None),
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// A shop as the discovery engine sees it.
///
/// `location` is `None` until the shop owner sets one; such shops are
/// never ranked. `is_active` and `is_approved` are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopRecord {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub owner_id: Option<Uuid>,
    pub location: Option<Coordinate>,
    pub is_active: bool,
    pub is_approved: bool,
    pub created_at: Option<DateTime<Utc>>,
}
