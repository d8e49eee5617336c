//! Proximity ranking of candidate shops around an origin.

use serde::Serialize;

use crate::geo::distance_km;
use crate::shops::{Coordinate, ShopRecord};

/// A shop annotated with its distance from the query origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedShopRecord {
    #[serde(flatten)]
    pub shop: ShopRecord,
    pub distance_km: f64,
}

/// Rank `candidates` by distance from `origin`, keeping those within `radius_km`.
///
/// - Candidates without a location are dropped.
/// - The radius is inclusive. The comparison is plain IEEE `<=`, so NaN
///   distances (from a non-finite origin) never pass.
/// - Output is sorted ascending by distance. The sort is stable, so ties keep
///   their input order.
/// - `limit` keeps only the first `n` entries of the sorted list.
#[must_use]
pub fn rank<I>(
    origin: Coordinate,
    radius_km: f64,
    candidates: I,
    limit: Option<usize>,
) -> Vec<RankedShopRecord>
where
    I: IntoIterator<Item = ShopRecord>,
{
    let mut ranked: Vec<RankedShopRecord> = candidates
        .into_iter()
        .filter_map(|shop| {
            let location = shop.location?;
            let distance_km = distance_km(origin, location);
            (distance_km <= radius_km).then_some(RankedShopRecord { shop, distance_km })
        })
        .collect();

    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

    if let Some(limit) = limit {
        ranked.truncate(limit);
    }

    ranked
}
