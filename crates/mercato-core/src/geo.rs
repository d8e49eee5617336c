//! Great-circle distance on a spherical Earth.
//!
//! Haversine over the mean Earth radius. Inputs are not range-checked;
//! NaN or infinite degrees propagate into the result.

use crate::shops::Coordinate;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates, in kilometres.
#[must_use]
pub fn distance_km(origin: Coordinate, target: Coordinate) -> f64 {
    let lat1 = origin.latitude.to_radians();
    let lat2 = target.latitude.to_radians();
    let d_lat = (target.latitude - origin.latitude).to_radians();
    let d_lng = (target.longitude - origin.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1 for near-antipodal points.
    let a = a.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Render a distance for display: whole metres under 1 km, one decimal above.
#[must_use]
pub fn format_distance(km: f64) -> String {
    // Switch units on the rounded value so 999.6 m reads "1.0 km", not "1000 m".
    let metres = (km * 1000.0).round();
    if metres < 1000.0 {
        format!("{metres:.0} m")
    } else {
        format!("{km:.1} km")
    }
}
