//! Great-circle distances on a spherical Earth.
//!
//! The sphere is an approximation of the WGS84 ellipsoid with up to ~0.3% error. Segment lengths stored across the
//! survey database were derived with this exact model, so it must not be swapped for an ellipsoidal one.

use crate::point::GeoPoint;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two points in meters, using the Haversine formula.
///
/// The result is symmetric and is `0` for identical points. `NaN` in either input produces `NaN`.
///
/// ```
/// use transecta_geo::coord;
/// use transecta_geo::distance::haversine_distance_meters;
///
/// let distance = haversine_distance_meters(&coord!(0.0, 0.0), &coord!(1.0, 0.0));
/// assert!((distance - 111_195.0).abs() < 1.0);
/// ```
pub fn haversine_distance_meters(a: &impl GeoPoint, b: &impl GeoPoint) -> f64 {
    let phi1 = a.lat_rad();
    let phi2 = b.lat_rad();
    let d_phi = (phi2 - phi1).abs();
    let d_lambda = (b.lon_rad() - a.lon_rad()).abs();

    let a_term = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let a_term = a_term.clamp(0.0, 1.0);
    let c = 2.0 * a_term.sqrt().atan2((1.0 - a_term).sqrt());

    EARTH_RADIUS_M * c
}

/// Length of the polyline through the given points in meters, as a sum of Haversine legs.
///
/// Returns `0` for fewer than 2 points.
pub fn path_length_meters<P: GeoPoint>(points: &[P]) -> f64 {
    points
        .windows(2)
        .map(|leg| haversine_distance_meters(&leg[0], &leg[1]))
        .sum()
}
