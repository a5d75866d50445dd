//! See [`GeoPoint`] trait.

/// Point on the surface of the Earth given by latitude and longitude in degrees.
///
/// Algorithms in this crate (e.g. [`haversine_distance_meters`](crate::distance::haversine_distance_meters)) are
/// written against this trait, so they work both with [`Coordinate`](crate::Coordinate) and with plain
/// [`LatLon`](crate::LatLon) pairs.
pub trait GeoPoint {
    /// Latitude in degrees, south is negative.
    fn lat(&self) -> f64;
    /// Longitude in degrees, west is negative.
    fn lon(&self) -> f64;

    /// Latitude in radians.
    fn lat_rad(&self) -> f64 {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> f64 {
        self.lon().to_radians()
    }
}
