//! EWKT points with SRID prefix: `SRID=4326;POINT(<lon> <lat>)`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::coordinate::LatLon;

/// Prefix every supported WKT point starts with.
pub const PREFIX: &str = "SRID=4326;POINT";

lazy_static! {
    static ref POINT_RE: Regex = Regex::new(
        r"^SRID=4326;POINT\s*\(\s*([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)\s+([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)\s*\)\s*$"
    )
    .expect("WKT point regex must compile");
}

/// Returns true if the input starts with [`PREFIX`].
pub fn matches(input: &str) -> bool {
    input.starts_with(PREFIX)
}

/// Decodes a WKT point. The first number is the longitude, the second one is the latitude.
///
/// Returns `None` if the prefix does not match, the point body cannot be read, or a value does not fit into a
/// finite `f64`.
pub fn decode(input: &str) -> Option<LatLon> {
    if !matches(input) {
        return None;
    }

    let caps = POINT_RE.captures(input)?;
    let longitude = caps[1].parse::<f64>().ok()?;
    let latitude = caps[2].parse::<f64>().ok()?;
    if !longitude.is_finite() || !latitude.is_finite() {
        return None;
    }

    Some(LatLon::new(latitude, longitude))
}

/// Encodes the point as `SRID=4326;POINT(<lon> <lat>)`.
///
/// Numbers are written with the shortest representation that reads back into the same `f64`, so no precision is
/// lost.
pub fn encode(point: LatLon) -> String {
    format!("{PREFIX}({} {})", point.longitude, point.latitude)
}
