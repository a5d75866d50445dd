//! Machine wire formats a point is persisted or exchanged in.
//!
//! The format of an incoming string is never declared by the caller. It is detected by [`sniff`], which checks the
//! structural signature of each format in a fixed order:
//!
//! 1. [`wkb`]: hex encoded PostGIS EWKB point with SRID 4326 (`0101000020E6100000...`),
//! 2. [`geojson`]: a string containing `"type":"Point"`,
//! 3. [`wkt`]: a string starting with `SRID=4326;POINT`.
//!
//! The first match wins, so every input is claimed by exactly one format (or none). [`decode`] then hands the input
//! to that format's decoder.

use std::fmt::{Display, Formatter};

use crate::coordinate::LatLon;
use crate::error::GeoError;

pub mod geojson;
pub mod wkb;
pub mod wkt;

/// Result of format detection.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum WireFormat {
    /// Hex encoded EWKB point.
    Wkb,
    /// GeoJSON point geometry.
    GeoJson,
    /// EWKT point with SRID prefix.
    Wkt,
    /// None of the supported signatures matched.
    Unrecognized,
}

impl Display for WireFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            WireFormat::Wkb => write!(f, "WKB"),
            WireFormat::GeoJson => write!(f, "GeoJSON"),
            WireFormat::Wkt => write!(f, "WKT"),
            WireFormat::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// Detects the wire format of the input by its structure.
///
/// ```
/// use transecta_geo::wire::{sniff, WireFormat};
///
/// assert_eq!(sniff("SRID=4326;POINT(1 2)"), WireFormat::Wkt);
/// assert_eq!(sniff(r#"{"type":"Point","coordinates":[1,2]}"#), WireFormat::GeoJson);
/// assert_eq!(sniff(""), WireFormat::Unrecognized);
/// ```
pub fn sniff(input: &str) -> WireFormat {
    if wkb::matches(input) {
        WireFormat::Wkb
    } else if geojson::matches(input) {
        WireFormat::GeoJson
    } else if wkt::matches(input) {
        WireFormat::Wkt
    } else {
        WireFormat::Unrecognized
    }
}

/// Detects the format of the input and decodes it.
///
/// Returns `Ok(None)` when the input is not recognized as a point in any supported format and
/// [`GeoError::MalformedPayload`] when it is recognized but cannot be decoded.
pub fn decode(input: &str) -> Result<Option<LatLon>, GeoError> {
    match sniff(input) {
        WireFormat::Wkb => wkb::decode(input),
        WireFormat::GeoJson => geojson::decode(input),
        WireFormat::Wkt => Ok(wkt::decode(input)),
        WireFormat::Unrecognized => Ok(None),
    }
}

/// Encodes the point into the given format. Returns `None` for [`WireFormat::Unrecognized`].
pub fn encode(point: LatLon, format: WireFormat) -> Option<String> {
    match format {
        WireFormat::Wkb => Some(wkb::encode(point)),
        WireFormat::GeoJson => Some(geojson::encode(point)),
        WireFormat::Wkt => Some(wkt::encode(point)),
        WireFormat::Unrecognized => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const WKB: &str = "0101000020E6100000F08AE07F2B1450C08DEF8B4B552A45C0";
    const WKT: &str = "SRID=4326;POINT(-64.315155 -42.330728)";
    const GEOJSON: &str = r#"{"type":"Point","coordinates":[-64.315155,-42.330728]}"#;

    #[test]
    fn sniff_formats() {
        assert_eq!(sniff(WKB), WireFormat::Wkb);
        assert_eq!(sniff(&WKB.to_lowercase()), WireFormat::Wkb);
        assert_eq!(sniff(WKT), WireFormat::Wkt);
        assert_eq!(sniff(GEOJSON), WireFormat::GeoJson);
    }

    #[test]
    fn sniff_unrecognized() {
        for input in [
            "",
            " ",
            "POINT(-64.315155 -42.330728)",
            "SRID=3857;POINT(1 2)",
            "0101000020",
            "0101000020110F0000F08AE07F2B1450C08DEF8B4B552A45C0",
            r#"{"type":"LineString","coordinates":[[1,2],[3,4]]}"#,
            r#"{"type": "Point", "coordinates": [1, 2]}"#,
            "42°19'50.62\"S",
        ] {
            assert_eq!(sniff(input), WireFormat::Unrecognized, "input: {input}");
            assert_matches!(decode(input), Ok(None), "input: {input}");
        }
    }

    #[test]
    fn sniff_is_exclusive_for_adversarial_input() {
        // GeoJSON wrapped in a WKT-looking string is claimed by the GeoJSON detector only.
        let wrapped = format!("SRID=4326;POINT({GEOJSON})");
        assert_eq!(sniff(&wrapped), WireFormat::GeoJson);
        assert!(wkt::matches(&wrapped));
        assert_matches!(decode(&wrapped), Ok(None));

        // WKB header followed by GeoJSON is claimed by the WKB detector and rejected as corrupt.
        let prefixed = format!("{}{GEOJSON}", wkb::HEADER);
        assert_eq!(sniff(&prefixed), WireFormat::Wkb);
        assert_matches!(
            decode(&prefixed),
            Err(GeoError::MalformedPayload {
                format: WireFormat::Wkb,
                ..
            })
        );

        // A WKT prefix followed by a WKB string does not look like WKB.
        let wkt_prefixed = format!("SRID=4326;POINT{WKB}");
        assert_eq!(sniff(&wkt_prefixed), WireFormat::Wkt);
        assert_eq!(decode(&wkt_prefixed), Ok(None));
    }

    #[test]
    fn decode_all_formats_to_same_point() {
        let expected = LatLon::new(-42.330728, -64.315155);
        assert_eq!(decode(WKB), Ok(Some(expected)));
        assert_eq!(decode(WKT), Ok(Some(expected)));
        assert_eq!(decode(GEOJSON), Ok(Some(expected)));
    }

    #[test]
    fn encode_per_format() {
        let point = LatLon::new(-42.330728, -64.315155);
        assert_eq!(encode(point, WireFormat::Wkb).as_deref(), Some(WKB));
        assert_eq!(encode(point, WireFormat::Wkt).as_deref(), Some(WKT));
        assert_eq!(encode(point, WireFormat::GeoJson).as_deref(), Some(GEOJSON));
        assert_eq!(encode(point, WireFormat::Unrecognized), None);
    }
}
