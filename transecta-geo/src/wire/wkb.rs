//! Hex encoded PostGIS EWKB points.
//!
//! Only one layout is supported: a little-endian point with SRID 4326, which is what PostGIS returns for a
//! `geometry(Point, 4326)` column. It is 25 bytes long, 50 hex characters:
//!
//! ```text
//! 01          byte order (little-endian)
//! 01000020    geometry type 1 (point) with the SRID flag set
//! E6100000    SRID 4326
//! ..8 bytes.. X (longitude), IEEE-754 double, little-endian
//! ..8 bytes.. Y (latitude), IEEE-754 double, little-endian
//! ```
//!
//! Any other header is not treated as WKB at all.

use crate::coordinate::LatLon;
use crate::error::GeoError;
use crate::wire::WireFormat;

/// Hex encoded header of a little-endian EWKB point with SRID 4326.
pub const HEADER: &str = "0101000020E6100000";

/// Total length of an encoded point in hex characters.
pub const ENCODED_LEN: usize = 50;

const DOUBLE_HEX_LEN: usize = 16;

/// Returns true if the input starts with [`HEADER`], ignoring letter case.
pub fn matches(input: &str) -> bool {
    input
        .get(..HEADER.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(HEADER))
}

/// Decodes a hex encoded EWKB point.
///
/// Returns `Ok(None)` if the input does not start with [`HEADER`]. If it does, the rest of the input must be exactly
/// two hex encoded doubles, otherwise [`GeoError::MalformedPayload`] is returned. Hex digits are case-insensitive.
pub fn decode(input: &str) -> Result<Option<LatLon>, GeoError> {
    if !matches(input) {
        return Ok(None);
    }

    let payload = &input[HEADER.len()..];
    if let Some(invalid) = payload.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(malformed(format!("invalid hex character `{invalid}`")));
    }
    if payload.len() != ENCODED_LEN - HEADER.len() {
        return Err(malformed(format!(
            "expected {} hex characters after the header, got {}",
            ENCODED_LEN - HEADER.len(),
            payload.len()
        )));
    }

    let (x, y) = payload.split_at(DOUBLE_HEX_LEN);
    Ok(Some(LatLon::new(read_double(y)?, read_double(x)?)))
}

/// Encodes the point as an upper case hex EWKB string.
pub fn encode(point: LatLon) -> String {
    let mut encoded = String::with_capacity(ENCODED_LEN);
    encoded.push_str(HEADER);
    for byte in point
        .longitude
        .to_le_bytes()
        .into_iter()
        .chain(point.latitude.to_le_bytes())
    {
        encoded.push_str(&format!("{byte:02X}"));
    }

    encoded
}

/// Reads 16 hex characters as a little-endian double. Hex pairs come in storage order, so the first pair is the
/// least significant byte.
fn read_double(hex: &str) -> Result<f64, GeoError> {
    let mut bytes = [0u8; 8];
    for (index, byte) in bytes.iter_mut().enumerate() {
        let pair = hex
            .get(index * 2..index * 2 + 2)
            .ok_or_else(|| malformed("truncated double"))?;
        *byte = u8::from_str_radix(pair, 16)
            .map_err(|_| malformed(format!("invalid hex pair `{pair}`")))?;
    }

    Ok(f64::from_le_bytes(bytes))
}

fn malformed(reason: impl Into<String>) -> GeoError {
    GeoError::malformed(WireFormat::Wkb, reason)
}
