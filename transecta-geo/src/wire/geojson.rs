//! GeoJSON point geometries: `{"type":"Point","coordinates":[<lon>,<lat>]}`.

use serde_json::Value;

use crate::coordinate::LatLon;
use crate::error::GeoError;
use crate::wire::WireFormat;

/// Marker a string must contain to be treated as a GeoJSON point.
pub const TYPE_MARKER: &str = r#""type":"Point""#;

/// Returns true if the input contains [`TYPE_MARKER`].
pub fn matches(input: &str) -> bool {
    input.contains(TYPE_MARKER)
}

/// Decodes a GeoJSON point geometry.
///
/// Returns `Ok(None)` if the input does not contain [`TYPE_MARKER`], is not valid JSON, or is valid JSON with a
/// top level `type` other than `Point` (e.g. a `Feature` wrapping a point). A point geometry whose `coordinates`
/// member is missing or is not an array of exactly two numbers is rejected with [`GeoError::MalformedPayload`].
pub fn decode(input: &str) -> Result<Option<LatLon>, GeoError> {
    if !matches(input) {
        return Ok(None);
    }

    let Ok(value) = serde_json::from_str::<Value>(input) else {
        return Ok(None);
    };
    if value.get("type").and_then(Value::as_str) != Some("Point") {
        return Ok(None);
    }

    let coordinates = value
        .get("coordinates")
        .ok_or_else(|| malformed("missing `coordinates` member"))?
        .as_array()
        .ok_or_else(|| malformed("`coordinates` is not an array"))?;

    match coordinates.as_slice() {
        [lon, lat] => {
            let longitude = lon
                .as_f64()
                .ok_or_else(|| malformed(format!("longitude `{lon}` is not a number")))?;
            let latitude = lat
                .as_f64()
                .ok_or_else(|| malformed(format!("latitude `{lat}` is not a number")))?;
            Ok(Some(LatLon::new(latitude, longitude)))
        }
        other => Err(malformed(format!(
            "`coordinates` must contain 2 values, got {}",
            other.len()
        ))),
    }
}

/// Encodes the point as a GeoJSON point geometry.
///
/// Non-finite values cannot be represented in JSON and are written as `null`.
pub fn encode(point: LatLon) -> String {
    format!(
        r#"{{"type":"Point","coordinates":[{},{}]}}"#,
        Value::from(point.longitude),
        Value::from(point.latitude)
    )
}

fn malformed(reason: impl Into<String>) -> GeoError {
    GeoError::malformed(WireFormat::GeoJson, reason)
}
