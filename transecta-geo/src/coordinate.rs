//! [`Coordinate`] value type and the plain [`LatLon`] pair.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::distance::haversine_distance_meters;
use crate::error::GeoError;
use crate::point::GeoPoint;
use crate::sexagesimal::{Axis, SexagesimalAngle, SexagesimalPosition};
use crate::wire::{self, geojson, wkb, wkt};

/// Plain pair of decimal degrees, as consumed by map widgets and produced by the wire decoders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct LatLon {
    /// Latitude in degrees, south is negative.
    pub latitude: f64,
    /// Longitude in degrees, west is negative.
    pub longitude: f64,
}

impl LatLon {
    /// Creates a new pair.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl GeoPoint for LatLon {
    fn lat(&self) -> f64 {
        self.latitude
    }

    fn lon(&self) -> f64 {
        self.longitude
    }
}

/// Geographic point in WGS84 (SRID 4326), stored as signed decimal degrees.
///
/// A coordinate is an immutable value. It is created by one of the format specific constructors and converted
/// back into any of the supported representations:
///
/// ```
/// use transecta_geo::Coordinate;
///
/// let point = Coordinate::from_wkt("SRID=4326;POINT(-64.315155 -42.330728)").unwrap();
/// assert_eq!(point.latitude(), -42.330728);
/// assert_eq!(point.sexagesimal().latitude.to_string(), "42°19'50.62\"S");
/// assert_eq!(point.wkb_hex(), "0101000020E6100000F08AE07F2B1450C08DEF8B4B552A45C0");
/// ```
///
/// Two coordinates are equal only if both of their values are bit-identical. Use an explicit tolerance when
/// comparing coordinates that went through a lossy conversion, such as sexagesimal notation.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from decimal degrees. The values are taken as is, without range checks.
    pub fn from_decimal(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates a coordinate from decimal degrees, rejecting non-finite values and values outside of
    /// `[-90, 90]` x `[-180, 180]`.
    pub fn try_from_decimal(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        if (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude) {
            Ok(Self::from_decimal(latitude, longitude))
        } else {
            Err(GeoError::OutOfRange {
                latitude,
                longitude,
            })
        }
    }

    /// The `(0, 0)` coordinate.
    ///
    /// Used as a placeholder by presentation code when a point is missing. Compare against it with
    /// [`Coordinate::is_origin`] only where that placeholder policy applies.
    pub const fn origin() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    /// Returns true if the coordinate is equal to [`Coordinate::origin`]. Negative zeros are not the origin.
    pub fn is_origin(&self) -> bool {
        *self == Self::origin()
    }

    /// Creates a coordinate from sexagesimal angles. The angles are not validated.
    pub fn from_sexagesimal(position: &SexagesimalPosition) -> Self {
        Self::from_decimal(
            position.latitude.to_decimal(),
            position.longitude.to_decimal(),
        )
    }

    /// Decodes a hex encoded PostGIS EWKB point with SRID 4326.
    ///
    /// Returns `Ok(None)` if the input does not start with the expected header, and
    /// [`GeoError::MalformedPayload`] if it does but the rest of the input is not two hex encoded doubles.
    pub fn from_wkb_hex(hex: &str) -> Result<Option<Self>, GeoError> {
        Ok(wkb::decode(hex)?.map(Self::from))
    }

    /// Decodes a `SRID=4326;POINT(<lon> <lat>)` string. Returns `None` if the input is not such a string.
    pub fn from_wkt(text: &str) -> Option<Self> {
        wkt::decode(text).map(Self::from)
    }

    /// Decodes a GeoJSON point geometry.
    ///
    /// Returns `Ok(None)` if the input is not a JSON point geometry, and [`GeoError::MalformedPayload`] if it is a
    /// point geometry with missing or invalid `coordinates`.
    pub fn from_geojson(text: &str) -> Result<Option<Self>, GeoError> {
        Ok(geojson::decode(text)?.map(Self::from))
    }

    /// Detects the wire format of the input and decodes it. See [`wire`](crate::wire) for the detection rules.
    pub fn parse(input: &str) -> Result<Option<Self>, GeoError> {
        Ok(wire::decode(input)?.map(Self::from))
    }

    /// Same as [`Coordinate::parse`], with a missing value decoding into a missing coordinate.
    pub fn parse_opt(input: Option<&str>) -> Result<Option<Self>, GeoError> {
        match input {
            Some(input) => Self::parse(input),
            None => Ok(None),
        }
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Decimal representation.
    pub fn decimal(&self) -> LatLon {
        LatLon::new(self.latitude, self.longitude)
    }

    /// Sexagesimal representation with seconds rounded to 2 decimal places.
    pub fn sexagesimal(&self) -> SexagesimalPosition {
        SexagesimalPosition::new(
            SexagesimalAngle::from_decimal(self.latitude, Axis::Latitude),
            SexagesimalAngle::from_decimal(self.longitude, Axis::Longitude),
        )
    }

    /// `SRID=4326;POINT(<lon> <lat>)` representation, suitable for a `geometry(Point, 4326)` column.
    pub fn wkt(&self) -> String {
        wkt::encode(self.decimal())
    }

    /// Upper case hex EWKB representation.
    pub fn wkb_hex(&self) -> String {
        wkb::encode(self.decimal())
    }

    /// GeoJSON point geometry representation.
    pub fn geojson(&self) -> String {
        geojson::encode(self.decimal())
    }

    /// Great-circle distance to the other coordinate in meters.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        haversine_distance_meters(self, other)
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.latitude.to_bits() == other.latitude.to_bits()
            && self.longitude.to_bits() == other.longitude.to_bits()
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.latitude.to_bits().hash(state);
        self.longitude.to_bits().hash(state);
    }
}

impl GeoPoint for Coordinate {
    fn lat(&self) -> f64 {
        self.latitude
    }

    fn lon(&self) -> f64 {
        self.longitude
    }
}

impl From<LatLon> for Coordinate {
    fn from(value: LatLon) -> Self {
        Self::from_decimal(value.latitude, value.longitude)
    }
}

impl From<Coordinate> for LatLon {
    fn from(value: Coordinate) -> Self {
        value.decimal()
    }
}

/// Creates a new [`Coordinate`] from latitude and longitude values (in degrees).
///
/// ```
/// use transecta_geo::coord;
///
/// let point = coord!(-42.330728, -64.315155);
/// assert_eq!(point.longitude(), -64.315155);
/// ```
#[macro_export]
macro_rules! coord {
    ($lat:expr, $lon:expr) => {
        $crate::Coordinate::from_decimal($lat, $lon)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sexagesimal::Hemisphere;
    use crate::wire::WireFormat;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    fn survey_points() -> Vec<Coordinate> {
        vec![
            coord!(-42.330728, -64.315155),
            coord!(0.0, 0.0),
            coord!(90.0, 180.0),
            coord!(-90.0, -180.0),
            coord!(10.5, -10.5),
            coord!(0.1 + 0.2, 1.0 / 3.0),
            coord!(-0.000_001, 0.000_001),
            coord!(45.123_456_789_012_34, -120.987_654_321_098_76),
        ]
    }

    #[test]
    fn wkt_scenario() {
        let point = Coordinate::from_wkt("SRID=4326;POINT(-64.315155 -42.330728)")
            .expect("valid WKT");

        assert_eq!(point.decimal(), LatLon::new(-42.330728, -64.315155));

        let latitude = point.sexagesimal().latitude;
        assert_eq!(latitude.degrees, 42);
        assert_eq!(latitude.minutes, 19);
        assert_abs_diff_eq!(latitude.seconds, 50.62, epsilon = 0.005);
        assert_eq!(latitude.hemisphere, Hemisphere::S);

        let longitude = point.sexagesimal().longitude;
        assert_eq!(longitude.degrees, 64);
        assert_eq!(longitude.minutes, 18);
        assert_eq!(longitude.hemisphere, Hemisphere::O);
    }

    #[test]
    fn sexagesimal_round_trip() {
        for point in survey_points() {
            let restored = Coordinate::from_sexagesimal(&point.sexagesimal());
            assert_abs_diff_eq!(restored.latitude(), point.latitude(), epsilon = 0.00003);
            assert_abs_diff_eq!(restored.longitude(), point.longitude(), epsilon = 0.00003);
        }
    }

    #[test]
    fn wkt_round_trip_is_exact() {
        for point in survey_points() {
            assert_eq!(Coordinate::from_wkt(&point.wkt()), Some(point));
        }
    }

    #[test]
    fn wkb_round_trip_is_exact() {
        for point in survey_points() {
            assert_eq!(Coordinate::from_wkb_hex(&point.wkb_hex()), Ok(Some(point)));
        }
    }

    #[test]
    fn geojson_round_trip_is_exact() {
        for point in survey_points() {
            assert_eq!(Coordinate::from_geojson(&point.geojson()), Ok(Some(point)));
        }
    }

    #[test]
    fn parse_any_format() {
        let expected = coord!(-42.330728, -64.315155);
        for input in [
            expected.wkt(),
            expected.wkb_hex(),
            expected.wkb_hex().to_lowercase(),
            expected.geojson(),
        ] {
            assert_eq!(Coordinate::parse(&input), Ok(Some(expected)), "input: {input}");
        }
    }

    #[test]
    fn absent_input() {
        assert_eq!(Coordinate::parse_opt(None), Ok(None));
        assert_eq!(Coordinate::parse_opt(Some("")), Ok(None));
        assert_eq!(Coordinate::parse(""), Ok(None));
        assert_eq!(Coordinate::from_wkt(""), None);
        assert_eq!(Coordinate::from_wkb_hex(""), Ok(None));
        assert_eq!(Coordinate::from_geojson(""), Ok(None));
    }

    #[test]
    fn malformed_geojson_is_not_unrecognized() {
        assert_matches!(
            Coordinate::from_geojson(r#"{"type":"Point","coordinates":[1]}"#),
            Err(GeoError::MalformedPayload {
                format: WireFormat::GeoJson,
                ..
            })
        );
        assert_matches!(
            Coordinate::parse(r#"{"type":"Point","coordinates":[1]}"#),
            Err(GeoError::MalformedPayload {
                format: WireFormat::GeoJson,
                ..
            })
        );
    }

    #[test]
    fn factories_only_accept_their_format() {
        let point = coord!(1.5, 2.5);
        assert_eq!(Coordinate::from_wkt(&point.geojson()), None);
        assert_eq!(Coordinate::from_wkb_hex(&point.wkt()), Ok(None));
        assert_eq!(Coordinate::from_geojson(&point.wkb_hex()), Ok(None));
    }

    #[test]
    fn decimal_range_validation_is_opt_in() {
        let far = Coordinate::from_decimal(-42.35, -4249.6);
        assert_eq!(far.longitude(), -4249.6);

        assert!(Coordinate::try_from_decimal(90.0, -180.0).is_ok());
        assert_matches!(
            Coordinate::try_from_decimal(-42.35, -4249.6),
            Err(GeoError::OutOfRange { .. })
        );
        assert_matches!(
            Coordinate::try_from_decimal(90.000_001, 0.0),
            Err(GeoError::OutOfRange { .. })
        );
        assert_matches!(
            Coordinate::try_from_decimal(f64::NAN, 0.0),
            Err(GeoError::OutOfRange { .. })
        );
    }

    #[test]
    fn bitwise_equality() {
        assert_eq!(coord!(1.0, 2.0), coord!(1.0, 2.0));
        assert_ne!(coord!(1.0, 2.0), coord!(1.0, 2.000_000_000_000_001));
        assert_ne!(coord!(0.0, 0.0), coord!(-0.0, 0.0));
        assert_eq!(coord!(f64::NAN, 0.0), coord!(f64::NAN, 0.0));
    }

    #[test]
    fn origin_is_explicit() {
        assert!(Coordinate::origin().is_origin());
        assert!(!coord!(0.0, 0.000_1).is_origin());
        assert!(!coord!(-0.0, 0.0).is_origin());
        assert!(!coord!(0.0, -0.0).is_origin());
        assert_eq!(Coordinate::origin(), coord!(0.0, 0.0));
    }

    #[test]
    fn distance_between_coordinates() {
        let a = coord!(0.0, 0.0);
        let b = coord!(1.0, 0.0);
        assert_abs_diff_eq!(a.distance_to(&b), 111_195.0, epsilon = 1.0);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
    }

    #[test]
    fn serializes_as_decimal_pair() {
        let point = coord!(-42.330728, -64.315155);
        let json = serde_json::to_string(&point).expect("serialize");
        assert_eq!(json, r#"{"latitude":-42.330728,"longitude":-64.315155}"#);

        let restored: Coordinate = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, point);
    }
}
