//! Reading and writing `geometry(Point, 4326)` columns.
//!
//! Rows arrive with point columns either null, hex EWKB (plain select) or EWKT (text cast). [`PointDecoder`] turns
//! them into coordinates and decides what happens to values that are not usable points. Two situations are kept
//! apart:
//!
//! * the value is not a point at all, which is logged as a warning and treated as a missing point,
//! * the value looks like a point but is corrupt, which is either logged as an error and treated as a missing point
//!   ([`MalformedPolicy::Skip`]) or returned as [`RecordError::Point`] ([`MalformedPolicy::Fail`]).
//!
//! Substituting the origin for missing points is a presentation concern and happens only through
//! [`FallbackPolicy`], never on the path that writes back into the store.

use serde::{Deserialize, Serialize};
use transecta_geo::Coordinate;

use crate::error::RecordError;

/// What presentation code shows in place of a missing point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Show the point at `(0, 0)` so that maps and tables always have something to render.
    #[default]
    Origin,
    /// Leave the point out.
    Absent,
}

impl FallbackPolicy {
    /// Applies the policy to a possibly missing point.
    pub fn apply(&self, field: &str, point: Option<Coordinate>) -> Option<Coordinate> {
        match (point, self) {
            (Some(point), _) => Some(point),
            (None, FallbackPolicy::Origin) => {
                log::warn!("No usable point in {field}, showing it at the origin");
                Some(Coordinate::origin())
            }
            (None, FallbackPolicy::Absent) => None,
        }
    }
}

/// What to do with a point column value that is recognized but corrupt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedPolicy {
    /// Log the error and treat the point as missing.
    #[default]
    Skip,
    /// Fail the row.
    Fail,
}

/// Decoder of point column values.
///
/// ```
/// use transecta_records::column::{MalformedPolicy, PointDecoder};
///
/// let decoder = PointDecoder::new().with_malformed_policy(MalformedPolicy::Fail);
/// let point = decoder
///     .decode("start_point", Some("SRID=4326;POINT(-64.315155 -42.330728)"))
///     .unwrap();
/// assert_eq!(point.map(|p| p.latitude()), Some(-42.330728));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PointDecoder {
    fallback: FallbackPolicy,
    on_malformed: MalformedPolicy,
}

impl PointDecoder {
    /// Creates a decoder with the default policies: origin fallback for display and skipping corrupt points.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the policy used by [`PointDecoder::decode_for_display`].
    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    /// Sets the policy for corrupt values.
    pub fn with_malformed_policy(mut self, on_malformed: MalformedPolicy) -> Self {
        self.on_malformed = on_malformed;
        self
    }

    /// Display fallback policy.
    pub fn fallback(&self) -> FallbackPolicy {
        self.fallback
    }

    /// Policy for corrupt values.
    pub fn malformed_policy(&self) -> MalformedPolicy {
        self.on_malformed
    }

    /// Decodes a column value. Never substitutes a placeholder for a missing point.
    pub fn decode(&self, field: &str, value: Option<&str>) -> Result<Option<Coordinate>, RecordError> {
        let Some(value) = value else {
            log::debug!("No point recorded in {field}");
            return Ok(None);
        };

        match Coordinate::parse(value) {
            Ok(Some(point)) => Ok(Some(point)),
            Ok(None) => {
                log::warn!("Value of {field} is not a point: {value:?}");
                Ok(None)
            }
            Err(source) => match self.on_malformed {
                MalformedPolicy::Skip => {
                    log::error!("Corrupt point in {field}: {source}");
                    Ok(None)
                }
                MalformedPolicy::Fail => Err(RecordError::Point {
                    field: field.to_string(),
                    source,
                }),
            },
        }
    }

    /// Decodes a column value for presentation. Errors are logged and the fallback policy is applied to anything
    /// that is not a usable point.
    pub fn decode_for_display(&self, field: &str, value: Option<&str>) -> Option<Coordinate> {
        let point = self.decode(field, value).unwrap_or_else(|err| {
            log::error!("{err}");
            None
        });

        self.fallback.apply(field, point)
    }
}

/// Encodes a point for a `geometry(Point, 4326)` column. A missing point is written as null.
pub fn encode_point(point: Option<&Coordinate>) -> Option<String> {
    point.map(Coordinate::wkt)
}
