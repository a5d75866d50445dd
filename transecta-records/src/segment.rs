//! Transect segments and their lengths.

use serde::{Deserialize, Serialize};
use transecta_geo::distance::haversine_distance_meters;
use transecta_geo::Coordinate;

use crate::column::{encode_point, FallbackPolicy, PointDecoder};
use crate::error::RecordError;

/// Segment row as stored in the `segments` table.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SegmentRow {
    /// Row id.
    pub id: i64,
    /// Id of the transect the segment belongs to.
    pub transect_id: i64,
    /// Start point column value.
    #[serde(default)]
    pub start_point: Option<String>,
    /// End point column value.
    #[serde(default)]
    pub end_point: Option<String>,
    /// Average depth in meters.
    #[serde(default)]
    pub depth_m: Option<f64>,
}

impl SegmentRow {
    /// Deserializes a row from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decodes the point columns of the row.
    pub fn to_segment(&self, decoder: &PointDecoder) -> Result<Segment, RecordError> {
        let start = decoder.decode(
            &format!("segment {} start_point", self.id),
            self.start_point.as_deref(),
        )?;
        let end = decoder.decode(
            &format!("segment {} end_point", self.id),
            self.end_point.as_deref(),
        )?;

        Ok(Segment {
            id: self.id,
            transect_id: self.transect_id,
            start,
            end,
            depth_m: self.depth_m,
        })
    }
}

/// Straight piece of a transect between two surveyed points.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Row id.
    pub id: i64,
    /// Id of the transect the segment belongs to.
    pub transect_id: i64,
    /// Start point, if recorded.
    pub start: Option<Coordinate>,
    /// End point, if recorded.
    pub end: Option<Coordinate>,
    /// Average depth in meters.
    pub depth_m: Option<f64>,
}

impl Segment {
    /// Great-circle length of the segment in meters. `None` unless both ends are recorded.
    pub fn length_meters(&self) -> Option<f64> {
        match (&self.start, &self.end) {
            (Some(start), Some(end)) => Some(haversine_distance_meters(start, end)),
            _ => None,
        }
    }

    /// Start and end points as shown on maps and in tables.
    pub fn display_points(&self, policy: FallbackPolicy) -> (Option<Coordinate>, Option<Coordinate>) {
        (
            policy.apply(&format!("segment {} start", self.id), self.start),
            policy.apply(&format!("segment {} end", self.id), self.end),
        )
    }

    /// Encodes the segment back into a row.
    pub fn to_row(&self) -> SegmentRow {
        SegmentRow {
            id: self.id,
            transect_id: self.transect_id,
            start_point: encode_point(self.start.as_ref()),
            end_point: encode_point(self.end.as_ref()),
            depth_m: self.depth_m,
        }
    }
}

/// Total length of the segments in meters. Segments missing an end are skipped.
pub fn total_length_meters(segments: &[Segment]) -> f64 {
    segments.iter().filter_map(Segment::length_meters).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::MalformedPolicy;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn row(id: i64, start: Option<Coordinate>, end: Option<Coordinate>) -> SegmentRow {
        SegmentRow {
            id,
            transect_id: 7,
            start_point: start.map(|p| p.wkb_hex()),
            end_point: end.map(|p| p.wkt()),
            depth_m: Some(12.5),
        }
    }

    #[test]
    fn segment_from_json_row() {
        init_logger();
        let json = r#"{
            "id": 3,
            "transect_id": 7,
            "start_point": "0101000020E6100000F08AE07F2B1450C08DEF8B4B552A45C0",
            "end_point": "SRID=4326;POINT(-64.315155 -42.329728)",
            "depth_m": 8.0
        }"#;

        let segment = SegmentRow::from_json(json)
            .expect("valid row")
            .to_segment(&PointDecoder::new())
            .expect("valid points");

        assert_eq!(segment.start, Some(Coordinate::from_decimal(-42.330728, -64.315155)));
        assert_eq!(segment.end, Some(Coordinate::from_decimal(-42.329728, -64.315155)));
        assert_abs_diff_eq!(segment.length_meters().expect("both ends"), 111.195, epsilon = 0.01);
    }

    #[test]
    fn row_with_missing_columns() {
        init_logger();
        let segment = SegmentRow::from_json(r#"{"id": 4, "transect_id": 7}"#)
            .expect("valid row")
            .to_segment(&PointDecoder::new())
            .expect("null points are not errors");

        assert_eq!(segment.start, None);
        assert_eq!(segment.end, None);
        assert_eq!(segment.length_meters(), None);
        assert_eq!(
            segment.display_points(FallbackPolicy::Origin),
            (Some(Coordinate::origin()), Some(Coordinate::origin()))
        );
        assert_eq!(segment.display_points(FallbackPolicy::Absent), (None, None));
    }

    #[test]
    fn invalid_json_row() {
        assert_matches!(SegmentRow::from_json("{\"id\": \"x\"}"), Err(RecordError::Row(_)));
    }

    #[test]
    fn corrupt_point_fails_row_on_request() {
        init_logger();
        let mut segment_row = row(5, Some(Coordinate::from_decimal(1.0, 2.0)), None);
        segment_row.end_point = Some(r#"{"type":"Point","coordinates":[1]}"#.to_string());

        let lenient = segment_row
            .to_segment(&PointDecoder::new())
            .expect("corrupt points are skipped");
        assert_eq!(lenient.end, None);

        let strict = PointDecoder::new().with_malformed_policy(MalformedPolicy::Fail);
        assert_matches!(
            segment_row.to_segment(&strict),
            Err(RecordError::Point { field, .. }) if field == "segment 5 end_point"
        );
    }

    #[test]
    fn row_round_trip() {
        let segment = Segment {
            id: 1,
            transect_id: 2,
            start: Some(Coordinate::from_decimal(-42.330728, -64.315155)),
            end: None,
            depth_m: None,
        };

        let row = segment.to_row();
        assert_eq!(
            row.start_point.as_deref(),
            Some("SRID=4326;POINT(-64.315155 -42.330728)")
        );
        assert_eq!(row.end_point, None);
        assert_eq!(row.to_segment(&PointDecoder::new()).ok(), Some(segment));
    }

    #[test]
    fn transect_length() {
        init_logger();
        let a = Coordinate::from_decimal(0.0, 0.0);
        let b = Coordinate::from_decimal(0.001, 0.0);
        let c = Coordinate::from_decimal(0.002, 0.0);

        let segments = [
            row(1, Some(a), Some(b)),
            row(2, Some(b), Some(c)),
            row(3, Some(c), None),
        ]
        .iter()
        .map(|r| r.to_segment(&PointDecoder::new()))
        .collect::<Result<Vec<_>, _>>()
        .expect("valid rows");

        assert_abs_diff_eq!(total_length_meters(&segments), 222.39, epsilon = 0.01);
        assert_eq!(total_length_meters(&[]), 0.0);
    }
}
