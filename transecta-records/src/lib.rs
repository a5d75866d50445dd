//! Mapping between survey table rows and [`transecta_geo`] coordinates.
//!
//! This is the edge where raw column values meet the coordinate engine: null and unrecognized point values, corrupt
//! points and the "show it at the origin" presentation policy are all handled and logged here, so the engine itself
//! can stay pure. Logging goes through the [`log`] facade; the host application installs the backend.

pub mod column;
pub mod error;
pub mod segment;

pub use column::{encode_point, FallbackPolicy, MalformedPolicy, PointDecoder};
pub use error::RecordError;
pub use segment::{total_length_meters, Segment, SegmentRow};
