//! Error type used by the crate.

use thiserror::Error;
use transecta_geo::GeoError;

/// Error enum.
#[derive(Debug, Error)]
pub enum RecordError {
    /// A point column holds a value that was recognized but could not be decoded.
    #[error("invalid point in {field}: {source}")]
    Point {
        /// Field the value was read from.
        field: String,
        /// Decoding error.
        #[source]
        source: GeoError,
    },

    /// A row could not be deserialized.
    #[error("failed to decode row: {0}")]
    Row(#[from] serde_json::Error),
}
