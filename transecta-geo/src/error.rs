//! Error type used by the crate.

use thiserror::Error;

use crate::sexagesimal::{AngleField, Axis, Hemisphere};
use crate::wire::WireFormat;

/// Error enum.
///
/// Input that does not look like any supported format is not an error: decoders return `Ok(None)` for it.
/// The variants here are reserved for input that was recognized but could not be decoded, and for the opt-in
/// strict constructors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    /// Input matched the structural signature of `format` but its payload is corrupt.
    #[error("malformed {format} payload: {reason}")]
    MalformedPayload {
        /// Format the input was recognized as.
        format: WireFormat,
        /// What exactly failed to decode.
        reason: String,
    },

    /// A sexagesimal component is outside of the canonical range for its axis.
    #[error("{field} value {value} is out of convention for {axis}")]
    OutOfConventionAngle {
        /// Axis of the angle.
        axis: Axis,
        /// Component that failed validation.
        field: AngleField,
        /// Offending value.
        value: f64,
    },

    /// Hemisphere letter does not belong to the axis (e.g. `E` on a latitude).
    #[error("hemisphere {hemisphere} cannot be used for {axis}")]
    HemisphereMismatch {
        /// Axis of the angle.
        axis: Axis,
        /// Offending hemisphere.
        hemisphere: Hemisphere,
    },

    /// Decimal degrees outside of `[-90, 90]` x `[-180, 180]`.
    #[error("coordinate ({latitude}, {longitude}) is out of range")]
    OutOfRange {
        /// Latitude in degrees.
        latitude: f64,
        /// Longitude in degrees.
        longitude: f64,
    },

    /// Text could not be read as a sexagesimal angle.
    #[error("invalid sexagesimal notation: {0}")]
    InvalidSexagesimalText(String),
}

impl GeoError {
    pub(crate) fn malformed(format: WireFormat, reason: impl Into<String>) -> Self {
        Self::MalformedPayload {
            format,
            reason: reason.into(),
        }
    }
}
