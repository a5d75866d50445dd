//! Conversion between decimal degrees and sexagesimal (degrees, minutes, seconds and hemisphere) notation.
//!
//! Sign is carried by the hemisphere letter: `N`/`E` are positive, `S`/`O` are negative. Survey sheets use `O`
//! (oeste) for the western hemisphere, so that is the letter produced for negative longitudes. `W` is accepted as an
//! alias of `O` when reading text, but never produced.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::GeoError;

/// Axis an angle is measured along.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// North-south axis, `[-90, 90]` degrees.
    Latitude,
    /// East-west axis, `[-180, 180]` degrees.
    Longitude,
}

impl Axis {
    /// Largest canonical value of the degrees component along this axis.
    pub fn max_degrees(&self) -> u32 {
        match self {
            Axis::Latitude => 90,
            Axis::Longitude => 180,
        }
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Latitude => write!(f, "latitude"),
            Axis::Longitude => write!(f, "longitude"),
        }
    }
}

/// Hemisphere letter of a sexagesimal angle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum Hemisphere {
    /// North.
    N,
    /// South.
    S,
    /// East.
    E,
    /// West (oeste).
    O,
}

impl Hemisphere {
    /// Hemisphere of a signed decimal value along the given axis. Zero belongs to the positive hemisphere.
    pub fn of(value: f64, axis: Axis) -> Self {
        match (axis, value >= 0.0) {
            (Axis::Latitude, true) => Hemisphere::N,
            (Axis::Latitude, false) => Hemisphere::S,
            (Axis::Longitude, true) => Hemisphere::E,
            (Axis::Longitude, false) => Hemisphere::O,
        }
    }

    /// Axis the hemisphere letter belongs to.
    pub fn axis(&self) -> Axis {
        match self {
            Hemisphere::N | Hemisphere::S => Axis::Latitude,
            Hemisphere::E | Hemisphere::O => Axis::Longitude,
        }
    }

    /// Returns true for the southern and western hemispheres.
    pub fn is_negative(&self) -> bool {
        matches!(self, Hemisphere::S | Hemisphere::O)
    }

    /// Letter used for the hemisphere in survey notation.
    pub fn letter(&self) -> char {
        match self {
            Hemisphere::N => 'N',
            Hemisphere::S => 'S',
            Hemisphere::E => 'E',
            Hemisphere::O => 'O',
        }
    }
}

impl TryFrom<char> for Hemisphere {
    type Error = GeoError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_uppercase() {
            'N' => Ok(Hemisphere::N),
            'S' => Ok(Hemisphere::S),
            'E' => Ok(Hemisphere::E),
            'O' | 'W' => Ok(Hemisphere::O),
            other => Err(GeoError::InvalidSexagesimalText(format!(
                "unknown hemisphere letter `{other}`"
            ))),
        }
    }
}

impl From<Hemisphere> for char {
    fn from(value: Hemisphere) -> Self {
        value.letter()
    }
}

impl Display for Hemisphere {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Component of a sexagesimal angle, used in validation errors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AngleField {
    /// Degrees component.
    Degrees,
    /// Minutes component.
    Minutes,
    /// Seconds component.
    Seconds,
}

impl Display for AngleField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AngleField::Degrees => write!(f, "degrees"),
            AngleField::Minutes => write!(f, "minutes"),
            AngleField::Seconds => write!(f, "seconds"),
        }
    }
}

/// Angle along one axis in degrees, minutes and seconds.
///
/// The fields are public and not validated: forms edit them directly and stored data may contain values such as
/// `75` minutes, which still combine into a meaningful decimal value. Use [`SexagesimalAngle::checked`] when a
/// canonical angle is required.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SexagesimalAngle {
    /// Whole degrees.
    pub degrees: u32,
    /// Whole minutes, canonically `0..60`.
    pub minutes: u32,
    /// Seconds, canonically `[0, 60)`.
    pub seconds: f64,
    /// Hemisphere letter carrying the sign.
    pub hemisphere: Hemisphere,
}

impl SexagesimalAngle {
    /// Creates a new angle without any validation.
    pub fn new(degrees: u32, minutes: u32, seconds: f64, hemisphere: Hemisphere) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
            hemisphere,
        }
    }

    /// Creates a new angle, rejecting anything that is not a canonical value along `axis`.
    ///
    /// ```
    /// use transecta_geo::sexagesimal::{Axis, Hemisphere, SexagesimalAngle};
    ///
    /// assert!(SexagesimalAngle::checked(Axis::Latitude, 42, 19, 50.62, Hemisphere::S).is_ok());
    /// assert!(SexagesimalAngle::checked(Axis::Latitude, 42, 75, 0.0, Hemisphere::S).is_err());
    /// assert!(SexagesimalAngle::checked(Axis::Latitude, 42, 19, 0.0, Hemisphere::E).is_err());
    /// ```
    pub fn checked(
        axis: Axis,
        degrees: u32,
        minutes: u32,
        seconds: f64,
        hemisphere: Hemisphere,
    ) -> Result<Self, GeoError> {
        if hemisphere.axis() != axis {
            return Err(GeoError::HemisphereMismatch { axis, hemisphere });
        }

        let out_of_convention = |field, value| GeoError::OutOfConventionAngle { axis, field, value };

        if minutes >= 60 {
            return Err(out_of_convention(AngleField::Minutes, minutes as f64));
        }
        if !seconds.is_finite() || !(0.0..60.0).contains(&seconds) {
            return Err(out_of_convention(AngleField::Seconds, seconds));
        }

        let max = axis.max_degrees();
        if degrees > max || (degrees == max && (minutes > 0 || seconds > 0.0)) {
            return Err(out_of_convention(AngleField::Degrees, degrees as f64));
        }

        Ok(Self::new(degrees, minutes, seconds, hemisphere))
    }

    /// Converts a signed decimal value into sexagesimal notation. See [`decimal_to_sexagesimal`].
    pub fn from_decimal(value: f64, axis: Axis) -> Self {
        decimal_to_sexagesimal(value, axis)
    }

    /// Signed decimal value of the angle. See [`sexagesimal_to_decimal`].
    pub fn to_decimal(&self) -> f64 {
        sexagesimal_to_decimal(self)
    }
}

/// Converts a signed decimal value in degrees into sexagesimal notation along the given axis.
///
/// Seconds are rounded to 2 decimal places. Any value is accepted; values outside of the axis range produce
/// angles that are arithmetically consistent but not canonical.
///
/// ```
/// use transecta_geo::sexagesimal::{decimal_to_sexagesimal, Axis, Hemisphere};
///
/// let angle = decimal_to_sexagesimal(-42.330728, Axis::Latitude);
/// assert_eq!(angle.degrees, 42);
/// assert_eq!(angle.minutes, 19);
/// assert_eq!(angle.hemisphere, Hemisphere::S);
/// ```
pub fn decimal_to_sexagesimal(value: f64, axis: Axis) -> SexagesimalAngle {
    let absolute = value.abs();
    let degrees = absolute.floor();
    let minutes_float = (absolute - degrees) * 60.0;
    let minutes = minutes_float.floor();
    let seconds = round_to_hundredths((minutes_float - minutes) * 60.0);

    SexagesimalAngle {
        degrees: degrees as u32,
        minutes: minutes as u32,
        seconds,
        hemisphere: Hemisphere::of(value, axis),
    }
}

/// Converts a sexagesimal angle into a signed decimal value in degrees.
pub fn sexagesimal_to_decimal(angle: &SexagesimalAngle) -> f64 {
    let magnitude = angle.degrees as f64 + angle.minutes as f64 / 60.0 + angle.seconds / 3600.0;
    if angle.hemisphere.is_negative() {
        -magnitude
    } else {
        magnitude
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl Display for SexagesimalAngle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}°{}'{:.2}\"{}",
            self.degrees, self.minutes, self.seconds, self.hemisphere
        )
    }
}

lazy_static! {
    static ref SEXAGESIMAL_RE: Regex = Regex::new(
        r#"(?x)^\s*
            (\d+) \s* ° \s*
            (\d+) \s* ['′] \s*
            (\d+ (?:[.,]\d+)?) \s* (?:["″]|'') \s*
            ([NSEOWnseow]) \s*$"#
    )
    .expect("sexagesimal regex must compile");
}

impl FromStr for SexagesimalAngle {
    type Err = GeoError;

    /// Reads notation like `42°19'50.62"S`. Unicode primes and a decimal comma are accepted. The values are not
    /// validated beyond their syntax.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GeoError::InvalidSexagesimalText(s.to_string());
        let caps = SEXAGESIMAL_RE.captures(s).ok_or_else(invalid)?;

        let degrees = caps[1].parse::<u32>().map_err(|_| invalid())?;
        let minutes = caps[2].parse::<u32>().map_err(|_| invalid())?;
        let seconds = caps[3]
            .replace(',', ".")
            .parse::<f64>()
            .map_err(|_| invalid())?;
        let hemisphere = caps[4]
            .chars()
            .next()
            .ok_or_else(invalid)
            .and_then(Hemisphere::try_from)?;

        Ok(Self::new(degrees, minutes, seconds, hemisphere))
    }
}

/// A pair of latitude and longitude angles, as shown and edited in survey forms.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SexagesimalPosition {
    /// Latitude angle (`N`/`S`).
    pub latitude: SexagesimalAngle,
    /// Longitude angle (`E`/`O`).
    pub longitude: SexagesimalAngle,
}

impl SexagesimalPosition {
    /// Creates a new position from two angles.
    pub fn new(latitude: SexagesimalAngle, longitude: SexagesimalAngle) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Display for SexagesimalPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.latitude, self.longitude)
    }
}
