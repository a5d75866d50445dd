//! Geographic coordinate engine of the Transecta marine survey tools.
//!
//! Survey points (transect and segment ends, dive and harvest positions, quadrat samples) cross several
//! representations on their way between the database and the people entering them:
//!
//! * the store returns `geometry(Point, 4326)` columns as hex encoded EWKB, or as EWKT when cast to text,
//! * map widgets exchange GeoJSON point geometries,
//! * survey sheets and forms use degrees, minutes and seconds with a hemisphere letter.
//!
//! [`Coordinate`] is the single value type all of these convert into and out of:
//!
//! ```
//! use transecta_geo::Coordinate;
//! use transecta_geo::sexagesimal::{Hemisphere, SexagesimalAngle, SexagesimalPosition};
//!
//! // Whatever the store handed over, detect the format and decode it.
//! let start = Coordinate::parse("0101000020E6100000F08AE07F2B1450C08DEF8B4B552A45C0")
//!     .expect("corrupt point")
//!     .expect("not a point");
//!
//! // Position entered in a form.
//! let end = Coordinate::from_sexagesimal(&SexagesimalPosition::new(
//!     SexagesimalAngle::new(42, 19, 52.0, Hemisphere::S),
//!     SexagesimalAngle::new(64, 18, 58.0, Hemisphere::O),
//! ));
//!
//! let segment_length = start.distance_to(&end);
//! assert!(segment_length > 0.0);
//!
//! // Back into the store.
//! assert!(end.wkt().starts_with("SRID=4326;POINT(-64.31"));
//! ```
//!
//! The crate is a pure value library. It performs no I/O, keeps no global state and never logs: input that is not a
//! point decodes into `None`, corrupt points decode into [`GeoError`], and what to show to the user in either case
//! is up to the caller.

mod coordinate;
pub mod distance;
pub mod error;
mod point;
pub mod sexagesimal;
pub mod wire;

pub use coordinate::{Coordinate, LatLon};
pub use error::GeoError;
pub use point::GeoPoint;
