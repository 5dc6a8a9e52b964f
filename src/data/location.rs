use num_traits::ToPrimitive;
use std::fmt;
use std::str::FromStr;

use super::Distance;
use crate::metric::{Haversine, Metric};
use crate::{ConstructionError, Error, Orientation, ParseError};

pub(crate) const DM7_PER_DEGREE: i64 = 10_000_000;
pub(crate) const MAX_LATITUDE_DM7: i64 = 90 * DM7_PER_DEGREE;
pub(crate) const MAX_LONGITUDE_DM7: i64 = 180 * DM7_PER_DEGREE;

/// A point on the globe, stored as degrees × 10^7 ("dm7").
///
/// Equality and hashing are exact on the stored integers. Ordering is
/// lexicographic on (longitude, latitude), which is also the order of
/// collinear locations along their common line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
  feature = "serde",
  derive(serde::Serialize, serde::Deserialize),
  serde(try_from = "RawLocation")
)]
pub struct Location {
  longitude: i64,
  latitude: i64,
}

impl Location {
  pub(crate) const fn new_unchecked(latitude: i64, longitude: i64) -> Location {
    Location {
      longitude,
      latitude,
    }
  }

  /// Build a location from fixed-precision degrees × 10^7.
  pub fn from_dm7(latitude: i64, longitude: i64) -> Result<Location, Error> {
    Ok(Location::checked(latitude, longitude)?)
  }

  /// Build a location from decimal degrees, rounded to the nearest 10^-7 degree.
  ///
  /// ```rust
  /// # use geoline::data::Location;
  /// let loc = Location::from_degrees(37.332439, -122.05576).unwrap();
  /// assert_eq!(loc.latitude_dm7(), 373_324_390);
  /// assert_eq!(loc.to_string(), "37.332439,-122.05576");
  /// ```
  pub fn from_degrees(latitude: f64, longitude: f64) -> Result<Location, Error> {
    Ok(Location::try_from_degrees(latitude, longitude)?)
  }

  /// Parse the `"lat, lon"` convention. This is *not* WKT order.
  pub fn for_string(text: &str) -> Result<Location, Error> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() != 2 || parts.iter().any(|part| part.is_empty()) {
      return Err(ParseError::Malformed(text.to_string()).into());
    }
    let latitude = parse_degrees(parts[0])?;
    let longitude = parse_degrees(parts[1])?;
    Location::try_from_degrees(latitude, longitude)
      .map_err(|err| ParseError::OutOfRange(err).into())
  }

  pub(crate) fn try_from_degrees(
    latitude: f64,
    longitude: f64,
  ) -> Result<Location, ConstructionError> {
    Location::checked(degrees_to_dm7(latitude)?, degrees_to_dm7(longitude)?)
  }

  fn checked(latitude: i64, longitude: i64) -> Result<Location, ConstructionError> {
    if !(-MAX_LATITUDE_DM7..=MAX_LATITUDE_DM7).contains(&latitude) {
      return Err(ConstructionError::LatitudeOutOfRange(latitude));
    }
    if !(-MAX_LONGITUDE_DM7..=MAX_LONGITUDE_DM7).contains(&longitude) {
      return Err(ConstructionError::LongitudeOutOfRange(longitude));
    }
    Ok(Location::new_unchecked(latitude, longitude))
  }

  pub fn latitude_dm7(&self) -> i64 {
    self.latitude
  }

  pub fn longitude_dm7(&self) -> i64 {
    self.longitude
  }

  pub fn latitude(&self) -> f64 {
    self.latitude as f64 / DM7_PER_DEGREE as f64
  }

  pub fn longitude(&self) -> f64 {
    self.longitude as f64 / DM7_PER_DEGREE as f64
  }

  /// Planar `[x, y]` coordinates, i.e. `[longitude, latitude]` in dm7.
  pub fn coordinates(&self) -> [i64; 2] {
    [self.longitude, self.latitude]
  }

  /// Great-circle distance using the [`Haversine`] metric.
  pub fn distance_to(&self, other: &Location) -> Distance {
    Haversine.distance(self, other)
  }

  /// Turn direction when walking from `p1` to `p2` to `p3` in
  /// (longitude, latitude) space.
  pub fn orient(p1: &Location, p2: &Location, p3: &Location) -> Orientation {
    Orientation::new(&p1.coordinates(), &p2.coordinates(), &p3.coordinates())
  }
}

// Unvalidated wire form; deserialized locations go through the range checks.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawLocation {
  longitude: i64,
  latitude: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLocation> for Location {
  type Error = ConstructionError;
  fn try_from(raw: RawLocation) -> Result<Location, ConstructionError> {
    Location::checked(raw.latitude, raw.longitude)
  }
}

impl FromStr for Location {
  type Err = Error;
  fn from_str(text: &str) -> Result<Location, Error> {
    Location::for_string(text)
  }
}

impl fmt::Display for Location {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{},{}", Dm7(self.latitude), Dm7(self.longitude))
  }
}

fn parse_degrees(text: &str) -> Result<f64, ParseError> {
  text
    .parse::<f64>()
    .map_err(|_| ParseError::InvalidNumber(text.to_string()))
}

fn degrees_to_dm7(degrees: f64) -> Result<i64, ConstructionError> {
  (degrees * DM7_PER_DEGREE as f64)
    .round()
    .to_i64()
    .ok_or_else(|| ConstructionError::NotFinite(degrees.to_string()))
}

/// Decimal rendering of a dm7 value with trailing fractional zeros dropped.
pub(crate) struct Dm7(pub(crate) i64);

impl fmt::Display for Dm7 {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let sign = if self.0 < 0 { "-" } else { "" };
    let abs = self.0.unsigned_abs();
    let per_degree = DM7_PER_DEGREE.unsigned_abs();
    let whole = abs / per_degree;
    let fraction = abs % per_degree;
    if fraction == 0 {
      write!(f, "{}{}", sign, whole)
    } else {
      let digits = format!("{:07}", fraction);
      write!(f, "{}{}.{}", sign, whole, digits.trim_end_matches('0'))
    }
  }
}
