use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use super::{Curve, Location, Segment};
use crate::wkt::{TwoWayConverter, WktPolyLineConverter};
use crate::{ConstructionError, Error};

/// An ordered, non-empty sequence of locations.
///
/// A single location is a degenerate curve that renders as a WKT `POINT`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
  feature = "serde",
  derive(serde::Serialize, serde::Deserialize),
  serde(try_from = "Vec<Location>", into = "Vec<Location>")
)]
pub struct PolyLine {
  locations: Vec<Location>,
}

impl PolyLine {
  pub fn new(locations: Vec<Location>) -> Result<PolyLine, Error> {
    if locations.is_empty() {
      return Err(ConstructionError::EmptyCurve.into());
    }
    Ok(PolyLine { locations })
  }

  pub(crate) fn new_unchecked(locations: Vec<Location>) -> PolyLine {
    debug_assert!(!locations.is_empty());
    PolyLine { locations }
  }

  /// Parse a WKT `POINT` or `LINESTRING`.
  pub fn from_wkt(wkt: &str) -> Result<PolyLine, Error> {
    WktPolyLineConverter.backward_convert(wkt)
  }

  pub fn to_wkt(&self) -> String {
    WktPolyLineConverter.forward_convert(self)
  }

  /// First and last locations coincide, with at least one segment between.
  pub fn is_closed(&self) -> bool {
    self.locations.len() > 1 && self.first() == self.last()
  }

  /// The same locations, traversed backwards.
  #[must_use]
  pub fn reversed(&self) -> PolyLine {
    PolyLine {
      locations: self.locations.iter().rev().copied().collect(),
    }
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Location> {
    self.locations.iter()
  }

  pub fn into_locations(self) -> Vec<Location> {
    self.locations
  }
}

impl Curve for PolyLine {
  fn locations(&self) -> &[Location] {
    &self.locations
  }

  fn segments(&self) -> Vec<Segment> {
    self
      .locations
      .windows(2)
      .map(|pair| Segment::new(pair[0], pair[1]))
      .collect()
  }

  // The first and last segments of a closed polyline are not adjacent: a
  // repeated start location is reported as the curve touching itself.
  fn are_adjacent(&self, first: usize, second: usize) -> bool {
    second == first + 1
  }
}

impl From<Location> for PolyLine {
  fn from(location: Location) -> PolyLine {
    PolyLine {
      locations: vec![location],
    }
  }
}

impl From<Segment> for PolyLine {
  fn from(segment: Segment) -> PolyLine {
    PolyLine {
      locations: vec![*segment.start(), *segment.end()],
    }
  }
}

impl TryFrom<Vec<Location>> for PolyLine {
  type Error = Error;
  fn try_from(locations: Vec<Location>) -> Result<PolyLine, Error> {
    PolyLine::new(locations)
  }
}

impl From<PolyLine> for Vec<Location> {
  fn from(polyline: PolyLine) -> Vec<Location> {
    polyline.locations
  }
}

impl<'a> IntoIterator for &'a PolyLine {
  type Item = &'a Location;
  type IntoIter = std::slice::Iter<'a, Location>;
  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl fmt::Display for PolyLine {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.to_wkt())
  }
}

impl FromStr for PolyLine {
  type Err = Error;
  fn from_str(wkt: &str) -> Result<PolyLine, Error> {
    PolyLine::from_wkt(wkt)
  }
}
