use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use super::{Curve, Location, PolyLine, Segment};
use crate::wkt::{TwoWayConverter, WktPolygonConverter};
use crate::{ConstructionError, Error};

/// A closed ring of locations.
///
/// Only the distinct ring vertices are stored; the closing segment from the
/// last vertex back to the first is implicit. That closing segment is
/// adjacent to the first segment, so a ring that merely closes on itself has
/// no self-intersections.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
  feature = "serde",
  derive(serde::Serialize, serde::Deserialize),
  serde(try_from = "Vec<Location>", into = "Vec<Location>")
)]
pub struct Polygon {
  locations: Vec<Location>,
}

impl Polygon {
  /// Build a ring. A trailing repeat of the first location is dropped.
  pub fn new(mut locations: Vec<Location>) -> Result<Polygon, Error> {
    if locations.len() > 1 && locations.first() == locations.last() {
      locations.pop();
    }
    if locations.is_empty() {
      return Err(ConstructionError::EmptyCurve.into());
    }
    Ok(Polygon { locations })
  }

  /// Parse a WKT `POLYGON` with a single ring.
  pub fn from_wkt(wkt: &str) -> Result<Polygon, Error> {
    WktPolygonConverter.backward_convert(wkt)
  }

  pub fn to_wkt(&self) -> String {
    WktPolygonConverter.forward_convert(self)
  }

  /// The ring with its first location repeated at the end.
  pub fn closed_locations(&self) -> impl Iterator<Item = &Location> + '_ {
    self.locations.iter().chain(self.locations.first())
  }

  /// Segment from the last vertex back to the first.
  pub fn closing_segment(&self) -> Segment {
    Segment::new(*self.last(), *self.first())
  }

  /// The same ring, traversed backwards from the same start.
  #[must_use]
  pub fn reversed(&self) -> Polygon {
    let mut locations = self.locations.clone();
    locations[1..].reverse();
    Polygon { locations }
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Location> {
    self.locations.iter()
  }
}

impl Curve for Polygon {
  fn locations(&self) -> &[Location] {
    &self.locations
  }

  fn segments(&self) -> Vec<Segment> {
    let closed: Vec<Location> = self.closed_locations().copied().collect();
    closed
      .windows(2)
      .map(|pair| Segment::new(pair[0], pair[1]))
      .collect()
  }

  fn are_adjacent(&self, first: usize, second: usize) -> bool {
    second == first + 1 || (first == 0 && second + 1 == self.locations.len())
  }
}

impl From<PolyLine> for Polygon {
  fn from(polyline: PolyLine) -> Polygon {
    let mut locations = polyline.into_locations();
    if locations.len() > 1 && locations.first() == locations.last() {
      locations.pop();
    }
    Polygon { locations }
  }
}

impl From<Polygon> for PolyLine {
  fn from(polygon: Polygon) -> PolyLine {
    PolyLine::new_unchecked(polygon.closed_locations().copied().collect())
  }
}

impl TryFrom<Vec<Location>> for Polygon {
  type Error = Error;
  fn try_from(locations: Vec<Location>) -> Result<Polygon, Error> {
    Polygon::new(locations)
  }
}

impl From<Polygon> for Vec<Location> {
  fn from(polygon: Polygon) -> Vec<Location> {
    polygon.locations
  }
}

impl fmt::Display for Polygon {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.to_wkt())
  }
}

impl FromStr for Polygon {
  type Err = Error;
  fn from_str(wkt: &str) -> Result<Polygon, Error> {
    Polygon::from_wkt(wkt)
  }
}
