use num_rational::Ratio;
use num_traits::ToPrimitive;
use std::cmp::Ordering;

use super::{Distance, Location};
use crate::metric::Metric;
use crate::Intersects;

///////////////////////////////////////////////////////////////////////////////
// Segment

/// A straight piece between two locations. Equality is direction-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
  start: Location,
  end: Location,
}

impl Segment {
  pub const fn new(start: Location, end: Location) -> Segment {
    Segment { start, end }
  }

  pub fn start(&self) -> &Location {
    &self.start
  }

  pub fn end(&self) -> &Location {
    &self.end
  }

  #[must_use]
  pub fn reversed(&self) -> Segment {
    Segment::new(self.end, self.start)
  }

  /// Zero-length segment.
  pub fn is_point(&self) -> bool {
    self.start == self.end
  }

  pub fn length(&self) -> Distance {
    self.start.distance_to(&self.end)
  }

  /// Equal endpoints, in either direction.
  pub fn equals_undirected(&self, other: &Segment) -> bool {
    self.undirected() == other.undirected()
  }

  // Endpoints sorted by location order.
  pub(crate) fn undirected(&self) -> (Location, Location) {
    (self.min(), self.max())
  }

  fn min(&self) -> Location {
    std::cmp::min(self.start, self.end)
  }

  fn max(&self) -> Location {
    std::cmp::max(self.start, self.end)
  }

  /// True iff `location` is collinear with the segment and lies between its
  /// endpoints (inclusive). Exact, no tolerance.
  pub fn contains(&self, location: &Location) -> bool {
    Location::orient(&self.start, &self.end, location).is_colinear()
      && self.min() <= *location
      && *location <= self.max()
  }

  /// Closest location on the segment, projecting in (longitude, latitude)
  /// space with the parameter clamped to the endpoints.
  pub fn snap(&self, location: &Location) -> Location {
    let [ax, ay] = to_f64(self.start.coordinates());
    let [bx, by] = to_f64(self.end.coordinates());
    let [px, py] = to_f64(location.coordinates());
    let dx = bx - ax;
    let dy = by - ay;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
      return self.start;
    }
    let t = (((px - ax) * dx + (py - ay) * dy) / len_sq).clamp(0.0, 1.0);
    if t == 0.0 {
      return self.start;
    }
    if t == 1.0 {
      return self.end;
    }
    // Rounding a value between two endpoints stays in range.
    Location::new_unchecked((ay + t * dy).round() as i64, (ax + t * dx).round() as i64)
  }

  /// Distance from `location` to its snapped position on the segment.
  pub fn distance_to<M: Metric + ?Sized>(&self, location: &Location, metric: &M) -> Distance {
    metric.distance(location, &self.snap(location))
  }

  /// Where this segment meets `other`, if anywhere.
  ///
  /// A proper crossing is computed exactly and rounded to the nearest dm7
  /// location, so the same geometric point always yields the same
  /// [`Location`].
  pub fn intersection(&self, other: &Segment) -> Option<SegmentIntersection> {
    use SegmentIntersection::*;
    if self.is_point() {
      return other.contains(&self.start).then(|| Point(self.start));
    }
    if other.is_point() {
      return self.contains(&other.start).then(|| Point(other.start));
    }
    let a1 = &self.start;
    let a2 = &self.end;
    let b1 = &other.start;
    let b2 = &other.end;
    let l1_to_b1 = Location::orient(a1, a2, b1);
    let l1_to_b2 = Location::orient(a1, a2, b2);
    let l2_to_a1 = Location::orient(b1, b2, a1);
    let l2_to_a2 = Location::orient(b1, b2, a2);
    if l1_to_b1.is_colinear() && l1_to_b2.is_colinear() {
      let c_min = std::cmp::max(self.min(), other.min());
      let c_max = std::cmp::min(self.max(), other.max());
      match c_min.cmp(&c_max) {
        Ordering::Less => Some(Overlap(Segment::new(c_min, c_max))),
        Ordering::Equal => Some(Point(c_min)),
        Ordering::Greater => None,
      }
    } else if l1_to_b1.is_colinear() {
      self.contains(b1).then(|| Point(*b1))
    } else if l1_to_b2.is_colinear() {
      self.contains(b2).then(|| Point(*b2))
    } else if l2_to_a1.is_colinear() {
      other.contains(a1).then(|| Point(*a1))
    } else if l2_to_a2.is_colinear() {
      other.contains(a2).then(|| Point(*a2))
    } else if l1_to_b1 == l1_to_b2.reverse() && l2_to_a1 == l2_to_a2.reverse() {
      crossing_point(self, other).map(Point)
    } else {
      None
    }
  }
}

impl From<(Location, Location)> for Segment {
  fn from((start, end): (Location, Location)) -> Segment {
    Segment::new(start, end)
  }
}

fn to_f64([x, y]: [i64; 2]) -> [f64; 2] {
  [x as f64, y as f64]
}

// Exact crossing point of two non-parallel segments, rounded to dm7.
fn crossing_point(a: &Segment, b: &Segment) -> Option<Location> {
  let [ax, ay] = a.start.coordinates().map(i128::from);
  let [a2x, a2y] = a.end.coordinates().map(i128::from);
  let [bx, by] = b.start.coordinates().map(i128::from);
  let [b2x, b2y] = b.end.coordinates().map(i128::from);
  let (dx, dy) = (a2x - ax, a2y - ay);
  let (ex, ey) = (b2x - bx, b2y - by);
  let denom = dx * ey - dy * ex;
  if denom == 0 {
    return None;
  }
  let num = (bx - ax) * ey - (by - ay) * ex;
  let x = round_ratio(ax * denom + dx * num, denom)?;
  let y = round_ratio(ay * denom + dy * num, denom)?;
  Some(Location::new_unchecked(y, x))
}

fn round_ratio(numer: i128, denom: i128) -> Option<i64> {
  Ratio::new(numer, denom).round().to_integer().to_i64()
}

///////////////////////////////////////////////////////////////////////////////
// SegmentIntersection

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentIntersection {
  /// Segments cross or touch in a single location.
  Point(Location),
  /// Segments are collinear and share more than one location. The overlap
  /// runs from the smaller to the larger location.
  Overlap(Segment),
}

impl SegmentIntersection {
  /// The crossing location, or both ends of an overlap.
  pub fn locations(&self) -> Vec<Location> {
    match self {
      SegmentIntersection::Point(location) => vec![*location],
      SegmentIntersection::Overlap(segment) => vec![segment.start, segment.end],
    }
  }
}

///////////////////////////////////////////////////////////////////////////////
// Intersects

impl<'a> Intersects for &'a Segment {
  type Result = SegmentIntersection;
  fn intersect(self, other: &'a Segment) -> Option<Self::Result> {
    self.intersection(other)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests
