use std::collections::{BTreeSet, HashSet};

use super::{Distance, Location, Segment};
use crate::metric::{Haversine, Metric};

/// Algorithms shared by [`PolyLine`](super::PolyLine) and
/// [`Polygon`](super::Polygon).
///
/// An implementor supplies its locations, the segments they induce and which
/// segment pairs are adjacent. Everything else is derived from those three.
pub trait Curve {
  /// Ordered locations. Never empty.
  fn locations(&self) -> &[Location];

  /// Segments induced by the locations, in traversal order.
  fn segments(&self) -> Vec<Segment>;

  /// Whether segments `first < second` share a vertex by construction.
  /// Adjacent pairs are skipped by the self-intersection scan.
  fn are_adjacent(&self, first: usize, second: usize) -> bool;

  fn len(&self) -> usize {
    self.locations().len()
  }

  fn first(&self) -> &Location {
    &self.locations()[0]
  }

  fn last(&self) -> &Location {
    &self.locations()[self.len() - 1]
  }

  /// A curve of a single location.
  fn is_point(&self) -> bool {
    self.len() == 1
  }

  /// Sum of the segment lengths.
  fn length(&self) -> Distance {
    self.segments().iter().map(Segment::length).sum()
  }

  /// True iff `location` lies on the curve.
  fn contains(&self, location: &Location) -> bool {
    self.locations().contains(location)
      || self
        .segments()
        .iter()
        .any(|segment| segment.contains(location))
  }

  /// True iff one of the curve's segments equals `segment` in either direction.
  fn contains_segment(&self, segment: &Segment) -> bool {
    self
      .segments()
      .iter()
      .any(|candidate| candidate.equals_undirected(segment))
  }

  /// Mean, over the locations of `self`, of the distance to the closest
  /// segment of `other`. Not symmetric.
  fn average_one_way_distance_to<C: Curve + ?Sized>(&self, other: &C) -> Distance {
    self.average_one_way_distance_to_with(other, &Haversine)
  }

  fn average_one_way_distance_to_with<C, M>(&self, other: &C, metric: &M) -> Distance
  where
    C: Curve + ?Sized,
    M: Metric + ?Sized,
  {
    let targets = other.segments();
    let total: Distance = self
      .locations()
      .iter()
      .map(|location| {
        targets
          .iter()
          .map(|segment| segment.distance_to(location, metric))
          .min()
          .unwrap_or_else(|| metric.distance(location, other.first()))
      })
      .sum();
    total / self.len() as f64
  }

  /// Symmetric mean of both one-way distances.
  fn average_distance_to<C: Curve + ?Sized>(&self, other: &C) -> Distance {
    self.average_distance_to_with(other, &Haversine)
  }

  fn average_distance_to_with<C, M>(&self, other: &C, metric: &M) -> Distance
  where
    C: Curve + ?Sized,
    M: Metric + ?Sized,
  {
    let there = self.average_one_way_distance_to_with(other, metric);
    let back = other.average_one_way_distance_to_with(self, metric);
    (there + back) / 2.0
  }

  /// Same undirected set of segments, regardless of direction or start.
  fn equals_shape<C: Curve + ?Sized>(&self, other: &C) -> bool {
    shape(self) == shape(other)
  }

  /// Every undirected segment of `self` is also a segment of `other`.
  fn overlaps_shape_of<C: Curve + ?Sized>(&self, other: &C) -> bool {
    shape(self).is_subset(&shape(other))
  }

  /// Locations where two non-adjacent segments meet. Collinear overlaps
  /// contribute both ends of the overlap.
  ///
  /// # Time complexity
  /// $O(n^2)$
  fn self_intersections(&self) -> BTreeSet<Location> {
    let segments = self.segments();
    tracing::trace!(segments = segments.len(), "scanning for self intersections");
    let result: BTreeSet<Location> = pairs(&segments)
      .filter(|&((i, _), (j, _))| !self.are_adjacent(i, j))
      .filter_map(|((_, a), (_, b))| a.intersection(b))
      .flat_map(|isect| isect.locations())
      .collect();
    if !result.is_empty() {
      tracing::debug!(count = result.len(), "found self intersections");
    }
    result
  }

  fn self_intersects(&self) -> bool {
    !self.self_intersections().is_empty()
  }
}

// Undirected segments; a lone location counts as a zero-length segment.
fn shape<C: Curve + ?Sized>(curve: &C) -> HashSet<(Location, Location)> {
  let segments = curve.segments();
  if segments.is_empty() {
    let only = *curve.first();
    return std::iter::once((only, only)).collect();
  }
  segments.iter().map(Segment::undirected).collect()
}

// Index pairs (i, j) with i < j.
fn pairs<E>(slice: &[E]) -> impl Iterator<Item = ((usize, &E), (usize, &E))> {
  let n = slice.len();
  (0..n).flat_map(move |a| ((a + 1)..n).map(move |b| ((a, &slice[a]), (b, &slice[b]))))
}
