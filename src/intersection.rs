/// Pairwise intersection of two geometries.
///
/// Returns `None` when the geometries are disjoint.
pub trait Intersects<T = Self> {
  type Result;
  fn intersect(self, other: T) -> Option<Self::Result>;
}
