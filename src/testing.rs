// Strategies for locations and polylines.
use crate::data::{Location, PolyLine, DM7_PER_DEGREE, MAX_LATITUDE_DM7, MAX_LONGITUDE_DM7};

use proptest::arbitrary::*;
use proptest::prelude::*;
use proptest::strategy::*;

/// Any valid location, at full dm7 precision.
pub fn any_location() -> impl Strategy<Value = Location> {
  (
    -MAX_LATITUDE_DM7..=MAX_LATITUDE_DM7,
    -MAX_LONGITUDE_DM7..=MAX_LONGITUDE_DM7,
  )
    .prop_map(|(latitude, longitude)| Location::new_unchecked(latitude, longitude))
}

/// Locations on a small whole-degree grid. Collinear triples, shared
/// vertices and overlapping segments are common.
pub fn grid_location() -> impl Strategy<Value = Location> {
  (-5i64..=5, -5i64..=5).prop_map(|(latitude, longitude)| {
    Location::new_unchecked(latitude * DM7_PER_DEGREE, longitude * DM7_PER_DEGREE)
  })
}

/// Polylines of 1 to `max_len` grid locations.
pub fn any_polyline(max_len: usize) -> impl Strategy<Value = PolyLine> {
  polyline_of(grid_location(), max_len)
}

/// Polylines of 1 to `max_len` locations at full dm7 precision.
pub fn precise_polyline(max_len: usize) -> impl Strategy<Value = PolyLine> {
  polyline_of(any_location(), max_len)
}

fn polyline_of<S>(locations: S, max_len: usize) -> impl Strategy<Value = PolyLine>
where
  S: Strategy<Value = Location>,
{
  prop::collection::vec(locations, 1..=max_len.max(1))
    .prop_filter_map("empty polyline", |locations| PolyLine::new(locations).ok())
}

impl Arbitrary for Location {
  type Parameters = ();
  type Strategy = BoxedStrategy<Location>;
  fn arbitrary_with(_params: Self::Parameters) -> Self::Strategy {
    any_location().boxed()
  }
}

#[test]
fn grid_locations_are_valid() {
  let mut runner = proptest::test_runner::TestRunner::default();
  for _ in 0..100 {
    let location = grid_location()
      .new_tree(&mut runner)
      .unwrap()
      .current();
    assert_eq!(
      Location::from_dm7(location.latitude_dm7(), location.longitude_dm7()),
      Ok(location)
    );
  }
}
