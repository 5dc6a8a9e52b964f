use ordered_float::OrderedFloat;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul};

/// A non-negative length on the ground, in meters.
///
/// Totally ordered, so iterators of distances support `min()` and `max()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance(OrderedFloat<f64>);

impl Distance {
  pub const ZERO: Distance = Distance(OrderedFloat(0.0));

  pub fn meters(meters: f64) -> Distance {
    Distance(OrderedFloat(meters))
  }

  pub fn kilometers(kilometers: f64) -> Distance {
    Distance::meters(kilometers * 1_000.0)
  }

  pub fn as_meters(self) -> f64 {
    self.0.into_inner()
  }

  pub fn as_kilometers(self) -> f64 {
    self.as_meters() / 1_000.0
  }
}

impl Add for Distance {
  type Output = Distance;
  fn add(self, other: Distance) -> Distance {
    Distance(self.0 + other.0)
  }
}

impl Mul<f64> for Distance {
  type Output = Distance;
  fn mul(self, factor: f64) -> Distance {
    Distance::meters(self.as_meters() * factor)
  }
}

impl Div<f64> for Distance {
  type Output = Distance;
  fn div(self, divisor: f64) -> Distance {
    Distance::meters(self.as_meters() / divisor)
  }
}

impl Sum for Distance {
  fn sum<I: Iterator<Item = Distance>>(iter: I) -> Distance {
    iter.fold(Distance::ZERO, Add::add)
  }
}

impl fmt::Display for Distance {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}m", self.as_meters())
  }
}
