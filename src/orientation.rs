use std::cmp::Ordering;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// Coordinates are fixed-precision `[x, y]` pairs. The cross product is
  /// evaluated in `i128`, so the answer is exact for every valid location and
  /// never overflows.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use geoline::Orientation;
  /// let p1 = [0, 0];
  /// let p2 = [0, 1]; // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &[0, 2]).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &[-1, 2]).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &[1, 2]).is_cw());
  /// ```
  pub fn new(p1: &[i64; 2], p2: &[i64; 2], p3: &[i64; 2]) -> Orientation {
    match cmp_slope(p1, p2, p3) {
      Ordering::Less => ClockWise,
      Ordering::Equal => CoLinear,
      Ordering::Greater => CounterClockWise,
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      CounterClockWise => ClockWise,
      ClockWise => CounterClockWise,
      CoLinear => CoLinear,
    }
  }
}

// Compares the slope of p->q against the slope of q->r.
fn cmp_slope(p: &[i64; 2], q: &[i64; 2], r: &[i64; 2]) -> Ordering {
  let slope1 = (i128::from(r[1]) - i128::from(q[1])) * (i128::from(q[0]) - i128::from(p[0]));
  let slope2 = (i128::from(q[1]) - i128::from(p[1])) * (i128::from(r[0]) - i128::from(q[0]));
  slope1.cmp(&slope2)
}
