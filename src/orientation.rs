use std::cmp::Ordering;

use crate::PolygonScalar;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// A left turn is [`CounterClockWise`](Orientation::CounterClockWise) and a
  /// right turn is [`ClockWise`](Orientation::ClockWise). Only an exactly
  /// vanishing cross product is [`CoLinear`](Orientation::CoLinear).
  ///
  /// For fixed-precision types (i8,i16,i32), this function is
  /// guaranteed to work for any input and never cause any arithmetic overflows.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use chan_hull::data::Point;
  /// # use chan_hull::Orientation;
  /// let p1 = Point::new([ 0, 0 ]);
  /// let p2 = Point::new([ 0, 1 ]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 0, 2 ])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ -1, 2 ])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 1, 2 ])).is_cw());
  /// ```
  pub fn new<T>(p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> Orientation
  where
    T: PolygonScalar,
  {
    match T::cmp_slope(p1, p2, p3) {
      Ordering::Less => Orientation::ClockWise,
      Ordering::Equal => Orientation::CoLinear,
      Ordering::Greater => Orientation::CounterClockWise,
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))]
mod tests {
  use super::*;
  use crate::data::Point;
  use crate::Orientation::*;

  use proptest::prelude::*;
  use test_strategy::proptest;

  #[test]
  fn test_turns() {
    assert_eq!(
      Point::new([0, 0]).orientation(&Point::new([1, 1]), &Point::new([2, 2])),
      CoLinear
    );
    assert_eq!(
      Point::new([0, 0]).orientation(&Point::new([1, 0]), &Point::new([1, 1])),
      CounterClockWise
    );
    assert_eq!(
      Point::new([0, 0]).orientation(&Point::new([1, 0]), &Point::new([1, -1])),
      ClockWise
    );
  }

  #[test]
  fn test_turns_f64() {
    let p = Point::new([0.0, 0.0]);
    assert!(p
      .orientation(&Point::new([4.0, 0.0]), &Point::new([2.0, 3.0]))
      .is_ccw());
    assert!(p
      .orientation(&Point::new([2.0, 3.0]), &Point::new([4.0, 0.0]))
      .is_cw());
    assert!(p
      .orientation(&Point::new([0.5, 0.5]), &Point::new([1.0, 1.0]))
      .is_colinear());
  }

  #[test]
  fn reverse_is_involution() {
    for o in [CounterClockWise, ClockWise, CoLinear] {
      assert_eq!(o.reverse().reverse(), o);
    }
    assert_eq!(CoLinear.reverse(), CoLinear);
  }

  #[proptest]
  fn swapping_the_last_two_points_reverses(p: Point<i8>, q: Point<i8>, r: Point<i8>) {
    prop_assert_eq!(Point::orient(&p, &q, &r), Point::orient(&p, &r, &q).reverse());
  }

  #[proptest]
  fn rotation_preserves_orientation(p: Point<i8>, q: Point<i8>, r: Point<i8>) {
    prop_assert_eq!(Point::orient(&p, &q, &r), Point::orient(&q, &r, &p));
  }
}
