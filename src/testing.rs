// Strategies for points and small helpers shared by the unit tests.
// A Strategy is a way to generate a shrinkable value.
use crate::data::Point;

use core::ops::Range;
use num_bigint::BigInt;
use proptest::arbitrary::*;
use proptest::collection::*;
use proptest::prelude::*;
use proptest::strategy::*;
use std::collections::BTreeSet;

type Mapped<I, O> = Map<StrategyFor<I>, fn(_: I) -> O>;

///////////////////////////////////////////////////////////////////////////////
// Arbitrary point

impl<T: Arbitrary> Arbitrary for Point<T>
where
  T::Strategy: Clone,
  T::Parameters: Clone,
  T: Clone,
{
  type Strategy = Mapped<Vec<T>, Point<T>>;
  type Parameters = T::Parameters;
  fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
    vec(any_with::<T>(params), 2).prop_map(|vec: Vec<T>| Point {
      array: vec.try_into().unwrap(),
    })
  }
}

///////////////////////////////////////////////////////////////////////////////
// Convenience functions

// Arbitrary isn't defined for BigInt.
pub fn any_r() -> impl Strategy<Value = Point<BigInt>> {
  any::<Point<isize>>().prop_map(|pt| pt.cast())
}

// Points with both coordinates drawn from `range`.
pub fn pt_in(range: Range<i8>) -> impl Strategy<Value = Point<i8>> {
  (range.clone(), range).prop_map(|(x, y)| Point::new([x, y]))
}

// Integer valued floats. Orientation tests on these are exact.
pub fn any_grid() -> impl Strategy<Value = Point<f64>> {
  (-100i32..100, -100i32..100).prop_map(|(x, y)| Point::new([f64::from(x), f64::from(y)]))
}

pub fn point_set<T: Ord + Clone>(pts: &[Point<T>]) -> BTreeSet<Point<T>> {
  pts.iter().cloned().collect()
}

// Rotate a ring so that it starts at its smallest element.
pub fn canonical<T: Ord + Clone>(ring: &[Point<T>]) -> Vec<Point<T>> {
  let start = ring
    .iter()
    .enumerate()
    .min_by(|a, b| a.1.cmp(b.1))
    .map_or(0, |(idx, _)| idx);
  ring[start..].iter().chain(&ring[..start]).cloned().collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn canonical_rotation() {
    let ring = vec![Point::new([2, 2]), Point::new([0, 0]), Point::new([1, 0])];
    assert_eq!(
      canonical(&ring),
      vec![Point::new([0, 0]), Point::new([1, 0]), Point::new([2, 2])]
    );
    assert!(canonical::<i8>(&[]).is_empty());
  }
}
