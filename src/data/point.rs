use array_init::{array_init, try_array_init};
use ordered_float::{FloatIsNan, NotNan};
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::ops::Deref;
use std::ops::Index;

use crate::{Orientation, PolygonScalar};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Point<T> {
  pub array: [T; 2],
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  pub fn cast<U>(&self) -> Point<U>
  where
    T: Clone + Into<U>,
  {
    Point {
      array: array_init(|i| self.array[i].clone().into()),
    }
  }
}

impl Point<NotNan<f64>> {
  /// # Panics
  ///
  /// Panics if any of the inputs are NaN.
  pub fn new_nn(array: [f64; 2]) -> Point<NotNan<f64>> {
    Point::new(array_init(|i| NotNan::new(array[i]).unwrap()))
  }
}

impl<T: PolygonScalar> Point<T> {
  /// Turn taken when walking from `p1` via `p2` to `p3`.
  pub fn orient(p1: &Point<T>, p2: &Point<T>, p3: &Point<T>) -> Orientation {
    Orientation::new(&p1.array, &p2.array, &p3.array)
  }

  pub fn orientation(&self, q: &Point<T>, r: &Point<T>) -> Orientation {
    Point::orient(self, q, r)
  }

  /// Compare the distance from `self` to `p` with the distance from `self` to `q`.
  pub fn cmp_distance_to(&self, p: &Point<T>, q: &Point<T>) -> Ordering {
    T::cmp_dist(&self.array, &p.array, &q.array)
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.array
  }
}

impl TryFrom<Point<f64>> for Point<NotNan<f64>> {
  type Error = FloatIsNan;
  fn try_from(point: Point<f64>) -> Result<Point<NotNan<f64>>, FloatIsNan> {
    Ok(Point {
      array: try_array_init(|i| NotNan::try_from(point.array[i]))?,
    })
  }
}

impl From<Point<NotNan<f64>>> for Point<f64> {
  fn from(point: Point<NotNan<f64>>) -> Point<f64> {
    Point {
      array: array_init(|i| point.array[i].into_inner()),
    }
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

#[cfg(test)]
pub mod tests {
  use super::*;
  use crate::testing::*;

  use num_bigint::BigInt;
  use proptest::prelude::*;
  use rand::SeedableRng;
  use test_strategy::proptest;

  #[test]
  fn distance_ordering() {
    let origin = Point::new([0, 0]);
    assert_eq!(
      origin.cmp_distance_to(&Point::new([3, 4]), &Point::new([0, 5])),
      Ordering::Equal
    );
    assert_eq!(
      origin.cmp_distance_to(&Point::new([1, 1]), &Point::new([2, 0])),
      Ordering::Less
    );
  }

  #[test]
  fn nan_points_are_rejected() {
    assert!(Point::<NotNan<f64>>::try_from(Point::new([f64::NAN, 0.0])).is_err());
    let pt = Point::<NotNan<f64>>::try_from(Point::new([1.5, -2.0])).unwrap();
    assert_eq!(Point::<f64>::from(pt), Point::new([1.5, -2.0]));
  }

  #[test]
  fn sampling_is_deterministic_per_seed() {
    let mut a = rand::rngs::SmallRng::seed_from_u64(7);
    let mut b = rand::rngs::SmallRng::seed_from_u64(7);
    let p: Point<f64> = a.gen();
    let q: Point<f64> = b.gen();
    assert_eq!(p, q);
  }

  #[proptest]
  fn bigint_colinear(
    #[strategy(any_r())] pt1: Point<BigInt>,
    #[strategy(any_r())] pt2: Point<BigInt>,
  ) {
    let pt3 = Point::new([
      &pt2.array[0] + &pt2.array[0] - &pt1.array[0],
      &pt2.array[1] + &pt2.array[1] - &pt1.array[1],
    ]);
    prop_assert!(Point::orient(&pt1, &pt2, &pt3).is_colinear())
  }

  #[proptest]
  fn cast_preserves_orientation(p: Point<i8>, q: Point<i8>, r: Point<i8>) {
    prop_assert_eq!(
      Point::orient(&p, &q, &r),
      Point::orient(&p.cast::<i32>(), &q.cast::<i32>(), &r.cast::<i32>())
    );
  }
}
