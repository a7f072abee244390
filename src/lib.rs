// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Output-sensitive convex hulls of planar point sets.
//!
//! The main entry point is [`algorithms::convex_hull`], an implementation of
//! Chan's algorithm: the input is split into chunks, each chunk is reduced to
//! a small hull with a Graham scan, and the global hull is then wrapped by
//! looking up one tangent per chunk at every step.
//!
//! ```rust
//! # use chan_hull::algorithms::convex_hull;
//! # use chan_hull::data::Point;
//! let points = vec![
//!   Point::new([0.0, 0.0]),
//!   Point::new([0.0, 1.0]),
//!   Point::new([1.0, 0.0]),
//!   Point::new([1.0, 1.0]),
//!   Point::new([0.5, 0.5]),
//! ];
//! let hull = convex_hull(points).unwrap();
//! assert_eq!(hull.len(), 4);
//! ```
use std::cmp::Ordering;

pub mod algorithms;
pub mod data;
pub mod io;
mod orientation;
mod utils;

pub use orientation::Orientation;

#[cfg(test)]
pub mod testing;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  InsufficientVertices,
  SelfIntersections,
  DuplicatePoints,
  /// Two consecutive line segments are either colinear or oriented clockwise.
  ConvexViolation,
  /// Chan's walk failed to close even with a single chunk.
  HullDidNotClose,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::SelfIntersections => write!(f, "Self intersections"),
      Error::DuplicatePoints => write!(f, "Duplicate points"),
      Error::ConvexViolation => write!(f, "Convex violation"),
      Error::HullDidNotClose => write!(
        f,
        "Hull walk did not close after every chunk size was tried"
      ),
    }
  }
}

impl std::error::Error for Error {}

pub trait TotalOrd {
  fn total_cmp(&self, other: &Self) -> Ordering;
}

impl<A: TotalOrd> TotalOrd for &A {
  fn total_cmp(&self, other: &Self) -> Ordering {
    (*self).total_cmp(*other)
  }
}

impl<A: TotalOrd, B: TotalOrd> TotalOrd for (A, B) {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self
      .0
      .total_cmp(&other.0)
      .then_with(|| self.1.total_cmp(&other.1))
  }
}

/// Coordinate type of a [`Point`](data::Point).
///
/// Every geometric decision in this crate goes through the two comparisons
/// below. Fixed-precision integers and the arbitrary precision types evaluate
/// them exactly. Floating point types evaluate the plain cross product and
/// treat an exact zero as colinear; no epsilon is applied, so nearly colinear
/// inputs may be classified either way.
pub trait PolygonScalar: std::fmt::Debug + Clone + PartialEq + TotalOrd {
  /// Compare the distance `p`-`q` with the distance `p`-`r`.
  fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
  /// Sign of the cross product of `q - p` and `r - q`. `Greater` is a left
  /// (counter-clockwise) turn.
  fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
}

macro_rules! fixed_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }

      impl PolygonScalar for $ty {
        fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          fn dist_squared(a: &[$ty; 2], b: &[$ty; 2]) -> i128 {
            let dx = i128::from(a[0]) - i128::from(b[0]);
            let dy = i128::from(a[1]) - i128::from(b[1]);
            dx * dx + dy * dy
          }
          dist_squared(p, q).cmp(&dist_squared(p, r))
        }

        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let ux = i128::from(q[0]) - i128::from(p[0]);
          let uy = i128::from(q[1]) - i128::from(p[1]);
          let vx = i128::from(r[0]) - i128::from(q[0]);
          let vy = i128::from(r[1]) - i128::from(q[1]);
          (ux * vy).cmp(&(uy * vx))
        }
      }
    )*
  };
}

macro_rules! arbitrary_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }

      impl PolygonScalar for $ty {
        fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let pq_x = &p[0] - &q[0];
          let pq_y = &p[1] - &q[1];
          let pq_dist_squared: Self = &pq_x * &pq_x + &pq_y * &pq_y;
          let pr_x = &p[0] - &r[0];
          let pr_y = &p[1] - &r[1];
          let pr_dist_squared: Self = &pr_x * &pr_x + &pr_y * &pr_y;
          pq_dist_squared.cmp(&pr_dist_squared)
        }

        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let slope1 = (&q[0] - &p[0]) * (&r[1] - &q[1]);
          let slope2 = (&q[1] - &p[1]) * (&r[0] - &q[0]);
          slope1.cmp(&slope2)
        }
      }
    )*
  };
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          <$ty>::total_cmp(self, other)
        }
      }

      impl PolygonScalar for $ty {
        fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let pq = (p[0] - q[0]).powi(2) + (p[1] - q[1]).powi(2);
          let pr = (p[0] - r[0]).powi(2) + (p[1] - r[1]).powi(2);
          pq.total_cmp(&pr)
        }

        // NaN compares as colinear.
        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let cross = (q[0] - p[0]) * (r[1] - q[1]) - (q[1] - p[1]) * (r[0] - q[0]);
          cross.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
        }
      }
    )*
  };
}

macro_rules! wrapped_floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }

      impl PolygonScalar for $ty {
        fn cmp_dist(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          PolygonScalar::cmp_dist(
            &[p[0].into_inner(), p[1].into_inner()],
            &[q[0].into_inner(), q[1].into_inner()],
            &[r[0].into_inner(), r[1].into_inner()],
          )
        }

        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          PolygonScalar::cmp_slope(
            &[p[0].into_inner(), p[1].into_inner()],
            &[q[0].into_inner(), q[1].into_inner()],
            &[r[0].into_inner(), r[1].into_inner()],
          )
        }
      }
    )*
  };
}

fixed_precision!(i8, i16, i32);
arbitrary_precision!(num_bigint::BigInt, num_rational::BigRational);
floating_precision!(f32, f64);
wrapped_floating_precision!(
  ordered_float::OrderedFloat<f64>,
  ordered_float::NotNan<f64>
);

#[cfg(test)]
mod tests {
  use super::*;
  use num_bigint::BigInt;
  use ordered_float::NotNan;

  #[test]
  fn slope_sign_is_left_turn_positive() {
    assert_eq!(
      <f64 as PolygonScalar>::cmp_slope(&[0., 0.], &[1., 0.], &[1., 1.]),
      Ordering::Greater
    );
    assert_eq!(
      <i32 as PolygonScalar>::cmp_slope(&[0, 0], &[1, 0], &[1, -1]),
      Ordering::Less
    );
    let big = |x: i64, y: i64| [BigInt::from(x), BigInt::from(y)];
    assert_eq!(
      PolygonScalar::cmp_slope(&big(0, 0), &big(1, 1), &big(2, 2)),
      Ordering::Equal
    );
  }

  #[test]
  fn slope_does_not_overflow() {
    let low_left = [i32::MIN, i32::MIN];
    let low_right = [i32::MAX, i32::MIN];
    let high_right = [i32::MAX, i32::MAX];
    assert_eq!(
      <i32 as PolygonScalar>::cmp_slope(&low_left, &low_right, &high_right),
      Ordering::Greater
    );
  }

  #[test]
  fn nan_is_colinear() {
    assert_eq!(
      <f64 as PolygonScalar>::cmp_slope(&[0., 0.], &[f64::NAN, 0.], &[1., 1.]),
      Ordering::Equal
    );
  }

  #[test]
  fn wrapped_floats_match_plain_floats() {
    let nn = |x: f64, y: f64| [NotNan::new(x).unwrap(), NotNan::new(y).unwrap()];
    assert_eq!(
      PolygonScalar::cmp_dist(&nn(0., 0.), &nn(3., 4.), &nn(5., 0.)),
      Ordering::Equal
    );
    assert_eq!(
      PolygonScalar::cmp_slope(&nn(0., 0.), &nn(2., 0.), &nn(1., 1.)),
      Ordering::Greater
    );
  }
}
