use claims::debug_assert_ok;
use std::cmp::Ordering;
use std::ops::Index;

use super::{Point, PointLocation};
use crate::utils::{cyclic_next, cyclic_prev};
use crate::{Error, Orientation, PolygonScalar};

/// Counter-clockwise ring of distinct points with strict left turns at every
/// vertex.
///
/// Hulls with one or two vertices are valid: they describe a single point and
/// a flat segment respectively.
#[derive(Debug, Clone, PartialEq)]
pub struct Hull<T>(Vec<Point<T>>);

/// Position of a vertex inside a collection of hulls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HullVertex {
  pub hull: usize,
  pub vertex: usize,
}

impl HullVertex {
  pub fn new(hull: usize, vertex: usize) -> HullVertex {
    HullVertex { hull, vertex }
  }

  /// # Panics
  ///
  /// Panics if the reference does not belong to `hulls`.
  pub fn resolve<'a, T>(&self, hulls: &'a [Hull<T>]) -> &'a Point<T> {
    hulls[self.hull].point(self.vertex)
  }
}

impl<T> Hull<T>
where
  T: PolygonScalar,
{
  /// $O(n)$
  pub fn new(points: Vec<Point<T>>) -> Result<Hull<T>, Error> {
    let hull = Hull(points);
    hull.validate()?;
    Ok(hull)
  }

  /// $O(1)$ Assume that the points already form a hull.
  ///
  /// The points must be distinct, in counter-clockwise order, and every vertex
  /// must be a strict left turn. Only checked in debug builds.
  pub fn new_unchecked(points: Vec<Point<T>>) -> Hull<T> {
    let hull = Hull(points);
    debug_assert_ok!(hull.validate());
    hull
  }

  /// $O(n)$
  pub fn validate(&self) -> Result<(), Error> {
    let n = self.0.len();
    match n {
      0 => return Err(Error::InsufficientVertices),
      1 => return Ok(()),
      2 if self.0[0] == self.0[1] => return Err(Error::DuplicatePoints),
      2 => return Ok(()),
      _ => {}
    }
    for idx in 0..n {
      let prev = self.point(cyclic_prev(idx, n));
      let this = self.point(idx);
      let next = self.point(cyclic_next(idx, n));
      if this == next {
        return Err(Error::DuplicatePoints);
      }
      if Point::orient(prev, this, next) != Orientation::CounterClockWise {
        return Err(Error::ConvexViolation);
      }
    }
    // Locally convex rings can still wind around more than once. Seen from the
    // first vertex, the others must sweep strictly less than half a turn.
    let origin = self.point(0);
    let first = self.point(1);
    for idx in 2..n {
      if !Point::orient(origin, self.point(idx - 1), self.point(idx)).is_ccw()
        || !Point::orient(origin, first, self.point(idx)).is_ccw()
      {
        return Err(Error::SelfIntersections);
      }
    }
    Ok(())
  }

  /// $O(n)$
  pub fn locate(&self, pt: &Point<T>) -> PointLocation {
    let n = self.0.len();
    match n {
      0 => PointLocation::Outside,
      1 if &self.0[0] == pt => PointLocation::OnBoundary,
      1 => PointLocation::Outside,
      2 => {
        let (a, b) = (&self.0[0], &self.0[1]);
        if Point::orient(a, b, pt).is_colinear()
          && a.cmp_distance_to(pt, b) != Ordering::Greater
          && b.cmp_distance_to(pt, a) != Ordering::Greater
        {
          PointLocation::OnBoundary
        } else {
          PointLocation::Outside
        }
      }
      _ => {
        let mut on_edge = false;
        for idx in 0..n {
          match Point::orient(self.point(idx), self.point(cyclic_next(idx, n)), pt) {
            Orientation::ClockWise => return PointLocation::Outside,
            Orientation::CoLinear => on_edge = true,
            Orientation::CounterClockWise => {}
          }
        }
        if on_edge {
          PointLocation::OnBoundary
        } else {
          PointLocation::Inside
        }
      }
    }
  }
}

impl<T> Hull<T> {
  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn point(&self, idx: usize) -> &Point<T> {
    &self.0[idx]
  }

  pub fn succ(&self, idx: usize) -> usize {
    cyclic_next(idx, self.len())
  }

  pub fn pred(&self, idx: usize) -> usize {
    cyclic_prev(idx, self.len())
  }

  pub fn iter(&self) -> impl Iterator<Item = &Point<T>> + '_ {
    self.0.iter()
  }

  pub fn points(&self) -> &[Point<T>] {
    &self.0
  }

  pub fn into_points(self) -> Vec<Point<T>> {
    self.0
  }
}

impl<T> Index<usize> for Hull<T> {
  type Output = Point<T>;
  fn index(&self, idx: usize) -> &Point<T> {
    self.point(idx)
  }
}
