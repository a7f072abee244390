use std::cmp::Ordering;

use crate::data::{Hull, Point};
use crate::utils::in_ring;
use crate::{Orientation, PolygonScalar};

/// $O(\log n)$ Index of the vertex of `hull` that `p` sees furthest to the
/// right.
///
/// The returned vertex `v` is a right tangent point: the whole hull lies on or
/// to the left of the directed line `p -> v`. When several vertices lie on
/// that line, the one furthest from `p` is returned. When `p` is itself a
/// vertex, the vertex after it is returned, so a walk around the hull makes
/// progress.
///
/// A binary search is tried first. Its answer is verified and, if it does not
/// hold up (for instance because `p` lies inside or on the hull), a linear scan
/// takes over.
///
/// # Panics
///
/// Panics if the hull is empty.
///
/// # Examples
///
/// ```rust
/// # use chan_hull::algorithms::convex_hull::tangent::tangent;
/// # use chan_hull::data::{Hull, Point};
/// let square = Hull::new(vec![
///   Point::new([0, 0]),
///   Point::new([4, 0]),
///   Point::new([4, 4]),
///   Point::new([0, 4]),
/// ]).unwrap();
/// assert_eq!(tangent(&square, &Point::new([8, -2])), 2);
/// assert_eq!(tangent(&square, &Point::new([-3, 2])), 0);
/// ```
pub fn tangent<T>(hull: &Hull<T>, p: &Point<T>) -> usize
where
  T: PolygonScalar,
{
  let n = hull.len();
  if n == 1 {
    return 0;
  }
  let candidate = match in_ring(tangent_search(hull, p), n) {
    Some(idx) if is_tangent(hull, p, idx) => idx,
    _ => linear_scan(hull, p),
  };
  settle(hull, p, candidate)
}

// Binary search over the ring for a vertex whose neighbours are both on or to
// the left of `p -> v`. Only meaningful when `p` is strictly outside the hull.
// The result may be `hull.len()` when the search runs off the end.
pub(crate) fn tangent_search<T>(hull: &Hull<T>, p: &Point<T>) -> usize
where
  T: PolygonScalar,
{
  let n = hull.len();
  let turn = |a: usize, b: usize| Point::orient(p, hull.point(a), hull.point(b));

  let mut l = 0;
  let mut r = n;
  let mut l_before = turn(0, hull.pred(0));
  let mut l_after = turn(0, hull.succ(0));
  while l < r {
    let c = l + (r - l) / 2;
    let c_before = turn(c, hull.pred(c));
    let c_after = turn(c, hull.succ(c));
    if !c_before.is_cw() && !c_after.is_cw() {
      return c;
    }
    let c_side = turn(l, c);
    let descend = match c_side {
      Orientation::CoLinear if c == l => false,
      Orientation::CounterClockWise => {
        l_after.is_cw() || (!l_before.is_cw() && !l_after.is_cw())
      }
      Orientation::ClockWise | Orientation::CoLinear => c_before.is_cw(),
    };
    if descend {
      r = c;
    } else {
      l = c + 1;
      l_before = c_after.reverse();
      if l >= n {
        break;
      }
      l_after = turn(l, hull.succ(l));
    }
  }
  l
}

fn is_tangent<T>(hull: &Hull<T>, p: &Point<T>, idx: usize) -> bool
where
  T: PolygonScalar,
{
  let v = hull.point(idx);
  v != p
    && !Point::orient(p, v, hull.point(hull.pred(idx))).is_cw()
    && !Point::orient(p, v, hull.point(hull.succ(idx))).is_cw()
}

// $O(n)$ Same answer as the binary search, found by keeping the vertex that
// nothing else is to the right of. Vertices equal to `p` are skipped.
pub(crate) fn linear_scan<T>(hull: &Hull<T>, p: &Point<T>) -> usize
where
  T: PolygonScalar,
{
  let mut best: Option<usize> = None;
  for (idx, v) in hull.iter().enumerate() {
    if v == p {
      continue;
    }
    best = match best {
      None => Some(idx),
      Some(b) => {
        let bv = hull.point(b);
        let replace = match Point::orient(p, bv, v) {
          Orientation::ClockWise => true,
          Orientation::CoLinear => p.cmp_distance_to(v, bv) == Ordering::Greater,
          Orientation::CounterClockWise => false,
        };
        Some(if replace { idx } else { b })
      }
    };
  }
  best.unwrap_or(0)
}

// Step past `p` when it is a vertex and prefer the farthest vertex along the
// tangent line.
fn settle<T>(hull: &Hull<T>, p: &Point<T>, idx: usize) -> usize
where
  T: PolygonScalar,
{
  let v = hull.point(idx);
  if v == p {
    return hull.succ(idx);
  }
  for next in [hull.succ(idx), hull.pred(idx)] {
    let w = hull.point(next);
    if w != p
      && Point::orient(p, v, w).is_colinear()
      && p.cmp_distance_to(w, v) == Ordering::Greater
    {
      return next;
    }
  }
  idx
}
