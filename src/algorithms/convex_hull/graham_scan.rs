use std::cmp::Ordering;

use crate::data::{Hull, Point};
use crate::{Error, Orientation, PolygonScalar, TotalOrd};

// https://en.wikipedia.org/wiki/Graham_scan

// Properties:
//    No panics.
//    All Ok results are valid hulls.
//    No points are outside the resulting hull.
/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Graham scan][wiki] algorithm for finding the smallest convex polygon which
/// contains all the given points. Used by [Chan's algorithm](super::chan) to
/// reduce each chunk of the input to a sub-hull.
///
/// The points are sorted by decreasing angle around the lowest point (the
/// pivot). A first chain over the sorted points leaves the pivot together with
/// the far end of the edge leaving it; a second chain over the reversed points
/// walks from there around the rest of the boundary and back to the pivot.
///
/// # Errors
/// Will return an error iff the input set is empty.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All vertices in the hull are from the input set.
/// * The hull starts at the lowest (then leftmost) point.
/// * One distinct point gives a single vertex, colinear points give the two
///   extreme points.
///
/// # Examples
///
/// ```rust
/// # use chan_hull::algorithms::convex_hull::graham_scan::convex_hull;
/// # use chan_hull::data::Point;
/// let points = vec![
///   Point::new([0, 0]),
///   Point::new([1, 1]),
///   Point::new([2, 2]),
/// ];
/// let hull = convex_hull(points).unwrap();
/// assert_eq!(hull.points(), &[Point::new([0, 0]), Point::new([2, 2])]);
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull<T>(mut pts: Vec<Point<T>>) -> Result<Hull<T>, Error>
where
  T: PolygonScalar,
{
  if pts.len() <= 1 {
    return Hull::new(pts);
  }
  let pivot = lowest_point(&pts)?;

  pts.sort_unstable_by(|a, b| cmp_around(&pivot, a, b));

  let mut lower = Vec::with_capacity(pts.len());
  for pt in pts.iter() {
    keep_left(&mut lower, pt);
  }
  pts.reverse();
  let mut upper = Vec::with_capacity(pts.len());
  for pt in pts.iter() {
    keep_left(&mut upper, pt);
  }

  lower.extend(upper.into_iter().skip(1));
  // The upper chain ends where the lower chain started.
  if lower.len() > 1 && lower.first() == lower.last() {
    lower.pop();
  }
  Ok(Hull::new_unchecked(lower))
}

// Copies of the pivot first, then by decreasing angle. Points on the same ray
// are ordered nearest first.
fn cmp_around<T>(pivot: &Point<T>, a: &Point<T>, b: &Point<T>) -> Ordering
where
  T: PolygonScalar,
{
  match (a == pivot, b == pivot) {
    (true, true) => Ordering::Equal,
    (true, false) => Ordering::Less,
    (false, true) => Ordering::Greater,
    (false, false) => match Point::orient(pivot, a, b) {
      Orientation::CounterClockWise => Ordering::Greater,
      Orientation::ClockWise => Ordering::Less,
      Orientation::CoLinear => pivot.cmp_distance_to(a, b),
    },
  }
}

// Pop the tail until it makes a strict left turn towards `pt`, then append `pt`
// unless it is already the tail.
fn keep_left<T>(chain: &mut Vec<Point<T>>, pt: &Point<T>)
where
  T: PolygonScalar,
{
  while chain.len() > 1
    && Point::orient(&chain[chain.len() - 2], &chain[chain.len() - 1], pt)
      != Orientation::CounterClockWise
  {
    chain.pop();
  }
  if chain.last() != Some(pt) {
    chain.push(pt.clone());
  }
}

// Lowest point, ties broken by the smallest x coordinate.
// O(n)
fn lowest_point<T>(pts: &[Point<T>]) -> Result<Point<T>, Error>
where
  T: PolygonScalar,
{
  Ok(
    pts
      .iter()
      .min_by(|a, b| TotalOrd::total_cmp(&(a.y_coord(), a.x_coord()), &(b.y_coord(), b.x_coord())))
      .ok_or(Error::InsufficientVertices)?
      .clone(),
  )
}
