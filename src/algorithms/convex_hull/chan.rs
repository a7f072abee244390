use std::cmp::Ordering;
use tracing::{debug, trace};

use super::graham_scan;
use super::tangent::tangent;
use crate::data::{Hull, HullVertex, Point};
use crate::{Error, Orientation, PolygonScalar, TotalOrd};

// https://en.wikipedia.org/wiki/Chan%27s_algorithm

/// Progress of a [`ChanScan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
  /// The input is about to be split into chunks of `m` points.
  Guessing { m: usize },
  /// Wrapping the hulls of the current guess. `path` holds the vertices found
  /// so far, `step` counts the merge steps taken.
  Walking {
    m: usize,
    step: usize,
    path: Vec<HullVertex>,
  },
  /// The walk returned to its starting point.
  Closed { path: Vec<HullVertex> },
  /// A guess covering every point failed to close.
  Exhausted { m: usize },
}

/// Chan's algorithm as a state machine that can be advanced one transition at
/// a time.
///
/// Each guess `m` (2, 4, 16, 256, ... capped at the number of points) splits
/// the input into contiguous chunks of `m` points and reduces every chunk to
/// its hull with a [Graham scan](graham_scan::convex_hull). Starting from the
/// lowest point, the walk then takes at most `m` merge steps, asking every
/// chunk hull for its tangent each time. If the walk has not returned to the
/// start by then, the hulls are discarded and the next guess is tried.
///
/// ```rust
/// # use chan_hull::algorithms::convex_hull::chan::{ChanScan, State};
/// # use chan_hull::data::Point;
/// let points: Vec<Point<i32>> = (0..10).map(|x| Point::new([x, x * x])).collect();
/// let mut scan = ChanScan::new(points);
/// let mut guesses = vec![];
/// while !scan.is_done() {
///   if let State::Guessing { m } = scan.state() {
///     guesses.push(*m);
///   }
///   scan.step().unwrap();
/// }
/// assert_eq!(guesses, vec![2, 4, 10]);
/// assert_eq!(scan.run().unwrap().len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct ChanScan<T> {
  points: Vec<Point<T>>,
  hulls: Vec<Hull<T>>,
  round: u32,
  state: State,
}

impl<T> ChanScan<T>
where
  T: PolygonScalar,
{
  pub fn new(points: Vec<Point<T>>) -> ChanScan<T> {
    let n = points.len();
    let (hulls, state) = match n {
      0 => (Vec::new(), State::Closed { path: Vec::new() }),
      1 => (
        vec![Hull::new_unchecked(points.clone())],
        State::Closed {
          path: vec![HullVertex::new(0, 0)],
        },
      ),
      _ => (Vec::new(), State::Guessing { m: guess(0, n) }),
    };
    ChanScan {
      points,
      hulls,
      round: 0,
      state,
    }
  }

  pub fn state(&self) -> &State {
    &self.state
  }

  /// Hulls of the current guess. Empty while guessing.
  pub fn hulls(&self) -> &[Hull<T>] {
    &self.hulls
  }

  pub fn is_done(&self) -> bool {
    matches!(self.state, State::Closed { .. } | State::Exhausted { .. })
  }

  /// Take a single transition. Does nothing once the scan is done.
  pub fn step(&mut self) -> Result<(), Error> {
    let n = self.points.len();
    let next = match &mut self.state {
      State::Guessing { m } => {
        let m = *m;
        self.hulls = self
          .points
          .chunks(m)
          .map(|chunk| graham_scan::convex_hull(chunk.to_vec()))
          .collect::<Result<_, _>>()?;
        debug!(m, chunks = self.hulls.len(), "guess");
        let start = extreme_point(&self.hulls)?;
        State::Walking {
          m,
          step: 0,
          path: vec![start],
        }
      }
      State::Walking { m, step, path } if *step == *m => {
        let m = *m;
        if m >= n {
          debug!(m, "walk did not close with a single chunk");
          State::Exhausted { m }
        } else {
          debug!(m, vertices = path.len(), "walk did not close, escalating");
          self.round += 1;
          self.hulls.clear();
          State::Guessing {
            m: guess(self.round, n),
          }
        }
      }
      State::Walking { m, step, path } => {
        let current = path[path.len() - 1];
        let next = next_vertex(&self.hulls, current);
        trace!(step = *step, hull = next.hull, vertex = next.vertex, "merge");
        if next.resolve(&self.hulls) == path[0].resolve(&self.hulls) {
          debug!(m = *m, vertices = path.len(), "closed");
          State::Closed {
            path: std::mem::take(path),
          }
        } else {
          path.push(next);
          *step += 1;
          return Ok(());
        }
      }
      State::Closed { .. } | State::Exhausted { .. } => return Ok(()),
    };
    self.state = next;
    Ok(())
  }

  /// Step until the scan is done and return the hull, counter-clockwise from
  /// its lowest point.
  ///
  /// # Errors
  /// Will return [`Error::HullDidNotClose`] if no guess closed.
  pub fn run(mut self) -> Result<Vec<Point<T>>, Error> {
    while !self.is_done() {
      self.step()?;
    }
    match &self.state {
      State::Closed { path } => Ok(
        path
          .iter()
          .map(|vertex| vertex.resolve(&self.hulls).clone())
          .collect(),
      ),
      _ => Err(Error::HullDidNotClose),
    }
  }
}

// Properties:
//    All Ok results are convex, counter-clockwise and start at the lowest point.
//    No points are outside the resulting hull.
/// $O(n \log h)$ Convex hull of a set of points.
///
/// [Chan's algorithm][wiki] for finding the smallest convex polygon which
/// contains all the given points. The running time depends on the number of
/// hull vertices `h` rather than only on the number of points.
///
/// # Errors
/// Never fails for valid input. An error is an internal invariant violation.
///
/// # Properties
/// * No points from the input set will be outside the returned hull.
/// * All vertices in the hull are from the input set.
/// * Colinear boundary points are not reported, only the extreme ones.
/// * Empty input gives an empty hull; duplicates collapse to one vertex.
///
/// # Examples
///
/// ```rust
/// # use chan_hull::algorithms::convex_hull;
/// # use chan_hull::data::Point;
/// let points = vec![
///   Point::new([0, 0]),
///   Point::new([4, 0]),
///   Point::new([2, 1]),
///   Point::new([2, 3]),
/// ];
/// let hull = convex_hull(points).unwrap();
/// assert_eq!(hull, vec![Point::new([0, 0]), Point::new([4, 0]), Point::new([2, 3])]);
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Chan%27s_algorithm
pub fn convex_hull<T>(pts: Vec<Point<T>>) -> Result<Vec<Point<T>>, Error>
where
  T: PolygonScalar,
{
  ChanScan::new(pts).run()
}

// 2^(2^round), saturating, capped at `n`.
fn guess(round: u32, n: usize) -> usize {
  1u32
    .checked_shl(round)
    .and_then(|exp| 2usize.checked_pow(exp))
    .unwrap_or(usize::MAX)
    .min(n)
}

/// Lowest point of all hulls. Ties are broken by the smallest x coordinate,
/// then by the first occurrence.
///
/// # Errors
/// Will return an error iff there are no points.
pub fn extreme_point<T>(hulls: &[Hull<T>]) -> Result<HullVertex, Error>
where
  T: PolygonScalar,
{
  let mut best: Option<(HullVertex, &Point<T>)> = None;
  for (h, hull) in hulls.iter().enumerate() {
    for (v, pt) in hull.iter().enumerate() {
      let lower = match best {
        None => true,
        Some((_, b)) => {
          TotalOrd::total_cmp(&(pt.y_coord(), pt.x_coord()), &(b.y_coord(), b.x_coord()))
            == Ordering::Less
        }
      };
      if lower {
        best = Some((HullVertex::new(h, v), pt));
      }
    }
  }
  best
    .map(|(vertex, _)| vertex)
    .ok_or(Error::InsufficientVertices)
}

/// One wrapping step: the vertex that follows `current` on the hull of all
/// points.
///
/// Starts with the successor of `current` on its own hull and lets the tangent
/// of every other hull replace it when the tangent lies to the right, or on the
/// same line but farther away.
pub fn next_vertex<T>(hulls: &[Hull<T>], current: HullVertex) -> HullVertex
where
  T: PolygonScalar,
{
  let p = current.resolve(hulls);
  let own = &hulls[current.hull];
  let mut best = HullVertex::new(current.hull, own.succ(current.vertex));
  for (idx, hull) in hulls.iter().enumerate() {
    if idx == current.hull {
      continue;
    }
    let candidate = HullVertex::new(idx, tangent(hull, p));
    let q = best.resolve(hulls);
    let r = candidate.resolve(hulls);
    let replace = match Point::orient(p, q, r) {
      Orientation::ClockWise => true,
      Orientation::CoLinear => p.cmp_distance_to(r, q) == Ordering::Greater,
      Orientation::CounterClockWise => false,
    };
    if replace {
      best = candidate;
    }
  }
  best
}
