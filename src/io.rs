//! Plain text input and output.
//!
//! Input is a point count on the first line followed by one point per line,
//! given as two whitespace separated numbers. Blank lines are skipped and
//! anything after the announced points is ignored.
//!
//! Output renders points as `(x,y)` with both coordinates rounded to the
//! nearest integer, halves rounded up.
use num_traits::ToPrimitive;
use ordered_float::NotNan;
use std::io::{self, Write};
use thiserror::Error;

use crate::algorithms::convex_hull::chan::{ChanScan, State};
use crate::data::{Hull, Point};
use crate::PolygonScalar;

/// Malformed input. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
  #[error("missing point count")]
  MissingCount,
  #[error("line {line}: invalid point count {token:?}")]
  InvalidCount { line: usize, token: String },
  #[error("expected {expected} points, found {found}")]
  MissingPoints { expected: usize, found: usize },
  #[error("line {line}: expected two coordinates")]
  MissingCoordinate { line: usize },
  #[error("line {line}: unexpected token {token:?} after the coordinates")]
  UnexpectedToken { line: usize, token: String },
  #[error("line {line}: invalid coordinate {token:?}")]
  InvalidCoordinate { line: usize, token: String },
  #[error("line {line}: coordinates must be finite")]
  NonFinite { line: usize },
}

/// Failure while computing or writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
  #[error(transparent)]
  Io(#[from] io::Error),
  #[error(transparent)]
  Hull(#[from] crate::Error),
}

/// Parse a point count followed by that many points.
///
/// # Errors
/// Will return an error for anything but a well formed count followed by at
/// least that many well formed points.
///
/// # Examples
///
/// ```rust
/// # use chan_hull::io::parse_points;
/// # use chan_hull::data::Point;
/// let points = parse_points("2\n0 0\n1.5 -2\n").unwrap();
/// assert_eq!(points[1], Point::new_nn([1.5, -2.0]));
/// ```
pub fn parse_points(input: &str) -> Result<Vec<Point<NotNan<f64>>>, ParseError> {
  let mut lines = input
    .lines()
    .enumerate()
    .map(|(idx, line)| (idx + 1, line.trim()))
    .filter(|(_, line)| !line.is_empty());

  let (line, count) = lines.next().ok_or(ParseError::MissingCount)?;
  let expected: usize = count.parse().map_err(|_| ParseError::InvalidCount {
    line,
    token: count.to_string(),
  })?;

  let mut points = Vec::with_capacity(expected);
  for (line, text) in lines.take(expected) {
    points.push(parse_point(line, text)?);
  }
  if points.len() < expected {
    return Err(ParseError::MissingPoints {
      expected,
      found: points.len(),
    });
  }
  Ok(points)
}

fn parse_point(line: usize, text: &str) -> Result<Point<NotNan<f64>>, ParseError> {
  let mut tokens = text.split_whitespace();
  let mut coord = || -> Result<NotNan<f64>, ParseError> {
    let token = tokens.next().ok_or(ParseError::MissingCoordinate { line })?;
    let value: f64 = token.parse().map_err(|_| ParseError::InvalidCoordinate {
      line,
      token: token.to_string(),
    })?;
    if !value.is_finite() {
      return Err(ParseError::NonFinite { line });
    }
    NotNan::new(value).map_err(|_| ParseError::NonFinite { line })
  };
  let x = coord()?;
  let y = coord()?;
  if let Some(token) = tokens.next() {
    return Err(ParseError::UnexpectedToken {
      line,
      token: token.to_string(),
    });
  }
  Ok(Point::new([x, y]))
}

// Halves round up, towards positive infinity.
fn round<T: ToPrimitive>(value: &T) -> i64 {
  value.to_f64().map_or(0, |v| (v + 0.5).floor() as i64)
}

pub fn format_point<T: ToPrimitive>(pt: &Point<T>) -> String {
  format!("({},{})", round(pt.x_coord()), round(pt.y_coord()))
}

/// Space separated `(x,y)` pairs.
pub fn format_points<'a, T, I>(pts: I) -> String
where
  T: ToPrimitive + 'a,
  I: IntoIterator<Item = &'a Point<T>>,
{
  pts
    .into_iter()
    .map(format_point)
    .collect::<Vec<_>>()
    .join(" ")
}

/// Report the chunk size of a guess and the hull of every chunk.
pub fn write_guess<W, T>(out: &mut W, m: usize, hulls: &[Hull<T>]) -> io::Result<()>
where
  W: Write,
  T: ToPrimitive,
{
  writeln!(out)?;
  writeln!(out, "M (Chunk Size): {m}")?;
  for (idx, hull) in hulls.iter().enumerate() {
    writeln!(out, "Convex Hull for Hull #{idx} (Graham scan)")?;
    writeln!(out, "{}", format_points(hull.iter()))?;
  }
  Ok(())
}

/// Report the final hull below a divider.
pub fn write_hull<W, T>(out: &mut W, hull: &[Point<T>]) -> io::Result<()>
where
  W: Write,
  T: ToPrimitive,
{
  writeln!(out)?;
  writeln!(out, "---------After Using Chan's Algorithm---------------")?;
  writeln!(out)?;
  writeln!(out, "***************** CONVEX HULL **********************")?;
  writeln!(out, "{}", format_points(hull))?;
  Ok(())
}

/// Compute the hull of `points` with Chan's algorithm and write it below the
/// chunk hulls of every guess. With `quiet` only the final hull is written.
///
/// A single point is reported as one chunk of size 1.
///
/// # Errors
/// Will return an error if writing fails or if no guess closed.
pub fn report<T, W>(
  points: Vec<Point<T>>,
  quiet: bool,
  out: &mut W,
) -> Result<Vec<Point<T>>, ReportError>
where
  T: PolygonScalar + ToPrimitive,
  W: Write,
{
  let n = points.len();
  let mut scan = ChanScan::new(points);
  if !quiet && !scan.hulls().is_empty() {
    write_guess(out, n, scan.hulls())?;
  }
  while !scan.is_done() {
    scan.step()?;
    if let State::Walking { m, step: 0, .. } = scan.state() {
      if !quiet {
        write_guess(out, *m, scan.hulls())?;
      }
    }
  }
  let hull = scan.run()?;
  write_hull(out, &hull)?;
  Ok(hull)
}
