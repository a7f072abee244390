pub mod hull;
pub(crate) mod point;

#[doc(inline)]
pub use hull::{Hull, HullVertex};
pub use point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
