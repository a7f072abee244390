pub mod convex_hull;

#[doc(inline)]
pub use convex_hull::chan::convex_hull;
