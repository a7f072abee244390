pub mod chan;
pub mod graham_scan;
pub mod tangent;
