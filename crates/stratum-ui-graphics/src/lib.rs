//! Pure math/data for layout units in Stratum.
//!
//! Sizes and rectangles are expressed in `f32` layout units. Infinity is a
//! legal length and means "unconstrained".

mod geometry;

pub use geometry::*;
