//! Mathematical utilities: effective distances, the far-field term, and grids.

pub mod distance;

pub use distance::*;
