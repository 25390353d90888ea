//! Terminal plotting for attenuation-curve comparisons.

pub mod ascii;

pub use ascii::*;
