//! Intensity-prediction-equation (IPE) implementations.
//!
//! Models are implemented as small, pure functions so that plotting/comparison
//! code can stay generic over `IpeKind`.

pub mod ipe;

pub use ipe::*;
