//! `mmi-curves` library crate.
//!
//! The binary (`mmi`) is a thin wrapper around this library so that:
//!
//! - core logic (IPE formulas, intensity classification) is testable without
//!   spawning processes
//! - modules are reusable (e.g., future map renderers, notebooks, etc.)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod classify;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
