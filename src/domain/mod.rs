//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the model vocabulary (`IpeKind`, `Region`, `SiteClass`, `DistanceMetric`)
//! - event inputs (`EventScenario`)
//! - model outputs (`IntensityEstimate`)
//! - DYFI survey inputs (`SurveyCell`)
//! - run configuration (`AttenConfig`, `DyfiConfig`)

pub mod types;

pub use types::*;
