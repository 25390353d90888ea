//! Input/output helpers.
//!
//! - DYFI GeoJSON ingest + validation (`geojson`)
//! - CSV exports for attenuation curves and classified cells (`export`)

pub mod export;
pub mod geojson;

pub use export::*;
pub use geojson::*;
