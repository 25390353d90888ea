//! DYFI GeoJSON ingest and normalization.
//!
//! This module turns a USGS DYFI aggregated-grid GeoJSON (e.g.
//! `dyfi_geo_10km.geojson`) into a clean list of `SurveyCell`s.
//!
//! Design goals:
//! - **Strict top-level schema** (a non-GeoJSON file is a clear error, exit code 2)
//! - **Feature-level validation** (skip bad features, but report what happened)
//! - **Separation of concerns**: no classification logic here

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::domain::SurveyCell;
use crate::error::AppError;

/// A feature-level error encountered during ingest.
#[derive(Debug, Clone)]
pub struct CellError {
    /// Zero-based index of the feature in the collection.
    pub index: usize,
    pub message: String,
}

/// Ingest output: normalized cells + per-feature errors.
#[derive(Debug, Clone)]
pub struct LoadedCells {
    pub cells: Vec<SurveyCell>,
    pub cell_errors: Vec<CellError>,
    pub features_read: usize,
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Option<Geometry>,
    properties: Option<Properties>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    /// Polygon rings; ring 0 is the exterior boundary.
    coordinates: Vec<Vec<(f64, f64)>>,
}

#[derive(Debug, Deserialize)]
struct Properties {
    center: Option<Center>,
    #[serde(rename = "intensityFine")]
    intensity_fine: Option<f64>,
    nresp: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct Center {
    coordinates: (f64, f64),
}

/// Load DYFI survey cells from a GeoJSON file.
///
/// Malformed features (missing fields, degenerate rings) are skipped and
/// reported in `cell_errors` rather than failing the whole run; a file that is
/// not a GeoJSON feature collection at all is an error.
pub fn load_survey_cells(path: &Path) -> Result<LoadedCells, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open GeoJSON '{}': {e}", path.display())))?;

    let collection: FeatureCollection = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::input(format!("Invalid GeoJSON '{}': {e}", path.display())))?;

    let features_read = collection.features.len();
    let mut cells = Vec::with_capacity(features_read);
    let mut cell_errors = Vec::new();

    for (index, feature) in collection.features.into_iter().enumerate() {
        match cell_from_feature(feature) {
            Ok(cell) => cells.push(cell),
            Err(message) => cell_errors.push(CellError { index, message }),
        }
    }

    Ok(LoadedCells {
        cells,
        cell_errors,
        features_read,
    })
}

fn cell_from_feature(feature: Feature) -> Result<SurveyCell, String> {
    let geometry = feature.geometry.ok_or("missing geometry")?;
    let properties = feature.properties.ok_or("missing properties")?;

    let boundary = geometry
        .coordinates
        .into_iter()
        .next()
        .ok_or("polygon has no rings")?;
    if boundary.len() < 3 {
        return Err(format!("exterior ring has {} vertices, need >= 3", boundary.len()));
    }

    let centroid = properties.center.ok_or("missing center")?.coordinates;
    let intensity = properties.intensity_fine.ok_or("missing intensityFine")?;
    if !intensity.is_finite() {
        return Err(format!("non-finite intensityFine: {intensity}"));
    }
    let nresp = properties.nresp.ok_or("missing nresp")?;

    Ok(SurveyCell {
        boundary,
        centroid,
        intensity,
        nresp,
    })
}
