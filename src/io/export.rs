//! CSV exports.
//!
//! Two writers, both meant to be easy to consume in spreadsheets or
//! downstream plotting scripts:
//!
//! - attenuation curves: one row per distance, one column per model
//! - classified cells: one row per plotted cell, with bin/label/color

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::classify::{bin_index, color_for, roman_label};
use crate::domain::{IntensityEstimate, IpeKind, SurveyCell};
use crate::error::AppError;

/// Write model curves to CSV with the distance grid in the first column.
///
/// Column labels follow the original published comparison
/// (`rjb,AW07_CEUS,...`). Assumes every series has the grid's length; the
/// pipeline builds them together.
pub fn write_atten_csv(
    path: &Path,
    rjb: &[f64],
    series: &[(IpeKind, Vec<IntensityEstimate>)],
) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create CSV '{}': {e}", path.display())))?;

    let mut header = String::from("rjb");
    for (kind, _) in series {
        header.push(',');
        header.push_str(kind.csv_label());
    }
    writeln!(file, "{header}")
        .map_err(|e| AppError::input(format!("Failed to write CSV header: {e}")))?;

    for (i, r) in rjb.iter().enumerate() {
        let mut row = format!("{r:.6}");
        for (_, curve) in series {
            row.push_str(&format!(",{:.6}", curve[i].mmi));
        }
        writeln!(file, "{row}")
            .map_err(|e| AppError::input(format!("Failed to write CSV row: {e}")))?;
    }

    Ok(())
}

/// Write classified survey cells to CSV (one row per plotted cell).
pub fn write_cells_csv(path: &Path, cells: &[SurveyCell]) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create CSV '{}': {e}", path.display())))?;

    writeln!(file, "centroid_lon,centroid_lat,intensity,bin,label,color,nresp")
        .map_err(|e| AppError::input(format!("Failed to write CSV header: {e}")))?;

    for cell in cells {
        let bin = bin_index(cell.intensity);
        writeln!(
            file,
            "{:.5},{:.5},{:.2},{},{},{},{}",
            cell.centroid.0,
            cell.centroid.1,
            cell.intensity,
            bin,
            roman_label(bin),
            color_for(cell.intensity).hex(),
            cell.nresp,
        )
        .map_err(|e| AppError::input(format!("Failed to write CSV row: {e}")))?;
    }

    Ok(())
}
