//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the model/classifier code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::classify::{ResponseTally, bin_index, roman_label};
use crate::domain::{AttenConfig, DyfiConfig, IntensityEstimate, IpeKind, SurveyCell};
use crate::io::geojson::LoadedCells;
use crate::report::BinHistogram;

/// Reference distances (km) echoed in the attenuation summary table.
const REFERENCE_RJB: [f64; 5] = [10.0, 20.0, 50.0, 100.0, 200.0];

/// Format the attenuation-run summary (scenario echo + per-model table).
pub fn format_atten_summary(
    config: &AttenConfig,
    rjb: &[f64],
    series: &[(IpeKind, Vec<IntensityEstimate>)],
) -> String {
    let s = &config.scenario;
    let mut out = String::new();

    out.push_str("=== mmi - IPE Attenuation Comparison ===\n");
    if let Some(place) = &s.place {
        out.push_str(&format!("Event: {place}"));
        if let Some(date) = s.event_date {
            out.push_str(&format!(" ({date})"));
        }
        out.push('\n');
    }
    out.push_str(&format!("Magnitude: {:.1} | Depth: {:.1} km", s.mag, s.depth_km));
    if let Some(vs30) = s.vs30 {
        out.push_str(&format!(" | Vs30: {vs30:.0} m/s"));
    }
    if let Some(region) = s.region {
        out.push_str(&format!(" | Region: {}", region.display_name()));
    }
    out.push('\n');
    out.push_str(&format!(
        "Grid: rjb [{:.1}, {:.1}] km, {} points ({})\n",
        config.rjb_min,
        config.rjb_max,
        rjb.len(),
        if config.log_spaced { "log-spaced" } else { "linear" },
    ));

    out.push_str("\nModel        sigma   dist  ");
    for r in REFERENCE_RJB {
        out.push_str(&format!("{r:>7.0}km"));
    }
    out.push('\n');

    for (kind, curve) in series {
        let sigma = curve
            .first()
            .and_then(|e| e.sigma)
            .map(|s| format!("{s:.2}"))
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:<12} {:>5}  {:>5}  ",
            kind.display_name(),
            sigma,
            kind.distance_metric().display_name(),
        ));
        for r in REFERENCE_RJB {
            out.push_str(&format!("{:>9.2}", interpolate_at(rjb, curve, r)));
        }
        out.push('\n');
    }

    out
}

/// MMI at a reference distance, linearly interpolated on the grid.
///
/// Grids are strictly increasing (built by `math::linear_grid`/`log_grid`);
/// reference distances outside the grid clamp to the edge values.
fn interpolate_at(rjb: &[f64], curve: &[IntensityEstimate], r: f64) -> f64 {
    match rjb.iter().position(|&x| x >= r) {
        Some(0) => curve[0].mmi,
        Some(i) => {
            let (x0, x1) = (rjb[i - 1], rjb[i]);
            let (y0, y1) = (curve[i - 1].mmi, curve[i].mmi);
            let u = (r - x0) / (x1 - x0);
            y0 + u * (y1 - y0)
        }
        None => curve.last().map(|e| e.mmi).unwrap_or(f64::NAN),
    }
}

/// Format the DYFI-run summary (ingest stats + tally + histogram + top cells).
pub fn format_dyfi_summary(
    config: &DyfiConfig,
    loaded: &LoadedCells,
    tally: &ResponseTally,
    histogram: &BinHistogram,
    strongest: &[SurveyCell],
) -> String {
    let mut out = String::new();

    out.push_str("=== mmi - DYFI Intensity Classification ===\n");
    out.push_str(&format!("Input: {}\n", config.geojson_path.display()));
    out.push_str(&format!(
        "Features: {} read, {} used, {} skipped\n",
        loaded.features_read,
        loaded.cells.len(),
        loaded.cell_errors.len(),
    ));
    for err in &loaded.cell_errors {
        out.push_str(&format!("  - feature {}: {}\n", err.index, err.message));
    }
    out.push_str(&format!(
        "Responses: {} total | {} of {} cells plotted (nresp > {})\n",
        tally.total,
        tally.plotted.len(),
        loaded.cells.len(),
        config.min_responses,
    ));

    out.push_str("\nIntensity distribution (plotted cells):\n");
    let max_count = histogram.counts.iter().copied().max().unwrap_or(0).max(1);
    for (i, &count) in histogram.counts.iter().enumerate() {
        let bar_len = (count * 40).div_ceil(max_count);
        out.push_str(&format!(
            "  {:>4} {:>5}  {}\n",
            roman_label(i as u8 + 1),
            count,
            "#".repeat(if count == 0 { 0 } else { bar_len }),
        ));
    }

    if !strongest.is_empty() {
        out.push_str(&format!("\nStrongest {} cells:\n", strongest.len()));
        out.push_str("  centroid (lon, lat)      MMI   bin  nresp\n");
        for cell in strongest {
            let bin = bin_index(cell.intensity);
            out.push_str(&format!(
                "  ({:>9.4}, {:>8.4})  {:>5.2}  {:>4} {:>6}\n",
                cell.centroid.0,
                cell.centroid.1,
                cell.intensity,
                roman_label(bin),
                cell.nresp,
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EventScenario, ModelSpec};
    use crate::models::evaluate_curve;

    #[test]
    fn interpolation_hits_grid_points_exactly() {
        let mut s = EventScenario::new(5.9, 12.0);
        s.vs30 = Some(760.0);
        let rjb = crate::math::linear_grid(1.0, 200.0, 200);
        let rrup: Vec<f64> = rjb.iter().map(|&r| s.rrup_from_rjb(r)).collect();
        let curve = evaluate_curve(IpeKind::Aw07Ceus, &s, &rrup).unwrap();

        let i = 42;
        let got = interpolate_at(&rjb, &curve, rjb[i]);
        assert!((got - curve[i].mmi).abs() < 1e-9);
    }

    #[test]
    fn atten_summary_marks_absent_sigma() {
        let mut s = EventScenario::new(5.9, 12.0);
        s.vs30 = Some(760.0);
        let config = AttenConfig {
            scenario: s.clone(),
            models: ModelSpec::Leonard15,
            rjb_min: 1.0,
            rjb_max: 200.0,
            steps: 60,
            log_spaced: true,
            plot: false,
            plot_width: 80,
            plot_height: 20,
            export_csv: None,
        };
        let rjb = crate::math::log_grid(1.0, 200.0, 60);
        let rrup: Vec<f64> = rjb.iter().map(|&r| s.rrup_from_rjb(r)).collect();
        let curve = evaluate_curve(IpeKind::Leonard15, &s, &rrup).unwrap();
        let txt = format_atten_summary(&config, &rjb, &[(IpeKind::Leonard15, curve)]);
        assert!(txt.contains("L15 AU"), "{txt}");
        assert!(txt.contains("    -"), "sigma column should print '-': {txt}");
    }
}
