//! Shared pipeline logic used by the CLI front-end.
//!
//! Keeping this in one place avoids duplicating the core workflows:
//!
//! - atten: distance grid -> IPE curves -> summary/plot/export
//! - dyfi:  GeoJSON -> cells -> tally/histogram/rankings -> summary/export
//!
//! The CLI can then focus on presentation (printing and file writing).

use rayon::prelude::*;

use crate::classify::{ResponseTally, aggregate_responses};
use crate::domain::{AttenConfig, DyfiConfig, IntensityEstimate, IpeKind, SurveyCell};
use crate::error::AppError;
use crate::io::geojson::{LoadedCells, load_survey_cells};
use crate::math::{linear_grid, log_grid};
use crate::models::evaluate_curve;
use crate::report::{BinHistogram, bin_histogram, rank_strongest_cells};

/// All computed outputs of an `mmi atten` run.
#[derive(Debug, Clone)]
pub struct AttenOutput {
    /// The Joyner-Boore distance grid (km), as plotted/exported.
    pub rjb: Vec<f64>,
    /// One curve per model, in plot order, each the grid's length.
    pub series: Vec<(IpeKind, Vec<IntensityEstimate>)>,
}

/// All computed outputs of an `mmi dyfi` run.
#[derive(Debug, Clone)]
pub struct DyfiOutput {
    pub loaded: LoadedCells,
    pub tally: ResponseTally,
    pub histogram: BinHistogram,
    pub strongest: Vec<SurveyCell>,
}

/// Evaluate the configured models over the configured distance grid.
///
/// Models are independent, so the sweep runs in parallel per model; the
/// output preserves the configured model order and, within each curve, the
/// grid order.
pub fn run_atten(config: &AttenConfig) -> Result<AttenOutput, AppError> {
    if !(config.rjb_min.is_finite() && config.rjb_max.is_finite())
        || config.rjb_min < 0.0
        || config.rjb_max <= config.rjb_min
    {
        return Err(AppError::invalid(format!(
            "Bad distance range: [{}, {}] km",
            config.rjb_min, config.rjb_max
        )));
    }
    if config.log_spaced && config.rjb_min <= 0.0 {
        return Err(AppError::invalid(
            "A log-spaced grid needs rjb-min > 0 (use --linear for a grid from 0)",
        ));
    }

    let rjb = if config.log_spaced {
        log_grid(config.rjb_min, config.rjb_max, config.steps)
    } else {
        linear_grid(config.rjb_min, config.rjb_max, config.steps)
    };

    // All models here take rupture distance; put them on the common rjb axis
    // through the point-source depth conversion.
    let rrup: Vec<f64> = rjb.iter().map(|&r| config.scenario.rrup_from_rjb(r)).collect();

    let series: Vec<(IpeKind, Vec<IntensityEstimate>)> = config
        .models
        .kinds()
        .into_par_iter()
        .map(|kind| Ok((kind, evaluate_curve(kind, &config.scenario, &rrup)?)))
        .collect::<Result<_, AppError>>()?;

    Ok(AttenOutput { rjb, series })
}

/// Load, tally, and classify DYFI survey cells.
pub fn run_dyfi(config: &DyfiConfig) -> Result<DyfiOutput, AppError> {
    let loaded = load_survey_cells(&config.geojson_path)?;
    let tally = aggregate_responses(&loaded.cells, config.min_responses);
    let histogram = bin_histogram(&tally.plotted);
    let strongest = rank_strongest_cells(&tally.plotted, config.top_n);

    Ok(DyfiOutput {
        loaded,
        tally,
        histogram,
        strongest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EventScenario, ModelSpec};

    fn config(models: ModelSpec) -> AttenConfig {
        let mut scenario = EventScenario::new(5.9, 12.0);
        scenario.vs30 = Some(760.0);
        AttenConfig {
            scenario,
            models,
            rjb_min: 1.0,
            rjb_max: 510.0,
            steps: 60,
            log_spaced: true,
            plot: false,
            plot_width: 80,
            plot_height: 20,
            export_csv: None,
        }
    }

    #[test]
    fn atten_run_produces_one_curve_per_model_in_order() {
        let out = run_atten(&config(ModelSpec::All)).unwrap();
        assert_eq!(out.rjb.len(), 60);
        assert_eq!(out.series.len(), 5);
        let kinds: Vec<IpeKind> = out.series.iter().map(|(k, _)| *k).collect();
        assert_eq!(kinds, IpeKind::ALL.to_vec());
        for (_, curve) in &out.series {
            assert_eq!(curve.len(), out.rjb.len());
        }
    }

    #[test]
    fn log_grid_from_zero_is_rejected() {
        let mut c = config(ModelSpec::All);
        c.rjb_min = 0.0;
        let err = run_atten(&c).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn linear_grid_from_zero_is_fine() {
        let mut c = config(ModelSpec::Aw07Ceus);
        c.rjb_min = 0.0;
        c.log_spaced = false;
        let out = run_atten(&c).unwrap();
        assert!((out.rjb[0] - 0.0).abs() < 1e-12);
        assert!(out.series[0].1[0].mmi.is_finite());
    }

    #[test]
    fn missing_geojson_is_an_input_error() {
        let c = DyfiConfig {
            geojson_path: "/no/such/file.geojson".into(),
            min_responses: 0,
            top_n: 5,
            export_csv: None,
        };
        let err = run_dyfi(&c).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
