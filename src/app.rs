//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the attenuation or DYFI pipeline
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{AttenArgs, Command, DyfiArgs};
use crate::domain::{AttenConfig, DyfiConfig, EventScenario};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `mmi` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Atten(args) => handle_atten(args),
        Command::Dyfi(args) => handle_dyfi(args),
    }
}

fn handle_atten(args: AttenArgs) -> Result<(), AppError> {
    let config = atten_config_from_args(&args);
    let out = pipeline::run_atten(&config)?;

    println!(
        "{}",
        crate::report::format_atten_summary(&config, &out.rjb, &out.series)
    );

    if config.plot {
        let plot = crate::plot::render_atten_plot(
            &out.rjb,
            &out.series,
            config.plot_width,
            config.plot_height,
            config.log_spaced,
        );
        println!("{plot}");
    }

    if let Some(path) = &config.export_csv {
        crate::io::export::write_atten_csv(path, &out.rjb, &out.series)?;
    }

    Ok(())
}

fn handle_dyfi(args: DyfiArgs) -> Result<(), AppError> {
    let config = dyfi_config_from_args(&args);
    let out = pipeline::run_dyfi(&config)?;

    println!(
        "{}",
        crate::report::format_dyfi_summary(
            &config,
            &out.loaded,
            &out.tally,
            &out.histogram,
            &out.strongest,
        )
    );

    if let Some(path) = &config.export_csv {
        crate::io::export::write_cells_csv(path, &out.tally.plotted)?;
    }

    Ok(())
}

pub fn atten_config_from_args(args: &AttenArgs) -> AttenConfig {
    let scenario = EventScenario {
        mag: args.mag,
        depth_km: args.depth,
        vs30: Some(args.vs30),
        region: args.region,
        place: args.place.clone(),
        event_date: args.date,
        epicenter: None,
    };
    AttenConfig {
        scenario,
        models: args.model,
        rjb_min: args.rjb_min,
        rjb_max: args.rjb_max,
        steps: args.steps,
        log_spaced: !args.linear,
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export_csv: args.export.clone(),
    }
}

pub fn dyfi_config_from_args(args: &DyfiArgs) -> DyfiConfig {
    DyfiConfig {
        geojson_path: args.geojson.clone(),
        min_responses: args.min_responses,
        top_n: args.top,
        export_csv: args.export.clone(),
    }
}
