//! Command-line parsing for the intensity toolkit.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the modeling/classification code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{ModelSpec, Region};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "mmi", version, about = "Macroseismic intensity curves and DYFI classification")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare intensity-prediction equations over a distance grid.
    Atten(AttenArgs),
    /// Classify DYFI survey cells from a GeoJSON and summarize responses.
    Dyfi(DyfiArgs),
}

/// Options for the attenuation comparison.
#[derive(Debug, Parser, Clone)]
pub struct AttenArgs {
    /// Moment magnitude.
    #[arg(short = 'm', long, default_value_t = 5.9)]
    pub mag: f64,

    /// Focal depth (km).
    #[arg(short = 'd', long, default_value_t = 12.0)]
    pub depth: f64,

    /// Site Vs30 (m/s); selects the WWW14 CA coefficient branch.
    #[arg(long, default_value_t = 760.0)]
    pub vs30: f64,

    /// Regionalization tag echoed in summaries.
    #[arg(long, value_enum)]
    pub region: Option<Region>,

    /// Which model(s) to evaluate.
    #[arg(long, value_enum, default_value_t = ModelSpec::All)]
    pub model: ModelSpec,

    /// Minimum Joyner-Boore distance (km). Must be > 0 for a log grid.
    #[arg(long, default_value_t = 1.0)]
    pub rjb_min: f64,

    /// Maximum Joyner-Boore distance (km).
    #[arg(long, default_value_t = 510.0)]
    pub rjb_max: f64,

    /// Number of grid points.
    #[arg(long, default_value_t = 60)]
    pub steps: usize,

    /// Use a linearly spaced grid instead of the default log spacing.
    #[arg(long)]
    pub linear: bool,

    /// Event label for summaries (e.g. "Woods Point, VIC").
    #[arg(long)]
    pub place: Option<String>,

    /// Event date (YYYY-MM-DD) for summaries.
    #[arg(long)]
    pub date: Option<chrono::NaiveDate>,

    /// Render an ASCII plot in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export the curves to CSV (columns rjb,AW07_CEUS,...).
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Options for DYFI classification.
#[derive(Debug, Parser, Clone)]
pub struct DyfiArgs {
    /// DYFI aggregated-grid GeoJSON (e.g. dyfi_geo_10km.geojson).
    #[arg(value_name = "GEOJSON")]
    pub geojson: PathBuf,

    /// Cells must have strictly more responses than this to be plotted.
    #[arg(long, default_value_t = 0)]
    pub min_responses: u32,

    /// List the top-N strongest cells.
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    /// Export the plotted cells to CSV (centroid, bin, label, color, nresp).
    #[arg(long)]
    pub export: Option<PathBuf>,
}
