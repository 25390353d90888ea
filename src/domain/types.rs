//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during model evaluation
//! - exported to CSV/JSON
//! - reloaded later for plotting or comparisons

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Regionalization tag for models with region-specific coefficients.
///
/// The set is closed on purpose: WWW14 only publishes coefficients for
/// California and for central/eastern US conditions, and silently falling back
/// to either would misattribute coefficients. Anything else must be rejected
/// before it reaches a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    /// California (active crustal).
    Ca,
    /// Central and eastern United States (stable continental).
    Ceus,
}

impl Region {
    pub fn display_name(self) -> &'static str {
        match self {
            Region::Ca => "CA",
            Region::Ceus => "CEUS",
        }
    }
}

/// Site stiffness class derived from Vs30.
///
/// WWW14's California coefficients split at Vs30 = 760 m/s (the NEHRP B/C
/// boundary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteClass {
    /// Vs30 >= 760 m/s.
    Rock,
    /// Vs30 < 760 m/s.
    Soil,
}

impl SiteClass {
    /// Vs30 threshold (m/s) separating the rock and soil coefficient sets.
    pub const VS30_ROCK_THRESHOLD: f64 = 760.0;

    pub fn from_vs30(vs30: f64) -> Self {
        if vs30 >= Self::VS30_ROCK_THRESHOLD {
            SiteClass::Rock
        } else {
            SiteClass::Soil
        }
    }
}

/// Source-to-site distance conventions.
///
/// Every IPE is regressed against one specific convention and the formulas are
/// NOT interchangeable across conventions: feeding an epicentral distance to a
/// rupture-distance model biases the prediction. `IpeKind::distance_metric`
/// documents what each model expects; callers own the conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Closest distance to the rupture plane (Rrup).
    Rupture,
    /// Closest horizontal distance to the surface projection of the rupture (Rjb).
    JoynerBoore,
    /// Distance to the hypocenter (Rhypo).
    Hypocentral,
    /// Horizontal distance to the epicenter (Repi).
    Epicentral,
}

impl DistanceMetric {
    pub fn display_name(self) -> &'static str {
        match self {
            DistanceMetric::Rupture => "Rrup",
            DistanceMetric::JoynerBoore => "Rjb",
            DistanceMetric::Hypocentral => "Rhypo",
            DistanceMetric::Epicentral => "Repi",
        }
    }
}

/// Concrete intensity-prediction-equation variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IpeKind {
    /// Atkinson & Wald (2007), central/eastern US coefficients.
    Aw07Ceus,
    /// Atkinson & Wald (2007), California coefficients.
    Aw07Ca,
    /// Leonard (2015), Australian regression.
    Leonard15,
    /// Worden, Wald & Worden (2014), California (site-dependent).
    Www14Ca,
    /// Worden, Wald & Worden (2014), central/eastern US.
    Www14Ceus,
}

impl IpeKind {
    /// Every variant, in the order the original comparison plots them.
    pub const ALL: [IpeKind; 5] = [
        IpeKind::Aw07Ceus,
        IpeKind::Aw07Ca,
        IpeKind::Leonard15,
        IpeKind::Www14Ca,
        IpeKind::Www14Ceus,
    ];

    /// Human-readable label for legends and terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            IpeKind::Aw07Ceus => "AW07 CEUS",
            IpeKind::Aw07Ca => "AW07 CA",
            IpeKind::Leonard15 => "L15 AU",
            IpeKind::Www14Ca => "WWW14 CA",
            IpeKind::Www14Ceus => "WWW14 CEUS",
        }
    }

    /// Column label used in the attenuation CSV export.
    pub fn csv_label(self) -> &'static str {
        match self {
            IpeKind::Aw07Ceus => "AW07_CEUS",
            IpeKind::Aw07Ca => "AW07_CA",
            IpeKind::Leonard15 => "L15_AU",
            IpeKind::Www14Ca => "WWW14_CA",
            IpeKind::Www14Ceus => "WWW14_CEUS",
        }
    }

    /// The distance convention this model was regressed against.
    pub fn distance_metric(self) -> DistanceMetric {
        // All five variants here take rupture distance; the enum exists so
        // future Rhypo/Repi models declare their convention instead of
        // relying on callers reading the paper.
        match self {
            IpeKind::Aw07Ceus
            | IpeKind::Aw07Ca
            | IpeKind::Leonard15
            | IpeKind::Www14Ca
            | IpeKind::Www14Ceus => DistanceMetric::Rupture,
        }
    }
}

/// Which model(s) to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ModelSpec {
    All,
    Aw07Ceus,
    Aw07Ca,
    Leonard15,
    Www14Ca,
    Www14Ceus,
}

impl ModelSpec {
    /// Expand the spec into the concrete model list, preserving plot order.
    pub fn kinds(self) -> Vec<IpeKind> {
        match self {
            ModelSpec::All => IpeKind::ALL.to_vec(),
            ModelSpec::Aw07Ceus => vec![IpeKind::Aw07Ceus],
            ModelSpec::Aw07Ca => vec![IpeKind::Aw07Ca],
            ModelSpec::Leonard15 => vec![IpeKind::Leonard15],
            ModelSpec::Www14Ca => vec![IpeKind::Www14Ca],
            ModelSpec::Www14Ceus => vec![IpeKind::Www14Ceus],
        }
    }
}

/// Earthquake scenario inputs, passed explicitly into every evaluation.
///
/// There is deliberately no ambient "current event": the same library call
/// must work for any earthquake, so everything event-specific travels in this
/// struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventScenario {
    /// Moment magnitude.
    pub mag: f64,
    /// Focal depth (km, >= 0).
    pub depth_km: f64,
    /// Site stiffness proxy (m/s). Required by the WWW14 CA branch.
    pub vs30: Option<f64>,
    /// Regionalization tag for region-branching models.
    pub region: Option<Region>,

    /// Optional labeling metadata (summaries and export headers only).
    pub place: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub epicenter: Option<(f64, f64)>,
}

impl EventScenario {
    pub fn new(mag: f64, depth_km: f64) -> Self {
        Self {
            mag,
            depth_km,
            vs30: None,
            region: None,
            place: None,
            event_date: None,
            epicenter: None,
        }
    }

    /// Rupture distance for a given Joyner-Boore distance, treating the focal
    /// depth as the vertical offset: `rrup = sqrt(rjb^2 + depth^2)`.
    ///
    /// This is the point-source approximation the comparison plots use to put
    /// all models on a common Rjb axis.
    pub fn rrup_from_rjb(&self, rjb: f64) -> f64 {
        (rjb * rjb + self.depth_km * self.depth_km).sqrt()
    }
}

/// A model's point estimate of macroseismic intensity.
///
/// `sigma` is the model's published aleatory uncertainty. Leonard (2015) does
/// not publish one for this functional form, so it is absent there rather
/// than invented.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntensityEstimate {
    pub mmi: f64,
    pub sigma: Option<f64>,
}

/// One DYFI aggregated grid cell.
///
/// Loaded once from GeoJSON and read-only afterward. `boundary` is the
/// exterior ring as (lon, lat) pairs; the first vertex implicitly closes to
/// the last.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyCell {
    pub boundary: Vec<(f64, f64)>,
    pub centroid: (f64, f64),
    /// Survey-derived intensity ("intensityFine"), not a model prediction.
    pub intensity: f64,
    /// Number of felt reports aggregated into this cell.
    pub nresp: u32,
}

/// Configuration for an attenuation-comparison run.
#[derive(Debug, Clone)]
pub struct AttenConfig {
    pub scenario: EventScenario,
    pub models: ModelSpec,

    /// Joyner-Boore distance grid bounds (km).
    pub rjb_min: f64,
    pub rjb_max: f64,
    pub steps: usize,
    /// Log-spaced grid (the published comparison uses a semilog-x axis).
    pub log_spaced: bool,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_csv: Option<PathBuf>,
}

/// Configuration for a DYFI classification run.
#[derive(Debug, Clone)]
pub struct DyfiConfig {
    pub geojson_path: PathBuf,
    /// Cells must have strictly more responses than this to be plotted.
    pub min_responses: u32,
    /// How many of the strongest cells to list in the summary.
    pub top_n: usize,
    pub export_csv: Option<PathBuf>,
}
