//! Intensity classification: ordinal bins, the MMI color table, and response
//! aggregation over DYFI survey cells.
//!
//! The bin/color mapping is a fixed lookup invariant across the whole tool:
//! index 1 (MMI I) is pure white, index 10 (MMI X) the darkest red. Observed
//! or predicted intensities outside [1, 10] clamp at the boundary rather than
//! fail, since DYFI feeds occasionally carry values slightly past the scale.

use serde::{Deserialize, Serialize};

use crate::domain::SurveyCell;

/// An RGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// `#RRGGBB` form for HTML/interactive-map consumers.
    pub fn hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8
        )
    }
}

/// The 10-entry MMI color table, bin 1 (white) through bin 10 (dark red).
pub const MMI_COLORS: [Rgb; 10] = [
    Rgb::from_u8(255, 255, 255), // I
    Rgb::from_u8(239, 242, 255), // II
    Rgb::from_u8(176, 217, 255), // III
    Rgb::from_u8(136, 249, 255), // IV
    Rgb::from_u8(122, 255, 147), // V
    Rgb::from_u8(255, 241, 0),   // VI
    Rgb::from_u8(255, 172, 0),   // VII
    Rgb::from_u8(255, 36, 0),    // VIII
    Rgb::from_u8(200, 0, 0),     // IX
    Rgb::from_u8(164, 0, 0),     // X
];

/// Roman-numeral labels for bins 1..=10, in order.
pub const ROMAN_LABELS: [&str; 10] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

/// Ordinal display bin for a continuous intensity, in [1, 10].
///
/// Rounds half away from zero (`f64::round`, so 5.5 -> VI) and clamps to the
/// scale; NaN clamps to the lowest bin. The loader rejects non-finite
/// observed intensities, so that case only arises from direct library misuse.
pub fn bin_index(intensity: f64) -> u8 {
    if intensity.is_nan() {
        return 1;
    }
    intensity.round().clamp(1.0, 10.0) as u8
}

/// Display color for a continuous intensity (clamped, never fails).
pub fn color_for(intensity: f64) -> Rgb {
    MMI_COLORS[bin_index(intensity) as usize - 1]
}

/// Roman-numeral label for a bin index from `bin_index`.
pub fn roman_label(bin: u8) -> &'static str {
    ROMAN_LABELS[(bin.clamp(1, 10) - 1) as usize]
}

/// Result of aggregating survey responses over a cell collection.
#[derive(Debug, Clone)]
pub struct ResponseTally {
    /// Responses summed over ALL cells, including those below the filter.
    pub total: u64,
    /// Cells with strictly more than `min_responses` reports, input order.
    pub plotted: Vec<SurveyCell>,
}

/// Sum responses across all cells and select the plottable subset.
///
/// The total deliberately counts every cell while the plotted subset applies
/// the strict `nresp > min_responses` filter; the map annotation reports all
/// responses received even when sparsely-reported cells are not drawn.
pub fn aggregate_responses(cells: &[SurveyCell], min_responses: u32) -> ResponseTally {
    let mut total: u64 = 0;
    let mut plotted = Vec::new();
    for cell in cells {
        if cell.nresp > min_responses {
            plotted.push(cell.clone());
        }
        total += u64::from(cell.nresp);
    }
    ResponseTally { total, plotted }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(intensity: f64, nresp: u32) -> SurveyCell {
        SurveyCell {
            boundary: vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)],
            centroid: (0.5, 0.5),
            intensity,
            nresp,
        }
    }

    #[test]
    fn bin_index_clamps_at_both_ends() {
        assert_eq!(bin_index(0.5), 1);
        assert_eq!(bin_index(-3.0), 1);
        assert_eq!(bin_index(10.6), 10);
        assert_eq!(bin_index(42.0), 10);
    }

    #[test]
    fn bin_index_rounds_half_away_from_zero() {
        assert_eq!(bin_index(5.5), 6);
        assert_eq!(bin_index(5.49), 5);
        assert_eq!(bin_index(2.5), 3);
    }

    #[test]
    fn bin_index_is_idempotent() {
        for i in 0..120 {
            let x = i as f64 / 10.0;
            let once = bin_index(x);
            assert_eq!(bin_index(f64::from(once)), once, "x = {x}");
        }
    }

    #[test]
    fn bin_index_tolerates_non_finite() {
        assert_eq!(bin_index(f64::NAN), 1);
        assert_eq!(bin_index(f64::INFINITY), 10);
        assert_eq!(bin_index(f64::NEG_INFINITY), 1);
    }

    #[test]
    fn color_endpoints() {
        let white = color_for(1.0);
        assert_eq!((white.r, white.g, white.b), (1.0, 1.0, 1.0));
        assert_eq!(color_for(10.0), MMI_COLORS[9]);
        // Out-of-range clamps instead of failing.
        assert_eq!(color_for(0.0), MMI_COLORS[0]);
        assert_eq!(color_for(11.0), MMI_COLORS[9]);
    }

    #[test]
    fn hex_palette_matches_interactive_map() {
        assert_eq!(MMI_COLORS[0].hex(), "#FFFFFF");
        assert_eq!(MMI_COLORS[5].hex(), "#FFF100");
        assert_eq!(MMI_COLORS[9].hex(), "#A40000");
    }

    #[test]
    fn roman_labels_cover_the_scale() {
        assert_eq!(roman_label(1), "I");
        assert_eq!(roman_label(10), "X");
        assert_eq!(roman_label(bin_index(6.2)), "VI");
    }

    #[test]
    fn total_counts_all_cells_but_plotted_filters_strictly() {
        let cells = vec![cell(4.0, 5), cell(6.0, 15)];
        let tally = aggregate_responses(&cells, 10);
        assert_eq!(tally.total, 20);
        assert_eq!(tally.plotted.len(), 1);
        assert_eq!(tally.plotted[0].nresp, 15);
    }

    #[test]
    fn filter_is_strictly_greater_than() {
        let cells = vec![cell(4.0, 10), cell(5.0, 11)];
        let tally = aggregate_responses(&cells, 10);
        assert_eq!(tally.total, 21);
        // nresp == min_responses is excluded.
        assert_eq!(tally.plotted.len(), 1);
        assert_eq!(tally.plotted[0].nresp, 11);
    }

    #[test]
    fn empty_input_is_fine() {
        let tally = aggregate_responses(&[], 0);
        assert_eq!(tally.total, 0);
        assert!(tally.plotted.is_empty());
    }
}
