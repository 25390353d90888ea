//! Reporting utilities: bin histograms and strongest-cell rankings.

pub mod format;

pub use format::*;

use crate::classify::bin_index;
use crate::domain::SurveyCell;

/// Counts of cells per intensity bin (index 0 = bin I, index 9 = bin X).
#[derive(Debug, Clone, Default)]
pub struct BinHistogram {
    pub counts: [usize; 10],
}

impl BinHistogram {
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Histogram of classified intensities over a cell collection.
pub fn bin_histogram(cells: &[SurveyCell]) -> BinHistogram {
    let mut hist = BinHistogram::default();
    for cell in cells {
        hist.counts[bin_index(cell.intensity) as usize - 1] += 1;
    }
    hist
}

/// The top-N cells by observed intensity (ties keep input order).
pub fn rank_strongest_cells(cells: &[SurveyCell], top_n: usize) -> Vec<SurveyCell> {
    let mut sorted = cells.to_vec();
    sorted.sort_by(|a, b| {
        b.intensity
            .partial_cmp(&a.intensity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(top_n);
    sorted
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
    fn histogram_counts_by_bin() {
        let cells = vec![cell(1.2, 1), cell(4.6, 2), cell(5.4, 3), cell(11.0, 4)];
        let hist = bin_histogram(&cells);
        assert_eq!(hist.counts[0], 1); // 1.2 -> I
        assert_eq!(hist.counts[4], 2); // 4.6 and 5.4 -> V
        assert_eq!(hist.counts[9], 1); // 11.0 clamps -> X
        assert_eq!(hist.total(), 4);
    }

    #[test]
    fn strongest_cells_sorted_and_truncated() {
        let cells = vec![cell(3.0, 1), cell(6.5, 2), cell(5.0, 3)];
        let top = rank_strongest_cells(&cells, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].nresp, 2);
        assert_eq!(top[1].nresp, 3);
    }
}
