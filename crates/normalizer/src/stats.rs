//! Missing-Value Aware Lane Statistics

use ndarray::ArrayView1;

/// Statistics of the non-missing samples in one lane of a series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneStatistics {
    /// Mean value (NaN when nothing is present)
    pub mean: f64,
    /// Population standard deviation (NaN when nothing is present)
    pub std_dev: f64,
    /// Number of samples that are not NaN
    pub present: usize,
}

impl LaneStatistics {
    /// Compute mean and standard deviation, skipping NaN samples
    pub fn compute(lane: ArrayView1<'_, f64>) -> Self {
        let (present, sum) = lane
            .iter()
            .filter(|v| !v.is_nan())
            .fold((0usize, 0.0), |(n, s), &v| (n + 1, s + v));

        if present == 0 {
            return Self {
                mean: f64::NAN,
                std_dev: f64::NAN,
                present,
            };
        }

        let n = present as f64;
        let mean = sum / n;

        let m2: f64 = lane
            .iter()
            .filter(|v| !v.is_nan())
            .map(|&v| {
                let d = v - mean;
                d * d
            })
            .sum();

        Self {
            mean,
            std_dev: (m2 / n).sqrt(),
            present,
        }
    }

    /// Whether every sample in the lane was missing
    pub fn is_empty(&self) -> bool {
        self.present == 0
    }
}
