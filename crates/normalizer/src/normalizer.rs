//! Dimension-Aware Z-Score Normalization

use crate::error::NormalizeError;
use crate::stats::LaneStatistics;
use crate::table::Table;
use ndarray::{Array, Array2, ArrayBase, Axis, Data, Dimension, RemoveAxis};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Added to every standard deviation before dividing, so constant
/// variables normalize to zero instead of dividing by zero
pub const STD_EPSILON: f64 = 1e-7;

/// Normalization configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Index of the time axis; statistics are reduced along it
    pub axis: usize,
    /// Denominator offset added to the standard deviation
    pub epsilon: f64,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            axis: 0,
            epsilon: STD_EPSILON,
        }
    }
}

/// Z-score normalizer that ignores missing values when estimating
/// per-variable mean and standard deviation
#[derive(Debug, Clone, Default)]
pub struct ZScoreNormalizer {
    config: NormalizeConfig,
}

impl ZScoreNormalizer {
    /// Create a new normalizer with given config
    pub fn new(config: NormalizeConfig) -> Self {
        Self { config }
    }

    /// Get the active configuration
    pub fn config(&self) -> &NormalizeConfig {
        &self.config
    }

    fn check_axis(&self, ndim: usize) -> Result<Axis, NormalizeError> {
        let axis = self.config.axis;
        if axis >= ndim {
            Err(NormalizeError::AxisOutOfRange { axis, ndim })
        } else {
            Ok(Axis(axis))
        }
    }

    /// Normalize every lane along the time axis to zero mean and unit
    /// standard deviation. NaN inputs stay NaN in the output.
    pub fn normalize<S, D>(&self, series: &ArrayBase<S, D>) -> Result<Array<f64, D>, NormalizeError>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        let axis = self.check_axis(series.ndim())?;

        debug!(
            "Normalizing series of shape {:?} along axis {}",
            series.shape(),
            axis.index()
        );

        let mut output = series.to_owned();
        let mut empty_lanes = 0usize;

        for mut lane in output.lanes_mut(axis) {
            let stats = LaneStatistics::compute(lane.view());
            if stats.is_empty() {
                empty_lanes += 1;
            }
            let scale = stats.std_dev + self.config.epsilon;
            lane.mapv_inplace(|v| (v - stats.mean) / scale);
        }

        if empty_lanes > 0 {
            warn!(
                "{} lane(s) along axis {} contain only missing values",
                empty_lanes,
                axis.index()
            );
        }

        Ok(output)
    }

    /// Per-lane statistics used by [`normalize`](Self::normalize), one for
    /// every position perpendicular to the time axis
    pub fn statistics<S, D>(
        &self,
        series: &ArrayBase<S, D>,
    ) -> Result<Array<LaneStatistics, D::Smaller>, NormalizeError>
    where
        S: Data<Elem = f64>,
        D: RemoveAxis,
    {
        let axis = self.check_axis(series.ndim())?;
        Ok(series.map_axis(axis, LaneStatistics::compute))
    }

    /// Normalize a table as a plain rows × columns array. Column labels are
    /// not carried into the output.
    pub fn normalize_table(&self, table: &Table) -> Result<Array2<f64>, NormalizeError> {
        debug!(
            "Converting table with {} rows and {} columns",
            table.nrows(),
            table.ncols()
        );
        self.normalize(&table.to_array())
    }
}

/// Z-score normalize `series` along `axis` with the default epsilon
pub fn normalize<S, D>(series: &ArrayBase<S, D>, axis: usize) -> Result<Array<f64, D>, NormalizeError>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    ZScoreNormalizer::new(NormalizeConfig {
        axis,
        ..NormalizeConfig::default()
    })
    .normalize(series)
}
