//! Z-Score Normalization
//!
//! Dimension-aware z-score normalization for time series that may contain
//! missing (NaN) values.

mod error;
mod normalizer;
mod stats;
mod table;

pub use error::NormalizeError;
pub use normalizer::{normalize, NormalizeConfig, ZScoreNormalizer, STD_EPSILON};
pub use stats::LaneStatistics;
pub use table::{Column, Table};
