//! Moving Average Smoothing
//!
//! Fixed-window moving average for 1-D time series, in batch and streaming form.

mod error;
mod filter;
mod moving_average;

pub use error::SmoothError;
pub use filter::MovingAverageFilter;
pub use moving_average::smooth;
