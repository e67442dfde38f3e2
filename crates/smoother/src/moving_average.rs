//! Batch Moving Average

use crate::error::SmoothError;
use ndarray::{Array1, ArrayBase, Data, Ix1};
use tracing::{debug, trace};

/// Simple moving average over every full window of `window` samples.
///
/// Returns `len - window + 1` points where `output[i]` is the mean of
/// `series[i..i + window]`. Windows never overhang the series boundary, and a
/// NaN sample turns every window that covers it into NaN.
pub fn smooth<S>(series: &ArrayBase<S, Ix1>, window: usize) -> Result<Array1<f64>, SmoothError>
where
    S: Data<Elem = f64>,
{
    let len = series.len();
    if window == 0 {
        return Err(SmoothError::ZeroWindow);
    }
    if window > len {
        return Err(SmoothError::WindowTooLarge { window, len });
    }

    debug!("Smoothing {} samples with window {}", len, window);

    let width = window as f64;
    let smoothed: Array1<f64> = series
        .windows(window)
        .into_iter()
        .map(|w| w.sum() / width)
        .collect();

    trace!("Produced {} smoothed points", smoothed.len());
    Ok(smoothed)
}
