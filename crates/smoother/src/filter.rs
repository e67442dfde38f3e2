//! Streaming Moving Average Filter

use crate::error::SmoothError;
use tracing::trace;

/// Sliding window moving average for sample-by-sample smoothing
pub struct MovingAverageFilter {
    window: Vec<f64>,
    size: usize,
    position: usize,
    filled: bool,
}

impl MovingAverageFilter {
    /// Create a new filter averaging the last `size` samples
    pub fn new(size: usize) -> Result<Self, SmoothError> {
        if size == 0 {
            return Err(SmoothError::ZeroWindow);
        }
        Ok(Self {
            window: vec![0.0; size],
            size,
            position: 0,
            filled: false,
        })
    }

    /// Add a sample; returns the window mean once `size` samples have been seen
    pub fn push(&mut self, value: f64) -> Option<f64> {
        self.window[self.position] = value;
        self.position = (self.position + 1) % self.size;

        if self.position == 0 && !self.filled {
            trace!("Moving average window of {} filled", self.size);
            self.filled = true;
        }

        if !self.filled {
            return None;
        }

        // Summed fresh each time so a NaN only poisons the windows holding it
        Some(self.window.iter().sum::<f64>() / self.size as f64)
    }

    /// Window width
    pub fn window_size(&self) -> usize {
        self.size
    }

    /// Whether enough samples have been seen to produce output
    pub fn is_ready(&self) -> bool {
        self.filled
    }

    /// Reset the filter
    pub fn reset(&mut self) {
        self.window.fill(0.0);
        self.position = 0;
        self.filled = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moving_average::smooth;
    use ndarray::Array1;

    #[test]
    fn test_filter_warmup() {
        let mut filter = MovingAverageFilter::new(3).unwrap();

        assert_eq!(filter.push(1.0), None);
        assert_eq!(filter.push(2.0), None);
        assert!(!filter.is_ready());

        let result = filter.push(3.0).unwrap();
        assert!((result - 2.0).abs() < 1e-12);
        assert!(filter.is_ready());

        let result = filter.push(4.0).unwrap();
        assert!((result - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_filter_matches_batch() {
        let values = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0, 5.0, 3.0];
        let batch = smooth(&Array1::from(values.to_vec()), 4).unwrap();

        let mut filter = MovingAverageFilter::new(4).unwrap();
        let streamed: Vec<f64> = values.iter().filter_map(|&v| filter.push(v)).collect();

        assert_eq!(streamed.len(), batch.len());
        for (s, b) in streamed.iter().zip(batch.iter()) {
            assert!((s - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_filter_recovers_after_nan() {
        let mut filter = MovingAverageFilter::new(2).unwrap();
        filter.push(1.0);
        assert!(filter.push(f64::NAN).unwrap().is_nan());
        assert!(filter.push(3.0).unwrap().is_nan());

        let result = filter.push(5.0).unwrap();
        assert!((result - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_filter_reset() {
        let mut filter = MovingAverageFilter::new(2).unwrap();
        filter.push(10.0);
        filter.push(20.0);
        filter.reset();

        assert!(!filter.is_ready());
        assert_eq!(filter.push(1.0), None);
        assert_eq!(filter.window_size(), 2);
    }

    #[test]
    fn test_zero_window_rejected() {
        assert!(matches!(
            MovingAverageFilter::new(0),
            Err(SmoothError::ZeroWindow)
        ));
    }
}
