//! Smoothing Error Types

use thiserror::Error;

/// Errors during smoothing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SmoothError {
    /// Window width of zero
    #[error("window width must be greater than zero")]
    ZeroWindow,

    /// Window wider than the series
    #[error("window width {window} exceeds series length {len}")]
    WindowTooLarge { window: usize, len: usize },
}
