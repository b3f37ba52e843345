use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewerError {
    #[error("Invalid frame dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Unsupported integration level: {0} (expected 1, 2, 4, 8 or 16)")]
    UnsupportedLevel(u32),

    #[error("Failed to allocate integration buffers for {width}x{height} at level {level}")]
    AllocationFailed { width: usize, height: usize, level: usize },

    #[error("Frame {width}x{height} exceeds maximum dimension {max}")]
    FrameTooLarge { width: usize, height: usize, max: usize },

    #[error("Unparseable length: {0:?}")]
    UnparseableLength(String),

    #[error("Invalid microns-per-pixel scale")]
    NotCalibrated,

    #[error("Cannot apply {event} while {from}")]
    InvalidTransition { from: &'static str, event: &'static str },
}

pub type Result<T> = std::result::Result<T, ViewerError>;
