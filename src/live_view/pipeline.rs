//! Capture pipeline module
//!
//! Drives frames from a source through the integration engine on a background
//! thread and hands the result to the display through a single-slot cell.

mod capture;
mod latest_frame;
mod timing;


pub use capture::{CaptureHandle, CapturePipeline};
pub use latest_frame::LatestFrameCell;
pub use timing::{ProcessingStats, Timer};
