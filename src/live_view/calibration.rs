//! Calibration module
//!
//! Per-camera, per-resolution microns-per-pixel calibrations, the line-drawing
//! workflow that produces them, and measurement lines that consume them.

mod known_length;
mod store;
pub mod types;
mod workflow;


pub use known_length::{parse_length_microns, CalibrationPreset, KnownLength};
pub use store::{CalibrationStore, InMemoryCalibrationStore};
pub use types::{Calibration, CalibrationKey, CalibrationLine, MeasurementLine};
pub use workflow::{pointer_to_image, CalibrationEvent, CalibrationState};
