//! Scale bar module
//!
//! Turns a microns-per-pixel calibration and the current zoom into a bar of
//! a human-friendly length and a sensible on-screen width.

mod calculator;
mod label;
pub mod types;


pub use calculator::ScaleBarCalculator;
pub use label::format_length;
pub use types::{ScaleBar, ScaleBarConfig, DEFAULT_NICE_LENGTHS};
