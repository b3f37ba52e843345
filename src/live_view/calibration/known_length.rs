//! Known feature lengths for calibration: fixed presets and free-text entry.

use crate::live_view::common::error::{Result, ViewerError};

const MICRONS_PER_MM: f64 = 1_000.0;
const MICRONS_PER_CM: f64 = 10_000.0;
const MICRONS_PER_INCH: f64 = 25_400.0;

/// Common bench references: SMD chip lengths and 0.1" header pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalibrationPreset {
    Chip0402,
    Chip0603,
    Chip0805,
    HeaderPitch,
}

impl CalibrationPreset {
    pub const ALL: [CalibrationPreset; 4] = [
        CalibrationPreset::Chip0402,
        CalibrationPreset::Chip0603,
        CalibrationPreset::Chip0805,
        CalibrationPreset::HeaderPitch,
    ];

    pub const fn microns(self) -> f64 {
        match self {
            CalibrationPreset::Chip0402 => 1_000.0,
            CalibrationPreset::Chip0603 => 1_600.0,
            CalibrationPreset::Chip0805 => 2_000.0,
            CalibrationPreset::HeaderPitch => 2_540.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CalibrationPreset::Chip0402 => "0402 (1.0 mm)",
            CalibrationPreset::Chip0603 => "0603 (1.6 mm)",
            CalibrationPreset::Chip0805 => "0805 (2.0 mm)",
            CalibrationPreset::HeaderPitch => "Header pitch (2.54 mm)",
        }
    }
}

/// What the user said the calibration line measures
#[derive(Debug, Clone, PartialEq)]
pub enum KnownLength {
    Preset(CalibrationPreset),
    /// Free text such as `"2.54"`, `"1600 um"` or `"0.1in"`
    Custom(String),
}

impl KnownLength {
    pub fn microns(&self) -> Result<f64> {
        match self {
            KnownLength::Preset(preset) => Ok(preset.microns()),
            KnownLength::Custom(text) => parse_length_microns(text),
        }
    }
}

/// Parses a positive decimal length with an optional unit suffix into microns.
///
/// Units: `µm`/`um`, `mm`, `cm`, `in`/`inch`/`"`. No unit means millimeters.
pub fn parse_length_microns(text: &str) -> Result<f64> {
    let unparseable = || ViewerError::UnparseableLength(text.to_string());

    let trimmed = text.trim();
    let split = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '+'))
        .unwrap_or(trimmed.len());
    let (number, unit) = trimmed.split_at(split);

    let value: f64 = number.parse().map_err(|_| unparseable())?;
    let scale = match unit.trim().to_lowercase().as_str() {
        "" | "mm" => MICRONS_PER_MM,
        "µm" | "μm" | "um" => 1.0,
        "cm" => MICRONS_PER_CM,
        "in" | "inch" | "inches" | "\"" => MICRONS_PER_INCH,
        _ => return Err(unparseable()),
    };

    let microns = value * scale;
    if microns.is_finite() && microns > 0.0 {
        Ok(microns)
    } else {
        Err(unparseable())
    }
}
