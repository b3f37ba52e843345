//! Calibration data types

use std::fmt;

use chrono::{DateTime, Utc};
use nalgebra::Point2;

use crate::live_view::common::error::{Result, ViewerError};
use crate::live_view::geometry;
use crate::live_view::scale_bar::format_length;

/// Identity of a calibration: one per camera and resolution
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CalibrationKey {
    pub camera_id: String,
    pub width: usize,
    pub height: usize,
}

impl CalibrationKey {
    pub fn new(camera_id: impl Into<String>, width: usize, height: usize) -> Self {
        Self {
            camera_id: camera_id.into(),
            width,
            height,
        }
    }
}

impl fmt::Display for CalibrationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}x{}", self.camera_id, self.width, self.height)
    }
}

/// A stored calibration. Replaced wholesale on recalibration.
#[derive(Debug, Clone, PartialEq)]
pub struct Calibration {
    pub camera_id: String,
    pub width: usize,
    pub height: usize,
    /// Always positive
    pub microns_per_pixel: f64,
    pub created_at: DateTime<Utc>,
}

impl Calibration {
    pub fn new(
        camera_id: impl Into<String>,
        width: usize,
        height: usize,
        microns_per_pixel: f64,
    ) -> Result<Self> {
        if !(microns_per_pixel.is_finite() && microns_per_pixel > 0.0) {
            return Err(ViewerError::NotCalibrated);
        }
        Ok(Self {
            camera_id: camera_id.into(),
            width,
            height,
            microns_per_pixel,
            created_at: Utc::now(),
        })
    }

    pub fn key(&self) -> CalibrationKey {
        CalibrationKey::new(self.camera_id.clone(), self.width, self.height)
    }
}

/// Line being drawn over a feature of known size, in image space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CalibrationLine {
    pub start: Option<Point2<f64>>,
    pub end: Option<Point2<f64>>,
}

impl CalibrationLine {
    pub fn starting_at(start: Point2<f64>) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Euclidean length in image pixels, once both ends are set.
    pub fn length_pixels(&self) -> Option<f64> {
        match (self.start, self.end) {
            (Some(a), Some(b)) => Some(geometry::distance(&a, &b)),
            _ => None,
        }
    }
}

/// Ruler between two image-space points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementLine {
    pub start: Point2<f64>,
    pub end: Point2<f64>,
}

impl MeasurementLine {
    pub fn new(start: Point2<f64>, end: Point2<f64>) -> Self {
        Self { start, end }
    }

    pub fn length_pixels(&self) -> f64 {
        geometry::distance(&self.start, &self.end)
    }

    /// `None` without a usable calibration.
    pub fn length_microns(&self, microns_per_pixel: f64) -> Option<f64> {
        (microns_per_pixel.is_finite() && microns_per_pixel > 0.0)
            .then(|| self.length_pixels() * microns_per_pixel)
    }

    pub fn label(&self, microns_per_pixel: f64) -> Option<String> {
        self.length_microns(microns_per_pixel).map(format_length)
    }

    /// Where the label goes.
    pub fn midpoint(&self) -> Point2<f64> {
        geometry::midpoint(&self.start, &self.end)
    }
}
