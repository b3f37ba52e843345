//! Calibration line state machine.
//!
//! `Idle → DrawingLine → LineComplete → AwaitingKnownLength → (commit) → Idle`.
//! Transitions are pure: each returns the next state and leaves the current
//! one untouched, so a failed commit simply keeps the caller on the old state.

use nalgebra::Point2;
use tracing::{debug, info, instrument};

use crate::live_view::calibration::known_length::KnownLength;
use crate::live_view::calibration::store::CalibrationStore;
use crate::live_view::calibration::types::{Calibration, CalibrationLine};
use crate::live_view::common::error::{Result, ViewerError};
use crate::live_view::geometry::{self, Size};
use crate::live_view::scale_bar::ScaleBarCalculator;
use crate::live_view::view::ViewTransform;

/// Pointer and UI input, with points already in image space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalibrationEvent {
    /// Starts a new line, replacing any line in progress
    PointerDown(Point2<f64>),
    PointerMoved(Point2<f64>),
    PointerUp(Point2<f64>),
    /// User opened the known-length prompt
    PromptKnownLength,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CalibrationState {
    #[default]
    Idle,
    /// Start captured, end follows the pointer
    DrawingLine(CalibrationLine),
    LineComplete(CalibrationLine),
    AwaitingKnownLength(CalibrationLine),
}

impl CalibrationState {
    pub fn name(&self) -> &'static str {
        match self {
            CalibrationState::Idle => "idle",
            CalibrationState::DrawingLine(_) => "drawing line",
            CalibrationState::LineComplete(_) => "line complete",
            CalibrationState::AwaitingKnownLength(_) => "awaiting known length",
        }
    }

    pub fn line(&self) -> Option<&CalibrationLine> {
        match self {
            CalibrationState::Idle => None,
            CalibrationState::DrawingLine(line)
            | CalibrationState::LineComplete(line)
            | CalibrationState::AwaitingKnownLength(line) => Some(line),
        }
    }

    /// Next state for `event`. Events that make no sense in the current state leave it as is.
    pub fn on_event(&self, event: CalibrationEvent) -> Self {
        use CalibrationEvent as E;
        use CalibrationState as S;

        let next = match (*self, event) {
            (_, E::Cancel) => S::Idle,
            (_, E::PointerDown(start)) => S::DrawingLine(CalibrationLine::starting_at(start)),
            (S::DrawingLine(line), E::PointerMoved(p)) => S::DrawingLine(CalibrationLine {
                end: Some(p),
                ..line
            }),
            (S::DrawingLine(line), E::PointerUp(p)) => {
                let done = CalibrationLine { end: Some(p), ..line };
                // a click without a drag leaves nothing to calibrate against
                match done.length_pixels() {
                    Some(len) if len > 0.0 => S::LineComplete(done),
                    _ => S::Idle,
                }
            }
            (S::LineComplete(line), E::PromptKnownLength) => S::AwaitingKnownLength(line),
            (state, _) => state,
        };

        if next.name() != self.name() {
            debug!(from = self.name(), to = next.name(), "Calibration state changed");
        }
        next
    }

    /// Converts the line and `known` length into a calibration, writes it to
    /// `store` and returns to `Idle`.
    ///
    /// Only valid while awaiting the known length. An unparseable length
    /// returns an error and writes nothing, so the caller stays where it is.
    #[instrument(skip(self, known, store))]
    pub fn commit<S: CalibrationStore + ?Sized>(
        &self,
        known: &KnownLength,
        camera_id: &str,
        width: usize,
        height: usize,
        store: &mut S,
    ) -> Result<(Self, Calibration)> {
        let CalibrationState::AwaitingKnownLength(line) = self else {
            return Err(ViewerError::InvalidTransition {
                from: self.name(),
                event: "commit",
            });
        };

        let microns = known.microns()?;
        let pixels = line.length_pixels().unwrap_or(0.0);
        let microns_per_pixel = ScaleBarCalculator::microns_per_pixel(pixels, microns);
        let calibration = Calibration::new(camera_id, width, height, microns_per_pixel)?;

        store.put(calibration.clone());
        info!(
            camera_id,
            width,
            height,
            microns_per_pixel,
            "Calibration committed"
        );
        Ok((CalibrationState::Idle, calibration))
    }
}

/// Maps a view-space pointer position into image space, clamped to the image.
pub fn pointer_to_image(
    view_point: Point2<f64>,
    transform: &ViewTransform,
    image: Size,
    view: Size,
) -> Point2<f64> {
    let p = transform.map_view_to_image(view_point, image, view);
    geometry::clamp_to_image(&p, image)
}
