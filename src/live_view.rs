//! Live view module
//!
//! This module provides the numerical core of the microscope viewer: frame
//! integration, view geometry, scale bars and calibration, plus the capture
//! and display plumbing that connects them.

pub mod common;
pub mod frame;
pub mod integration;
pub mod geometry;
pub mod view;
pub mod scale_bar;
pub mod calibration;
pub mod pipeline;
pub mod display;

pub use common::{
    ViewerError,
    Result,
    ViewerConfig,
    ViewerConfigBuilder,
};

pub use frame::{
    PixelBuffer,
    PixelFormat,
    ChannelCodec,
    PackedColorCodec,
    FrameSource,
    SyntheticFrameSource,
};

pub use integration::{
    IntegrationEngine,
    IntegrationLevel,
};

pub use geometry::Size;

pub use view::{
    Rotation,
    ViewTransform,
    MIN_ZOOM,
    MAX_ZOOM,
};

pub use scale_bar::{
    ScaleBar,
    ScaleBarCalculator,
    ScaleBarConfig,
    format_length,
};

pub use calibration::{
    Calibration,
    CalibrationKey,
    CalibrationLine,
    CalibrationStore,
    InMemoryCalibrationStore,
    CalibrationState,
    CalibrationEvent,
    CalibrationPreset,
    KnownLength,
    MeasurementLine,
    parse_length_microns,
    pointer_to_image,
};

pub use pipeline::{
    CapturePipeline,
    CaptureHandle,
    LatestFrameCell,
    ProcessingStats,
};

pub use display::FrameDisplay;
