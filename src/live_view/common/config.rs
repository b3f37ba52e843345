//! Viewer configuration types

use crate::live_view::integration::IntegrationLevel;
use crate::live_view::scale_bar::ScaleBarConfig;

/// Largest frame edge accepted by default. Covers 8K sensors.
pub const DEFAULT_MAX_FRAME_DIMENSION: usize = 8192;

/// Configuration for the live view
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Number of frames averaged per output frame
    pub integration_level: IntegrationLevel,
    /// Whether incoming frames are checked against `max_frame_dimension`
    pub validate_dimensions: bool,
    /// Largest accepted frame width or height.
    /// Integration buffers scale with level × width × height, so this bounds memory use.
    pub max_frame_dimension: Option<usize>,
    /// Multiplicative step used by the zoom in / zoom out helpers
    pub zoom_step: f64,
    /// Nice lengths and on-screen band used for the scale bar
    pub scale_bar: ScaleBarConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            integration_level: IntegrationLevel::X1,
            validate_dimensions: true,
            max_frame_dimension: Some(DEFAULT_MAX_FRAME_DIMENSION),
            zoom_step: 1.25,
            scale_bar: ScaleBarConfig::default(),
        }
    }
}

impl ViewerConfig {
    pub fn builder() -> ViewerConfigBuilder {
        ViewerConfigBuilder::default()
    }
}

/// Builder for ViewerConfig
#[derive(Default)]
pub struct ViewerConfigBuilder {
    integration_level: Option<IntegrationLevel>,
    validate_dimensions: Option<bool>,
    max_frame_dimension: Option<Option<usize>>,
    zoom_step: Option<f64>,
    scale_bar: Option<ScaleBarConfig>,
}

impl ViewerConfigBuilder {
    pub fn integration_level(mut self, level: IntegrationLevel) -> Self {
        self.integration_level = Some(level);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_frame_dimension(mut self, max: Option<usize>) -> Self {
        self.max_frame_dimension = Some(max);
        self
    }

    pub fn zoom_step(mut self, step: f64) -> Self {
        self.zoom_step = Some(step);
        self
    }

    pub fn scale_bar(mut self, scale_bar: ScaleBarConfig) -> Self {
        self.scale_bar = Some(scale_bar);
        self
    }

    pub fn build(self) -> ViewerConfig {
        let default = ViewerConfig::default();
        ViewerConfig {
            integration_level: self.integration_level.unwrap_or(default.integration_level),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_frame_dimension: self.max_frame_dimension.unwrap_or(default.max_frame_dimension),
            zoom_step: self.zoom_step.unwrap_or(default.zoom_step),
            scale_bar: self.scale_bar.unwrap_or(default.scale_bar),
        }
    }
}
