//! Pixel buffer types

use std::time::Duration;

use crate::live_view::common::error::{Result, ViewerError};

/// Every supported format packs three 8-bit color channels and one alpha byte.
pub const BYTES_PER_PIXEL: usize = 4;

/// Byte order of a packed pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelFormat {
    /// Blue, green, red, alpha (what most capture stacks deliver)
    #[default]
    Bgra8,
    /// Red, green, blue, alpha
    Rgba8,
}

impl PixelFormat {
    /// Byte offsets of the red, green and blue channels within a pixel.
    pub const fn color_offsets(self) -> [usize; 3] {
        match self {
            PixelFormat::Bgra8 => [2, 1, 0],
            PixelFormat::Rgba8 => [0, 1, 2],
        }
    }

    pub const fn alpha_offset(self) -> usize {
        3
    }
}

/// A captured or produced frame.
///
/// Immutable once built; ownership moves from the producer to its single consumer.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    format: PixelFormat,
    data: Vec<u8>,
    /// Capture time relative to the start of the session
    timestamp: Duration,
}

impl PixelBuffer {
    pub fn new(
        width: usize,
        height: usize,
        format: PixelFormat,
        data: Vec<u8>,
        timestamp: Duration,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ViewerError::InvalidDimensions(width, height));
        }
        let expected = width
            .checked_mul(height)
            .and_then(|px| px.checked_mul(BYTES_PER_PIXEL))
            .ok_or(ViewerError::InvalidDimensions(width, height))?;
        if data.len() != expected {
            return Err(ViewerError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            format,
            data,
            timestamp,
        })
    }

    /// Uniform frame with the given red, green and blue values and opaque alpha.
    pub fn filled(
        width: usize,
        height: usize,
        format: PixelFormat,
        rgb: [u8; 3],
        timestamp: Duration,
    ) -> Result<Self> {
        let mut pixel = [0u8; BYTES_PER_PIXEL];
        for (offset, value) in format.color_offsets().into_iter().zip(rgb) {
            pixel[offset] = value;
        }
        pixel[format.alpha_offset()] = u8::MAX;

        let data = pixel.repeat(width.saturating_mul(height));
        Self::new(width, height, format, data, timestamp)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn timestamp(&self) -> Duration {
        self.timestamp
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Red, green and blue values of the pixel at (x, y), if in bounds.
    pub fn rgb_at(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let base = (y * self.width + x) * BYTES_PER_PIXEL;
        let offsets = self.format.color_offsets();
        Some([
            self.data[base + offsets[0]],
            self.data[base + offsets[1]],
            self.data[base + offsets[2]],
        ])
    }

    pub fn alpha_at(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let base = (y * self.width + x) * BYTES_PER_PIXEL;
        Some(self.data[base + self.format.alpha_offset()])
    }
}
