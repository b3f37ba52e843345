//! Conversion between packed pixel buffers and per-channel float planes.
//!
//! The integration math only ever sees three flat `f32` planes, one sample
//! per pixel. Anything platform specific about pixel layout stays behind
//! [`ChannelCodec`].

use std::time::Duration;

use crate::live_view::common::error::Result;
use crate::live_view::frame::types::{PixelBuffer, PixelFormat, BYTES_PER_PIXEL};

pub trait ChannelCodec {
    /// Writes the red, green and blue samples of `frame` into `planes`.
    /// Each plane must hold exactly `frame.pixel_count()` samples.
    fn decode_into(&self, frame: &PixelBuffer, planes: [&mut [f32]; 3]);

    /// Builds a frame from channel sums divided by `divisor`, clamped to
    /// the 8-bit range, with alpha forced opaque.
    fn encode(
        &self,
        width: usize,
        height: usize,
        format: PixelFormat,
        sums: [&[f32]; 3],
        divisor: f32,
        timestamp: Duration,
    ) -> Result<PixelBuffer>;
}

/// Codec for the interleaved 4-bytes-per-pixel formats in [`PixelFormat`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PackedColorCodec;

impl ChannelCodec for PackedColorCodec {
    fn decode_into(&self, frame: &PixelBuffer, planes: [&mut [f32]; 3]) {
        let [r, g, b] = planes;
        let [ro, go, bo] = frame.format().color_offsets();

        for (i, px) in frame.data().chunks_exact(BYTES_PER_PIXEL).enumerate() {
            r[i] = px[ro] as f32;
            g[i] = px[go] as f32;
            b[i] = px[bo] as f32;
        }
    }

    fn encode(
        &self,
        width: usize,
        height: usize,
        format: PixelFormat,
        sums: [&[f32]; 3],
        divisor: f32,
        timestamp: Duration,
    ) -> Result<PixelBuffer> {
        let [r, g, b] = sums;
        let [ro, go, bo] = format.color_offsets();
        let ao = format.alpha_offset();
        let divisor = divisor.max(1.0);

        let mut data = vec![0u8; width * height * BYTES_PER_PIXEL];
        for (i, px) in data.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
            px[ro] = to_u8(r[i] / divisor);
            px[go] = to_u8(g[i] / divisor);
            px[bo] = to_u8(b[i] / divisor);
            px[ao] = u8::MAX;
        }

        PixelBuffer::new(width, height, format, data, timestamp)
    }
}

#[inline]
fn to_u8(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
