//! Test-pattern frame source.
//!
//! Produces a static diagonal gradient with seeded per-pixel sensor noise, so
//! frame integration has something to suppress. Used by the demo binary and
//! the benchmarks in place of a real camera.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::live_view::common::error::{Result, ViewerError};
use crate::live_view::frame::source::FrameSource;
use crate::live_view::frame::types::{PixelBuffer, PixelFormat, BYTES_PER_PIXEL};

pub struct SyntheticFrameSource {
    width: usize,
    height: usize,
    format: PixelFormat,
    noise_amplitude: u8,
    frame_interval: Duration,
    /// Sleep between frames to mimic a real capture rate
    pace: bool,
    max_frames: Option<u64>,
    frames_emitted: u64,
    rng: StdRng,
}

impl SyntheticFrameSource {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ViewerError::InvalidDimensions(width, height));
        }
        Ok(Self {
            width,
            height,
            format: PixelFormat::default(),
            noise_amplitude: 12,
            frame_interval: Duration::from_millis(33),
            pace: false,
            max_frames: None,
            frames_emitted: 0,
            rng: StdRng::seed_from_u64(0x5eed),
        })
    }

    pub fn with_format(mut self, format: PixelFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_noise(mut self, amplitude: u8) -> Self {
        self.noise_amplitude = amplitude;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Frame period. When `pace` is set, `next_frame` sleeps for it.
    pub fn with_frame_interval(mut self, interval: Duration, pace: bool) -> Self {
        self.frame_interval = interval;
        self.pace = pace;
        self
    }

    /// Simulates a disconnect after `count` frames.
    pub fn with_frame_limit(mut self, count: u64) -> Self {
        self.max_frames = Some(count);
        self
    }

    pub fn frames_emitted(&self) -> u64 {
        self.frames_emitted
    }

    fn render(&mut self) -> Result<PixelBuffer> {
        let (w, h) = (self.width, self.height);
        let [ro, go, bo] = self.format.color_offsets();
        let ao = self.format.alpha_offset();
        let amp = i16::from(self.noise_amplitude);
        let span = (w + h).max(2) - 2;

        let mut data = vec![0u8; w * h * BYTES_PER_PIXEL];
        for (i, px) in data.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
            let (x, y) = (i % w, i / w);
            let base = if span == 0 { 128 } else { ((x + y) * 255 / span) as i16 };
            let mut sample = |offset: i16| {
                let noise = if amp > 0 { self.rng.gen_range(-amp..=amp) } else { 0 };
                (base + offset + noise).clamp(0, 255) as u8
            };
            px[ro] = sample(0);
            px[go] = sample(-16);
            px[bo] = sample(-32);
            px[ao] = u8::MAX;
        }

        let timestamp = frame_timestamp(self.frame_interval, self.frames_emitted);
        PixelBuffer::new(w, h, self.format, data, timestamp)
    }
}

/// Capture time of frame `index`, saturating on very long sessions.
pub(super) fn frame_timestamp(interval: Duration, index: u64) -> Duration {
    interval.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

impl FrameSource for SyntheticFrameSource {
    fn next_frame(&mut self) -> Option<PixelBuffer> {
        if self.max_frames.is_some_and(|max| self.frames_emitted >= max) {
            debug!(frames = self.frames_emitted, "Synthetic source exhausted");
            return None;
        }
        if self.pace {
            std::thread::sleep(self.frame_interval);
        }
        let frame = self.render().ok()?;
        self.frames_emitted += 1;
        Some(frame)
    }
}
