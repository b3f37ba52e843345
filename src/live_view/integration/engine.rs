use parking_lot::Mutex;
use tracing::{debug, info, instrument, trace, warn};

use crate::live_view::common::error::Result;
use crate::live_view::frame::{ChannelCodec, PackedColorCodec, PixelBuffer};
use crate::live_view::integration::store::FrameStore;
use crate::live_view::integration::types::IntegrationLevel;

/// Rolling per-channel average over the last N frames.
///
/// `process` runs on the capture thread while `set_level` and `reset` come
/// from the UI. All three take the same lock, so a level change is never
/// observed half way through an accumulation.
///
/// For the first N-1 frames after a reset or level change the output is the
/// average of the frames seen so far, then it becomes a fixed N-frame window.
pub struct IntegrationEngine<C: ChannelCodec = PackedColorCodec> {
    codec: C,
    state: Mutex<EngineState>,
}

struct EngineState {
    level: IntegrationLevel,
    store: Option<FrameStore>,
    /// Dimensions of the most recent frame, used to allocate eagerly on level changes
    frame_size: Option<(usize, usize)>,
}

impl IntegrationEngine<PackedColorCodec> {
    pub fn new(level: IntegrationLevel) -> Self {
        Self::with_codec(PackedColorCodec, level)
    }
}

impl Default for IntegrationEngine<PackedColorCodec> {
    fn default() -> Self {
        Self::new(IntegrationLevel::default())
    }
}

impl<C: ChannelCodec> IntegrationEngine<C> {
    pub fn with_codec(codec: C, level: IntegrationLevel) -> Self {
        Self {
            codec,
            state: Mutex::new(EngineState {
                level,
                store: None,
                frame_size: None,
            }),
        }
    }

    pub fn level(&self) -> IntegrationLevel {
        self.state.lock().level
    }

    /// Frames currently contributing to the average (0 in bypass).
    pub fn fill_count(&self) -> usize {
        self.state.lock().store.as_ref().map_or(0, FrameStore::filled)
    }

    /// Changes the window length. Any held frames are discarded, even when
    /// shrinking; the next frame starts a fresh average.
    #[instrument(skip(self))]
    pub fn set_level(&self, level: IntegrationLevel) -> Result<()> {
        let mut state = self.state.lock();
        if state.level == level {
            return Ok(());
        }

        info!(from = %state.level, to = %level, "Changing integration level");
        state.level = level;
        state.store = None;

        let frame_size = state.frame_size;
        match frame_size {
            Some((width, height)) if !level.is_bypass() => {
                state.store = Some(FrameStore::allocate(width, height, level.frames())?);
            }
            _ => {}
        }
        Ok(())
    }

    /// Clears the window without changing the level. Calling it twice is the same as once.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        if let Some(store) = state.store.as_mut() {
            store.clear();
        }
        debug!(level = %state.level, "Integration window reset");
    }

    /// Integrates one frame and returns the averaged result.
    ///
    /// In bypass (N = 1) the input is returned unchanged and nothing is allocated.
    pub fn process(&self, frame: PixelBuffer) -> Result<PixelBuffer> {
        let mut state = self.state.lock();
        let level = state.level;
        let (width, height) = (frame.width(), frame.height());

        if state.frame_size != Some((width, height)) {
            if state.frame_size.is_some() {
                warn!(width, height, "Frame size changed, restarting integration");
            }
            state.frame_size = Some((width, height));
            state.store = None;
        }

        if level.is_bypass() {
            return Ok(frame);
        }

        let store = match state.store.take() {
            Some(store) if store.matches(width, height, level.frames()) => store,
            _ => {
                info!(width, height, level = %level, "Allocating integration buffers");
                FrameStore::allocate(width, height, level.frames())?
            }
        };
        let store = state.store.insert(store);

        let divisor = store.push(&self.codec, &frame);
        trace!(divisor, level = %level, "Integrated frame");

        self.codec.encode(
            width,
            height,
            frame.format(),
            store.sums(),
            divisor as f32,
            frame.timestamp(),
        )
    }
}
