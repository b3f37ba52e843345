use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tracing::trace;

use crate::live_view::frame::PixelBuffer;

/// Single-slot handoff from the capture thread to the renderer.
///
/// Publishing overwrites whatever the renderer has not picked up yet. There
/// is no queue and no backpressure; overwritten frames are only counted.
#[derive(Default)]
pub struct LatestFrameCell {
    slot: Mutex<Option<PixelBuffer>>,
    published: AtomicU64,
    dropped: AtomicU64,
}

impl LatestFrameCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, frame: PixelBuffer) {
        let replaced = self.slot.lock().replace(frame);
        self.published.fetch_add(1, Ordering::Relaxed);
        if replaced.is_some() {
            let dropped = self.dropped.fetch_add(1, Ordering::Relaxed) + 1;
            trace!(dropped, "Renderer behind, overwrote unconsumed frame");
        }
    }

    /// Moves the newest frame out, leaving the slot empty.
    pub fn take(&self) -> Option<PixelBuffer> {
        self.slot.lock().take()
    }

    pub fn has_frame(&self) -> bool {
        self.slot.lock().is_some()
    }

    pub fn published_count(&self) -> u64 {
        self.published.load(Ordering::Relaxed)
    }

    pub fn dropped_count(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}
