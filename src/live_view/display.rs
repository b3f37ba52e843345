//! Display-side frame selection and freeze.
//!
//! While frozen the display keeps one frame and ignores new ones, but capture
//! and integration keep running, so un-freezing resumes on an already
//! converged integration window.

use tracing::info;

use crate::live_view::frame::PixelBuffer;
use crate::live_view::pipeline::LatestFrameCell;

#[derive(Debug, Default)]
pub struct FrameDisplay {
    current: Option<PixelBuffer>,
    frozen: bool,
}

impl FrameDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopts the newest produced frame unless frozen. Returns whether the displayed frame changed.
    pub fn refresh(&mut self, latest: &LatestFrameCell) -> bool {
        if self.frozen {
            return false;
        }
        match latest.take() {
            Some(frame) => {
                self.current = Some(frame);
                true
            }
            None => false,
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn freeze(&mut self) {
        if !self.frozen {
            info!(
                timestamp_ms = self.current.as_ref().map(|f| f.timestamp().as_millis() as u64),
                "Display frozen"
            );
        }
        self.frozen = true;
    }

    /// Releases the held frame; the next `refresh` shows the latest one.
    pub fn unfreeze(&mut self) {
        if self.frozen {
            info!("Display unfrozen");
        }
        self.frozen = false;
        self.current = None;
    }

    pub fn toggle_freeze(&mut self) {
        if self.frozen {
            self.unfreeze();
        } else {
            self.freeze();
        }
    }

    pub fn displayed(&self) -> Option<&PixelBuffer> {
        self.current.as_ref()
    }

    /// Copy of the displayed frame for snapshot and recording consumers.
    pub fn snapshot(&self) -> Option<PixelBuffer> {
        self.current.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::live_view::frame::PixelFormat;

    fn frame(ms: u64) -> PixelBuffer {
        PixelBuffer::filled(2, 2, PixelFormat::Bgra8, [1, 2, 3], Duration::from_millis(ms)).unwrap()
    }

    #[test]
    fn test_refresh_adopts_latest() {
        let cell = LatestFrameCell::new();
        let mut display = FrameDisplay::new();
        assert!(!display.refresh(&cell));

        cell.publish(frame(1));
        cell.publish(frame(2));
        assert!(display.refresh(&cell));
        assert_eq!(display.displayed().unwrap().timestamp(), Duration::from_millis(2));
        assert_eq!(cell.dropped_count(), 1);
        assert!(!cell.has_frame());
    }

    #[test]
    fn test_frozen_display_holds_frame() {
        let cell = LatestFrameCell::new();
        let mut display = FrameDisplay::new();
        cell.publish(frame(1));
        display.refresh(&cell);

        display.freeze();
        cell.publish(frame(2));
        assert!(!display.refresh(&cell));
        assert_eq!(display.snapshot().unwrap().timestamp(), Duration::from_millis(1));
        assert!(cell.has_frame());

        display.unfreeze();
        assert!(display.displayed().is_none());
        assert!(display.refresh(&cell));
        assert_eq!(display.displayed().unwrap().timestamp(), Duration::from_millis(2));
    }

    #[test]
    fn test_toggle_freeze() {
        let mut display = FrameDisplay::new();
        display.toggle_freeze();
        assert!(display.is_frozen());
        display.toggle_freeze();
        assert!(!display.is_frozen());
    }
}
