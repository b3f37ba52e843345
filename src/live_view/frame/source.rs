use crate::live_view::frame::types::PixelBuffer;

/// Delivers frames of a fixed size and format for the lifetime of a capture session.
pub trait FrameSource {
    /// Blocks until the next frame is available. `None` means the device disconnected.
    fn next_frame(&mut self) -> Option<PixelBuffer>;
}

impl<F> FrameSource for F
where
    F: FnMut() -> Option<PixelBuffer>,
{
    fn next_frame(&mut self) -> Option<PixelBuffer> {
        self()
    }
}
