//! Frame module
//!
//! Packed-color pixel buffers, the channel codec that turns them into float
//! planes and back, and the frame source abstraction.

mod codec;
mod source;
mod synthetic_source;
pub mod types;

#[cfg(test)]
mod tests;

pub use codec::{ChannelCodec, PackedColorCodec};
pub use source::FrameSource;
pub use synthetic_source::SyntheticFrameSource;
pub use types::{PixelBuffer, PixelFormat, BYTES_PER_PIXEL};
