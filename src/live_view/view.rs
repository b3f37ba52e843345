//! View transform module
//!
//! Maps between image-pixel space and on-screen view space, combining
//! letterbox fit, pan, zoom, rotation and flips into one affine transform.

mod transform;
pub mod types;

#[cfg(test)]
mod tests;

pub use transform::{ViewTransform, MAX_ZOOM, MIN_ZOOM};
pub use types::Rotation;
