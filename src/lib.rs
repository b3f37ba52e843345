//! Live frame processing and display geometry for bench-top USB microscopes.

pub mod live_view;
pub mod logger;
