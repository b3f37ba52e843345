//! Common utilities module
//!
//! This module contains the error type and configuration shared across the live view.

pub mod error;
pub mod config;

pub use error::{ViewerError, Result};
pub use config::{ViewerConfig, ViewerConfigBuilder};
