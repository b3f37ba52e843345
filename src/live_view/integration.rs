//! Frame integration module
//!
//! Averages the last N captured frames per pixel channel to suppress sensor
//! noise, with bounded latency and fixed memory for a given resolution.

mod engine;
mod store;
pub mod types;


pub use engine::IntegrationEngine;
pub use types::IntegrationLevel;
