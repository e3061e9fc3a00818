//! Utility Module
//!
//! - [`time`]: frame timing for callers driving `update(dt)` loops

pub mod time;

pub use time::FrameTimer;
