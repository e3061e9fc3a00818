//! Error Types
//!
//! This module defines the error types used throughout the motion layer.
//!
//! # Overview
//!
//! The main error type [`ConveyorError`] covers the few hard failure modes:
//! - Degenerate carousel construction (zero cards)
//! - Event loop startup failures when the `winit` wiring is enabled
//!
//! Missing optional surfaces (no container, no cards mounted) are deliberately
//! *not* errors: the wiring layer logs and stays inactive, because the whole
//! crate is a non-critical visual enhancement.
//!
//! # Usage
//!
//! Fallible public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, ConveyorError>`.

use thiserror::Error;

/// The main error type for the conveyor motion layer.
#[derive(Error, Debug)]
pub enum ConveyorError {
    /// A carousel cannot be built from zero cards: the angular spacing
    /// `2π / card_count` would be undefined and every derived transform
    /// would be NaN.
    #[error("Carousel requires at least one card")]
    EmptyCarousel,

    /// Event loop error (winit).
    #[cfg(feature = "winit")]
    #[error("Event loop error: {0}")]
    EventLoopError(#[from] winit::error::EventLoopError),
}

/// Alias for `Result<T, ConveyorError>`.
pub type Result<T> = std::result::Result<T, ConveyorError>;
