//! Winit wiring.
//!
//! Adapters between a winit event loop and the pure motion state: pointer
//! input accumulation and the drag tracker that turns pointer movement into
//! [`DragEvent`](crate::carousel::DragEvent)s, including post-release
//! momentum.
//!
//! The core carousel never sees winit types; everything here is optional
//! behind the `winit` feature.

pub mod drag;
pub mod input;

pub use drag::DragTracker;
pub use input::Input;
