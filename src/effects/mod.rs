//! Motion-effect state machines.
//!
//! Each effect here is pure state math: it owns its scalars, is driven by
//! `update(dt)` or direct queries, and leaves the actual visual application
//! to the caller. None of them talk to a window or a rendering surface.
//!
//! - [`Preloader`]: eased 0→100 load counter with a force-reveal deadline
//! - [`Marquee`]: seamless horizontal loop with hover slow-down
//! - [`PointerTilt`]: pointer-position parallax tilt and depth drift

pub mod marquee;
pub mod parallax;
pub mod preloader;

pub use marquee::Marquee;
pub use parallax::PointerTilt;
pub use preloader::Preloader;
