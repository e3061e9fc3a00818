//! 3D conveyor carousel.
//!
//! The carousel arranges a fixed set of cards on a circular path viewed in
//! perspective and keeps a single rotation offset updated from two input
//! sources: a continuous automatic advance and user drag deltas. Both feed
//! the same layout recomputation, which is a pure function of
//! `(rotation, radius, card index)`.
//!
//! - [`layout`]: the per-card transform math and the responsive radius policy
//! - [`engine`]: the owned engine instance, auto-rotate handle, drag events
//! - [`sink`]: the swappable output surface transforms are applied to

pub mod engine;
pub mod layout;
pub mod sink;

pub use engine::{AutoRotate, CarouselEngine, DragEvent, AUTO_ROTATE_STEP, DRAG_SENSITIVITY};
pub use layout::{card_transform, radius_for_width, CardTransform};
pub use sink::{RecordingSink, TransformSink};
