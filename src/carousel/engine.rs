//! Carousel layout engine.
//!
//! [`CarouselEngine`] owns the full carousel state: the rotation offset, the
//! current radius, and the fixed angular spacing between cards. The two
//! mutation entry points (automatic per-frame advance and user drag) both
//! funnel into [`CarouselEngine::advance`], so there is exactly one place
//! where `rotation` changes and one recomputation routine downstream of it.
//!
//! The engine is single-threaded by construction (it is `!Send` through the
//! shared auto-rotate flag). All mutation happens serially inside the host's
//! UI callback queue; no background thread may touch `rotation`.

use std::cell::Cell;
use std::f32::consts::TAU;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::carousel::layout::{card_transform, radius_for_width, CardTransform};
use crate::carousel::sink::TransformSink;
use crate::errors::{ConveyorError, Result};

/// Automatic conveyor advance per frame, in radians. Negative so the belt
/// runs in one fixed direction.
pub const AUTO_ROTATE_STEP: f32 = 0.007;

/// Drag sensitivity: radians of rotation per pixel of horizontal pointer
/// displacement. Both live drags and momentum throws use the same scaling.
pub const DRAG_SENSITIVITY: f32 = 0.003;

/// A horizontal drag delta from the gesture collaborator.
///
/// The two kinds map to the same rotation advance; they are distinguished
/// only so wiring code can tell an active gesture from post-release inertia.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// Pointer displacement since the last callback of an in-progress drag.
    Drag {
        /// Horizontal displacement in pixels.
        delta_x: f32,
    },
    /// Momentum displacement after release.
    Throw {
        /// Horizontal displacement in pixels.
        delta_x: f32,
    },
}

impl DragEvent {
    #[must_use]
    pub fn delta_x(self) -> f32 {
        match self {
            Self::Drag { delta_x } | Self::Throw { delta_x } => delta_x,
        }
    }
}

/// Cancelable handle for the automatic advance.
///
/// Returned by [`CarouselEngine::start_auto_rotate`]. While the handle is
/// alive and not stopped, [`CarouselEngine::tick`] advances the rotation;
/// stopping or dropping the handle guarantees no further automatic mutation.
/// Each handle controls only its own flag: a later `start_auto_rotate`
/// supersedes the engine's current handle, and the superseded one can no
/// longer affect the engine.
#[derive(Debug)]
pub struct AutoRotate {
    active: Rc<Cell<bool>>,
}

impl AutoRotate {
    /// Stops the automatic advance. Idempotent.
    pub fn stop(&self) {
        self.active.set(false);
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

impl Drop for AutoRotate {
    fn drop(&mut self) {
        self.active.set(false);
    }
}

/// The carousel layout engine.
///
/// Created once per mounted carousel; `rotation` and `radius` persist for
/// the engine's lifetime. The card count is fixed at construction and the
/// sequence order never changes: index `i` always maps to angular position
/// `rotation + i * angle_step`.
#[derive(Debug)]
pub struct CarouselEngine {
    rotation: f32,
    radius: f32,
    angle_step: f32,
    card_count: usize,

    auto_rotate: Rc<Cell<bool>>,
    scratch: SmallVec<[CardTransform; 8]>,
}

impl CarouselEngine {
    /// Creates an engine for `card_count` cards sized for `viewport_width`.
    ///
    /// # Errors
    ///
    /// Returns [`ConveyorError::EmptyCarousel`] for a zero card count, since
    /// the angular spacing would be undefined.
    pub fn new(card_count: usize, viewport_width: f32) -> Result<Self> {
        if card_count == 0 {
            return Err(ConveyorError::EmptyCarousel);
        }

        Ok(Self {
            rotation: 0.0,
            radius: radius_for_width(viewport_width),
            angle_step: TAU / card_count as f32,
            card_count,
            auto_rotate: Rc::new(Cell::new(false)),
            scratch: SmallVec::new(),
        })
    }

    /// Current rotation offset in radians. Unbounded; wraps implicitly via
    /// trigonometric periodicity.
    #[inline]
    #[must_use]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Current conveyor radius in pixels.
    #[inline]
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.card_count
    }

    /// Fixed angular spacing between adjacent cards, `2π / card_count`.
    #[inline]
    #[must_use]
    pub fn angle_step(&self) -> f32 {
        self.angle_step
    }

    /// Transform of a single card under the current state, without touching
    /// any sink.
    #[must_use]
    pub fn transform_of(&self, index: usize) -> CardTransform {
        card_transform(self.rotation, index, self.angle_step, self.radius)
    }

    /// Recomputes every card transform and applies them through `sink`.
    ///
    /// Idempotent: with unchanged `rotation` and `radius` this applies
    /// bit-identical values.
    pub fn recompute_layout<S: TransformSink>(&mut self, sink: &mut S) {
        self.scratch.clear();
        for i in 0..self.card_count {
            self.scratch
                .push(card_transform(self.rotation, i, self.angle_step, self.radius));
        }
        for (i, transform) in self.scratch.iter().enumerate() {
            sink.set(i, transform);
        }
    }

    /// Adds `delta_rotation` to the rotation offset and recomputes.
    ///
    /// No clamping or wrapping: sin/cos are periodic, so unbounded
    /// accumulation stays correct.
    pub fn advance<S: TransformSink>(&mut self, delta_rotation: f32, sink: &mut S) {
        self.rotation += delta_rotation;
        self.recompute_layout(sink);
    }

    /// Applies a drag or throw delta, scaled by [`DRAG_SENSITIVITY`].
    pub fn apply_drag<S: TransformSink>(&mut self, event: DragEvent, sink: &mut S) {
        self.advance(event.delta_x() * DRAG_SENSITIVITY, sink);
    }

    /// Starts the automatic conveyor advance and returns its stop handle.
    ///
    /// Starting again after a previous handle was stopped or dropped simply
    /// hands out a fresh handle.
    #[must_use = "dropping the handle stops the automatic advance"]
    pub fn start_auto_rotate(&mut self) -> AutoRotate {
        // Each handle owns its own flag. A stale handle stopped or dropped
        // later must only deactivate its own defunct cell, never a newer
        // handle's.
        let active = Rc::new(Cell::new(true));
        self.auto_rotate = Rc::clone(&active);
        AutoRotate { active }
    }

    /// Per-frame hook for the automatic advance.
    ///
    /// Advances by `-`[`AUTO_ROTATE_STEP`] while an [`AutoRotate`] handle is
    /// alive; otherwise does nothing.
    pub fn tick<S: TransformSink>(&mut self, sink: &mut S) {
        if self.auto_rotate.get() {
            self.advance(-AUTO_ROTATE_STEP, sink);
        }
    }

    /// Handles a viewport resize: recomputes the radius from the step policy
    /// and relays out every card.
    pub fn on_resize<S: TransformSink>(&mut self, viewport_width: f32, sink: &mut S) {
        self.radius = radius_for_width(viewport_width);
        self.recompute_layout(sink);
    }
}
