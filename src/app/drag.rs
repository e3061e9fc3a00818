//! Drag tracker with release momentum.
//!
//! Turns held-pointer horizontal movement into [`DragEvent::Drag`] deltas
//! and, after release, decays the last observed velocity into a train of
//! [`DragEvent::Throw`] deltas so the carousel keeps gliding.

use winit::event::MouseButton;

use crate::app::input::Input;
use crate::carousel::DragEvent;

/// Tracks one pointer button as a horizontal drag source.
#[derive(Debug, Clone)]
pub struct DragTracker {
    /// Button that drives the drag.
    pub button: MouseButton,
    /// Per-frame velocity retention factor, tuned for 60 fps.
    pub damping_factor: f32,
    /// Throw speed below which momentum is considered finished, in px/s.
    pub min_throw_speed: f32,

    dragging: bool,
    velocity_x: f32,
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl DragTracker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            button: MouseButton::Left,
            damping_factor: 0.05,
            min_throw_speed: 5.0,
            dragging: false,
            velocity_x: 0.0,
        }
    }

    /// True while the pointer is held and dragging.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Samples the input for this frame and returns the drag delta to feed
    /// the carousel, if any.
    ///
    /// While the button is held, emits `Drag` for nonzero horizontal
    /// movement and records the instantaneous velocity. After release the
    /// velocity decays frame-rate independently (retention
    /// `(1 - damping)^(dt * 60)`), emitting `Throw` until it falls under
    /// `min_throw_speed`.
    pub fn update(&mut self, input: &Input, dt: f32) -> Option<DragEvent> {
        if input.is_button_pressed(self.button) {
            self.dragging = true;
            let delta_x = input.cursor_delta.x;
            self.velocity_x = if dt > 0.0 { delta_x / dt } else { 0.0 };
            if delta_x == 0.0 {
                return None;
            }
            return Some(DragEvent::Drag { delta_x });
        }

        self.dragging = false;

        if self.velocity_x.abs() < self.min_throw_speed {
            self.velocity_x = 0.0;
            return None;
        }

        let retention = (1.0 - self.damping_factor).powf(dt * 60.0);
        self.velocity_x *= retention;
        let delta_x = self.velocity_x * dt;
        if delta_x == 0.0 {
            return None;
        }
        Some(DragEvent::Throw { delta_x })
    }
}
