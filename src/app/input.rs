use std::collections::HashSet;

use glam::Vec2;
use winit::event::{ElementState, MouseButton};

/// Per-frame pointer state fed from winit window events.
#[derive(Default, Debug, Clone)]
pub struct Input {
    /// Current pointer position in window coordinates.
    pub cursor_position: Vec2,
    /// Pointer displacement accumulated since the last frame.
    pub cursor_delta: Vec2,
    /// Current window size in pixels.
    pub screen_size: Vec2,
    /// Mouse buttons currently held down.
    pub mouse_buttons: HashSet<MouseButton>,
}

impl Input {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears per-frame delta state. Call at the end of every frame so a
    /// stationary pointer stops producing motion.
    pub fn end_frame(&mut self) {
        self.cursor_delta = Vec2::ZERO;
    }

    pub fn handle_resize(&mut self, width: u32, height: u32) {
        self.screen_size = Vec2::new(width as f32, height as f32);
    }

    pub fn handle_cursor_move(&mut self, x: f64, y: f64) {
        let new_pos = Vec2::new(x as f32, y as f32);
        // First observed position has no previous sample to diff against.
        if self.cursor_position != Vec2::ZERO {
            self.cursor_delta += new_pos - self.cursor_position;
        }
        self.cursor_position = new_pos;
    }

    pub fn handle_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        match state {
            ElementState::Pressed => {
                self.mouse_buttons.insert(button);
            }
            ElementState::Released => {
                self.mouse_buttons.remove(&button);
            }
        }
    }

    #[must_use]
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons.contains(&button)
    }
}
