//! Pointer-parallax tilt.
//!
//! Maps a pointer position inside a viewport to a small 3D tilt of a target
//! surface, plus depth-indexed drift offsets for floating accent elements.
//! Pure math; the caller applies the results however it renders.

use glam::Vec2;

/// Pointer-position tilt for a perspective surface.
///
/// `strength` is the total rotation span in degrees across the viewport:
/// the tilt runs from `-strength / 2` at one edge to `+strength / 2` at the
/// other, and is zero with the pointer centered. Positive strength leans the
/// surface toward the pointer (a hero surface typically uses 10); negative
/// strength flips both axes for surfaces that lean away, like a floating
/// header at -20.
#[derive(Debug, Clone, Copy)]
pub struct PointerTilt {
    /// Total tilt span in degrees.
    pub strength: f32,
}

impl PointerTilt {
    #[must_use]
    pub fn new(strength: f32) -> Self {
        Self { strength }
    }

    /// Tilt for `pointer` inside `viewport`, as `(rotate_x, rotate_y)`
    /// degrees. Vertical pointer travel tilts around x, horizontal travel
    /// tilts around y (negated so the surface leans toward the pointer).
    #[must_use]
    pub fn tilt(&self, pointer: Vec2, viewport: Vec2) -> Vec2 {
        let n = normalized(pointer, viewport);
        Vec2::new(n.y * self.strength, n.x * -self.strength)
    }
}

/// Drift offset for the floating accent element at `index`: deeper elements
/// (higher index) travel further with the pointer.
#[must_use]
pub fn asset_drift(pointer: Vec2, viewport: Vec2, index: usize) -> Vec2 {
    let depth = (index + 1) as f32 * 20.0;
    normalized(pointer, viewport) * depth
}

/// Pointer position mapped into [-0.5, 0.5] per axis, zero at center.
fn normalized(pointer: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        pointer.x / viewport.x.max(1.0) - 0.5,
        pointer.y / viewport.y.max(1.0) - 0.5,
    )
}
