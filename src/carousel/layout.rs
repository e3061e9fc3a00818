//! Per-card transform math for the conveyor arrangement.
//!
//! A card at index `i` sits at `angle = rotation + i * angle_step` on a
//! circle of the current radius. Everything visible about the card (position,
//! depth, scale, opacity, facing tilt, stacking) is derived from that angle
//! alone, so the layout is idempotent: recomputing with unchanged inputs
//! yields bit-identical output.
//!
//! The tuning constants below are empirical. They define the look of the
//! conveyor and are kept verbatim; changing them changes visual behavior,
//! not correctness.

/// Scale swing around 1.0: front card 1.4, back card 0.6.
pub const SCALE_AMPLITUDE: f32 = 0.4;

/// Bias added to `cos(angle)` before normalizing into an opacity.
pub const OPACITY_BIAS: f32 = 1.2;

/// Divisor normalizing the biased cosine into [0, 1].
pub const OPACITY_RANGE: f32 = 2.2;

/// Cards never fade out completely; the back card floors here.
pub const OPACITY_FLOOR: f32 = 0.1;

/// Maximum y-axis tilt in degrees as a card traverses the arc.
pub const MAX_FACE_TILT: f32 = 25.0;

/// Derived visual parameters for one card, recomputed every layout pass.
///
/// Cards hold no persistent animation state: this record is the complete
/// output for a card and is handed to a [`TransformSink`](crate::carousel::sink::TransformSink)
/// as an immediate "set now" assignment, never an interpolated tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    /// Horizontal position on the circle, in pixels.
    pub x: f32,
    /// Depth, normalized so the frontmost point is 0 and the back card
    /// recedes to `-2 * radius`.
    pub z: f32,
    /// Uniform scale factor in [0.6, 1.4].
    pub scale: f32,
    /// Opacity in [0.1, 1.0].
    pub opacity: f32,
    /// Y-axis rotation in degrees, in [-25, 25], turning cards to face the
    /// viewer as they traverse the arc.
    pub rotate_y: f32,
    /// Integer render priority: nearer cards get larger values
    /// (front card `radius`, back card `-radius`).
    pub stack_order: i32,
}

/// Computes the transform of the card at `index`.
///
/// Pure over its inputs; `rotation` is unbounded and wraps implicitly via
/// trigonometric periodicity.
#[must_use]
pub fn card_transform(rotation: f32, index: usize, angle_step: f32, radius: f32) -> CardTransform {
    let angle = rotation + index as f32 * angle_step;
    let (sin, cos) = angle.sin_cos();

    let x = sin * radius;
    let z = cos * radius - radius;

    CardTransform {
        x,
        z,
        scale: 1.0 + cos * SCALE_AMPLITUDE,
        opacity: ((cos + OPACITY_BIAS) / OPACITY_RANGE).max(OPACITY_FLOOR),
        rotate_y: sin * -MAX_FACE_TILT,
        stack_order: (z + radius).round() as i32,
    }
}

/// Responsive radius policy: a step function of the viewport width.
///
/// The thresholds (768 px, 1200 px) are part of the carousel's contract,
/// not the viewport collaborator's.
#[must_use]
pub fn radius_for_width(width: f32) -> f32 {
    if width < 768.0 {
        width * 0.45
    } else if width < 1200.0 {
        width * 0.7
    } else {
        1000.0
    }
}
