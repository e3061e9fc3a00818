//! Preloader counter.
//!
//! Counts 0→100 over a fixed duration with quadratic in-out easing, exposing
//! the floored integer percent the way a loading overlay displays it. A
//! separate force-reveal deadline guarantees the page is revealed even if
//! the count stalls.

/// Eased percent counter for a loading overlay.
#[derive(Debug, Clone)]
pub struct Preloader {
    /// Time for the count to run 0→100, in seconds.
    pub duration: f32,
    /// Hard deadline after which the overlay must reveal regardless of the
    /// count's state, in seconds.
    pub force_reveal_after: f32,

    elapsed: f32,
}

impl Default for Preloader {
    fn default() -> Self {
        Self::new()
    }
}

impl Preloader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            duration: 2.5,
            force_reveal_after: 5.0,
            elapsed: 0.0,
        }
    }

    /// Advances the counter by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// Eased progress in [0, 1].
    #[must_use]
    pub fn progress(&self) -> f32 {
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        ease_in_out_quad(t)
    }

    /// The integer percent a loading overlay displays, floored like the
    /// on-screen counter.
    #[must_use]
    pub fn percent(&self) -> u32 {
        (self.progress() * 100.0).floor() as u32
    }

    /// True once the count has finished.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// True once the overlay should be gone: either the count finished or
    /// the force-reveal deadline passed.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.is_complete() || self.elapsed >= self.force_reveal_after
    }
}

/// Quadratic ease-in-out over [0, 1].
fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}
