//! Seamless marquee scroll state.
//!
//! The marquee content is rendered twice back to back, so scrolling one
//! content-width and snapping back to zero is visually seamless. Hovering
//! slows the scroll to a fraction of its speed; the time scale eases toward
//! its target rather than jumping, so the slow-down reads as a soft
//! deceleration.

/// Continuous horizontal scroll offset with hover slow-down.
#[derive(Debug, Clone)]
pub struct Marquee {
    /// Scroll speed at full time scale, in pixels per second.
    pub speed: f32,
    /// Time scale while hovered.
    pub hover_time_scale: f32,
    /// Per-frame easing factor for time-scale changes, tuned for 60 fps.
    pub time_scale_easing: f32,

    content_width: f32,
    offset: f32,
    time_scale: f32,
    target_time_scale: f32,
}

impl Marquee {
    /// Creates a marquee that loops `content_width` pixels every
    /// `loop_duration` seconds.
    #[must_use]
    pub fn new(content_width: f32, loop_duration: f32) -> Self {
        Self {
            speed: content_width / loop_duration.max(f32::EPSILON),
            hover_time_scale: 0.2,
            time_scale_easing: 0.08,
            content_width,
            offset: 0.0,
            time_scale: 1.0,
            target_time_scale: 1.0,
        }
    }

    /// Advances the scroll by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        // Frame-rate independent exponential approach toward the target
        // time scale.
        let retention = (1.0 - self.time_scale_easing).powf(dt * 60.0);
        self.time_scale =
            self.target_time_scale + (self.time_scale - self.target_time_scale) * retention;

        self.offset += self.speed * self.time_scale * dt;
        if self.content_width > 0.0 {
            self.offset %= self.content_width;
        }
    }

    /// Pointer entered the marquee: ease down to the hover time scale.
    pub fn hover_enter(&mut self) {
        self.target_time_scale = self.hover_time_scale;
    }

    /// Pointer left: ease back to full speed.
    pub fn hover_leave(&mut self) {
        self.target_time_scale = 1.0;
    }

    /// The x translation to apply to the track, always in
    /// `(-content_width, 0]`.
    #[must_use]
    pub fn x(&self) -> f32 {
        -self.offset
    }

    /// Current effective time scale.
    #[must_use]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }
}
