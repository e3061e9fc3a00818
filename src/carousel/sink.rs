//! Output surface for computed card transforms.

use crate::carousel::layout::CardTransform;

/// Applies a freshly computed transform to a rendering surface.
///
/// This is an immediate assignment (the equivalent of setting a style right
/// now), deliberately not an interpolated tween: the engine recomputes every
/// frame, and a tween racing the per-frame recompute would fight it.
pub trait TransformSink {
    /// Applies `transform` to the card at `index`.
    fn set(&mut self, index: usize, transform: &CardTransform);
}

/// Sink that records every applied transform, keeping the latest per card.
///
/// Used by tests and useful for headless inspection.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    latest: Vec<Option<CardTransform>>,
    applied: usize,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest transform applied to card `index`, if any pass has run.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CardTransform> {
        self.latest.get(index).and_then(Option::as_ref)
    }

    /// Total number of `set` calls observed.
    #[must_use]
    pub fn applied(&self) -> usize {
        self.applied
    }

    /// Snapshot of the latest transform per card, in index order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<CardTransform> {
        self.latest.iter().filter_map(|t| *t).collect()
    }
}

impl TransformSink for RecordingSink {
    fn set(&mut self, index: usize, transform: &CardTransform) {
        if self.latest.len() <= index {
            self.latest.resize(index + 1, None);
        }
        self.latest[index] = Some(*transform);
        self.applied += 1;
    }
}
