//! Intersection notification contract
//!
//! Visibility detection is a host primitive: the navigator registers the
//! elements it cares about and the host delivers batches of boolean
//! transitions whenever one or more elements cross the configured
//! threshold, in either direction. The navigator makes no assumption about
//! entry ordering within a batch.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::document::ElementId;

/// Threshold configuration for visibility detection
///
/// `ratio` is the fraction of an element's area that must be inside the
/// container's visible region for the element to count as visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdConfig {
    /// Visibility threshold in `0.0..=1.0` (default 0.5)
    pub ratio: f32,
    /// Margin added around the container viewport, in pixels (default 0)
    pub margin: f32,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            ratio: 0.5,
            margin: 0.0,
        }
    }
}

/// One visibility transition reported by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub target: ElementId,
    /// Whether the target is now at or above the threshold
    pub is_visible: bool,
    /// Measured intersection ratio at notification time
    pub ratio: f32,
}

/// A batch of transitions delivered in one notification
///
/// Batches are small in practice (a scroll frame flips a handful of
/// slides), so they stay inline.
pub type IntersectionBatch = SmallVec<[IntersectionEntry; 8]>;

/// Shared handle to an intersection primitive
pub type SharedIntersectionObserver = Arc<dyn IntersectionObserver>;

/// The host-side visibility primitive
///
/// One observer watches one container viewport. Delivery is out of band:
/// the host pushes batches to whoever mounted the observer.
pub trait IntersectionObserver: Send + Sync {
    /// Begin monitoring `target` for threshold crossings
    fn observe(&self, target: ElementId);

    /// Stop monitoring `target`
    fn unobserve(&self, target: ElementId);

    /// Stop monitoring everything and drop pending notifications
    fn disconnect(&self);
}
