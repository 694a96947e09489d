//! Visibility tracking
//!
//! Bridges the host's intersection primitive and the registry's
//! visibility flags. The tracker owns the element-to-ordinal mapping and
//! is the only mutation path for those flags.
//!
//! Batch contract: a notification batch is applied in full before the
//! caller recomputes anything downstream, so a partially applied batch is
//! never observable. Entry order within a batch carries no meaning, and
//! when a batch mentions the same element twice the last entry wins.

use rustc_hash::FxHashMap;

use glide_dom::{
    ElementId, IntersectionEntry, IntersectionObserver, SharedIntersectionObserver,
    ThresholdConfig,
};

use crate::slide::SlideRegistry;

/// Per-container visibility tracker
pub struct VisibilityTracker {
    observer: SharedIntersectionObserver,
    config: ThresholdConfig,
    index_of: FxHashMap<ElementId, usize>,
}

impl VisibilityTracker {
    /// Wrap a host intersection primitive
    pub fn new(observer: SharedIntersectionObserver, config: ThresholdConfig) -> Self {
        Self {
            observer,
            config,
            index_of: FxHashMap::default(),
        }
    }

    pub fn config(&self) -> ThresholdConfig {
        self.config
    }

    /// Begin monitoring every slide in the registry
    pub fn observe(&mut self, registry: &SlideRegistry) {
        for slide in registry.all() {
            self.index_of.insert(slide.element(), slide.index());
            self.observer.observe(slide.element());
        }
        tracing::debug!(slides = registry.len(), "observing slides");
    }

    /// Apply one notification batch to the registry
    ///
    /// Every entry is applied before this returns. Entries for elements
    /// the tracker never observed are skipped. Returns whether any flag
    /// actually changed.
    pub fn apply(&self, registry: &mut SlideRegistry, entries: &[IntersectionEntry]) -> bool {
        let mut changed = false;
        for entry in entries {
            let Some(&index) = self.index_of.get(&entry.target) else {
                tracing::trace!(element = ?entry.target, "entry for unobserved element");
                continue;
            };
            if registry.is_visible(index) != entry.is_visible {
                changed = true;
            }
            registry.set_visible(index, entry.is_visible);
        }
        tracing::trace!(
            entries = entries.len(),
            changed,
            visible = registry.visible_count(),
            "applied visibility batch"
        );
        changed
    }

    /// Stop monitoring everything (controller teardown)
    pub fn detach(&self) {
        self.observer.disconnect();
    }
}
