//! Navigation state
//!
//! A recomputed snapshot over the registry's visibility flags: the
//! canonical current slide, the first/last boundary flags and the
//! next/previous target arithmetic. The snapshot is always consistent
//! with the latest applied batch, never interpolated.
//!
//! Boundary semantics: with several slides visible at once (responsive
//! layouts showing 2-3 slides), "everything from the current slide to the
//! end is on screen" counts as the end of the rail, so the last flag uses
//! `visible_count + current >= len` rather than strict equality. Previous
//! targets clamp to 0 and a clamped target is still a real navigation;
//! next targets past the end are a no-op instead of clamping to the last
//! slide.

use crate::slide::SlideRegistry;

/// How many slide positions one next/previous action advances
///
/// Always at least 1. Parsed leniently from host configuration: anything
/// that is not a positive integer resolves to the default of 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSize(usize);

impl Default for StepSize {
    fn default() -> Self {
        Self(1)
    }
}

impl StepSize {
    pub fn new(step: usize) -> Self {
        Self(step.max(1))
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Lenient parse of a host-supplied value
    pub fn parse(value: Option<&str>) -> Self {
        value
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|step| *step > 0)
            .map(Self)
            .unwrap_or_default()
    }
}

/// Derived navigation snapshot for one registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    slide_count: usize,
    step: StepSize,
    current: Option<usize>,
    visible_count: usize,
    is_first: bool,
    is_last: bool,
}

impl NavState {
    /// Fresh state for a registry: nothing visible yet, no anchor
    pub fn for_registry(registry: &SlideRegistry, step: StepSize) -> Self {
        Self {
            slide_count: registry.len(),
            step,
            current: None,
            visible_count: 0,
            is_first: false,
            is_last: false,
        }
    }

    /// Recompute the snapshot from the registry's visibility flags
    ///
    /// When no slide is visible (a transient state between scroll frames,
    /// or a single-slide container mid-animation) the anchor becomes
    /// `None` and the boundary flags keep their previous values. Callers
    /// treat that as "no navigation update this tick", never as a fault.
    pub fn recompute(&mut self, registry: &SlideRegistry) {
        self.visible_count = registry.visible_count();
        self.current = registry.first_visible();

        let Some(current) = self.current else {
            return;
        };
        self.is_first = current == 0;
        self.is_last = self.visible_count + current >= self.slide_count;
    }

    /// Index of the lowest visible slide, `None` when nothing is visible
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn is_first(&self) -> bool {
        self.is_first
    }

    pub fn is_last(&self) -> bool {
        self.is_last
    }

    pub fn step(&self) -> StepSize {
        self.step
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Target for one forward step, `None` past the end (no clamping)
    pub fn next_target(&self) -> Option<usize> {
        let current = self.current?;
        let target = current + self.step.get();
        (target < self.slide_count).then_some(target)
    }

    /// Target for one backward step, clamped to a floor of 0
    ///
    /// The clamped target still counts as a valid navigation even when it
    /// moves fewer than `step` positions.
    pub fn previous_target(&self) -> Option<usize> {
        let current = self.current?;
        Some(current.saturating_sub(self.step.get()))
    }
}
