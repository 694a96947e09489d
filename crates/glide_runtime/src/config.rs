//! Runtime configuration
//!
//! Defaults mirror the widget's stock behavior; the only per-container
//! override is the step size, read once at mount time from a
//! container-scoped style property and parsed leniently.

use std::time::Duration;

use glide_core::StepSize;
use glide_dom::{Document, ElementId, ThresholdConfig};

/// Container-scoped style property holding the step size
pub const STEP_PROPERTY: &str = "--glide-step";

/// Configuration for the pulse highlight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseConfig {
    /// Opacity the target dips to when navigated to
    pub dip_opacity: f32,
    /// Opacity restored after the pulse
    pub restore_opacity: f32,
    /// Delay before the restore fires
    pub duration: Duration,
    /// Disable to make navigation side-effect free on opacity
    pub enabled: bool,
    /// Run restores on a background timer thread; when false the host
    /// drains them explicitly (tests do this for determinism)
    pub background: bool,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            dip_opacity: 0.25,
            restore_opacity: 1.0,
            duration: Duration::from_millis(300),
            enabled: true,
            background: true,
        }
    }
}

impl PulseConfig {
    /// Pulse config with the effect turned off
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Pulse config without the timer thread (manual drain)
    pub fn manual() -> Self {
        Self {
            background: false,
            ..Default::default()
        }
    }
}

/// Per-container navigator configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapConfig {
    /// Slide positions one next/previous action advances
    pub step: StepSize,
    /// Visibility threshold handed to the intersection primitive
    pub threshold: ThresholdConfig,
    /// Pulse highlight behavior
    pub pulse: PulseConfig,
    /// Mount the textual debug panel
    pub debug_panel: bool,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            step: StepSize::default(),
            threshold: ThresholdConfig::default(),
            pulse: PulseConfig::default(),
            debug_panel: false,
        }
    }
}

impl SnapConfig {
    /// Apply container-scoped overrides to this configuration
    pub fn resolve_for(self, doc: &dyn Document, container: ElementId) -> Self {
        let step = StepSize::parse(doc.style_property(container, STEP_PROPERTY).as_deref());
        Self { step, ..self }
    }
}

#[cfg(test)]
mod tests {
    use glide_dom::MemoryDocument;

    use super::*;

    #[test]
    fn test_resolve_reads_step_property() {
        let doc = MemoryDocument::new();
        let container = doc.create_element("div");
        doc.set_style_property(container, STEP_PROPERTY, "3");

        let config = SnapConfig::default().resolve_for(&doc, container);
        assert_eq!(config.step, StepSize::new(3));
    }

    #[test]
    fn test_resolve_defaults_on_garbage() {
        let doc = MemoryDocument::new();
        let container = doc.create_element("div");
        doc.set_style_property(container, STEP_PROPERTY, "fast");

        let config = SnapConfig::default().resolve_for(&doc, container);
        assert_eq!(config.step, StepSize::default());
    }

    #[test]
    fn test_resolve_defaults_when_absent() {
        let doc = MemoryDocument::new();
        let container = doc.create_element("div");

        let config = SnapConfig::default().resolve_for(&doc, container);
        assert_eq!(config.step, StepSize::default());
    }
}
