//! UI collaborators
//!
//! Previous/next buttons, dot indicators and the optional debug panel.
//! Each collaborator owns the elements it created and exposes one `sync`
//! entry point the controller calls after every recomputation; none of
//! them hold navigator state of their own.

use glide_core::{NavState, SlideRegistry};
use glide_dom::{Document, ElementId, SharedDocument};
use serde::Serialize;

/// Class applied to the previous button
pub const PREV_CLASS: &str = "glide-prev";
/// Class applied to the next button
pub const NEXT_CLASS: &str = "glide-next";
/// Class applied to every dot
pub const DOT_CLASS: &str = "glide-dot";
/// Class marking the dot for the current slide
pub const DOT_CURRENT_CLASS: &str = "glide-dot-current";
/// Class applied to the debug panel
pub const DEBUG_CLASS: &str = "glide-debug";
/// Ordinal marker written on every slide at mount
pub const SLIDE_INDEX_ATTR: &str = "data-glide-index";

const DISABLED_ATTR: &str = "disabled";

fn set_disabled(doc: &SharedDocument, element: ElementId, disabled: bool) {
    if disabled {
        doc.set_attribute(element, DISABLED_ATTR, "");
    } else {
        doc.remove_attribute(element, DISABLED_ATTR);
    }
}

// ============================================================================
// Prev/Next Buttons
// ============================================================================

/// The previous/next button pair
pub struct NavButtons {
    prev: ElementId,
    next: ElementId,
}

impl NavButtons {
    /// Build both buttons and append them to `parent`
    pub fn create(doc: &SharedDocument, parent: ElementId) -> Self {
        let prev = doc.create_element("button");
        doc.add_class(prev, PREV_CLASS);
        doc.set_text(prev, "\u{2039}");
        doc.append_child(parent, prev);

        let next = doc.create_element("button");
        doc.add_class(next, NEXT_CLASS);
        doc.set_text(next, "\u{203a}");
        doc.append_child(parent, next);

        Self { prev, next }
    }

    /// Previous disabled at the first slide, next disabled at the last
    pub fn sync(&self, doc: &SharedDocument, nav: &NavState) {
        set_disabled(doc, self.prev, nav.is_first());
        set_disabled(doc, self.next, nav.is_last());
    }

    pub fn prev_element(&self) -> ElementId {
        self.prev
    }

    pub fn next_element(&self) -> ElementId {
        self.next
    }
}

// ============================================================================
// Dot Navigation
// ============================================================================

/// One dot per slide, current dot highlighted, click navigates
pub struct DotNav {
    dots: Vec<ElementId>,
}

impl DotNav {
    /// Build one dot per registered slide and append them to `parent`
    ///
    /// Each dot carries the ordinal read back from its slide's marker
    /// attribute, so styling and tooling can correlate the two.
    pub fn create(doc: &SharedDocument, parent: ElementId, registry: &SlideRegistry) -> Self {
        let dots = registry
            .all()
            .iter()
            .map(|slide| {
                let dot = doc.create_element("button");
                doc.add_class(dot, DOT_CLASS);
                let ordinal = doc
                    .attribute(slide.element(), SLIDE_INDEX_ATTR)
                    .unwrap_or_else(|| slide.index().to_string());
                doc.set_attribute(dot, SLIDE_INDEX_ATTR, &ordinal);
                doc.append_child(parent, dot);
                dot
            })
            .collect();

        Self { dots }
    }

    /// Move the current highlight to `current`'s dot
    ///
    /// `None` leaves the previous highlight in place; a transient frame
    /// with nothing visible is not a deselection.
    pub fn sync(&self, doc: &SharedDocument, current: Option<usize>) {
        let Some(current) = current else {
            return;
        };
        for (index, dot) in self.dots.iter().enumerate() {
            if index == current {
                doc.add_class(*dot, DOT_CURRENT_CLASS);
            } else {
                doc.remove_class(*dot, DOT_CURRENT_CLASS);
            }
        }
    }

    pub fn dots(&self) -> &[ElementId] {
        &self.dots
    }
}

// ============================================================================
// Debug Panel
// ============================================================================

#[derive(Serialize)]
struct SlideReport {
    index: usize,
    visible: bool,
}

/// Optional textual dump of per-slide visibility
pub struct DebugPanel {
    panel: ElementId,
}

impl DebugPanel {
    pub fn create(doc: &SharedDocument, parent: ElementId) -> Self {
        let panel = doc.create_element("pre");
        doc.add_class(panel, DEBUG_CLASS);
        doc.append_child(parent, panel);
        Self { panel }
    }

    /// Rewrite the panel with a JSON array of `{ index, visible }` rows
    pub fn refresh(&self, doc: &SharedDocument, registry: &SlideRegistry) {
        let report: Vec<SlideReport> = registry
            .all()
            .iter()
            .map(|slide| SlideReport {
                index: slide.index(),
                visible: registry.is_visible(slide.index()),
            })
            .collect();

        match serde_json::to_string(&report) {
            Ok(json) => doc.set_text(self.panel, &json),
            Err(err) => tracing::warn!(%err, "debug panel serialization failed"),
        }
    }

    pub fn element(&self) -> ElementId {
        self.panel
    }
}
