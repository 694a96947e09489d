//! End-to-end tests over the memory host
//!
//! Each test builds a document with a marked container, mounts the
//! navigator through the public bootstrap, lays out slide rects at a
//! simulated scroll offset and feeds the resulting intersection batches
//! to the controller, the same path a real host drives.

use std::sync::Arc;

use glide_core::GlideError;
use glide_dom::{
    Document, ElementId, MemoryDocument, MemoryIntersections, Rect, ScrollAlign, ScrollBehavior,
    SharedIntersectionObserver,
};

use crate::bootstrap::{mount_all, CONTAINER_ATTR};
use crate::config::{PulseConfig, SnapConfig, STEP_PROPERTY};
use crate::controller::{SharedSnapController, SnapController};
use crate::ui::{DOT_CURRENT_CLASS, SLIDE_INDEX_ATTR};

const VIEWPORT_WIDTH: f32 = 400.0;
const VIEWPORT_HEIGHT: f32 = 300.0;

/// Wide slides: exactly one slide clears the 50% threshold when its
/// leading edge is aligned, and mid-scroll offsets have a dead zone with
/// nothing visible.
const WIDE_SLIDE: f32 = 600.0;

/// Narrow slides: two fit the viewport at once.
const NARROW_SLIDE: f32 = 200.0;

struct Rig {
    doc: MemoryDocument,
    container: ElementId,
    slides: Vec<ElementId>,
    engine: MemoryIntersections,
    controller: SharedSnapController,
}

fn test_config() -> SnapConfig {
    SnapConfig {
        pulse: PulseConfig::manual(),
        ..Default::default()
    }
}

fn build_document(n: usize) -> (MemoryDocument, ElementId, Vec<ElementId>) {
    let doc = MemoryDocument::new();
    let root = doc.create_element("body");
    let container = doc.create_element("div");
    doc.set_attribute(container, CONTAINER_ATTR, "");
    doc.append_child(root, container);

    let slides = (0..n)
        .map(|_| {
            let slide = doc.create_element("div");
            doc.append_child(container, slide);
            slide
        })
        .collect();

    (doc, container, slides)
}

fn build_rig_with(n: usize, config: SnapConfig) -> Rig {
    let (doc, container, slides) = build_document(n);

    let engine = MemoryIntersections::new(config.threshold);
    engine.set_viewport(Rect::new(0.0, 0.0, VIEWPORT_WIDTH, VIEWPORT_HEIGHT));

    let handle = doc.handle();
    let engine_for_factory = engine.clone();
    let controllers = mount_all(&handle, config, move |_, _| {
        Arc::new(engine_for_factory.clone()) as SharedIntersectionObserver
    });
    assert_eq!(controllers.len(), 1);
    let controller = controllers.into_iter().next().unwrap();

    Rig {
        doc,
        container,
        slides,
        engine,
        controller,
    }
}

fn build_rig(n: usize) -> Rig {
    build_rig_with(n, test_config())
}

impl Rig {
    /// Lay the slides out horizontally at `offset` and deliver whatever
    /// batch the intersection engine produces.
    fn scroll(&self, offset: f32, slide_width: f32) {
        for (i, slide) in self.slides.iter().enumerate() {
            self.engine.set_rect(
                *slide,
                Rect::new(i as f32 * slide_width - offset, 0.0, slide_width, VIEWPORT_HEIGHT),
            );
        }
        self.pump();
    }

    fn pump(&self) {
        let batch = self.engine.process();
        if !batch.is_empty() {
            self.controller.lock().unwrap().on_intersections(&batch);
        }
    }

    fn prev_button(&self) -> ElementId {
        self.controller.lock().unwrap().buttons().prev_element()
    }

    fn next_button(&self) -> ElementId {
        self.controller.lock().unwrap().buttons().next_element()
    }

    fn dot(&self, index: usize) -> ElementId {
        self.controller.lock().unwrap().dots().dots()[index]
    }

    fn is_disabled(&self, element: ElementId) -> bool {
        self.doc.attribute(element, "disabled").is_some()
    }

    fn current(&self) -> Option<usize> {
        self.controller.lock().unwrap().nav().current()
    }

    fn pending_scroll_targets(&self) -> Vec<ElementId> {
        self.doc
            .take_pending_scrolls()
            .into_iter()
            .map(|p| p.request.target)
            .collect()
    }
}

#[test]
fn test_mount_skips_empty_container_and_continues() {
    let doc = MemoryDocument::new();
    let root = doc.create_element("body");

    // The empty container comes first; the loop must survive it.
    let empty = doc.create_element("div");
    doc.set_attribute(empty, CONTAINER_ATTR, "");
    doc.append_child(root, empty);

    let full = doc.create_element("div");
    doc.set_attribute(full, CONTAINER_ATTR, "");
    doc.append_child(root, full);
    let slide = doc.create_element("div");
    doc.append_child(full, slide);

    let handle = doc.handle();
    let controllers = mount_all(&handle, test_config(), |_, threshold| {
        Arc::new(MemoryIntersections::new(threshold)) as SharedIntersectionObserver
    });

    assert_eq!(controllers.len(), 1);
    assert_eq!(controllers[0].lock().unwrap().container(), full);
}

#[test]
fn test_mount_on_empty_container_is_an_error() {
    let doc = MemoryDocument::new();
    let container = doc.create_element("div");

    let result = SnapController::mount(
        doc.handle(),
        container,
        Arc::new(MemoryIntersections::new(Default::default())),
        test_config(),
    );

    assert!(matches!(result, Err(GlideError::EmptyRegistration)));
}

#[test]
fn test_mount_writes_ordinal_markers() {
    let rig = build_rig(3);

    for (i, slide) in rig.slides.iter().enumerate() {
        assert_eq!(
            rig.doc.attribute(*slide, SLIDE_INDEX_ATTR),
            Some(i.to_string())
        );
    }
    // The dots mirror the ordinals they read back from the slides.
    for i in 0..3 {
        assert_eq!(
            rig.doc.attribute(rig.dot(i), SLIDE_INDEX_ATTR),
            Some(i.to_string())
        );
    }
}

#[test]
fn test_first_slide_visible_syncs_buttons_and_dots() {
    let rig = build_rig(3);
    rig.scroll(0.0, WIDE_SLIDE);

    assert_eq!(rig.current(), Some(0));
    assert!(rig.is_disabled(rig.prev_button()));
    assert!(!rig.is_disabled(rig.next_button()));
    assert!(rig.doc.has_class(rig.dot(0), DOT_CURRENT_CLASS));
    assert!(!rig.doc.has_class(rig.dot(1), DOT_CURRENT_CLASS));
}

#[test]
fn test_click_next_scrolls_smoothly_and_pulses_target() {
    let rig = build_rig(3);
    rig.scroll(0.0, WIDE_SLIDE);

    rig.doc.click(rig.next_button());

    let pending = rig.doc.take_pending_scrolls();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].container, rig.container);
    assert_eq!(pending[0].request.target, rig.slides[1]);
    assert_eq!(pending[0].request.behavior, ScrollBehavior::Smooth);
    assert_eq!(pending[0].request.align, ScrollAlign::Start);

    // The target dipped; the restore is still scheduled.
    assert!((rig.doc.opacity(rig.slides[1]) - 0.25).abs() < 1e-6);
    let controller = rig.controller.lock().unwrap();
    assert_eq!(controller.pulse().pending_count(), 1);
    controller.pulse().flush();
    drop(controller);
    assert!((rig.doc.opacity(rig.slides[1]) - 1.0).abs() < 1e-6);
}

#[test]
fn test_dot_click_navigates_directly() {
    let rig = build_rig(4);
    rig.scroll(0.0, WIDE_SLIDE);

    rig.doc.click(rig.dot(2));

    assert_eq!(rig.pending_scroll_targets(), vec![rig.slides[2]]);
}

#[test]
fn test_tail_pair_visible_disables_next() {
    let rig = build_rig(3);
    // Narrow slides, scrolled so slides 1 and 2 fill the viewport.
    rig.scroll(NARROW_SLIDE, NARROW_SLIDE);

    let controller = rig.controller.lock().unwrap();
    assert_eq!(controller.nav().current(), Some(1));
    assert_eq!(controller.nav().visible_count(), 2);
    assert!(controller.nav().is_last());
    drop(controller);

    assert!(rig.is_disabled(rig.next_button()));
    assert!(!rig.is_disabled(rig.prev_button()));
}

#[test]
fn test_next_past_the_end_is_a_silent_noop() {
    let rig = build_rig(3);
    rig.scroll(2.0 * WIDE_SLIDE, WIDE_SLIDE);

    assert_eq!(rig.current(), Some(2));
    rig.doc.click(rig.next_button());

    assert!(rig.doc.take_pending_scrolls().is_empty());
}

#[test]
fn test_previous_from_first_clamps_and_still_navigates() {
    let rig = build_rig(3);
    rig.scroll(0.0, WIDE_SLIDE);

    // Clamped to slide 0 but still a real navigation: scroll + pulse.
    rig.controller.lock().unwrap().go_to_previous().unwrap();

    assert_eq!(rig.pending_scroll_targets(), vec![rig.slides[0]]);
    assert!((rig.doc.opacity(rig.slides[0]) - 0.25).abs() < 1e-6);
}

#[test]
fn test_step_size_from_container_style() {
    let (doc, container, slides) = build_document(5);
    doc.set_style_property(container, STEP_PROPERTY, "2");

    let engine = MemoryIntersections::new(Default::default());
    engine.set_viewport(Rect::new(0.0, 0.0, VIEWPORT_WIDTH, VIEWPORT_HEIGHT));
    let handle = doc.handle();
    let engine_for_factory = engine.clone();
    let controllers = mount_all(&handle, test_config(), move |_, _| {
        Arc::new(engine_for_factory.clone()) as SharedIntersectionObserver
    });
    let controller = controllers.into_iter().next().unwrap();

    for (i, slide) in slides.iter().enumerate() {
        engine.set_rect(
            *slide,
            Rect::new(i as f32 * WIDE_SLIDE, 0.0, WIDE_SLIDE, VIEWPORT_HEIGHT),
        );
    }
    let batch = engine.process();
    controller.lock().unwrap().on_intersections(&batch);

    controller.lock().unwrap().go_to_next().unwrap();

    let pending = doc.take_pending_scrolls();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].request.target, slides[2]);
}

#[test]
fn test_transient_empty_frame_keeps_ui_state() {
    let rig = build_rig(3);
    rig.scroll(0.0, WIDE_SLIDE);
    assert!(rig.is_disabled(rig.prev_button()));

    // Mid-scroll dead zone: no slide clears the threshold.
    rig.scroll(350.0, WIDE_SLIDE);

    assert_eq!(rig.current(), None);
    // Buttons and dot highlight carry the previous state.
    assert!(rig.is_disabled(rig.prev_button()));
    assert!(!rig.is_disabled(rig.next_button()));
    assert!(rig.doc.has_class(rig.dot(0), DOT_CURRENT_CLASS));
}

#[test]
fn test_reapplying_a_batch_is_idempotent() {
    let rig = build_rig(3);
    for (i, slide) in rig.slides.iter().enumerate() {
        rig.engine.set_rect(
            *slide,
            Rect::new(i as f32 * WIDE_SLIDE, 0.0, WIDE_SLIDE, VIEWPORT_HEIGHT),
        );
    }
    let batch = rig.engine.process();
    assert!(!batch.is_empty());

    let mut controller = rig.controller.lock().unwrap();
    controller.on_intersections(&batch);
    let first = *controller.nav();
    controller.on_intersections(&batch);
    assert_eq!(*controller.nav(), first);
}

#[test]
fn test_debug_panel_dump() {
    let rig = build_rig_with(
        3,
        SnapConfig {
            debug_panel: true,
            ..test_config()
        },
    );
    rig.scroll(0.0, WIDE_SLIDE);

    let controller = rig.controller.lock().unwrap();
    let panel = controller.debug_panel().unwrap().element();
    let dump = rig.doc.text(panel);
    drop(controller);

    let parsed: serde_json::Value = serde_json::from_str(&dump).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["index"], 0);
    assert_eq!(rows[0]["visible"], true);
    assert_eq!(rows[1]["visible"], false);
}

#[test]
fn test_detach_stops_observation() {
    let rig = build_rig(2);
    rig.scroll(0.0, WIDE_SLIDE);

    rig.controller.lock().unwrap().detach();

    // A later layout change produces no batches at all.
    for (i, slide) in rig.slides.iter().enumerate() {
        rig.engine.set_rect(
            *slide,
            Rect::new(i as f32 * WIDE_SLIDE - WIDE_SLIDE, 0.0, WIDE_SLIDE, VIEWPORT_HEIGHT),
        );
    }
    assert!(rig.engine.process().is_empty());
}
