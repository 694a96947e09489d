//! Carousel demo - drives the navigator against the in-memory host
//!
//! Builds a marked container with five slides, mounts the navigator
//! through the bootstrap, then simulates scroll frames and button/dot
//! clicks, applying the scroll commands the way a real host would.
//!
//! Run with: cargo run -p glide_runtime --example carousel

use std::sync::Arc;

use anyhow::Context;
use glide_dom::{
    Document, ElementId, MemoryDocument, MemoryIntersections, Rect, SharedIntersectionObserver,
};
use glide_runtime::{mount_all, SnapConfig, CONTAINER_ATTR};

const SLIDE_COUNT: usize = 5;
const SLIDE_WIDTH: f32 = 600.0;
const VIEWPORT_WIDTH: f32 = 400.0;
const VIEWPORT_HEIGHT: f32 = 300.0;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Page setup: one marked container with five slides.
    let doc = MemoryDocument::new();
    let body = doc.create_element("body");
    let container = doc.create_element("div");
    doc.set_attribute(container, CONTAINER_ATTR, "");
    doc.append_child(body, container);

    let slides: Vec<ElementId> = (0..SLIDE_COUNT)
        .map(|_| {
            let slide = doc.create_element("div");
            doc.append_child(container, slide);
            slide
        })
        .collect();

    let engine = MemoryIntersections::new(Default::default());
    engine.set_viewport(Rect::new(0.0, 0.0, VIEWPORT_WIDTH, VIEWPORT_HEIGHT));

    let handle = doc.handle();
    let engine_for_factory = engine.clone();
    let controllers = mount_all(
        &handle,
        SnapConfig {
            debug_panel: true,
            ..Default::default()
        },
        move |_, _| Arc::new(engine_for_factory.clone()) as SharedIntersectionObserver,
    );
    let controller = controllers
        .into_iter()
        .next()
        .context("no container mounted")?;

    // Initial frame at the rail's start.
    let mut offset = 0.0;
    layout(&engine, &slides, offset);
    pump(&engine, &controller);
    report(&controller);

    // UI element ids, fetched once. Fetching before dispatching also keeps
    // the controller lock released while click handlers run.
    let (prev_button, next_button, dot_elements) = {
        let controller = controller.lock().unwrap();
        (
            controller.buttons().prev_element(),
            controller.buttons().next_element(),
            controller.dots().dots().to_vec(),
        )
    };

    // Walk forward with the next button, applying each scroll command.
    for _ in 0..2 {
        doc.click(next_button);
        offset = apply_scrolls(&doc, &slides, offset);
        layout(&engine, &slides, offset);
        pump(&engine, &controller);
        report(&controller);
    }

    // Jump straight to the last slide via its dot.
    doc.click(dot_elements[SLIDE_COUNT - 1]);
    offset = apply_scrolls(&doc, &slides, offset);
    layout(&engine, &slides, offset);
    pump(&engine, &controller);
    report(&controller);

    // Back past the start: the target clamps to slide 0.
    doc.click(dot_elements[0]);
    offset = apply_scrolls(&doc, &slides, offset);
    layout(&engine, &slides, offset);
    pump(&engine, &controller);
    doc.click(prev_button);
    offset = apply_scrolls(&doc, &slides, offset);
    tracing::info!(offset, "previous at the start clamps to slide 0");
    report(&controller);

    let debug = controller
        .lock()
        .unwrap()
        .debug_panel()
        .map(|panel| doc.text(panel.element()));
    if let Some(dump) = debug {
        tracing::info!(%dump, "debug panel");
    }

    Ok(())
}

/// Place every slide rect for the given scroll offset
fn layout(engine: &MemoryIntersections, slides: &[ElementId], offset: f32) {
    for (i, slide) in slides.iter().enumerate() {
        engine.set_rect(
            *slide,
            Rect::new(
                i as f32 * SLIDE_WIDTH - offset,
                0.0,
                SLIDE_WIDTH,
                VIEWPORT_HEIGHT,
            ),
        );
    }
}

/// Deliver pending intersection batches to the controller
fn pump(engine: &MemoryIntersections, controller: &glide_runtime::SharedSnapController) {
    let batch = engine.process();
    if !batch.is_empty() {
        controller.lock().unwrap().on_intersections(&batch);
    }
}

/// Perform queued scroll commands: jump the offset to the target's edge
fn apply_scrolls(doc: &MemoryDocument, slides: &[ElementId], offset: f32) -> f32 {
    let mut offset = offset;
    for pending in doc.take_pending_scrolls() {
        if let Some(index) = slides.iter().position(|s| *s == pending.request.target) {
            offset = index as f32 * SLIDE_WIDTH;
            tracing::info!(index, offset, "scrolling to slide");
        }
    }
    offset
}

fn report(controller: &glide_runtime::SharedSnapController) {
    let controller = controller.lock().unwrap();
    let nav = controller.nav();
    tracing::info!(
        current = ?nav.current(),
        visible = nav.visible_count(),
        first = nav.is_first(),
        last = nav.is_last(),
        "navigator state"
    );
}
