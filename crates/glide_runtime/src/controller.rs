//! Snap controller
//!
//! One controller per container. It owns the registry, tracker and nav
//! state, turns intersection batches into recomputations, and pushes the
//! derived state to the UI collaborators. Navigation actions enqueue a
//! smooth scroll command and pulse the target; both are fire-and-forget.
//!
//! Ordering guarantee: within one batch, every visibility flag lands
//! before the nav state recomputes and before any UI write. Nothing can
//! observe a partially applied batch.

use std::sync::{Arc, Mutex, Weak};

use glide_core::{NavState, Result, SlideRegistry, VisibilityTracker};
use glide_dom::{
    Document, ElementId, IntersectionEntry, ScrollRequest, SharedDocument,
    SharedIntersectionObserver,
};

use crate::config::SnapConfig;
use crate::pulse::PulseScheduler;
use crate::ui::{DebugPanel, DotNav, NavButtons, SLIDE_INDEX_ATTR};

/// Shared handle to a mounted controller
///
/// Click closures hold weak references, so dropping every shared handle
/// tears the navigator down cleanly.
pub type SharedSnapController = Arc<Mutex<SnapController>>;

/// The per-container navigator
pub struct SnapController {
    doc: SharedDocument,
    container: ElementId,
    registry: SlideRegistry,
    nav: NavState,
    tracker: VisibilityTracker,
    buttons: NavButtons,
    dots: DotNav,
    debug: Option<DebugPanel>,
    pulse: PulseScheduler,
}

impl SnapController {
    /// Mount a navigator on `container`
    ///
    /// Registers the container's direct children as slides, writes their
    /// ordinal markers, starts visibility observation and builds the
    /// button/dot UI next to the container. Fails when the container has
    /// no children; the caller decides whether to keep processing other
    /// containers.
    pub fn mount(
        doc: SharedDocument,
        container: ElementId,
        observer: SharedIntersectionObserver,
        config: SnapConfig,
    ) -> Result<SharedSnapController> {
        let children = doc.children(container);
        let registry = SlideRegistry::register(&children)?;

        for slide in registry.all() {
            doc.set_attribute(
                slide.element(),
                SLIDE_INDEX_ATTR,
                &slide.index().to_string(),
            );
        }

        let nav = NavState::for_registry(&registry, config.step);
        let mut tracker = VisibilityTracker::new(observer, config.threshold);
        tracker.observe(&registry);

        let controls_parent = doc.parent(container).unwrap_or(container);
        let buttons = NavButtons::create(&doc, controls_parent);
        let dots = DotNav::create(&doc, controls_parent, &registry);
        let debug = config
            .debug_panel
            .then(|| DebugPanel::create(&doc, controls_parent));

        let mut pulse = PulseScheduler::new(doc.clone(), config.pulse);
        if config.pulse.enabled && config.pulse.background {
            pulse.start_background();
        }

        tracing::debug!(
            slides = registry.len(),
            step = config.step.get(),
            "mounted snap navigator"
        );

        let controller = Arc::new(Mutex::new(Self {
            doc,
            container,
            registry,
            nav,
            tracker,
            buttons,
            dots,
            debug,
            pulse,
        }));
        Self::wire_clicks(&controller);

        Ok(controller)
    }

    /// Attach click handlers for both buttons and every dot
    fn wire_clicks(shared: &SharedSnapController) {
        let (doc, prev, next, dots) = {
            let controller = shared.lock().unwrap();
            (
                controller.doc.clone(),
                controller.buttons.prev_element(),
                controller.buttons.next_element(),
                controller.dots.dots().to_vec(),
            )
        };

        let weak = Arc::downgrade(shared);
        doc.on_click(prev, click_handler(&weak, SnapController::go_to_previous));
        doc.on_click(next, click_handler(&weak, SnapController::go_to_next));
        for (index, dot) in dots.into_iter().enumerate() {
            doc.on_click(
                dot,
                click_handler(&weak, move |controller: &mut SnapController| {
                    controller.go_to_slide(index)
                }),
            );
        }
    }

    /// Apply one intersection batch, recompute, and sync the UI
    pub fn on_intersections(&mut self, entries: &[IntersectionEntry]) {
        self.tracker.apply(&mut self.registry, entries);
        self.nav.recompute(&self.registry);
        self.sync_ui();
    }

    /// Navigate one step forward; past the end this is a silent no-op
    pub fn go_to_next(&mut self) -> Result<()> {
        match self.nav.next_target() {
            Some(target) => self.navigate_to(target),
            None => {
                tracing::trace!("next target past the end, ignoring");
                Ok(())
            }
        }
    }

    /// Navigate one step back, clamped to the first slide
    pub fn go_to_previous(&mut self) -> Result<()> {
        match self.nav.previous_target() {
            Some(target) => self.navigate_to(target),
            None => {
                tracing::trace!("no anchor slide yet, ignoring");
                Ok(())
            }
        }
    }

    /// Navigate straight to `index` (dot clicks)
    pub fn go_to_slide(&mut self, index: usize) -> Result<()> {
        self.navigate_to(index)
    }

    fn navigate_to(&mut self, index: usize) -> Result<()> {
        let element = self.registry.get(index)?.element();
        tracing::debug!(index, "navigating to slide");
        self.doc
            .request_scroll(self.container, ScrollRequest::smooth_to(element));
        self.pulse.pulse(element);
        Ok(())
    }

    fn sync_ui(&self) {
        self.buttons.sync(&self.doc, &self.nav);
        self.dots.sync(&self.doc, self.nav.current());
        if let Some(debug) = &self.debug {
            debug.refresh(&self.doc, &self.registry);
        }
    }

    /// Stop visibility observation (teardown)
    pub fn detach(&self) {
        self.tracker.detach();
    }

    pub fn container(&self) -> ElementId {
        self.container
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn registry(&self) -> &SlideRegistry {
        &self.registry
    }

    pub fn buttons(&self) -> &NavButtons {
        &self.buttons
    }

    pub fn dots(&self) -> &DotNav {
        &self.dots
    }

    pub fn debug_panel(&self) -> Option<&DebugPanel> {
        self.debug.as_ref()
    }

    pub fn pulse(&self) -> &PulseScheduler {
        &self.pulse
    }
}

/// Build a click callback that upgrades the weak controller handle and
/// runs `action` on it; navigation errors are logged, never propagated
/// into the host's event dispatch.
fn click_handler<F>(weak: &Weak<Mutex<SnapController>>, action: F) -> glide_dom::ClickCallback
where
    F: Fn(&mut SnapController) -> Result<()> + Send + Sync + 'static,
{
    let weak = weak.clone();
    Arc::new(move || {
        let Some(controller) = weak.upgrade() else {
            return;
        };
        let mut controller = controller.lock().unwrap();
        if let Err(err) = action(&mut *controller) {
            tracing::warn!(%err, "navigation failed");
        }
    })
}
