//! In-memory host implementation
//!
//! A deterministic, in-process implementation of the document and
//! intersection contracts. Tests and demos drive the navigator end to end
//! with it: build a tree, place element rects, call
//! [`MemoryIntersections::process`] per simulated scroll frame and feed the
//! resulting batches to the controller.
//!
//! Handles are cheap clones over a locked inner state, so the same
//! document can be held by the controller, click closures and the pulse
//! timer thread at once.

use std::sync::{Arc, Mutex};

use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use crate::document::{ClickCallback, Document, ElementId, SharedDocument};
use crate::geometry::Rect;
use crate::intersection::{
    IntersectionBatch, IntersectionEntry, IntersectionObserver, ThresholdConfig,
};
use crate::scroll::{PendingScroll, ScrollRequest};

// ============================================================================
// Memory Document
// ============================================================================

struct Node {
    tag: String,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    attributes: FxHashMap<String, String>,
    classes: Vec<String>,
    styles: FxHashMap<String, String>,
    text: String,
    opacity: f32,
    click_handlers: Vec<ClickCallback>,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            parent: None,
            children: Vec::new(),
            attributes: FxHashMap::default(),
            classes: Vec::new(),
            styles: FxHashMap::default(),
            text: String::new(),
            opacity: 1.0,
            click_handlers: Vec::new(),
        }
    }
}

struct DocumentInner {
    nodes: SlotMap<ElementId, Node>,
    /// Creation order, used for attribute scans
    order: Vec<ElementId>,
    pending_scrolls: Vec<PendingScroll>,
}

/// In-memory retained element tree
#[derive(Clone)]
pub struct MemoryDocument {
    inner: Arc<Mutex<DocumentInner>>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(DocumentInner {
                nodes: SlotMap::with_key(),
                order: Vec::new(),
                pending_scrolls: Vec::new(),
            })),
        }
    }

    /// Erase the concrete type into a shared document handle
    pub fn handle(&self) -> SharedDocument {
        Arc::new(self.clone())
    }

    /// Tag the element was created with, empty for unknown ids
    pub fn tag(&self, element: ElementId) -> String {
        let inner = self.inner.lock().unwrap();
        inner
            .nodes
            .get(element)
            .map(|n| n.tag.clone())
            .unwrap_or_default()
    }
}

impl Document for MemoryDocument {
    fn create_element(&self, tag: &str) -> ElementId {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.nodes.insert(Node::new(tag));
        inner.order.push(id);
        id
    }

    fn append_child(&self, parent: ElementId, child: ElementId) {
        let mut inner = self.inner.lock().unwrap();
        if !inner.nodes.contains_key(parent) || !inner.nodes.contains_key(child) {
            tracing::warn!(?parent, ?child, "append_child on unknown element");
            return;
        }
        if let Some(node) = inner.nodes.get_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = inner.nodes.get_mut(parent) {
            node.children.push(child);
        }
    }

    fn children(&self, parent: ElementId) -> Vec<ElementId> {
        let inner = self.inner.lock().unwrap();
        inner
            .nodes
            .get(parent)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    fn parent(&self, element: ElementId) -> Option<ElementId> {
        let inner = self.inner.lock().unwrap();
        inner.nodes.get(element)?.parent
    }

    fn elements_with_attribute(&self, name: &str) -> Vec<ElementId> {
        let inner = self.inner.lock().unwrap();
        inner
            .order
            .iter()
            .copied()
            .filter(|id| {
                inner
                    .nodes
                    .get(*id)
                    .is_some_and(|n| n.attributes.contains_key(name))
            })
            .collect()
    }

    fn set_attribute(&self, element: ElementId, name: &str, value: &str) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(node) = inner.nodes.get_mut(element) {
            node.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        let inner = self.inner.lock().unwrap();
        inner.nodes.get(element)?.attributes.get(name).cloned()
    }

    fn remove_attribute(&self, element: ElementId, name: &str) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(node) = inner.nodes.get_mut(element) {
            node.attributes.remove(name);
        }
    }

    fn add_class(&self, element: ElementId, class: &str) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(node) = inner.nodes.get_mut(element) {
            if !node.classes.iter().any(|c| c == class) {
                node.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&self, element: ElementId, class: &str) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(node) = inner.nodes.get_mut(element) {
            node.classes.retain(|c| c != class);
        }
    }

    fn has_class(&self, element: ElementId, class: &str) -> bool {
        let inner = self.inner.lock().unwrap();
        inner
            .nodes
            .get(element)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    fn style_property(&self, element: ElementId, name: &str) -> Option<String> {
        let inner = self.inner.lock().unwrap();
        inner.nodes.get(element)?.styles.get(name).cloned()
    }

    fn set_style_property(&self, element: ElementId, name: &str, value: &str) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(node) = inner.nodes.get_mut(element) {
            node.styles.insert(name.to_string(), value.to_string());
        }
    }

    fn set_text(&self, element: ElementId, text: &str) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(node) = inner.nodes.get_mut(element) {
            node.text = text.to_string();
        }
    }

    fn text(&self, element: ElementId) -> String {
        let inner = self.inner.lock().unwrap();
        inner
            .nodes
            .get(element)
            .map(|n| n.text.clone())
            .unwrap_or_default()
    }

    fn set_opacity(&self, element: ElementId, opacity: f32) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(node) = inner.nodes.get_mut(element) {
            node.opacity = opacity;
        }
    }

    fn opacity(&self, element: ElementId) -> f32 {
        let inner = self.inner.lock().unwrap();
        inner.nodes.get(element).map(|n| n.opacity).unwrap_or(1.0)
    }

    fn on_click(&self, element: ElementId, callback: ClickCallback) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(node) = inner.nodes.get_mut(element) {
            node.click_handlers.push(callback);
        }
    }

    fn click(&self, element: ElementId) {
        // Snapshot the handlers so re-entrant document access from a
        // handler does not deadlock on the inner lock.
        let handlers: Vec<ClickCallback> = {
            let inner = self.inner.lock().unwrap();
            inner
                .nodes
                .get(element)
                .map(|n| n.click_handlers.clone())
                .unwrap_or_default()
        };
        for handler in handlers {
            handler();
        }
    }

    fn request_scroll(&self, container: ElementId, request: ScrollRequest) {
        let mut inner = self.inner.lock().unwrap();
        inner.pending_scrolls.push(PendingScroll { container, request });
    }

    fn take_pending_scrolls(&self) -> Vec<PendingScroll> {
        let mut inner = self.inner.lock().unwrap();
        std::mem::take(&mut inner.pending_scrolls)
    }
}

// ============================================================================
// Memory Intersections
// ============================================================================

struct IntersectionsInner {
    config: ThresholdConfig,
    viewport: Rect,
    rects: FxHashMap<ElementId, Rect>,
    /// Observed elements with the last reported visibility, registration order
    observed: Vec<(ElementId, Option<bool>)>,
}

/// Rect-based intersection engine for the memory host
///
/// One engine watches one container viewport. Tests place element rects,
/// then call [`process`](Self::process) once per simulated frame; the
/// returned batch contains only the elements whose visibility changed
/// since the previous report (the first report is always delivered).
#[derive(Clone)]
pub struct MemoryIntersections {
    inner: Arc<Mutex<IntersectionsInner>>,
}

impl MemoryIntersections {
    pub fn new(config: ThresholdConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(IntersectionsInner {
                config,
                viewport: Rect::default(),
                rects: FxHashMap::default(),
                observed: Vec::new(),
            })),
        }
    }

    /// Place the container viewport
    pub fn set_viewport(&self, viewport: Rect) {
        self.inner.lock().unwrap().viewport = viewport;
    }

    /// Place one element's layout rect
    pub fn set_rect(&self, element: ElementId, rect: Rect) {
        self.inner.lock().unwrap().rects.insert(element, rect);
    }

    /// Recheck every observed element and collect threshold crossings
    pub fn process(&self) -> IntersectionBatch {
        let mut inner = self.inner.lock().unwrap();
        let viewport = inner.viewport.inflate(inner.config.margin);
        let threshold = inner.config.ratio;

        let mut batch = IntersectionBatch::new();
        // Split borrow: ratios read from `rects`, state updated in `observed`.
        let rects = std::mem::take(&mut inner.rects);
        for (element, last) in inner.observed.iter_mut() {
            let ratio = rects
                .get(element)
                .and_then(|rect| {
                    let area = rect.area();
                    if area > 0.0 {
                        Some(
                            rect.intersection(&viewport)
                                .map(|overlap| overlap.area() / area)
                                .unwrap_or(0.0),
                        )
                    } else {
                        None
                    }
                })
                .unwrap_or(0.0);

            let is_visible = ratio >= threshold;
            if *last != Some(is_visible) {
                *last = Some(is_visible);
                batch.push(IntersectionEntry {
                    target: *element,
                    is_visible,
                    ratio,
                });
            }
        }
        inner.rects = rects;
        batch
    }
}

impl IntersectionObserver for MemoryIntersections {
    fn observe(&self, target: ElementId) {
        let mut inner = self.inner.lock().unwrap();
        if !inner.observed.iter().any(|(el, _)| *el == target) {
            inner.observed.push((target, None));
        }
    }

    fn unobserve(&self, target: ElementId) {
        let mut inner = self.inner.lock().unwrap();
        inner.observed.retain(|(el, _)| *el != target);
    }

    fn disconnect(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.observed.clear();
    }
}
