//! Document access seam
//!
//! The navigator reads the element tree and writes attributes, classes,
//! styles and text through this trait. Implementations use interior
//! mutability so handles can be cloned freely and shared with timer
//! threads (same idiom as the scroll physics handles: `&self` methods over
//! a locked inner state).

use std::sync::Arc;

use slotmap::new_key_type;

use crate::scroll::{PendingScroll, ScrollRequest};

new_key_type! {
    /// Handle to one element owned by the host document
    pub struct ElementId;
}

/// Callback invoked when an element is clicked
pub type ClickCallback = Arc<dyn Fn() + Send + Sync>;

/// Shared handle to a host document
pub type SharedDocument = Arc<dyn Document>;

/// Host document operations the navigator relies on
///
/// Unknown element ids are tolerated: reads return empty defaults and
/// writes are ignored. The navigator treats a stale id as a host-side
/// teardown, not a fault.
pub trait Document: Send + Sync {
    /// Create a detached element
    fn create_element(&self, tag: &str) -> ElementId;

    /// Append `child` as the last child of `parent`
    fn append_child(&self, parent: ElementId, child: ElementId);

    /// Direct children of `parent`, in document order
    fn children(&self, parent: ElementId) -> Vec<ElementId>;

    /// Parent of `element`, `None` for detached elements and roots
    fn parent(&self, element: ElementId) -> Option<ElementId>;

    /// Elements carrying the given attribute, in document order
    fn elements_with_attribute(&self, name: &str) -> Vec<ElementId>;

    fn set_attribute(&self, element: ElementId, name: &str, value: &str);

    fn attribute(&self, element: ElementId, name: &str) -> Option<String>;

    fn remove_attribute(&self, element: ElementId, name: &str);

    fn add_class(&self, element: ElementId, class: &str);

    fn remove_class(&self, element: ElementId, class: &str);

    fn has_class(&self, element: ElementId, class: &str) -> bool;

    /// Read a style property (including custom `--*` properties)
    fn style_property(&self, element: ElementId, name: &str) -> Option<String>;

    fn set_style_property(&self, element: ElementId, name: &str, value: &str);

    /// Replace the element's text content
    fn set_text(&self, element: ElementId, text: &str);

    fn text(&self, element: ElementId) -> String;

    fn set_opacity(&self, element: ElementId, opacity: f32);

    /// Current opacity, 1.0 for unknown elements
    fn opacity(&self, element: ElementId) -> f32;

    /// Register a click handler on `element`
    fn on_click(&self, element: ElementId, callback: ClickCallback);

    /// Dispatch a click to every handler registered on `element`
    fn click(&self, element: ElementId);

    /// Enqueue a scroll command for the host to perform
    fn request_scroll(&self, container: ElementId, request: ScrollRequest);

    /// Drain the queued scroll commands, oldest first
    fn take_pending_scrolls(&self) -> Vec<PendingScroll>;
}
