//! Glide Host Primitives
//!
//! This crate defines the seam between the Glide navigator and whatever
//! environment hosts it:
//!
//! - **Document**: element tree reads, attribute/class/style writes, click
//!   dispatch and the scroll command sink
//! - **Intersection contract**: `observe()` plus batched visibility entries
//!   against a configurable threshold
//! - **Scroll contract**: "bring this element to the leading edge" commands,
//!   consumed by the host
//! - **Memory host**: a deterministic in-process implementation of all of
//!   the above, used by tests and demos
//!
//! The navigator never mutates host elements directly beyond these
//! interfaces, and never stores its own state on them.
//!
//! # Example
//!
//! ```rust
//! use glide_dom::{Document, MemoryDocument};
//!
//! let doc = MemoryDocument::new();
//! let container = doc.create_element("div");
//! let slide = doc.create_element("div");
//! doc.append_child(container, slide);
//!
//! assert_eq!(doc.children(container), vec![slide]);
//! ```

pub mod document;
pub mod geometry;
pub mod intersection;
pub mod memory;
pub mod scroll;

pub use document::{ClickCallback, Document, ElementId, SharedDocument};
pub use geometry::Rect;
pub use intersection::{
    IntersectionBatch, IntersectionEntry, IntersectionObserver, SharedIntersectionObserver,
    ThresholdConfig,
};
pub use memory::{MemoryDocument, MemoryIntersections};
pub use scroll::{PendingScroll, ScrollAlign, ScrollBehavior, ScrollRequest};
