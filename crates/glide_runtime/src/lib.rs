//! Glide Navigator Runtime
//!
//! Wires the core state machine to a host document:
//!
//! - **SnapController**: per-container glue from intersection batches to
//!   recomputation to UI updates, plus the next/previous/direct
//!   navigation actions
//! - **UI collaborators**: prev/next buttons, dot indicators and the
//!   optional debug panel
//! - **PulseScheduler**: the fire-and-forget opacity highlight
//! - **Bootstrap**: container discovery and per-container mounting
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use glide_dom::{Document, MemoryDocument, MemoryIntersections, SharedIntersectionObserver};
//! use glide_runtime::{mount_all, SnapConfig, CONTAINER_ATTR};
//!
//! let doc = MemoryDocument::new();
//! let container = doc.create_element("div");
//! doc.set_attribute(container, CONTAINER_ATTR, "");
//! for _ in 0..3 {
//!     let slide = doc.create_element("div");
//!     doc.append_child(container, slide);
//! }
//!
//! let handle = doc.handle();
//! let controllers = mount_all(&handle, SnapConfig::default(), |_, threshold| {
//!     Arc::new(MemoryIntersections::new(threshold)) as SharedIntersectionObserver
//! });
//! assert_eq!(controllers.len(), 1);
//! ```

pub mod bootstrap;
pub mod config;
pub mod controller;
pub mod pulse;
pub mod ui;

#[cfg(test)]
mod tests;

pub use bootstrap::{mount_all, CONTAINER_ATTR};
pub use config::{PulseConfig, SnapConfig, STEP_PROPERTY};
pub use controller::{SharedSnapController, SnapController};
pub use pulse::PulseScheduler;
pub use ui::{
    DebugPanel, DotNav, NavButtons, DEBUG_CLASS, DOT_CLASS, DOT_CURRENT_CLASS, NEXT_CLASS,
    PREV_CLASS, SLIDE_INDEX_ATTR,
};
