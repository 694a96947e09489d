//! Glide Navigator Core
//!
//! The visibility-tracking and navigation state machine behind a
//! scroll-snap slide rail:
//!
//! - **SlideRegistry**: stable 0-based ordinals for a container's
//!   children, plus the registry-owned visibility flags
//! - **VisibilityTracker**: atomic application of host intersection
//!   batches onto those flags
//! - **NavState**: the derived current/first/last snapshot and the
//!   step-sized next/previous target arithmetic with boundary clamping
//!
//! Everything here is pure bookkeeping over the host seam defined in
//! `glide_dom`; side effects (scrolling, pulsing, button state) live in
//! `glide_runtime`.
//!
//! # Example
//!
//! ```rust
//! use glide_core::{NavState, SlideRegistry, StepSize};
//! use glide_dom::{Document, MemoryDocument};
//!
//! let doc = MemoryDocument::new();
//! let container = doc.create_element("div");
//! for _ in 0..3 {
//!     let slide = doc.create_element("div");
//!     doc.append_child(container, slide);
//! }
//!
//! let registry = SlideRegistry::register(&doc.children(container)).unwrap();
//! let mut nav = NavState::for_registry(&registry, StepSize::default());
//! nav.recompute(&registry);
//!
//! assert_eq!(nav.current(), None);
//! ```

pub mod error;
pub mod nav;
pub mod slide;
pub mod tracker;

pub use error::{GlideError, Result};
pub use nav::{NavState, StepSize};
pub use slide::{Slide, SlideRegistry};
pub use tracker::VisibilityTracker;
