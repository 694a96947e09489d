//! Scroll command contract
//!
//! Navigation never moves the viewport itself. It enqueues a command on the
//! document and the host (or a test) drains the queue and performs the
//! actual animation. Easing and duration belong entirely to the host.

use crate::document::ElementId;

/// Scroll animation behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Instant scroll (no animation)
    #[default]
    Auto,
    /// Smooth animated scroll
    Smooth,
}

/// Horizontal alignment of the target within the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollAlign {
    /// Align to the leading edge of the viewport
    #[default]
    Start,
    /// Align to the center of the viewport
    Center,
    /// Align to the trailing edge of the viewport
    End,
}

/// A request to bring one element into view inside its scroll container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub target: ElementId,
    pub behavior: ScrollBehavior,
    pub align: ScrollAlign,
}

impl ScrollRequest {
    /// Smooth scroll placing the target at the leading edge
    pub fn smooth_to(target: ElementId) -> Self {
        Self {
            target,
            behavior: ScrollBehavior::Smooth,
            align: ScrollAlign::Start,
        }
    }
}

/// A queued scroll command, tagged with the container it applies to
///
/// Commands are fire-and-forget: a second command enqueued while the first
/// is still animating simply redirects the host to the newer target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingScroll {
    pub container: ElementId,
    pub request: ScrollRequest,
}
