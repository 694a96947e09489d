//! Bootstrap
//!
//! Scans the document for marked containers and mounts one navigator per
//! match. Ownership is explicit: the mounted handles are returned to the
//! caller, there is no ambient registry of live navigators.

use glide_dom::{Document, ElementId, SharedDocument, SharedIntersectionObserver, ThresholdConfig};

use crate::config::SnapConfig;
use crate::controller::{SharedSnapController, SnapController};

/// Marker attribute identifying snap containers
pub const CONTAINER_ATTR: &str = "data-glide";

/// Mount a navigator on every container carrying [`CONTAINER_ATTR`]
///
/// `make_observer` supplies one intersection primitive per container,
/// rooted at that container's viewport with the resolved threshold.
/// A container that cannot be mounted (no children) is logged and
/// skipped; the rest of the page still comes up.
pub fn mount_all<F>(
    doc: &SharedDocument,
    base_config: SnapConfig,
    make_observer: F,
) -> Vec<SharedSnapController>
where
    F: Fn(ElementId, ThresholdConfig) -> SharedIntersectionObserver,
{
    let containers = doc.elements_with_attribute(CONTAINER_ATTR);
    tracing::debug!(containers = containers.len(), "scanning for snap containers");

    let mut mounted = Vec::with_capacity(containers.len());
    for container in containers {
        let config = base_config.resolve_for(doc.as_ref(), container);
        let observer = make_observer(container, config.threshold);
        match SnapController::mount(doc.clone(), container, observer, config) {
            Ok(controller) => mounted.push(controller),
            Err(err) => {
                tracing::warn!(?container, %err, "skipping container");
            }
        }
    }
    mounted
}
