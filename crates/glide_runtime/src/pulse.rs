//! Pulse highlight
//!
//! Navigating to a slide dips its opacity immediately and restores it a
//! moment later. The restore is a fire-and-forget timer task: nothing in
//! the navigator waits on it, and navigating again before it fires simply
//! refreshes the deadline.
//!
//! The scheduler can tick restores on its own background thread or leave
//! them for the host to drain with [`run_pending`](PulseScheduler::run_pending);
//! tests use the manual mode for determinism.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use glide_dom::{Document, ElementId, SharedDocument};

use crate::config::PulseConfig;

/// Tick interval for the background restore thread
const TICK_INTERVAL: Duration = Duration::from_millis(10);

struct PendingRestore {
    element: ElementId,
    due: Instant,
}

struct PulseInner {
    pending: Vec<PendingRestore>,
}

/// Schedules the opacity dip-and-restore pulse
pub struct PulseScheduler {
    doc: SharedDocument,
    config: PulseConfig,
    inner: Arc<Mutex<PulseInner>>,
    stop_flag: Arc<AtomicBool>,
    thread_handle: Option<JoinHandle<()>>,
}

impl PulseScheduler {
    pub fn new(doc: SharedDocument, config: PulseConfig) -> Self {
        Self {
            doc,
            config,
            inner: Arc::new(Mutex::new(PulseInner {
                pending: Vec::new(),
            })),
            stop_flag: Arc::new(AtomicBool::new(false)),
            thread_handle: None,
        }
    }

    /// Start the restore timer on a background thread
    ///
    /// Idempotent; does nothing when already running.
    pub fn start_background(&mut self) {
        if self.thread_handle.is_some() {
            return;
        }

        let doc = self.doc.clone();
        let inner = Arc::clone(&self.inner);
        let stop_flag = Arc::clone(&self.stop_flag);
        let restore_opacity = self.config.restore_opacity;

        self.thread_handle = Some(thread::spawn(move || {
            while !stop_flag.load(Ordering::Relaxed) {
                thread::sleep(TICK_INTERVAL);
                apply_restores(&doc, &inner, restore_opacity, false);
            }
        }));
    }

    /// Dip the element's opacity and schedule its restore
    ///
    /// A second pulse on the same element refreshes the deadline instead
    /// of stacking a duplicate restore.
    pub fn pulse(&self, element: ElementId) {
        if !self.config.enabled {
            return;
        }

        self.doc.set_opacity(element, self.config.dip_opacity);

        let due = Instant::now() + self.config.duration;
        let mut inner = self.inner.lock().unwrap();
        if let Some(existing) = inner.pending.iter_mut().find(|p| p.element == element) {
            existing.due = due;
        } else {
            inner.pending.push(PendingRestore { element, due });
        }
    }

    /// Apply every restore whose deadline has passed (manual mode)
    pub fn run_pending(&self) {
        apply_restores(&self.doc, &self.inner, self.config.restore_opacity, false);
    }

    /// Apply every scheduled restore regardless of deadline
    pub fn flush(&self) {
        apply_restores(&self.doc, &self.inner, self.config.restore_opacity, true);
    }

    /// Number of restores still scheduled
    pub fn pending_count(&self) -> usize {
        self.inner.lock().unwrap().pending.len()
    }
}

impl Drop for PulseScheduler {
    fn drop(&mut self) {
        self.stop_flag.store(true, Ordering::Relaxed);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

/// Pop due restores under the lock, write opacity outside it
fn apply_restores(
    doc: &SharedDocument,
    inner: &Mutex<PulseInner>,
    restore_opacity: f32,
    force: bool,
) {
    let due: Vec<PendingRestore> = {
        let mut inner = inner.lock().unwrap();
        let now = Instant::now();
        let mut due = Vec::new();
        let mut i = 0;
        while i < inner.pending.len() {
            if force || inner.pending[i].due <= now {
                due.push(inner.pending.swap_remove(i));
            } else {
                i += 1;
            }
        }
        due
    };

    for restore in due {
        doc.set_opacity(restore.element, restore_opacity);
    }
}
