//! Growable pool of reusable line handles.
//!
//! The pool reconciles its size against the draw queue once per frame. It
//! only ever grows: handles past the current queue length are disabled, not
//! destroyed, so a frame with fewer drawings than the busiest frame so far
//! costs no resource churn.

use crate::backend::{LineBackend, LineHandle};
use crate::request::DrawRequest;

/// Outcome of one pool reconciliation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reconciled {
    /// Handles enabled and written this frame.
    pub active: usize,
    /// Handles created this frame.
    pub created: usize,
}

/// A pooled line handle and its activity flag.
#[derive(Debug)]
struct PooledLine<H> {
    handle: H,
    active: bool,
}

/// Growable-only collection of line handles.
#[derive(Debug)]
pub struct LinePool<H> {
    lines: Vec<PooledLine<H>>,
}

impl<H: LineHandle> LinePool<H> {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Number of handles ever created. Never decreases.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of handles enabled by the last reconciliation.
    pub fn active_count(&self) -> usize {
        self.lines.iter().filter(|line| line.active).count()
    }

    /// Whether the handle at `index` is enabled.
    pub fn is_active(&self, index: usize) -> bool {
        self.lines.get(index).is_some_and(|line| line.active)
    }

    /// Handle at `index`.
    pub fn get(&self, index: usize) -> Option<&H> {
        self.lines.get(index).map(|line| &line.handle)
    }

    /// Iterates handles in pool order.
    pub fn handles(&self) -> impl Iterator<Item = &H> {
        self.lines.iter().map(|line| &line.handle)
    }

    /// Bring the pool in line with `requests`.
    ///
    /// Grows the pool to at least `requests.len()` handles, writes request
    /// `i` into handle `i` and enables it, and disables every handle past
    /// the last request.
    pub fn reconcile<B>(
        &mut self,
        requests: &[DrawRequest],
        backend: &mut B,
        material: Option<&H::Material>,
    ) -> Reconciled
    where
        B: LineBackend<Handle = H, Material = H::Material>,
    {
        let total = requests.len().max(self.lines.len());
        let mut created = 0;

        for index in 0..total {
            if index >= self.lines.len() {
                let handle = backend.create_line(&format!("debug_line_{index}"));
                self.lines.push(PooledLine {
                    handle,
                    active: false,
                });
                created += 1;
            }

            let line = &mut self.lines[index];
            match requests.get(index) {
                Some(request) => {
                    line.handle.write(request, material);
                    line.handle.set_enabled(true);
                    line.active = true;
                }
                None => {
                    line.handle.set_enabled(false);
                    line.active = false;
                }
            }
        }

        if created > 0 {
            log::debug!(
                "Line pool grew by {} to {} handles",
                created,
                self.lines.len()
            );
        }

        Reconciled {
            active: requests.len(),
            created,
        }
    }
}

impl<H: LineHandle> Default for LinePool<H> {
    fn default() -> Self {
        Self::new()
    }
}
