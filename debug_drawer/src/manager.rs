use linesmith_core::input::KeyInput;

use crate::backend::LineBackend;
use crate::config::DebugDrawerConfig;
use crate::error::DrawResult;
use crate::geometry::Segment;
use crate::pool::LinePool;
use crate::queue::DrawQueue;
use crate::request::{DrawRequest, LineStyle};
use crate::speed::{SpeedBindings, SpeedController, TimeScale};

/// Counters reported by [`DebugManager::flush`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlushStats {
    /// Requests written into enabled handles.
    pub drawn: usize,
    /// Pool size after the flush.
    pub pool_size: usize,
    /// Handles created by this flush.
    pub created: usize,
    /// Requests dropped this frame by the drawing cap.
    pub dropped: usize,
}

/// Frame-scoped debug line manager.
///
/// Owns the draw queue, the line pool and the drawing/speed state. The host
/// builds exactly one per process and drives it from two hooks:
///
/// - [`update`](Self::update) once per frame, before game logic draws
/// - [`flush`](Self::flush) once per frame, after every draw call
///
/// Drawings last one frame. Anything not re-requested before the next flush
/// disappears.
pub struct DebugManager<B: LineBackend> {
    backend: B,
    material: Option<B::Material>,
    queue: DrawQueue,
    pool: LinePool<B::Handle>,
    enabled: bool,
    speed: SpeedController,
    bindings: SpeedBindings,
    frame: u64,
}

impl<B: LineBackend> DebugManager<B> {
    /// Create the manager, resolving the line material and the container.
    ///
    /// Shader candidates are probed in order and the first that resolves is
    /// used. If none resolves the manager is degraded: it still accepts and
    /// writes drawings, without a material.
    pub fn new(mut backend: B, config: DebugDrawerConfig) -> Self {
        let material = config
            .shader_candidates
            .iter()
            .find_map(|name| backend.resolve_shader(name).map(|m| (name, m)));

        let material = match material {
            Some((name, material)) => {
                log::info!("Debug lines using shader '{}'", name);
                backend.create_container("debug_manager");
                Some(material)
            }
            None => {
                log::error!(
                    "No line shader available (tried {:?}); debug lines will render without a material",
                    config.shader_candidates
                );
                backend.create_container("debug_manager[degraded]");
                None
            }
        };

        Self {
            backend,
            material,
            queue: DrawQueue::new(config.max_drawings),
            pool: LinePool::new(),
            enabled: config.enabled,
            speed: SpeedController::new(),
            bindings: config.bindings,
            frame: 0,
        }
    }

    /// Whether no line material could be resolved.
    pub fn is_degraded(&self) -> bool {
        self.material.is_none()
    }

    pub fn material(&self) -> Option<&B::Material> {
        self.material.as_ref()
    }

    pub fn is_drawing_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable drawing. Takes effect for the next draw call.
    pub fn set_drawing_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Per-frame cap on queued drawings.
    pub fn max_drawings(&self) -> usize {
        self.queue.capacity()
    }

    pub fn set_max_drawings(&mut self, max_drawings: usize) {
        self.queue.set_capacity(max_drawings);
    }

    /// Requests queued so far this frame.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn queue(&self) -> &DrawQueue {
        &self.queue
    }

    pub fn pool(&self) -> &LinePool<B::Handle> {
        &self.pool
    }

    /// Handles ever created.
    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    /// Handles enabled by the last flush.
    pub fn active_handles(&self) -> usize {
        self.pool.active_count()
    }

    pub fn speed(&self) -> &SpeedController {
        &self.speed
    }

    pub fn speed_index(&self) -> usize {
        self.speed.index()
    }

    /// Current time-scale multiplier.
    pub fn time_scale(&self) -> f32 {
        self.speed.scale()
    }

    pub fn bindings(&self) -> &SpeedBindings {
        &self.bindings
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Frames flushed so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Per-frame update hook.
    ///
    /// Toggles drawing on the toggle key and applies at most one speed
    /// change, writing the new multiplier to `time_scale`.
    pub fn update(&mut self, input: &impl KeyInput, time_scale: &mut impl TimeScale) {
        if input.key_pressed(self.bindings.toggle_drawing) {
            self.enabled = !self.enabled;
            log::info!(
                "Debug drawing toggled via keypress - {}",
                if self.enabled { "on" } else { "off" }
            );
        }

        if let Some(event) = SpeedController::poll(input, &self.bindings) {
            self.speed.apply(event, time_scale);
        }
    }

    /// Late-update hook: push this frame's requests into the pool and clear the queue.
    ///
    /// Runs whether or not drawing is enabled, so disabling drawing hides
    /// every line on the next flush.
    pub fn flush(&mut self) -> FlushStats {
        let dropped = self.queue.dropped();
        if dropped > 0 {
            log::warn!(
                "Dropped {} debug drawings over the per-frame cap of {}",
                dropped,
                self.queue.capacity()
            );
        }

        let reconciled =
            self.pool
                .reconcile(self.queue.requests(), &mut self.backend, self.material.as_ref());
        self.queue.clear();
        self.frame += 1;

        let stats = FlushStats {
            drawn: reconciled.active,
            pool_size: self.pool.len(),
            created: reconciled.created,
            dropped,
        };
        log::trace!("Debug flush {}: {:?}", self.frame, stats);
        stats
    }

    /// Queue a prepared request. No-op while drawing is disabled.
    pub fn enqueue(&mut self, request: DrawRequest) {
        if !self.enabled {
            return;
        }
        self.queue.push(request);
    }

    /// Queue one request per segment, or none if any segment is invalid.
    pub(crate) fn enqueue_segments(
        &mut self,
        segments: &[Segment],
        style: &LineStyle,
    ) -> DrawResult<()> {
        if !self.enabled {
            return Ok(());
        }
        let requests = segments
            .iter()
            .map(|segment| {
                DrawRequest::line(
                    segment.start,
                    segment.end,
                    style.color,
                    style.color,
                    style.thickness,
                )
            })
            .collect::<DrawResult<Vec<_>>>()?;
        for request in requests {
            self.queue.push(request);
        }
        Ok(())
    }
}
