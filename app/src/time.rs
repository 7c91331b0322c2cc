//! Frame timing and the shared time-scale value.

use std::sync::Arc;
use std::time::{Duration, Instant};

use linesmith_debug_drawer::TimeScale;
use parking_lot::RwLock;

/// Process-wide time-scale multiplier.
///
/// Clones share one value, so the speed controller can write it while the
/// frame clock and client code read it.
#[derive(Debug, Clone)]
pub struct SharedTimeScale {
    value: Arc<RwLock<f32>>,
}

impl SharedTimeScale {
    pub fn new(scale: f32) -> Self {
        Self {
            value: Arc::new(RwLock::new(scale)),
        }
    }

    /// Current multiplier.
    pub fn get(&self) -> f32 {
        *self.value.read()
    }
}

impl Default for SharedTimeScale {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl TimeScale for SharedTimeScale {
    fn set_time_scale(&mut self, scale: f32) {
        *self.value.write() = scale;
    }
}

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Scaled time since the previous tick, in seconds.
    pub dt: f32,
    /// Unscaled time since the previous tick, in seconds.
    pub unscaled_dt: f32,
    /// Scaled time accumulated since the clock started.
    pub elapsed: f32,
    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing scaled [`FrameTime`] snapshots.
///
/// Raw delta time is clamped before scaling so a debugger pause or a stalled
/// frame does not feed a huge step to client code.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    elapsed: f32,
    dt_min: Duration,
    dt_max: Duration,
    time_scale: SharedTimeScale,
}

impl FrameClock {
    /// Creates a clock with default clamps reading `time_scale`.
    pub fn new(time_scale: SharedTimeScale) -> Self {
        Self::with_clamps(
            time_scale,
            Duration::from_micros(100),
            Duration::from_millis(250),
        )
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(time_scale: SharedTimeScale, dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frame_index: 0,
            elapsed: 0.0,
            dt_min,
            dt_max,
            time_scale,
        }
    }

    /// Resets the wall-clock baseline.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Advances by the wall-clock time since the last tick.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let raw = now.saturating_duration_since(self.last);
        self.last = now;
        self.advance(raw)
    }

    /// Advances by an explicit raw duration.
    pub fn advance(&mut self, raw: Duration) -> FrameTime {
        let unscaled = raw.clamp(self.dt_min, self.dt_max).as_secs_f32();
        let dt = unscaled * self.time_scale.get();
        self.elapsed += dt;

        let time = FrameTime {
            dt,
            unscaled_dt: unscaled,
            elapsed: self.elapsed,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        time
    }
}
