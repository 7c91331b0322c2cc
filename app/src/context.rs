//! Per-frame context handed to frame handlers.

use linesmith_debug_drawer::{DebugManager, LineBackend};

use crate::input::InputFrame;
use crate::time::FrameTime;

/// Borrowed view of one frame: the debug manager, this frame's input and
/// its timing.
pub struct FrameContext<'a, B: LineBackend> {
    debug: &'a mut DebugManager<B>,
    input: &'a InputFrame,
    time: FrameTime,
}

impl<'a, B: LineBackend> FrameContext<'a, B> {
    pub(crate) fn new(debug: &'a mut DebugManager<B>, input: &'a InputFrame, time: FrameTime) -> Self {
        Self { debug, input, time }
    }

    /// Debug manager for drawing this frame.
    pub fn debug(&mut self) -> &mut DebugManager<B> {
        self.debug
    }

    /// Keys pressed this frame.
    pub fn input(&self) -> &InputFrame {
        self.input
    }

    /// Scaled seconds since the previous frame.
    pub fn delta_time(&self) -> f32 {
        self.time.dt
    }

    /// Scaled seconds since the first frame.
    pub fn elapsed_time(&self) -> f32 {
        self.time.elapsed
    }

    pub fn frame_number(&self) -> u64 {
        self.time.frame_index
    }

    pub fn time(&self) -> FrameTime {
        self.time
    }
}
