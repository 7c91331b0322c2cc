//! Frame handler trait.

use linesmith_debug_drawer::{DebugManager, LineBackend};

use crate::context::FrameContext;

/// Client logic driven by [`App`](crate::App).
///
/// # Lifecycle
///
/// 1. `on_init` - once, before the first frame
/// 2. `on_update` - every frame, after the debug manager's update hook; draw here
/// 3. `on_late_update` - every frame, right before the debug flush
/// 4. `on_shutdown` - once, when the loop stops
///
/// # Example
///
/// ```
/// use linesmith_app::{FrameContext, FrameHandler};
/// use linesmith_core::math::Vec3;
/// use linesmith_debug_drawer::{colors, LineBackend};
///
/// struct Marker;
///
/// impl<B: LineBackend> FrameHandler<B> for Marker {
///     fn on_update(&mut self, ctx: &mut FrameContext<B>) -> bool {
///         let t = ctx.elapsed_time();
///         if let Err(e) = ctx.debug().draw_cross(Vec3::new(t.sin(), 0.0, 0.0), 0.2, colors::RED) {
///             log::warn!("{}", e);
///         }
///         true
///     }
/// }
/// ```
pub trait FrameHandler<B: LineBackend> {
    /// Called once before the first frame.
    fn on_init(&mut self, _debug: &mut DebugManager<B>) {}

    /// Called every frame after input has been applied.
    ///
    /// Returns `true` to continue running, `false` to exit. The frame's
    /// drawings are still flushed when it returns `false`.
    fn on_update(&mut self, ctx: &mut FrameContext<B>) -> bool;

    /// Called every frame after `on_update`, before queued drawings are flushed.
    fn on_late_update(&mut self, _ctx: &mut FrameContext<B>) {}

    /// Called once when the loop stops.
    fn on_shutdown(&mut self, _debug: &mut DebugManager<B>) {}
}
