//! # Linesmith Demos
//!
//! Demo scenes showcasing Linesmith debug drawing.
//!
//! ## Available Demos
//!
//! - `shapes_demo` - Every debug shape animated in a window
//! - `headless_demo` - The same scene over the recording backend, no window

use linesmith_app::{FrameContext, FrameHandler};
use linesmith_core::math::{quat_from_axis_angle_degrees, vec3_forward, vec3_right, vec3_up, Vec3};
use linesmith_debug_drawer::{colors, DebugManager, DrawResult, LineBackend, LineStyle};

/// Demos library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lines queued by one [`ShapesScene::draw`], within the default drawing cap.
pub const SCENE_LINES: usize = 120;

/// Scene that draws one of every debug shape, spinning with scaled time.
#[derive(Debug, Default)]
pub struct ShapesScene {
    frames: u64,
    failures: u64,
}

impl ShapesScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Draw calls rejected so far.
    pub fn failures(&self) -> u64 {
        self.failures
    }

    /// Queue the whole scene for the frame at scaled time `t`.
    pub fn draw<B: LineBackend>(debug: &mut DebugManager<B>, t: f32) -> DrawResult<()> {
        let spin = t * 45.0;

        // Axes
        debug.draw_line(Vec3::zeros(), vec3_right(), colors::RED)?;
        debug.draw_line(Vec3::zeros(), vec3_up(), colors::GREEN)?;
        debug.draw_line(Vec3::zeros(), vec3_forward(), colors::BLUE)?;
        debug.add_line(
            Vec3::new(-2.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            colors::MAGENTA,
            colors::CYAN,
            0.05,
        )?;
        debug.draw_cross(Vec3::new(0.0, 2.0, 0.0), 0.25, colors::YELLOW)?;

        debug.draw_arc(
            vec3_up(),
            Vec3::new(-3.0, 0.0, 0.0),
            1.0,
            12,
            spin,
            90.0,
            colors::YELLOW,
        )?;
        debug.draw_arc_from_side(
            vec3_forward(),
            Vec3::new(-3.0, 2.5, 0.0),
            0.75,
            vec3_right(),
            180.0,
            8,
            LineStyle::new(colors::CYAN).with_width(0.1),
        )?;
        debug.draw_circle(vec3_up(), Vec3::new(3.0, 0.0, 0.0), 1.0, 16, colors::WHITE)?;
        debug.draw_sphere(Vec3::new(0.0, 0.0, -3.0), 0.8, 10, colors::GREEN)?;
        debug.draw_cylinder(
            Vec3::new(3.0, 2.5, 0.0),
            quat_from_axis_angle_degrees(&vec3_forward(), spin),
            1.5,
            0.25,
            0.5,
            6,
            LineStyle::new(colors::MAGENTA).with_thickness(0.05),
        )?;
        debug.draw_star(
            vec3_forward(),
            Vec3::new(0.0, -2.5, 0.0),
            1.0,
            0.4,
            10,
            colors::YELLOW,
        )?;
        Ok(())
    }
}

impl<B: LineBackend> FrameHandler<B> for ShapesScene {
    fn on_init(&mut self, debug: &mut DebugManager<B>) {
        log::info!(
            "Shapes scene ready (drawing {}, cap {})",
            if debug.is_drawing_enabled() { "on" } else { "off" },
            debug.max_drawings()
        );
    }

    fn on_update(&mut self, ctx: &mut FrameContext<B>) -> bool {
        let t = ctx.elapsed_time();
        if let Err(e) = Self::draw(ctx.debug(), t) {
            log::warn!("Scene draw failed: {}", e);
            self.failures += 1;
        }
        self.frames += 1;
        true
    }

    fn on_shutdown(&mut self, debug: &mut DebugManager<B>) {
        log::info!(
            "Shapes scene done after {} frames, {} line handles",
            self.frames,
            debug.pool_size()
        );
    }
}
