//! Main application struct and frame loop.

use std::time::Duration;

use winit::application::ApplicationHandler;
use winit::error::EventLoopError;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use linesmith_debug_drawer::{DebugManager, FlushStats, LineBackend};

use crate::args::HostArgs;
use crate::context::FrameContext;
use crate::handler::FrameHandler;
use crate::input::InputFrame;
use crate::time::{FrameClock, FrameTime, SharedTimeScale};

/// Raw frame time used by [`App::run_frames`].
pub const HEADLESS_FRAME_TIME: Duration = Duration::from_micros(16_667);

/// Owns the debug manager and drives frames for a [`FrameHandler`].
///
/// Each frame runs, in order:
///
/// 1. [`DebugManager::update`] with the frame's input
/// 2. [`FrameHandler::on_update`]
/// 3. [`FrameHandler::on_late_update`], skipped when `on_update` returned `false`
/// 4. [`DebugManager::flush`]
///
/// # Example
///
/// ```
/// use linesmith_app::{App, FrameContext, FrameHandler, HostArgs, InputFrame};
/// use linesmith_core::math::Vec3;
/// use linesmith_debug_drawer::{colors, LineBackend, RecordingBackend};
///
/// struct Lines;
///
/// impl<B: LineBackend> FrameHandler<B> for Lines {
///     fn on_update(&mut self, ctx: &mut FrameContext<B>) -> bool {
///         ctx.debug().draw_line(Vec3::zeros(), Vec3::x(), colors::RED).is_ok()
///     }
/// }
///
/// let args = HostArgs::default().with_drawing_enabled(true).with_max_frames(3);
/// let mut app = App::new(Lines, RecordingBackend::new(), &args);
/// let frames = app.run_frames(std::iter::repeat_with(InputFrame::new));
/// assert_eq!(frames, 3);
/// ```
pub struct App<H, B>
where
    H: FrameHandler<B>,
    B: LineBackend,
{
    handler: H,
    debug: DebugManager<B>,
    clock: FrameClock,
    time_scale: SharedTimeScale,
    max_frames: Option<u64>,
    frames: u64,
    last_flush: FlushStats,
    running: bool,
    initialized: bool,
    title: String,
    size: (u32, u32),
    window: Option<Window>,
    pending_input: InputFrame,
}

impl<H, B> App<H, B>
where
    H: FrameHandler<B>,
    B: LineBackend,
{
    /// Create a new application around `backend`.
    pub fn new(handler: H, backend: B, args: &HostArgs) -> Self {
        let time_scale = SharedTimeScale::default();
        Self {
            handler,
            debug: DebugManager::new(backend, args.debug_config()),
            clock: FrameClock::new(time_scale.clone()),
            time_scale,
            max_frames: args.max_frames,
            frames: 0,
            last_flush: FlushStats::default(),
            running: true,
            initialized: false,
            title: args.title.clone(),
            size: (args.width, args.height),
            window: None,
            pending_input: InputFrame::new(),
        }
    }

    pub fn debug(&self) -> &DebugManager<B> {
        &self.debug
    }

    pub fn debug_mut(&mut self) -> &mut DebugManager<B> {
        &mut self.debug
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Shared time-scale value written by the speed keys.
    pub fn time_scale(&self) -> &SharedTimeScale {
        &self.time_scale
    }

    /// Frames completed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Stats of the most recent flush.
    pub fn last_flush(&self) -> FlushStats {
        self.last_flush
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run one frame per input without a window, at a fixed frame time.
    ///
    /// Stops when the inputs run out, the handler returns `false`, or
    /// `max_frames` is reached. Returns the number of frames completed.
    pub fn run_frames<I>(&mut self, inputs: I) -> u64
    where
        I: IntoIterator<Item = InputFrame>,
    {
        self.init();
        let start = self.frames;
        for input in inputs {
            if !self.running {
                break;
            }
            let time = self.clock.advance(HEADLESS_FRAME_TIME);
            self.frame(&input, time);
        }
        self.shutdown();
        self.frames - start
    }

    fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.handler.on_init(&mut self.debug);
        self.initialized = true;
        self.running = self.max_frames != Some(0);
    }

    fn shutdown(&mut self) {
        if !self.initialized {
            return;
        }
        self.handler.on_shutdown(&mut self.debug);
        self.initialized = false;
        self.running = false;
    }

    /// Run a single frame.
    fn frame(&mut self, input: &InputFrame, time: FrameTime) {
        self.debug.update(input, &mut self.time_scale);

        let mut ctx = FrameContext::new(&mut self.debug, input, time);
        let keep_running = self.handler.on_update(&mut ctx);
        if keep_running {
            self.handler.on_late_update(&mut ctx);
        } else {
            self.running = false;
        }

        // The queue always ends the frame empty
        self.last_flush = self.debug.flush();
        self.frames += 1;

        if let Some(max_frames) = self.max_frames {
            if self.frames >= max_frames {
                log::info!("Reached max frames limit ({}), exiting", max_frames);
                self.running = false;
            }
        }
    }
}

impl<H, B> App<H, B>
where
    H: FrameHandler<B> + 'static,
    B: LineBackend + 'static,
{
    /// Run the application in a window, one frame per redraw.
    ///
    /// Initializes logging from `args.log_filter`.
    pub fn run(handler: H, backend: B, args: &HostArgs) -> Result<(), EventLoopError> {
        crate::init_logging(&args.log_filter);
        linesmith_core::init();
        crate::init();

        let event_loop = EventLoop::new()?;
        let mut app = Self::new(handler, backend, args);
        event_loop.run_app(&mut app)
    }
}

impl<H, B> ApplicationHandler for App<H, B>
where
    H: FrameHandler<B>,
    B: LineBackend,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(self.size.0, self.size.1));

        match event_loop.create_window(attributes) {
            Ok(window) => {
                log::info!("Window created");
                self.window = Some(window);
                self.init();
                self.clock.reset();
            }
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.pending_input.record(&event);
            }

            WindowEvent::RedrawRequested => {
                if self.initialized && self.running {
                    let input = std::mem::take(&mut self.pending_input);
                    let time = self.clock.tick();
                    self.frame(&input, time);
                }

                if !self.running {
                    self.shutdown();
                    event_loop.exit();
                } else if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
