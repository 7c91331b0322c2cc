//! # Linesmith App
//!
//! Host frame loop for Linesmith debug drawing.
//!
//! The [`App`] owns the [`DebugManager`](linesmith_debug_drawer::DebugManager)
//! and calls its update and flush hooks around client code each frame. It
//! runs either in a winit window ([`App::run`]) or headless over a sequence
//! of input frames ([`App::run_frames`]).
//!
//! ## Overview
//!
//! - [`FrameHandler`] - Trait for client per-frame logic
//! - [`HostArgs`] - Command line arguments (clap)
//! - [`App`] - Frame loop driver
//! - [`FrameClock`] / [`SharedTimeScale`] - Scaled frame timing
//! - [`InputFrame`] - Keys pressed during one frame
//!
//! ## Example
//!
//! ```ignore
//! use clap::Parser;
//! use linesmith_app::{App, FrameContext, FrameHandler, HostArgs};
//! use linesmith_debug_drawer::{LineBackend, RecordingBackend};
//!
//! struct MyApp;
//!
//! impl<B: LineBackend> FrameHandler<B> for MyApp {
//!     fn on_update(&mut self, ctx: &mut FrameContext<B>) -> bool {
//!         // Draw debug shapes here
//!         true
//!     }
//! }
//!
//! fn main() {
//!     let args = HostArgs::parse();
//!     App::run(MyApp, RecordingBackend::new(), &args).unwrap();
//! }
//! ```

mod app;
mod args;
mod context;
mod handler;
mod input;
mod logging;
mod time;

pub use app::{App, HEADLESS_FRAME_TIME};
pub use args::HostArgs;
pub use context::FrameContext;
pub use handler::FrameHandler;
pub use input::{map_winit_key, InputFrame};
pub use logging::init_logging;
pub use time::{FrameClock, FrameTime, SharedTimeScale};

/// App library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the app subsystem.
pub fn init() {
    log::info!("Linesmith App v{} initialized", VERSION);
}
