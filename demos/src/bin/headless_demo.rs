//! # Headless Demo
//!
//! Runs the shapes scene without a window and reports pool statistics.
//! Every 30th frame presses ArrowUp to show the time scale stepping.
//!
//! ```bash
//! ./headless_demo --enable-drawing --max-frames 120 --max-drawings 256
//! ```

use clap::Parser;
use linesmith_app::{init_logging, App, HostArgs, InputFrame};
use linesmith_core::input::KeyCode;
use linesmith_debug_drawer::RecordingBackend;
use linesmith_demos::ShapesScene;

const DEFAULT_FRAMES: u64 = 60;

fn main() {
    let mut args = HostArgs::parse();
    init_logging(&args.log_filter);
    linesmith_core::init();
    linesmith_app::init();

    if args.max_frames.is_none() {
        args.max_frames = Some(DEFAULT_FRAMES);
    }

    let backend = RecordingBackend::with_shaders(["Particles/Standard Unlit"]);
    let mut app = App::new(ShapesScene::new(), backend, &args);

    let mut frame = 0u64;
    let inputs = std::iter::repeat_with(move || {
        frame += 1;
        if frame % 30 == 0 {
            InputFrame::with_keys([KeyCode::ArrowUp])
        } else {
            InputFrame::new()
        }
    });
    let frames = app.run_frames(inputs);

    let stats = app.last_flush();
    log::info!(
        "Ran {} frames: {} lines drawn last frame, {} dropped, pool size {}, time scale x{}",
        frames,
        stats.drawn,
        stats.dropped,
        app.debug().pool_size(),
        app.time_scale().get()
    );
}
