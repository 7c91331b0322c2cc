//! # Shapes Demo
//!
//! Opens a window and draws every debug shape each frame.
//!
//! Keys: Space toggles drawing, ArrowUp/ArrowDown change the time scale,
//! Numpad0 resets it. The recording backend keeps the lines in memory, so
//! this demo exercises the frame loop and logs rather than rendering.

use clap::Parser;
use linesmith_app::{App, HostArgs};
use linesmith_debug_drawer::RecordingBackend;
use linesmith_demos::ShapesScene;

fn main() {
    let args = HostArgs::parse();
    let backend = RecordingBackend::with_shaders(["Particles/Standard Unlit"]);

    if let Err(e) = App::run(ShapesScene::new(), backend, &args) {
        log::error!("Event loop error: {}", e);
        std::process::exit(1);
    }
}
