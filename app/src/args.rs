//! Command line arguments for Linesmith hosts.
//!
//! Uses clap for CLI parsing with:
//! - Help text (`--help`)
//! - Validation and clear error messages

use clap::Parser;
use linesmith_debug_drawer::{DebugDrawerConfig, DEFAULT_MAX_DRAWINGS};

/// Host arguments.
///
/// # Examples
///
/// ```bash
/// # Show help
/// ./linesmith --help
///
/// # Start with drawing on and a larger cap
/// ./linesmith --enable-drawing --max-drawings 1024
///
/// # Probe a custom line shader first
/// ./linesmith --shader "Custom/Lines" --shader "Particles/Standard Unlit"
///
/// # Run for 100 frames then exit (useful for testing)
/// ./linesmith --max-frames 100
/// ```
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "linesmith",
    about = "Linesmith debug drawing host",
    long_about = "Runs a frame loop with immediate-mode debug line drawing.\n\n\
        KEYS:\n\
          Space       toggle debug drawing\n\
          ArrowUp     speed up time\n\
          ArrowDown   slow down time\n\
          Numpad0     reset time scale to x0.5\n\
        \n\
        EXAMPLES:\n\
          # Headless smoke test\n\
          ./linesmith --enable-drawing --max-frames 10",
    version
)]
pub struct HostArgs {
    /// Start with debug drawing enabled.
    #[arg(long)]
    pub enable_drawing: bool,

    /// Per-frame cap on queued drawings; extra drawings are dropped.
    #[arg(long, default_value_t = DEFAULT_MAX_DRAWINGS)]
    pub max_drawings: usize,

    /// Exit after N frames.
    #[arg(long)]
    pub max_frames: Option<u64>,

    /// Line shader to probe, in order. Repeatable; defaults to the built-in list.
    #[arg(long = "shader", value_name = "NAME")]
    pub shaders: Vec<String>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    pub log_filter: String,

    /// Window title.
    #[arg(long, default_value = "Linesmith")]
    pub title: String,

    /// Initial window width in pixels.
    #[arg(long, default_value = "1280")]
    pub width: u32,

    /// Initial window height in pixels.
    #[arg(long, default_value = "720")]
    pub height: u32,
}

impl HostArgs {
    /// Debug manager settings derived from these arguments.
    pub fn debug_config(&self) -> DebugDrawerConfig {
        let config = DebugDrawerConfig::new()
            .with_enabled(self.enable_drawing)
            .with_max_drawings(self.max_drawings);

        if self.shaders.is_empty() {
            config
        } else {
            config.with_shader_candidates(self.shaders.iter().cloned())
        }
    }

    /// Set the maximum number of frames.
    pub fn with_max_frames(mut self, max_frames: u64) -> Self {
        self.max_frames = Some(max_frames);
        self
    }

    /// Set whether drawing starts enabled.
    pub fn with_drawing_enabled(mut self, enabled: bool) -> Self {
        self.enable_drawing = enabled;
        self
    }
}

impl Default for HostArgs {
    fn default() -> Self {
        Self {
            enable_drawing: false,
            max_drawings: DEFAULT_MAX_DRAWINGS,
            max_frames: None,
            shaders: Vec::new(),
            log_filter: "info".to_string(),
            title: "Linesmith".to_string(),
            width: 1280,
            height: 720,
        }
    }
}
