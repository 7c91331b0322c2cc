//! Immediate-mode debug line drawing for Linesmith hosts.
//!
//! Client code requests lines and wireframe shapes every frame; the manager
//! turns them into reusable line resources owned by the host renderer. A
//! drawing lasts exactly one frame.
//!
//! # Architecture
//!
//! - [`DebugManager`] - per-process context object: draw API, update and flush hooks
//! - [`LineBackend`] / [`LineHandle`] - host-side line resources and shader lookup
//! - [`LinePool`] - growable-only pool of line handles reconciled at flush
//! - [`geometry`] - pure point and segment generators for shapes
//! - [`SpeedController`] - keyboard-driven time-scale steps
//!
//! # Usage
//!
//! ```
//! use linesmith_core::math::{vec3_up, Vec3};
//! use linesmith_debug_drawer::{colors, DebugDrawerConfig, DebugManager, RecordingBackend};
//!
//! // Setup (once)
//! let backend = RecordingBackend::with_shaders(["Particles/Standard Unlit"]);
//! let mut debug = DebugManager::new(backend, DebugDrawerConfig::new().with_enabled(true));
//!
//! // Each frame, from client code:
//! debug.draw_line(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0), colors::RED).unwrap();
//! debug.draw_circle(vec3_up(), Vec3::zeros(), 1.0, 16, colors::GREEN).unwrap();
//!
//! // Late in the frame:
//! let stats = debug.flush();
//! assert_eq!(stats.drawn, 17);
//! ```

mod config;
mod draw_api;
mod error;
pub mod geometry;
mod manager;
mod pool;
mod queue;
mod request;
mod speed;
mod vertex;

pub mod backend;

pub use backend::{LineBackend, LineHandle, RecordedLine, RecordedMaterial, RecordingBackend};
pub use config::{
    DebugDrawerConfig, DEFAULT_MAX_DRAWINGS, DEFAULT_SHADER_CANDIDATES, MAX_SEGMENTS,
};
pub use error::{DrawError, DrawResult};
pub use manager::{DebugManager, FlushStats};
pub use pool::{LinePool, Reconciled};
pub use queue::DrawQueue;
pub use request::{colors, Color, DrawRequest, LineStyle, DEFAULT_LINE_THICKNESS};
pub use speed::{
    SpeedBindings, SpeedController, SpeedEvent, TimeScale, DEFAULT_SPEED_INDEX, RESET_SPEED_INDEX,
    SPEED_TABLE,
};
pub use vertex::LineVertex;
