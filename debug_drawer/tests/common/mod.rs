//! Shared helpers for debug drawer integration tests.

use linesmith_core::math::Vec3;
use linesmith_debug_drawer::{DebugDrawerConfig, DebugManager, RecordingBackend};

/// Shader name the test backend resolves.
pub const TEST_SHADER: &str = "Particles/Standard Unlit";

/// Which material setup to build the manager with.
#[derive(Debug, Clone, Copy)]
pub enum Material {
    Resolved,
    Degraded,
}

/// Build an enabled manager over a [`RecordingBackend`].
pub fn manager(material: Material) -> DebugManager<RecordingBackend> {
    let backend = match material {
        Material::Resolved => RecordingBackend::with_shaders([TEST_SHADER]),
        Material::Degraded => RecordingBackend::new(),
    };
    DebugManager::new(backend, DebugDrawerConfig::new().with_enabled(true))
}

/// Start and end points of every queued request.
pub fn queued_endpoints(manager: &DebugManager<RecordingBackend>) -> Vec<(Vec3, Vec3)> {
    manager
        .queue()
        .requests()
        .iter()
        .map(|r| (r.start(), r.end()))
        .collect()
}

pub fn approx_eq(a: &Vec3, b: &Vec3) -> bool {
    (a - b).norm() < 1e-4
}
