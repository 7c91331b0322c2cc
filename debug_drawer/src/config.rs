use crate::speed::SpeedBindings;

/// Line shaders probed at construction, most preferred first.
pub const DEFAULT_SHADER_CANDIDATES: [&str; 2] = [
    "Universal Render Pipeline/Particles/Unlit",
    "Particles/Standard Unlit",
];

/// Default per-frame cap on queued drawings.
pub const DEFAULT_MAX_DRAWINGS: usize = 128;

/// Largest segment count a single shape accepts.
pub const MAX_SEGMENTS: usize = 4096;

/// Settings for a [`DebugManager`](crate::DebugManager).
///
/// # Example
///
/// ```
/// use linesmith_debug_drawer::DebugDrawerConfig;
///
/// let config = DebugDrawerConfig::new()
///     .with_enabled(true)
///     .with_max_drawings(512);
/// assert!(config.enabled);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DebugDrawerConfig {
    /// Whether drawing starts enabled.
    pub enabled: bool,
    /// Requests accepted per frame; the rest are dropped.
    pub max_drawings: usize,
    /// Shader names to probe, in order.
    pub shader_candidates: Vec<String>,
    /// Keys read by the update hook.
    pub bindings: SpeedBindings,
}

impl DebugDrawerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether drawing starts enabled.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the per-frame cap.
    pub fn with_max_drawings(mut self, max_drawings: usize) -> Self {
        self.max_drawings = max_drawings;
        self
    }

    /// Replace the shader probe list.
    pub fn with_shader_candidates<I, S>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.shader_candidates = candidates.into_iter().map(Into::into).collect();
        self
    }

    /// Set the update-hook key bindings.
    pub fn with_bindings(mut self, bindings: SpeedBindings) -> Self {
        self.bindings = bindings;
        self
    }
}

impl Default for DebugDrawerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_drawings: DEFAULT_MAX_DRAWINGS,
            shader_candidates: DEFAULT_SHADER_CANDIDATES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            bindings: SpeedBindings::default(),
        }
    }
}
