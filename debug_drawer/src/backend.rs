//! Host rendering collaborators.
//!
//! The debug drawer never talks to a renderer directly. A host implements
//! [`LineBackend`] to hand out line resources and resolve the line shader,
//! and [`LineHandle`] for the resources themselves.
//!
//! [`RecordingBackend`] is an in-memory implementation for tests, demos and
//! headless hosts.

use linesmith_core::math::Vec3;

use crate::request::{Color, DrawRequest};
use crate::vertex::LineVertex;

/// One reusable drawable that renders a single polyline.
pub trait LineHandle {
    /// Material type written alongside the geometry.
    type Material;

    /// Show or hide the line without releasing it.
    fn set_enabled(&mut self, enabled: bool);

    /// Whether the line is currently shown.
    fn is_enabled(&self) -> bool;

    /// Replace points, colors, width and material with those of `request`.
    ///
    /// `material` is `None` when the backend could not resolve a line shader;
    /// the handle should still accept the geometry.
    fn write(&mut self, request: &DrawRequest, material: Option<&Self::Material>);
}

/// Factory for line resources and the line material.
pub trait LineBackend {
    /// Resolved line material.
    type Material: Clone;
    /// Line resource created by this backend.
    type Handle: LineHandle<Material = Self::Material>;

    /// Resolve a shading program by name, returning a material for it if available.
    fn resolve_shader(&mut self, name: &str) -> Option<Self::Material>;

    /// Create the node that owns every line resource. Called once, before any
    /// [`create_line`](Self::create_line).
    fn create_container(&mut self, label: &str);

    /// Create a new line resource parented under the container.
    fn create_line(&mut self, label: &str) -> Self::Handle;
}

/// Material produced by [`RecordingBackend`]: the name of the shader it resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedMaterial {
    pub shader: String,
}

/// Line handle that keeps the last written request in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordedLine {
    label: String,
    enabled: bool,
    positions: Vec<Vec3>,
    vertices: Vec<LineVertex>,
    start_color: Color,
    end_color: Color,
    width: f32,
    material: Option<RecordedMaterial>,
    write_count: u64,
}

impl RecordedLine {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Vertex data as it would be uploaded.
    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    pub fn start_color(&self) -> Color {
        self.start_color
    }

    pub fn end_color(&self) -> Color {
        self.end_color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn material(&self) -> Option<&RecordedMaterial> {
        self.material.as_ref()
    }

    /// Number of times geometry was written into this handle.
    pub fn write_count(&self) -> u64 {
        self.write_count
    }
}

impl LineHandle for RecordedLine {
    type Material = RecordedMaterial;

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn write(&mut self, request: &DrawRequest, material: Option<&RecordedMaterial>) {
        self.positions.clear();
        self.positions.extend_from_slice(request.positions());
        self.vertices = request.vertices();
        self.start_color = request.start_color();
        self.end_color = request.end_color();
        self.width = request.thickness();
        self.material = material.cloned();
        self.write_count += 1;
    }
}

/// In-memory [`LineBackend`].
///
/// Resolves only the shader names it was constructed with, so a backend
/// built with [`new`](Self::new) exercises the degraded (no material) path.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    available_shaders: Vec<String>,
    probed: Vec<String>,
    container: Option<String>,
    lines_created: usize,
}

impl RecordingBackend {
    /// Backend with no shaders available.
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that resolves the given shader names.
    pub fn with_shaders<I, S>(shaders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            available_shaders: shaders.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Shader names probed so far, in probe order.
    pub fn probed(&self) -> &[String] {
        &self.probed
    }

    /// Label of the container, once created.
    pub fn container(&self) -> Option<&str> {
        self.container.as_deref()
    }

    /// Total line resources created.
    pub fn lines_created(&self) -> usize {
        self.lines_created
    }
}

impl LineBackend for RecordingBackend {
    type Material = RecordedMaterial;
    type Handle = RecordedLine;

    fn resolve_shader(&mut self, name: &str) -> Option<RecordedMaterial> {
        self.probed.push(name.to_string());
        self.available_shaders
            .iter()
            .any(|s| s == name)
            .then(|| RecordedMaterial {
                shader: name.to_string(),
            })
    }

    fn create_container(&mut self, label: &str) {
        self.container = Some(label.to_string());
    }

    fn create_line(&mut self, label: &str) -> RecordedLine {
        self.lines_created += 1;
        RecordedLine {
            label: label.to_string(),
            ..RecordedLine::default()
        }
    }
}
