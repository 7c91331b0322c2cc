use linesmith_core::math::{vec3_is_finite, Vec3};

use crate::error::{DrawError, DrawResult};
use crate::vertex::LineVertex;

/// Linear RGBA color.
pub type Color = [f32; 4];

/// Line thickness used when a caller does not specify one.
pub const DEFAULT_LINE_THICKNESS: f32 = 0.1;

/// Common colors for quick debug output.
pub mod colors {
    use super::Color;

    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
    pub const RED: Color = [1.0, 0.0, 0.0, 1.0];
    pub const GREEN: Color = [0.0, 1.0, 0.0, 1.0];
    pub const BLUE: Color = [0.0, 0.0, 1.0, 1.0];
    pub const YELLOW: Color = [1.0, 1.0, 0.0, 1.0];
    pub const CYAN: Color = [0.0, 1.0, 1.0, 1.0];
    pub const MAGENTA: Color = [1.0, 0.0, 1.0, 1.0];
}

/// Color, thickness and ribbon width shared by every line a shape emits.
///
/// `thickness` is the rendered width of each individual line. `width` is the
/// ribbon extrusion used by arcs, circles and stars: with a non-zero width
/// each chord becomes two parallel edges joined by a cross-line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: Color,
    pub thickness: f32,
    pub width: f32,
}

impl LineStyle {
    /// Style with the default thickness and no ribbon width.
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            thickness: DEFAULT_LINE_THICKNESS,
            width: 0.0,
        }
    }

    /// Returns this style with a different line thickness.
    #[must_use]
    pub const fn with_thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    /// Returns this style with a different ribbon width.
    #[must_use]
    pub const fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub(crate) fn validate(&self) -> DrawResult<()> {
        if !self.thickness.is_finite() || self.thickness < 0.0 {
            return Err(DrawError::InvalidArgument(format!(
                "thickness must be finite and non-negative, got {}",
                self.thickness
            )));
        }
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(DrawError::InvalidArgument(format!(
                "width must be finite and non-negative, got {}",
                self.width
            )));
        }
        Ok(())
    }
}

impl From<Color> for LineStyle {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}

/// One queued polyline: endpoint colors, points and thickness.
///
/// Immutable once built. The queue owns it until the next flush writes it
/// into a pooled line handle.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawRequest {
    start_color: Color,
    end_color: Color,
    positions: Vec<Vec3>,
    thickness: f32,
}

impl DrawRequest {
    /// Build a request from an ordered point sequence.
    ///
    /// Fails if fewer than two points are given, if any point is not finite,
    /// or if `thickness` is negative or not finite.
    pub fn new(
        start_color: Color,
        end_color: Color,
        positions: Vec<Vec3>,
        thickness: f32,
    ) -> DrawResult<Self> {
        if positions.len() < 2 {
            return Err(DrawError::InvalidRequest(format!(
                "a line needs at least 2 points, got {}",
                positions.len()
            )));
        }
        if let Some(index) = positions.iter().position(|p| !vec3_is_finite(p)) {
            return Err(DrawError::InvalidRequest(format!(
                "point {index} is not finite"
            )));
        }
        if !thickness.is_finite() || thickness < 0.0 {
            return Err(DrawError::InvalidRequest(format!(
                "thickness must be finite and non-negative, got {thickness}"
            )));
        }
        Ok(Self {
            start_color,
            end_color,
            positions,
            thickness,
        })
    }

    /// Build a two-point request.
    pub fn line(
        start: Vec3,
        end: Vec3,
        start_color: Color,
        end_color: Color,
        thickness: f32,
    ) -> DrawResult<Self> {
        Self::new(start_color, end_color, vec![start, end], thickness)
    }

    pub fn start_color(&self) -> Color {
        self.start_color
    }

    pub fn end_color(&self) -> Color {
        self.end_color
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// First point of the polyline.
    pub fn start(&self) -> Vec3 {
        self.positions[0]
    }

    /// Last point of the polyline.
    pub fn end(&self) -> Vec3 {
        self.positions[self.positions.len() - 1]
    }

    /// Expand into per-vertex data.
    ///
    /// Color is interpolated from start to end by distance along the
    /// polyline, falling back to point index when the length is zero or
    /// overflows `f32`.
    pub fn vertices(&self) -> Vec<LineVertex> {
        let total: f32 = self
            .positions
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).norm())
            .sum();
        let last = (self.positions.len() - 1) as f32;

        let mut travelled = 0.0;
        let mut vertices = Vec::with_capacity(self.positions.len());
        for (index, position) in self.positions.iter().enumerate() {
            if index > 0 {
                travelled += (position - self.positions[index - 1]).norm();
            }
            let t = if total.is_finite() && total > 0.0 {
                travelled / total
            } else {
                index as f32 / last
            };
            vertices.push(LineVertex {
                position: [position.x, position.y, position.z],
                color: lerp_color(self.start_color, self.end_color, t),
                width: self.thickness,
            });
        }
        vertices
    }
}

fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        a[3] + (b[3] - a[3]) * t,
    ]
}
