use linesmith_core::math::{vec3_forward, vec3_is_finite, vec3_right, vec3_up, Quat, Vec3};

use crate::backend::LineBackend;
use crate::config::MAX_SEGMENTS;
use crate::error::{DrawError, DrawResult};
use crate::geometry::{self, LinePair, Segment};
use crate::manager::DebugManager;
use crate::request::{Color, DrawRequest, LineStyle};

fn check_segments(segments: usize) -> DrawResult<()> {
    if segments < 2 {
        return Err(DrawError::InvalidArgument(format!(
            "segments must be at least 2, got {segments}"
        )));
    }
    if segments > MAX_SEGMENTS {
        return Err(DrawError::InvalidArgument(format!(
            "segments must be at most {MAX_SEGMENTS}, got {segments}"
        )));
    }
    Ok(())
}

fn check_normal(normal: &Vec3) -> DrawResult<()> {
    if !vec3_is_finite(normal) || normal.norm_squared() == 0.0 {
        return Err(DrawError::InvalidArgument(format!(
            "normal must be finite and non-zero, got {normal:?}"
        )));
    }
    Ok(())
}

fn check_length(name: &str, value: f32) -> DrawResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(DrawError::InvalidArgument(format!(
            "{name} must be finite and non-negative, got {value}"
        )));
    }
    Ok(())
}

fn check_point(name: &str, point: &Vec3) -> DrawResult<()> {
    if !vec3_is_finite(point) {
        return Err(DrawError::InvalidArgument(format!(
            "{name} must be finite, got {point:?}"
        )));
    }
    Ok(())
}

fn check_angle(name: &str, degrees: f32) -> DrawResult<()> {
    if !degrees.is_finite() {
        return Err(DrawError::InvalidArgument(format!(
            "{name} must be finite, got {degrees}"
        )));
    }
    Ok(())
}

impl<B: LineBackend> DebugManager<B> {
    /// Draw a single line in one color.
    pub fn draw_line(&mut self, start: Vec3, end: Vec3, style: impl Into<LineStyle>) -> DrawResult<()> {
        let style = style.into();
        style.validate()?;
        let request = DrawRequest::line(start, end, style.color, style.color, style.thickness)?;
        self.enqueue(request);
        Ok(())
    }

    /// Draw a line whose color fades from `start_color` to `end_color`.
    pub fn add_line(
        &mut self,
        start: Vec3,
        end: Vec3,
        start_color: Color,
        end_color: Color,
        thickness: f32,
    ) -> DrawResult<()> {
        let request = DrawRequest::line(start, end, start_color, end_color, thickness)?;
        self.enqueue(request);
        Ok(())
    }

    /// Draw an X marker at `position` in the XY plane.
    pub fn draw_cross(&mut self, position: Vec3, size: f32, color: Color) -> DrawResult<()> {
        check_point("position", &position)?;
        check_length("size", size)?;
        if !self.is_drawing_enabled() {
            return Ok(());
        }

        let style = LineStyle::new(color);
        self.enqueue_segments(&geometry::cross_segments(&position, size), &style)
    }

    /// Draw an arc closed into a wedge.
    ///
    /// Samples `segments` points from `start_angle` to `start_angle + arc_angle`
    /// (degrees) and joins them, then adds the radii from the last point back
    /// to `origin` and from `origin` to the first point. A 360 degree arc with
    /// `S` segments is therefore `S - 1` chords plus two radii.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_arc(
        &mut self,
        normal: Vec3,
        origin: Vec3,
        radius: f32,
        segments: usize,
        start_angle: f32,
        arc_angle: f32,
        style: impl Into<LineStyle>,
    ) -> DrawResult<()> {
        let style = style.into();
        self.check_ring(&normal, &origin, radius, segments, &style)?;
        check_angle("start_angle", start_angle)?;
        check_angle("arc_angle", arc_angle)?;
        if !self.is_drawing_enabled() {
            return Ok(());
        }

        let points = geometry::arc_points(&normal, &origin, radius, segments, start_angle, arc_angle);
        let pairs = geometry::wedge(&normal, &origin, &points, style.width);
        self.enqueue_pairs(&pairs, &style)
    }

    /// Draw an arc starting in the direction of `start_side`.
    ///
    /// The start angle is the signed angle about `normal` from the ring's
    /// zero-angle direction to `start_side`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_arc_from_side(
        &mut self,
        normal: Vec3,
        origin: Vec3,
        radius: f32,
        start_side: Vec3,
        arc_angle: f32,
        segments: usize,
        style: impl Into<LineStyle>,
    ) -> DrawResult<()> {
        check_point("start_side", &start_side)?;
        check_normal(&normal)?;
        let start_angle = geometry::start_angle_for_side(&normal, &start_side);
        self.draw_arc(normal, origin, radius, segments, start_angle, arc_angle, style)
    }

    /// Draw a closed ring of `segments` chords around `normal`.
    pub fn draw_circle(
        &mut self,
        normal: Vec3,
        origin: Vec3,
        radius: f32,
        segments: usize,
        style: impl Into<LineStyle>,
    ) -> DrawResult<()> {
        let style = style.into();
        self.check_ring(&normal, &origin, radius, segments, &style)?;
        if !self.is_drawing_enabled() {
            return Ok(());
        }

        let points = geometry::circle_points(&normal, &origin, radius, segments);
        let pairs = geometry::closed_loop(&normal, &points, style.width);
        self.enqueue_pairs(&pairs, &style)
    }

    /// Draw three great circles around `origin`, one per axis.
    pub fn draw_sphere(
        &mut self,
        origin: Vec3,
        radius: f32,
        segments: usize,
        style: impl Into<LineStyle>,
    ) -> DrawResult<()> {
        let style = style.into();
        for normal in [vec3_up(), vec3_right(), vec3_forward()] {
            self.draw_circle(normal, origin, radius, segments, style)?;
        }
        Ok(())
    }

    /// Draw a (possibly tapered) cylinder wireframe.
    ///
    /// The unrotated axis is up, with the top ring at `+length / 2`. Emits a
    /// strut and one edge on each ring per segment. Ribbon width is ignored.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_cylinder(
        &mut self,
        center: Vec3,
        rotation: Quat,
        length: f32,
        top_radius: f32,
        bottom_radius: f32,
        segments: usize,
        style: impl Into<LineStyle>,
    ) -> DrawResult<()> {
        let style = style.into();
        style.validate()?;
        check_segments(segments)?;
        check_point("center", &center)?;
        check_length("length", length)?;
        check_length("top_radius", top_radius)?;
        check_length("bottom_radius", bottom_radius)?;
        if !self.is_drawing_enabled() {
            return Ok(());
        }

        let (top, bottom) =
            geometry::cylinder_rings(&center, &rotation, length, top_radius, bottom_radius, segments);
        self.enqueue_segments(&geometry::cylinder_edges(&top, &bottom), &style)
    }

    /// Draw a closed star alternating between `radius` and `inner_radius`.
    pub fn draw_star(
        &mut self,
        normal: Vec3,
        origin: Vec3,
        radius: f32,
        inner_radius: f32,
        segments: usize,
        style: impl Into<LineStyle>,
    ) -> DrawResult<()> {
        let style = style.into();
        self.check_ring(&normal, &origin, radius, segments, &style)?;
        check_length("inner_radius", inner_radius)?;
        if !self.is_drawing_enabled() {
            return Ok(());
        }

        let points = geometry::star_points(&normal, &origin, radius, inner_radius, segments);
        let pairs = geometry::closed_loop(&normal, &points, style.width);
        self.enqueue_pairs(&pairs, &style)
    }

    fn check_ring(
        &self,
        normal: &Vec3,
        origin: &Vec3,
        radius: f32,
        segments: usize,
        style: &LineStyle,
    ) -> DrawResult<()> {
        style.validate()?;
        check_segments(segments)?;
        check_normal(normal)?;
        check_point("origin", origin)?;
        check_length("radius", radius)
    }

    fn enqueue_pairs(&mut self, pairs: &[LinePair], style: &LineStyle) -> DrawResult<()> {
        let segments: Vec<Segment> = pairs.iter().flat_map(LinePair::segments).copied().collect();
        self.enqueue_segments(&segments, style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RecordingBackend;
    use crate::config::DebugDrawerConfig;
    use crate::request::colors;

    fn manager() -> DebugManager<RecordingBackend> {
        DebugManager::new(
            RecordingBackend::with_shaders(["Particles/Standard Unlit"]),
            DebugDrawerConfig::new().with_enabled(true),
        )
    }

    fn ends_near(segment: &Segment, point: &Vec3, epsilon: f32) -> bool {
        (segment.end - point).norm() < epsilon
    }

    fn queued_segments(manager: &DebugManager<RecordingBackend>) -> Vec<Segment> {
        manager
            .queue()
            .requests()
            .iter()
            .map(|r| Segment::new(r.start(), r.end()))
            .collect()
    }

    #[test]
    fn test_draw_line_uses_single_color() {
        let mut m = manager();
        m.draw_line(Vec3::zeros(), Vec3::x(), colors::RED).unwrap();
        let request = &m.queue().requests()[0];
        assert_eq!(request.start_color(), colors::RED);
        assert_eq!(request.end_color(), colors::RED);
        assert_eq!(request.thickness(), 0.1);
    }

    #[test]
    fn test_add_line_keeps_gradient() {
        let mut m = manager();
        m.add_line(Vec3::zeros(), Vec3::y(), colors::RED, colors::BLUE, 0.5)
            .unwrap();
        let request = &m.queue().requests()[0];
        assert_eq!(request.end_color(), colors::BLUE);
        assert_eq!(request.thickness(), 0.5);
    }

    #[test]
    fn test_cross_diagonals() {
        let mut m = manager();
        m.draw_cross(Vec3::new(1.0, 1.0, 0.0), 0.5, colors::YELLOW)
            .unwrap();
        let segments = queued_segments(&m);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].start, Vec3::new(1.5, 1.5, 0.0));
        assert_eq!(segments[0].end, Vec3::new(0.5, 0.5, 0.0));
        assert_eq!(segments[1].start, Vec3::new(0.5, 1.5, 0.0));
        assert_eq!(segments[1].end, Vec3::new(1.5, 0.5, 0.0));
    }

    #[test]
    fn test_circle_closes() {
        let mut m = manager();
        m.draw_circle(vec3_up(), Vec3::zeros(), 1.0, 4, colors::WHITE)
            .unwrap();
        let segments = queued_segments(&m);
        assert_eq!(segments.len(), 4);
        assert!(ends_near(&segments[3], &segments[0].start, 1e-5));
    }

    #[test]
    fn test_arc_is_wedge() {
        let mut m = manager();
        m.draw_arc(vec3_up(), Vec3::zeros(), 1.0, 5, 0.0, 90.0, colors::WHITE)
            .unwrap();
        let segments = queued_segments(&m);
        assert_eq!(segments.len(), 6);
        assert!(ends_near(&segments[4], &Vec3::zeros(), 1e-5));
        assert_eq!(segments[5].start, Vec3::zeros());
        assert!(ends_near(&segments[5], &segments[0].start, 1e-5));
    }

    #[test]
    fn test_arc_from_side_starts_on_side() {
        let mut m = manager();
        m.draw_arc_from_side(
            vec3_up(),
            Vec3::zeros(),
            2.0,
            vec3_right(),
            90.0,
            3,
            colors::WHITE,
        )
        .unwrap();
        let first = queued_segments(&m)[0].start;
        assert!((first - Vec3::new(2.0, 0.0, 0.0)).norm() < 1e-4);
    }

    #[test]
    fn test_ribbon_width_triples_chords() {
        let mut m = manager();
        let style = LineStyle::new(colors::GREEN).with_width(0.2);
        m.draw_circle(vec3_up(), Vec3::zeros(), 1.0, 8, style).unwrap();
        assert_eq!(m.queue_len(), 24);
    }

    #[test]
    fn test_sphere_draws_three_circles() {
        let mut m = manager();
        m.draw_sphere(Vec3::zeros(), 1.0, 6, colors::CYAN).unwrap();
        assert_eq!(m.queue_len(), 18);
    }

    #[test]
    fn test_cylinder_edge_count_and_thickness() {
        let mut m = manager();
        let style = LineStyle::new(colors::MAGENTA).with_thickness(0.3);
        m.draw_cylinder(Vec3::zeros(), Quat::identity(), 2.0, 1.0, 0.5, 6, style)
            .unwrap();
        assert_eq!(m.queue_len(), 18);
        assert!(m.queue().requests().iter().all(|r| r.thickness() == 0.3));

        let strut = queued_segments(&m)[0];
        assert!((strut.start.y - 1.0).abs() < 1e-5);
        assert!((strut.end.y + 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_star_alternates_radii() {
        let mut m = manager();
        m.draw_star(vec3_up(), Vec3::zeros(), 2.0, 1.0, 6, colors::WHITE)
            .unwrap();
        let segments = queued_segments(&m);
        assert_eq!(segments.len(), 6);
        for (i, segment) in segments.iter().enumerate() {
            let expected = if i % 2 == 0 { 2.0 } else { 1.0 };
            assert!((segment.start.norm() - expected).abs() < 1e-5);
        }
    }

    #[test]
    fn test_disabled_is_noop() {
        let mut m = manager();
        m.set_drawing_enabled(false);
        m.draw_line(Vec3::zeros(), Vec3::x(), colors::RED).unwrap();
        m.draw_circle(vec3_up(), Vec3::zeros(), 1.0, 8, colors::RED)
            .unwrap();
        assert_eq!(m.queue_len(), 0);
    }

    #[test]
    fn test_invalid_arguments_rejected_even_when_disabled() {
        let mut m = manager();
        m.set_drawing_enabled(false);
        let err = m
            .draw_circle(vec3_up(), Vec3::zeros(), 1.0, 1, colors::RED)
            .unwrap_err();
        assert!(matches!(err, DrawError::InvalidArgument(_)));

        m.set_drawing_enabled(true);
        assert!(m
            .draw_arc(Vec3::zeros(), Vec3::zeros(), 1.0, 8, 0.0, 90.0, colors::RED)
            .is_err());
        assert!(m
            .draw_star(vec3_up(), Vec3::zeros(), -1.0, 0.5, 8, colors::RED)
            .is_err());
        assert!(m
            .draw_line(Vec3::zeros(), Vec3::new(f32::NAN, 0.0, 0.0), colors::RED)
            .is_err());
        assert_eq!(m.queue_len(), 0);
    }

    #[test]
    fn test_segment_count_upper_bound() {
        let mut m = manager();
        let err = m
            .draw_circle(vec3_up(), Vec3::zeros(), 1.0, usize::MAX, colors::RED)
            .unwrap_err();
        assert!(matches!(err, DrawError::InvalidArgument(_)));
        assert!(m
            .draw_cylinder(
                Vec3::zeros(),
                Quat::identity(),
                1.0,
                1.0,
                1.0,
                MAX_SEGMENTS + 1,
                colors::RED,
            )
            .is_err());
        assert!(m
            .draw_star(vec3_up(), Vec3::zeros(), 1.0, 0.5, MAX_SEGMENTS, colors::RED)
            .is_ok());
    }

    #[test]
    fn test_overflowing_shape_is_rejected_whole() {
        let mut m = manager();
        let origin = Vec3::new(3e38, 0.0, 3e38);
        let err = m
            .draw_circle(vec3_up(), origin, 3e38, 8, colors::RED)
            .unwrap_err();
        assert!(matches!(err, DrawError::InvalidRequest(_)));
        assert_eq!(m.queue_len(), 0);

        assert!(m
            .draw_cross(Vec3::new(f32::MAX, 0.0, 0.0), f32::MAX, colors::RED)
            .is_err());
        assert_eq!(m.queue_len(), 0);
    }
}
