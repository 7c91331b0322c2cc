//! Procedural geometry for debug shapes.
//!
//! Everything here is pure: functions sample points on rings and arcs and
//! decompose shapes into [`Segment`]s. The drawing API in `draw_api` turns
//! the segments into queued draw requests.
//!
//! Rings are built from a canonical reference point `(0, 0, radius)` that is
//! carried from the up axis onto the ring normal with a shortest-arc rotation
//! and then spun about the normal. Angles are in degrees.

use linesmith_core::math::{
    quat_from_axis_angle_degrees, quat_from_to_rotation, signed_angle_degrees, vec3_up, Quat,
    Vec3,
};

/// A single straight line from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vec3,
    pub end: Vec3,
}

impl Segment {
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f32 {
        (self.end - self.start).norm()
    }
}

/// A chord drawn with optional ribbon width.
///
/// Zero width gives one centerline. Any other width gives two parallel
/// edges plus a cross-line joining them at the chord's start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinePair {
    Single(Segment),
    Ribbon([Segment; 3]),
}

impl LinePair {
    /// Segments in draw order.
    pub fn segments(&self) -> &[Segment] {
        match self {
            Self::Single(segment) => std::slice::from_ref(segment),
            Self::Ribbon(segments) => segments,
        }
    }
}

/// Direction of the point at angle 0 on a unit ring around `normal`.
pub fn reference_direction(normal: &Vec3) -> Vec3 {
    quat_from_to_rotation(&vec3_up(), normal) * Vec3::z()
}

/// Point at `angle_degrees` on the ring of `radius` around `origin`, in the
/// plane perpendicular to `normal`.
pub fn surface_point(angle_degrees: f32, normal: &Vec3, origin: &Vec3, radius: f32) -> Vec3 {
    let reference = quat_from_to_rotation(&vec3_up(), normal) * Vec3::new(0.0, 0.0, radius);
    let point = quat_from_axis_angle_degrees(normal, angle_degrees) * reference;
    point + origin
}

/// Point `segment_index` of a ring split into `segments` equal steps.
///
/// `segments` must be non-zero.
pub fn surface_point_at_segment(
    segment_index: usize,
    normal: &Vec3,
    origin: &Vec3,
    radius: f32,
    segments: usize,
) -> Vec3 {
    let angle = 360.0 * segment_index as f32 / segments as f32;
    surface_point(angle, normal, origin, radius)
}

/// Start angle, in degrees, at which a ring around `normal` passes through
/// the direction `start_side`.
pub fn start_angle_for_side(normal: &Vec3, start_side: &Vec3) -> f32 {
    signed_angle_degrees(&reference_direction(normal), start_side, normal)
}

/// Decompose the chord `origin -> origin + offset` into a [`LinePair`].
///
/// The edges are offset by `±normal * width / 2`. `normal` is used as given,
/// so a non-unit normal scales the ribbon.
pub fn line_pair(normal: &Vec3, origin: &Vec3, offset: &Vec3, width: f32) -> LinePair {
    let half = normal * (width * 0.5);

    let lower = Segment::new(origin - half, origin + offset - half);
    if width == 0.0 {
        return LinePair::Single(lower);
    }

    let upper = Segment::new(origin + half, origin + offset + half);
    let cross = Segment::new(origin - half, origin + half);
    LinePair::Ribbon([lower, upper, cross])
}

/// `segments` samples spread evenly over `[start_angle, start_angle + arc_angle]`,
/// both ends included.
///
/// `segments` must be at least 2.
pub fn arc_points(
    normal: &Vec3,
    origin: &Vec3,
    radius: f32,
    segments: usize,
    start_angle: f32,
    arc_angle: f32,
) -> Vec<Vec3> {
    let last = (segments - 1) as f32;
    (0..segments)
        .map(|i| {
            let angle = (i as f32 / last) * arc_angle + start_angle;
            surface_point(angle, normal, origin, radius)
        })
        .collect()
}

/// `segments` samples spread evenly around a full ring, the first at angle 0.
pub fn circle_points(normal: &Vec3, origin: &Vec3, radius: f32, segments: usize) -> Vec<Vec3> {
    (0..segments)
        .map(|i| surface_point_at_segment(i, normal, origin, radius, segments))
        .collect()
}

/// Ring samples alternating between `radius` (even indices) and
/// `inner_radius` (odd indices).
pub fn star_points(
    normal: &Vec3,
    origin: &Vec3,
    radius: f32,
    inner_radius: f32,
    segments: usize,
) -> Vec<Vec3> {
    (0..segments)
        .map(|i| {
            let r = if i % 2 == 0 { radius } else { inner_radius };
            surface_point_at_segment(i, normal, origin, r, segments)
        })
        .collect()
}

/// World-space top and bottom rings of a cylinder.
///
/// Before rotation the cylinder axis is the up axis: the top ring sits at
/// `+length / 2` with `top_radius`, the bottom ring at `-length / 2` with
/// `bottom_radius`. Both rings are rotated by `rotation` and moved to `center`.
pub fn cylinder_rings(
    center: &Vec3,
    rotation: &Quat,
    length: f32,
    top_radius: f32,
    bottom_radius: f32,
    segments: usize,
) -> (Vec<Vec3>, Vec<Vec3>) {
    let up = vec3_up();
    let origin = Vec3::zeros();
    let top_offset = Vec3::new(0.0, length * 0.5, 0.0);
    let bottom_offset = Vec3::new(0.0, length * -0.5, 0.0);

    let mut top = Vec::with_capacity(segments);
    let mut bottom = Vec::with_capacity(segments);
    for i in 0..segments {
        let t = surface_point_at_segment(i, &up, &origin, top_radius, segments) + top_offset;
        let b = surface_point_at_segment(i, &up, &origin, bottom_radius, segments) + bottom_offset;
        top.push(rotation * t + center);
        bottom.push(rotation * b + center);
    }
    (top, bottom)
}

/// Chords through consecutive `points`, closed back to the first point.
pub fn closed_loop(normal: &Vec3, points: &[Vec3], width: f32) -> Vec<LinePair> {
    let mut pairs = Vec::with_capacity(points.len());
    for window in points.windows(2) {
        pairs.push(line_pair(normal, &window[0], &(window[1] - window[0]), width));
    }
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        if points.len() > 1 {
            pairs.push(line_pair(normal, last, &(first - last), width));
        }
    }
    pairs
}

/// Chords through consecutive `points`, then the two radii that close the
/// arc into a wedge: last point to `origin`, and `origin` to the first point.
pub fn wedge(normal: &Vec3, origin: &Vec3, points: &[Vec3], width: f32) -> Vec<LinePair> {
    let mut pairs = Vec::with_capacity(points.len() + 1);
    for window in points.windows(2) {
        pairs.push(line_pair(normal, &window[0], &(window[1] - window[0]), width));
    }
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        if points.len() > 1 {
            pairs.push(line_pair(normal, last, &(origin - last), width));
            pairs.push(line_pair(normal, origin, &(first - origin), width));
        }
    }
    pairs
}

/// Edges of a cylinder: for each ring index a top-to-bottom strut, then the
/// top ring edge and the bottom ring edge to the next index (wrapping).
pub fn cylinder_edges(top: &[Vec3], bottom: &[Vec3]) -> Vec<Segment> {
    let count = top.len().min(bottom.len());
    let mut segments = Vec::with_capacity(count * 3);
    for i in 0..count {
        let next = if i + 1 < count { i + 1 } else { 0 };
        segments.push(Segment::new(top[i], bottom[i]));
        segments.push(Segment::new(top[i], top[next]));
        segments.push(Segment::new(bottom[i], bottom[next]));
    }
    segments
}

/// Two diagonals through `position` in the XY plane, each reaching `size`
/// along both axes.
pub fn cross_segments(position: &Vec3, size: f32) -> [Segment; 2] {
    [
        Segment::new(
            position + Vec3::new(size, size, 0.0),
            position + Vec3::new(-size, -size, 0.0),
        ),
        Segment::new(
            position + Vec3::new(-size, size, 0.0),
            position + Vec3::new(size, -size, 0.0),
        ),
    ]
}
