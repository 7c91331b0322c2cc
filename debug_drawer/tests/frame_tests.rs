//! Frame-level integration tests for the debug drawer.
//!
//! Every test drives a [`DebugManager`] over the in-memory
//! `RecordingBackend`, so no renderer is needed. Cases run against both a
//! resolved material and the degraded (no material) setup where the outcome
//! should not depend on it.

mod common;

use rstest::rstest;

use common::{approx_eq, manager, queued_endpoints, Material, TEST_SHADER};
use linesmith_core::input::KeyCode;
use linesmith_core::math::{vec3_up, Quat, Vec3};
use linesmith_debug_drawer::{colors, DrawError, LineHandle, LineStyle, MAX_SEGMENTS};

// ============================================================================
// Queue and flush
// ============================================================================

#[rstest]
#[case::resolved(Material::Resolved)]
#[case::degraded(Material::Degraded)]
fn test_queue_counts_and_flush_empties(#[case] material: Material) {
    let mut debug = manager(material);
    for i in 0..5 {
        debug
            .draw_line(Vec3::zeros(), Vec3::new(i as f32, 1.0, 0.0), colors::WHITE)
            .unwrap();
    }
    assert_eq!(debug.queue_len(), 5);

    let stats = debug.flush();
    assert_eq!(stats.drawn, 5);
    assert_eq!(debug.queue_len(), 0);
    assert_eq!(debug.active_handles(), 5);
}

#[rstest]
#[case::grow_then_shrink(&[3, 7, 2, 0, 5])]
#[case::steady(&[4, 4, 4])]
#[case::idle_first(&[0, 0, 6, 1])]
fn test_pool_is_monotone(#[case] frames: &[usize]) {
    let mut debug = manager(Material::Resolved);
    let mut previous = 0;
    let mut busiest = 0;

    for &count in frames {
        for _ in 0..count {
            debug.draw_line(Vec3::zeros(), Vec3::x(), colors::RED).unwrap();
        }
        let stats = debug.flush();
        busiest = busiest.max(count);

        assert!(stats.pool_size >= previous);
        assert_eq!(stats.pool_size, busiest);
        assert_eq!(debug.active_handles(), count);
        for (index, handle) in debug.pool().handles().enumerate() {
            assert_eq!(handle.is_enabled(), index < count);
        }
        previous = stats.pool_size;
    }
    assert_eq!(debug.backend().lines_created(), busiest);
}

#[test]
fn test_flush_writes_material_and_width() {
    let mut debug = manager(Material::Resolved);
    debug
        .draw_line(
            Vec3::zeros(),
            Vec3::x(),
            LineStyle::new(colors::BLUE).with_thickness(0.4),
        )
        .unwrap();
    debug.flush();

    let line = debug.pool().get(0).unwrap();
    assert_eq!(line.width(), 0.4);
    assert_eq!(line.start_color(), colors::BLUE);
    assert_eq!(line.material().unwrap().shader, TEST_SHADER);
    assert_eq!(line.vertices()[1].width, 0.4);
}

#[test]
fn test_cap_drops_and_counts() {
    let mut debug = manager(Material::Resolved);
    debug.set_max_drawings(3);
    for _ in 0..5 {
        debug.draw_line(Vec3::zeros(), Vec3::x(), colors::RED).unwrap();
    }
    assert_eq!(debug.queue_len(), 3);

    let stats = debug.flush();
    assert_eq!(stats.drawn, 3);
    assert_eq!(stats.dropped, 2);

    debug.draw_line(Vec3::zeros(), Vec3::x(), colors::RED).unwrap();
    assert_eq!(debug.flush().dropped, 0);
}

// ============================================================================
// Enable gate
// ============================================================================

#[test]
fn test_disabled_leaves_queue_and_pool_unchanged() {
    let mut debug = manager(Material::Resolved);
    debug.draw_line(Vec3::zeros(), Vec3::x(), colors::RED).unwrap();
    debug.flush();
    debug.set_drawing_enabled(false);

    debug.draw_line(Vec3::zeros(), Vec3::x(), colors::RED).unwrap();
    debug
        .draw_sphere(Vec3::zeros(), 1.0, 8, colors::GREEN)
        .unwrap();
    assert_eq!(debug.queue_len(), 0);
    assert_eq!(debug.pool_size(), 1);

    let stats = debug.flush();
    assert_eq!(stats.drawn, 0);
    assert_eq!(debug.active_handles(), 0);
    assert_eq!(debug.pool_size(), 1);
}

#[test]
fn test_toggle_key_gates_drawing() {
    let mut debug = manager(Material::Resolved);
    let mut time_scale = 1.0_f32;
    let space: &[KeyCode] = &[KeyCode::Space];

    debug.update(&space, &mut time_scale);
    debug.draw_line(Vec3::zeros(), Vec3::x(), colors::RED).unwrap();
    assert_eq!(debug.queue_len(), 0);

    debug.update(&space, &mut time_scale);
    debug.draw_line(Vec3::zeros(), Vec3::x(), colors::RED).unwrap();
    assert_eq!(debug.queue_len(), 1);
}

// ============================================================================
// Shapes
// ============================================================================

#[rstest]
#[case::four(4)]
#[case::sixteen(16)]
fn test_circle_closes(#[case] segments: usize) {
    let mut debug = manager(Material::Resolved);
    debug
        .draw_circle(vec3_up(), Vec3::new(1.0, 2.0, 3.0), 1.5, segments, colors::WHITE)
        .unwrap();

    let endpoints = queued_endpoints(&debug);
    assert_eq!(endpoints.len(), segments);
    let (first_start, _) = endpoints[0];
    let (_, last_end) = endpoints[segments - 1];
    assert!(approx_eq(&last_end, &first_start));
}

#[rstest]
#[case::coarse(4)]
#[case::fine(12)]
fn test_full_arc_differs_from_circle(#[case] segments: usize) {
    let origin = Vec3::zeros();

    let mut arc = manager(Material::Resolved);
    arc.draw_arc(vec3_up(), origin, 1.0, segments, 0.0, 360.0, colors::WHITE)
        .unwrap();
    let arc_lines = queued_endpoints(&arc);
    assert_eq!(arc_lines.len(), segments + 1);

    // S - 1 chords close the ring, then the two radii
    let (first_start, _) = arc_lines[0];
    let (_, last_chord_end) = arc_lines[segments - 2];
    assert!(approx_eq(&last_chord_end, &first_start));
    assert!(approx_eq(&arc_lines[segments - 1].1, &origin));
    assert!(approx_eq(&arc_lines[segments].0, &origin));

    let mut circle = manager(Material::Resolved);
    circle
        .draw_circle(vec3_up(), origin, 1.0, segments, colors::WHITE)
        .unwrap();
    let circle_lines = queued_endpoints(&circle);
    assert_eq!(circle_lines.len(), segments);
    assert!(circle_lines
        .iter()
        .all(|(s, e)| !approx_eq(s, &origin) && !approx_eq(e, &origin)));
}

#[test]
fn test_star_radii_alternate() {
    let mut debug = manager(Material::Resolved);
    debug
        .draw_star(Vec3::new(0.0, 0.0, 1.0), Vec3::zeros(), 2.0, 1.0, 6, colors::YELLOW)
        .unwrap();

    let endpoints = queued_endpoints(&debug);
    assert_eq!(endpoints.len(), 6);
    for (i, (start, _)) in endpoints.iter().enumerate() {
        let expected = if i % 2 == 0 { 2.0 } else { 1.0 };
        assert!((start.norm() - expected).abs() < 1e-4);
    }
}

#[rstest]
#[case::centerline(0.0, 1)]
#[case::ribbon(0.25, 3)]
fn test_ribbon_width_per_chord(#[case] width: f32, #[case] per_chord: usize) {
    let mut debug = manager(Material::Resolved);
    let style = LineStyle::new(colors::GREEN).with_width(width);
    debug
        .draw_circle(vec3_up(), Vec3::zeros(), 1.0, 8, style)
        .unwrap();
    assert_eq!(debug.queue_len(), 8 * per_chord);
}

#[test]
fn test_rotated_cylinder_struts_follow_axis() {
    let mut debug = manager(Material::Resolved);
    let rotation = Quat::from_axis_angle(&Vec3::z_axis(), std::f32::consts::FRAC_PI_2);
    debug
        .draw_cylinder(Vec3::zeros(), rotation, 4.0, 1.0, 1.0, 8, colors::CYAN)
        .unwrap();

    let endpoints = queued_endpoints(&debug);
    assert_eq!(endpoints.len(), 24);
    for (start, end) in endpoints.iter().step_by(3) {
        let strut = end - start;
        assert!((strut.norm() - 4.0).abs() < 1e-4);
        assert!(strut.y.abs() < 1e-4);
    }
}

// ============================================================================
// Argument validation
// ============================================================================

#[rstest]
#[case::zero(0)]
#[case::one(1)]
#[case::over_limit(MAX_SEGMENTS + 1)]
#[case::huge(usize::MAX)]
fn test_segment_count_out_of_range_rejected(#[case] segments: usize) {
    let mut debug = manager(Material::Resolved);
    let results = [
        debug.draw_circle(vec3_up(), Vec3::zeros(), 1.0, segments, colors::RED),
        debug.draw_arc(vec3_up(), Vec3::zeros(), 1.0, segments, 0.0, 90.0, colors::RED),
        debug.draw_star(vec3_up(), Vec3::zeros(), 1.0, 0.5, segments, colors::RED),
        debug.draw_sphere(Vec3::zeros(), 1.0, segments, colors::RED),
        debug.draw_cylinder(Vec3::zeros(), Quat::identity(), 1.0, 1.0, 1.0, segments, colors::RED),
    ];
    for result in results {
        assert!(matches!(result, Err(DrawError::InvalidArgument(_))));
    }
    assert_eq!(debug.queue_len(), 0);
}

#[test]
fn test_zero_normal_rejected() {
    let mut debug = manager(Material::Resolved);
    let result = debug.draw_arc_from_side(
        Vec3::zeros(),
        Vec3::zeros(),
        1.0,
        Vec3::x(),
        90.0,
        8,
        colors::RED,
    );
    assert!(matches!(result, Err(DrawError::InvalidArgument(_))));
    assert_eq!(debug.queue_len(), 0);
}

#[test]
fn test_overflowing_points_rejected() {
    let mut debug = manager(Material::Resolved);
    let result = debug.draw_circle(vec3_up(), Vec3::new(3e38, 0.0, 3e38), 3e38, 8, colors::RED);
    assert!(matches!(result, Err(DrawError::InvalidRequest(_))));
    assert_eq!(debug.queue_len(), 0);
}

#[test]
fn test_long_line_keeps_finite_colors() {
    let mut debug = manager(Material::Resolved);
    debug
        .draw_line(Vec3::new(-3e38, 0.0, 0.0), Vec3::new(3e38, 0.0, 0.0), colors::RED)
        .unwrap();
    assert_eq!(debug.flush().drawn, 1);

    let line = debug.pool().get(0).unwrap();
    assert!(line.vertices().iter().all(|v| v.color == colors::RED));
}
