//! Math type aliases and helper functions.
//!
//! All rendering math is f32. Angles taken by the `*_degrees` helpers are in
//! degrees because the debug drawing API is expressed in degrees.

pub use nalgebra;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// Unit quaternion (f32) used for all rotations.
pub type Quat = nalgebra::UnitQuaternion<f32>;

/// World up axis `(0, 1, 0)`.
pub fn vec3_up() -> Vec3 {
    Vec3::y()
}

/// World right axis `(1, 0, 0)`.
pub fn vec3_right() -> Vec3 {
    Vec3::x()
}

/// World forward axis `(0, 0, 1)`.
pub fn vec3_forward() -> Vec3 {
    Vec3::z()
}

/// Create a rotation quaternion from x, y, z, w components.
///
/// The components are normalized.
pub fn quat_from_xyzw(x: f32, y: f32, z: f32, w: f32) -> Quat {
    Quat::from_quaternion(nalgebra::Quaternion::new(w, x, y, z))
}

/// Shortest-arc rotation taking the direction of `from` onto the direction of `to`.
///
/// Opposite directions produce a half turn about an axis perpendicular to
/// `from`: the X axis when `from` is vertical. A zero-length input yields
/// the identity.
pub fn quat_from_to_rotation(from: &Vec3, to: &Vec3) -> Quat {
    if let Some(q) = Quat::rotation_between(from, to) {
        return q;
    }

    // rotation_between only fails for antiparallel inputs
    let helper = if from.x.abs() < 0.9 * from.norm() {
        Vec3::x()
    } else {
        Vec3::z()
    };
    let axis = helper - from * (helper.dot(from) / from.norm_squared());
    match nalgebra::Unit::try_new(axis, f32::EPSILON) {
        Some(axis) => Quat::from_axis_angle(&axis, std::f32::consts::PI),
        None => Quat::identity(),
    }
}

/// Rotation of `degrees` about `axis` (right-handed, counter-clockwise when
/// looking down the axis). A zero-length axis yields the identity.
pub fn quat_from_axis_angle_degrees(axis: &Vec3, degrees: f32) -> Quat {
    match nalgebra::Unit::try_new(*axis, f32::EPSILON) {
        Some(axis) => Quat::from_axis_angle(&axis, degrees.to_radians()),
        None => Quat::identity(),
    }
}

/// Angle in degrees between `from` and `to`, signed by the rotation sense about `axis`.
///
/// The result is in `[-180, 180]` and matches [`quat_from_axis_angle_degrees`]:
/// rotating `from` by the returned angle about `axis` moves it toward `to`.
pub fn signed_angle_degrees(from: &Vec3, to: &Vec3, axis: &Vec3) -> f32 {
    if from.norm_squared() == 0.0 || to.norm_squared() == 0.0 {
        return 0.0;
    }
    let unsigned = from.angle(to).to_degrees();
    if axis.dot(&from.cross(to)) < 0.0 {
        -unsigned
    } else {
        unsigned
    }
}

/// Rotate a vector by a quaternion.
pub fn quat_rotate_vec3(q: &Quat, v: Vec3) -> Vec3 {
    q * v
}

/// Returns `true` when every component is finite.
pub fn vec3_is_finite(v: &Vec3) -> bool {
    v.iter().all(|c| c.is_finite())
}
