use bevy_math::{Quat, Vec3};

use super::util::{clamp01, BODY_UP};

/// Smoothly rotates the body up axis toward the ground normal. Only the
/// up-vector mapping is touched, never yaw, so the steering rotation
/// composes on top without interference. Airborne bodies keep their
/// orientation; there is no drift toward level.
pub(super) fn align_to_ground(
    orientation: Quat,
    grounded: bool,
    ground_normal: Vec3,
    rate: f32,
    dt: f32,
) -> Quat {
    if !grounded {
        return orientation;
    }
    let normal = ground_normal.normalize_or_zero();
    if normal.length_squared() < 0.5 {
        return orientation;
    }
    let up = orientation * BODY_UP;
    let arc = Quat::from_rotation_arc(up, normal);
    orientation
        .slerp((arc * orientation).normalize(), clamp01(rate * dt))
        .normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn airborne_orientation_is_untouched() {
        let tilted = Quat::from_rotation_z(0.4);
        let out = align_to_ground(tilted, false, Vec3::Y, 10.0, 0.02);
        assert_eq!(out, tilted);
    }

    #[test]
    fn grounded_body_tilts_toward_the_normal() {
        let start = Quat::IDENTITY;
        let normal = Vec3::new(0.3, 1.0, 0.0).normalize();
        let out = align_to_ground(start, true, normal, 10.0, 0.02);
        let up_before = start * BODY_UP;
        let up_after = out * BODY_UP;
        assert!(up_after.dot(normal) > up_before.dot(normal));
    }

    #[test]
    fn aligned_body_stays_put() {
        let start = Quat::from_rotation_y(0.7);
        let out = align_to_ground(start, true, Vec3::Y, 10.0, 0.02);
        let up = out * BODY_UP;
        assert!(up.dot(Vec3::Y) > 0.9999);
        // Yaw must be untouched by alignment
        let fwd_before = start * Vec3::Z;
        let fwd_after = out * Vec3::Z;
        assert!(fwd_before.dot(fwd_after) > 0.9999);
    }

    #[test]
    fn degenerate_normal_is_ignored() {
        let start = Quat::from_rotation_z(0.2);
        let out = align_to_ground(start, true, Vec3::ZERO, 10.0, 0.02);
        assert_eq!(out, start);
    }
}
