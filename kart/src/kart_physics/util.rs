use bevy_math::{Quat, Vec3};

// Basis: standard RHS with +Z forward, +Y up, +X right
pub(super) const BODY_FWD: Vec3 = Vec3::new(0.0, 0.0, 1.0);
pub(super) const BODY_UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);

#[inline]
pub(super) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub(super) fn clamp01(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

#[inline]
pub(super) fn quat_to_yaw(q: Quat) -> f32 {
    let fwd = q * BODY_FWD;
    // Heading increases turning left; project into XZ plane with +Z forward
    (-fwd.x).atan2(fwd.z)
}

/// Angle step toward a target, bounded by `max_step` (>= 0).
#[inline]
pub(super) fn rotate_towards(current: f32, target: f32, max_step: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_step {
        target
    } else {
        current + max_step.copysign(delta)
    }
}
