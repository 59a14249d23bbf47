use bevy_math::{Quat, Vec3};

use crate::config::KartConfig;
use super::types::DriftDirection;
use super::util::{clamp01, lerp, rotate_towards};

/// |velocity| relative to the baseline top speed, clamped to [0, 1].
/// Config validation rejects a zero baseline, but a degenerate value must
/// still not turn into NaN here.
pub(super) fn speed_ratio(velocity: Vec3, baseline_max_speed: f32) -> f32 {
    if baseline_max_speed <= f32::EPSILON {
        return 0.0;
    }
    clamp01(velocity.length() / baseline_max_speed)
}

/// Whether the body-local forward component of velocity points ahead.
/// Reversing flips the steering sense, matching real kart behavior.
pub(super) fn is_moving_forward(orientation: Quat, velocity: Vec3) -> bool {
    (orientation.inverse() * velocity).z > 0.0
}

/// Yaw increment for a regular (non-drift) steering tick. Turn authority
/// scales with the speed ratio, so a standing kart cannot pivot in place.
/// Positive delta = right turn, matching the steer input sign.
pub(super) fn yaw_delta(
    cfg: &KartConfig,
    steer: f32,
    ratio: f32,
    moving_forward: bool,
    dt: f32,
) -> f32 {
    let authority = lerp(0.0, cfg.max_steer_rate, ratio);
    let sense = if moving_forward { 1.0 } else { -1.0 };
    steer.clamp(-1.0, 1.0) * authority * sense * dt
}

/// Steer input remapped from the drift direction's point of view: 1 is
/// hard into the drift, 0 is full counter-steer, on either side. One
/// formula then serves both left and right drifts.
pub(super) fn drift_normalized_steer(steer: f32, direction: DriftDirection) -> f32 {
    clamp01((1.0 + steer.clamp(-1.0, 1.0) * direction.sign()) / 2.0)
}

/// Yaw increment while drifting. The normalized steer enters twice, so
/// counter-steering bleeds off turn rate quadratically, and the direction
/// sign keeps the turn committed to the locked side.
pub(super) fn drift_yaw_delta(
    cfg: &KartConfig,
    normalized: f32,
    direction: DriftDirection,
    ratio: f32,
    dt: f32,
) -> f32 {
    let swing = cfg.max_drift_steer_rate * normalized * direction.sign();
    normalized * lerp(0.0, swing, ratio) * dt
}

/// Cosmetic roll of the kart body mesh about its forward axis. Drifting pulls
/// the visual frame toward the drift side; otherwise it relaxes back to
/// neutral at the reset rate.
pub(super) fn step_lean(
    cfg: &KartConfig,
    lean: f32,
    drift: Option<(f32, DriftDirection)>,
    dt: f32,
) -> f32 {
    match drift {
        Some((normalized, direction)) => {
            let target = cfg.max_drift_lean * normalized * direction.sign();
            lerp(lean, target, clamp01(dt))
        }
        None => lerp(lean, 0.0, clamp01(dt * cfg.lean_reset_rate)),
    }
}

/// Front wheel visual angle: slews toward the steer target at a bounded
/// rate, like a servo rather than a lerp.
pub(super) fn step_wheel_angle(cfg: &KartConfig, angle: f32, steer: f32, dt: f32) -> f32 {
    let target = steer.clamp(-1.0, 1.0) * cfg.max_wheel_angle;
    rotate_towards(angle, target, cfg.wheel_turn_rate * dt.max(0.0))
}
