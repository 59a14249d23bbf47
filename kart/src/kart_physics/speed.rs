use crate::config::KartConfig;
use super::types::KartInputs;
use super::util::{clamp01, lerp};

/// Longitudinal regime selected from the input snapshot, each tick.
/// Throttle wins over reverse when both are held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedRegime {
    Throttle,
    Reverse,
    Neutral,
}

impl SpeedRegime {
    pub fn from_inputs(inputs: &KartInputs) -> Self {
        if inputs.throttle {
            Self::Throttle
        } else if inputs.reverse {
            Self::Reverse
        } else {
            Self::Neutral
        }
    }
}

/// Target speed for the regime. Reverse is capped at half the current
/// speed limit.
pub(super) fn target_speed(regime: SpeedRegime, max_speed: f32) -> f32 {
    match regime {
        SpeedRegime::Throttle => max_speed,
        SpeedRegime::Reverse => -max_speed / 2.0,
        SpeedRegime::Neutral => 0.0,
    }
}

/// Smoothed approach of the current speed toward the regime target.
/// Accelerating and coasting use separate rates; the lerp factor is
/// clamped to [0, 1] so an oversized `dt` lands exactly on the target
/// instead of overshooting past it.
pub(super) fn step_speed(
    cfg: &KartConfig,
    current: f32,
    regime: SpeedRegime,
    max_speed: f32,
    dt: f32,
) -> f32 {
    let rate = match regime {
        SpeedRegime::Neutral => cfg.deceleration,
        _ => cfg.acceleration,
    };
    lerp(current, target_speed(regime, max_speed), clamp01(dt * rate))
}

/// Accumulated fall speed along world -Y. Builds while airborne and
/// clears on contact; the kinematic velocity override would otherwise
/// erase gravity every tick.
pub(super) fn step_fall_speed(cfg: &KartConfig, fall_speed: f32, grounded: bool, dt: f32) -> f32 {
    if grounded {
        0.0
    } else {
        fall_speed + cfg.gravity * dt
    }
}
