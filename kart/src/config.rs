use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tunables for one kart. Validated once at controller construction and
/// immutable for the session.
///
/// Angular tunables are rates in rad/s, scaled by the tick `dt`; linear
/// ones are m/s and m/s². `acceleration`/`deceleration` are rates of
/// approach toward the target speed (1/s), not forces.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KartConfig {
    /// Baseline top speed. Boosts raise the cap above this.
    pub max_speed: f32,
    /// Approach rate toward the throttle/reverse target.
    pub acceleration: f32,
    /// Approach rate toward zero when coasting. Deliberately separate:
    /// coasting may bleed speed faster or slower than throttle builds it.
    pub deceleration: f32,
    /// Peak yaw rate at full steer and baseline speed. A higher number
    /// means the kart cuts the corner more.
    pub max_steer_rate: f32,
    /// Peak yaw rate while drifting.
    pub max_drift_steer_rate: f32,
    /// Base boost duration (s); scaled up by the drift tier reached.
    pub boost_duration: f32,
    /// Base boost speed bonus; scaled up by the drift tier reached.
    pub boost_speed: f32,
    /// Dropping below this speed cancels an active drift without payout.
    pub min_drift_speed: f32,
    /// Downward acceleration while airborne.
    pub gravity: f32,
    /// Smoothing rate for aligning the body up axis to the ground normal.
    pub ground_align_rate: f32,
    /// Ground probe reach below the body origin (m).
    pub ground_probe_distance: f32,
    /// Session age at which the drift tier steps up to MEDIUM (s).
    pub drift_medium_secs: f32,
    /// Session age at which the drift tier steps up to STRONG (s).
    pub drift_strong_secs: f32,
    /// Peak cosmetic body lean while drifting (rad).
    pub max_drift_lean: f32,
    /// Relaxation rate of the lean back to neutral.
    pub lean_reset_rate: f32,
    /// Front wheel visual steering limit (rad).
    pub max_wheel_angle: f32,
    /// Slew rate of the front wheel visual angle.
    pub wheel_turn_rate: f32,
}

impl Default for KartConfig {
    fn default() -> Self {
        Self {
            max_speed: 20.0,
            acceleration: 5.0,
            deceleration: 5.0,
            max_steer_rate: 1.0,
            max_drift_steer_rate: 1.5,
            boost_duration: 1.0,
            boost_speed: 10.0,
            min_drift_speed: 5.0,
            gravity: 9.81,
            ground_align_rate: 10.0,
            ground_probe_distance: 1.0,
            drift_medium_secs: 1.0,
            drift_strong_secs: 2.0,
            max_drift_lean: 0.35,
            lean_reset_rate: 10.0,
            max_wheel_angle: 1.05,
            wheel_turn_rate: 4.0,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be finite and non-negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("max_speed must be positive, got {0}")]
    ZeroMaxSpeed(f32),
    #[error("drift_medium_secs ({medium}) must not exceed drift_strong_secs ({strong})")]
    TierOrder { medium: f32, strong: f32 },
}

impl KartConfig {
    /// Fails fast on values that would let NaNs or nonsense into the
    /// simulation. Called once at controller construction; a validated
    /// config is never mutated afterwards.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("max_speed", self.max_speed),
            ("acceleration", self.acceleration),
            ("deceleration", self.deceleration),
            ("max_steer_rate", self.max_steer_rate),
            ("max_drift_steer_rate", self.max_drift_steer_rate),
            ("boost_duration", self.boost_duration),
            ("boost_speed", self.boost_speed),
            ("min_drift_speed", self.min_drift_speed),
            ("gravity", self.gravity),
            ("ground_align_rate", self.ground_align_rate),
            ("ground_probe_distance", self.ground_probe_distance),
            ("drift_medium_secs", self.drift_medium_secs),
            ("drift_strong_secs", self.drift_strong_secs),
            ("max_drift_lean", self.max_drift_lean),
            ("lean_reset_rate", self.lean_reset_rate),
            ("max_wheel_angle", self.max_wheel_angle),
            ("wheel_turn_rate", self.wheel_turn_rate),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }
        if self.max_speed <= 0.0 {
            return Err(ConfigError::ZeroMaxSpeed(self.max_speed));
        }
        if self.drift_medium_secs > self.drift_strong_secs {
            return Err(ConfigError::TierOrder {
                medium: self.drift_medium_secs,
                strong: self.drift_strong_secs,
            });
        }
        Ok(())
    }
}
