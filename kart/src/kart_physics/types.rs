use bevy_math::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Rigid-body state of the kart. Owned exclusively by the controller and
/// mutated once per fixed tick.
///
/// Frame conventions:
/// - Body axes: +Z forward, +Y up, +X right (starboard).
/// - World axes: +Z forward, +Y up, +X right.
/// - `orientation` is body→world.
/// - Steer input +1 means steer right. A right turn is a positive
///   rotation about the body up axis and decreases the extracted heading
///   yaw (which grows turning left).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KartState {
    pub position: Vec3,
    pub orientation: Quat,
    pub velocity: Vec3,
    /// Signed ground speed along the body forward axis (m/s); negative
    /// while reversing.
    pub current_speed: f32,
    /// Current speed cap: the configured baseline plus any active boost
    /// bonus.
    pub max_speed: f32,
    pub grounded: bool,
    /// Last surface normal the ground probe returned. Kept at its last
    /// known value on a probe miss so orientation never snaps back to a
    /// default up.
    pub ground_normal: Vec3,
}

impl KartState {
    pub fn new(max_speed: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            velocity: Vec3::ZERO,
            current_speed: 0.0,
            max_speed,
            grounded: false,
            ground_normal: Vec3::Y,
        }
    }
}

/// Per-tick input snapshot. Refreshed at least once per fixed tick;
/// staleness between ticks is acceptable (last value wins).
#[derive(Debug, Clone, Copy, Default)]
pub struct KartInputs {
    /// Lateral input in [-1, 1]; +1 steers right.
    pub steer: f32,
    pub throttle: bool,
    pub reverse: bool,
    /// Whether the drift button is currently held. The release edge
    /// itself arrives via `KartController::on_drift_button_released`.
    pub drift_held: bool,
}

/// Side a drift session is committed to. Locked at drift start for the
/// whole session, whatever the steer input does afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriftDirection {
    Left,
    Right,
}

impl DriftDirection {
    /// +1 for a right-hand drift, -1 for left.
    pub fn sign(self) -> f32 {
        match self {
            Self::Right => 1.0,
            Self::Left => -1.0,
        }
    }

    /// Direction a drift would lock to for this steer input; `None` at
    /// exactly zero steer.
    pub fn from_steer(steer: f32) -> Option<Self> {
        if steer > 0.0 {
            Some(Self::Right)
        } else if steer < 0.0 {
            Some(Self::Left)
        } else {
            None
        }
    }
}

/// Drift quality level, reached by sustaining the session. Only ever
/// steps upward while a session is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DriftTier {
    None,
    Base,
    Medium,
    Strong,
}

impl DriftTier {
    /// Payout scaling index: NONE=0 .. STRONG=3.
    pub fn index(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Base => 1,
            Self::Medium => 2,
            Self::Strong => 3,
        }
    }
}

/// Edge events for the presentation layer (particles, effects, audio).
/// Each transition fires exactly once; re-entering the same drift tier is
/// a no-op.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KartEvent {
    DriftStarted { direction: DriftDirection },
    DriftTierChanged { tier: DriftTier },
    /// `boosted` distinguishes the reward path (button release) from a
    /// cancellation (speed floor breach).
    DriftEnded { boosted: bool },
    BoostStarted { bonus: f32, duration: f32 },
    BoostEnded,
}

/// Optional per-step telemetry breakdown for debugging and instruments.
#[derive(Debug, Clone, Copy)]
pub struct KartStepDebug {
    pub dt: f32,
    pub regime: super::speed::SpeedRegime,
    pub target_speed: f32,
    pub speed_ratio: f32,
    /// Normalized drift steer in [0, 1] while drifting, 0 otherwise.
    pub drift_steer: f32,
    pub yaw_delta: f32,
    pub forward: Vec3,
    pub fall_speed: f32,
}

impl Default for KartStepDebug {
    fn default() -> Self {
        Self {
            dt: 0.0,
            regime: super::speed::SpeedRegime::Neutral,
            target_speed: 0.0,
            speed_ratio: 0.0,
            drift_steer: 0.0,
            yaw_delta: 0.0,
            forward: Vec3::Z,
            fall_speed: 0.0,
        }
    }
}
