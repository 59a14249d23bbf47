use crate::config::KartConfig;
use super::types::{DriftDirection, DriftTier};

/// An active drift session. The direction is locked for the session's
/// whole lifetime and the tier only ever steps upward with accumulated
/// session time.
#[derive(Debug, Clone, Copy)]
pub struct DriftSession {
    pub direction: DriftDirection,
    pub tier: DriftTier,
    /// Accumulated session age in seconds.
    pub elapsed: f32,
}

/// Drift start/stop/cancel state machine: NONE → ACTIVE(BASE → MEDIUM →
/// STRONG) → NONE. Stopping (button release) hands the tier reached back
/// to the caller for a boost payout; cancelling does not. That split is
/// the fairness contract of the drift mechanic.
#[derive(Debug, Default)]
pub struct DriftStateMachine {
    session: Option<DriftSession>,
}

impl DriftStateMachine {
    /// Evaluates the start precondition at the instant of landing: drift
    /// button held and non-zero steer. Landing with steer exactly zero is
    /// a deliberate no-op so straight jumps never lock a drift, and a
    /// duplicate start while already active is ignored.
    pub fn try_start(&mut self, steer: f32, drift_held: bool) -> Option<DriftDirection> {
        if self.session.is_some() || !drift_held {
            return None;
        }
        let direction = DriftDirection::from_steer(steer)?;
        self.session = Some(DriftSession {
            direction,
            tier: DriftTier::None,
            elapsed: 0.0,
        });
        Some(direction)
    }

    /// Advances session time and re-derives the tier from it. Returns the
    /// new tier only on an actual transition; re-entering the current
    /// tier is a no-op, so tier effects fire exactly once. The BASE tier
    /// is assigned lazily by the first evaluation after the start.
    pub fn evaluate_tier(&mut self, cfg: &KartConfig, dt: f32) -> Option<DriftTier> {
        let session = self.session.as_mut()?;
        session.elapsed += dt.max(0.0);
        let tier = if session.elapsed >= cfg.drift_strong_secs {
            DriftTier::Strong
        } else if session.elapsed >= cfg.drift_medium_secs {
            DriftTier::Medium
        } else {
            DriftTier::Base
        };
        if tier == session.tier {
            return None;
        }
        session.tier = tier;
        Some(tier)
    }

    /// Reward path: the drift button was released while active. Ends the
    /// session and returns the tier reached so the caller can pay out a
    /// boost. A stray stop with no session is a no-op.
    pub fn stop(&mut self) -> Option<DriftTier> {
        self.session.take().map(|s| s.tier)
    }

    /// Penalty path: the speed floor was breached (or the host cancelled
    /// explicitly). Ends the session without any payout. Returns whether
    /// a session was actually ended.
    pub fn cancel(&mut self) -> bool {
        self.session.take().is_some()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DriftSession> {
        self.session.as_ref()
    }

    pub fn tier(&self) -> DriftTier {
        self.session.map_or(DriftTier::None, |s| s.tier)
    }

    pub fn direction(&self) -> Option<DriftDirection> {
        self.session.map(|s| s.direction)
    }
}
