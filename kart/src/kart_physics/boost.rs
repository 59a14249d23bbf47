use crate::config::KartConfig;
use super::types::DriftTier;

#[derive(Debug, Clone, Copy)]
struct ActiveBoost {
    bonus: f32,
    duration: f32,
    remaining: f32,
}

/// Time-bounded override of the speed cap.
///
/// Triggering while another boost is in flight atomically replaces it:
/// bonus and duration are fully swapped, never summed, so chained boosts
/// cannot compound the cap without bound. The generation counter lets
/// presentation-side envelopes detect that the boost they were bound to
/// was superseded, restarting instead of completing stale work.
#[derive(Debug, Default)]
pub struct BoostLifecycle {
    active: Option<ActiveBoost>,
    generation: u64,
}

impl BoostLifecycle {
    /// Starts (or supersedes with) a boost scaled by the drift tier
    /// reached. `DriftTier::None` is valid: a neutral, manually activated
    /// boost at the smallest scale. Returns the bonus and duration.
    pub fn trigger(&mut self, cfg: &KartConfig, tier: DriftTier) -> (f32, f32) {
        let scale = (tier.index() + 1) as f32;
        let bonus = cfg.boost_speed * scale / 3.0;
        let duration = cfg.boost_duration * scale / 2.0;
        self.active = Some(ActiveBoost {
            bonus,
            duration,
            remaining: duration,
        });
        self.generation = self.generation.wrapping_add(1);
        (bonus, duration)
    }

    /// Counts down in simulation time. Returns true exactly on the tick
    /// the boost expires; the caller then restores the baseline cap.
    pub fn advance(&mut self, dt: f32) -> bool {
        let Some(boost) = self.active.as_mut() else {
            return false;
        };
        boost.remaining -= dt.max(0.0);
        if boost.remaining <= 0.0 {
            self.active = None;
            true
        } else {
            false
        }
    }

    /// Current speed cap for a given baseline. After expiry this is the
    /// exact baseline value again, not an asymptotic approach to it.
    pub fn max_speed(&self, baseline: f32) -> f32 {
        match self.active {
            Some(b) => baseline + b.bonus,
            None => baseline,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn bonus(&self) -> f32 {
        self.active.map_or(0.0, |b| b.bonus)
    }

    /// Full duration of the boost currently in flight (0 when inactive).
    pub fn duration(&self) -> f32 {
        self.active.map_or(0.0, |b| b.duration)
    }

    /// Bumps on every trigger. An envelope holding an older generation is
    /// stale and must restart rather than finish.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
