use bevy_math::{Quat, Vec3};

use crate::config::{ConfigError, KartConfig};
use crate::tween::TimedLerp;

use super::align::align_to_ground;
use super::boost::BoostLifecycle;
use super::drift::DriftStateMachine;
use super::ground::GroundSensor;
use super::speed::{step_fall_speed, step_speed, target_speed, SpeedRegime};
use super::steering::{
    drift_normalized_steer, drift_yaw_delta, is_moving_forward, speed_ratio, step_lean,
    step_wheel_angle, yaw_delta,
};
use super::types::{DriftDirection, DriftTier, KartEvent, KartInputs, KartState, KartStepDebug};
use super::util::{quat_to_yaw, BODY_FWD, BODY_UP};

/// Per-fixed-tick result for the host to mirror onto its physics body.
#[derive(Debug, Clone, Copy)]
pub struct FixedStepOutput {
    /// World-space linear velocity, applied as a kinematic override.
    pub velocity: Vec3,
    /// Yaw increment about the body up axis this tick (rad); positive
    /// steers right, matching the steer input sign.
    pub yaw_delta: f32,
}

/// The controller core: couples the speed model, steering geometry, drift
/// state machine and boost lifecycle over two tick rates.
///
/// The host calls `advance_fixed` at a constant `dt` (speed and steering
/// integrate over time and must be frame-rate independent) and
/// `advance_presentation` at its render rate (orientation smoothing, tier
/// effects, cosmetics tolerate a variable `dt`). Single-threaded by
/// construction: exactly one mutator per tick, inputs are read-only
/// snapshots taken at tick start.
pub struct KartController {
    cfg: KartConfig,
    state: KartState,
    inputs: KartInputs,
    drift: DriftStateMachine,
    boost: BoostLifecycle,
    jumping: bool,
    fall_speed: f32,
    lean: f32,
    wheel_angle: f32,
    /// Boost effect envelope, keyed by the generation of the boost it was
    /// started for. A mismatch means the boost was superseded and the
    /// envelope restarts instead of finishing stale work.
    boost_fx: Option<(u64, TimedLerp)>,
    events: Vec<KartEvent>,
}

impl KartController {
    /// Validates the config up front; a controller never exists with
    /// tunables that could leak NaNs into the simulation.
    pub fn new(cfg: KartConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let state = KartState::new(cfg.max_speed);
        Ok(Self {
            cfg,
            state,
            inputs: KartInputs::default(),
            drift: DriftStateMachine::default(),
            boost: BoostLifecycle::default(),
            jumping: false,
            fall_speed: 0.0,
            lean: 0.0,
            wheel_angle: 0.0,
            boost_fx: None,
            events: Vec::new(),
        })
    }

    /// Takes the input snapshot for the coming tick. Call at least once
    /// per fixed tick; the last value wins.
    pub fn set_input(&mut self, inputs: KartInputs) {
        self.inputs = inputs;
    }

    /// Edge notification: the kart left the ground under player control.
    pub fn on_jump_started(&mut self) {
        self.jumping = true;
    }

    /// Edge notification: the kart touched down. This is the only place a
    /// drift can start: the drift button must be held and steer must be
    /// non-zero at this instant, otherwise the landing is a plain one.
    pub fn on_landed(&mut self) {
        self.jumping = false;
        if let Some(direction) = self.drift.try_start(self.inputs.steer, self.inputs.drift_held) {
            self.events.push(KartEvent::DriftStarted { direction });
        }
    }

    /// Edge notification: the drift button was released. Ends an active
    /// session on the reward path, paying out a boost scaled by the tier
    /// reached. A release with no session is a no-op.
    pub fn on_drift_button_released(&mut self) {
        if let Some(tier) = self.drift.stop() {
            self.events.push(KartEvent::DriftEnded { boosted: true });
            self.start_boost(tier);
        }
    }

    /// Manual boost activation, independent of any drift (neutral tier,
    /// smallest payout).
    pub fn on_boost_activated(&mut self) {
        self.start_boost(DriftTier::None);
    }

    fn start_boost(&mut self, tier: DriftTier) {
        let (bonus, duration) = self.boost.trigger(&self.cfg, tier);
        self.state.max_speed = self.boost.max_speed(self.cfg.max_speed);
        self.events.push(KartEvent::BoostStarted { bonus, duration });
    }

    /// One fixed simulation tick: ground probe, boost countdown, speed
    /// model, drift speed-floor check, steering, gravity and integration.
    /// Returns the velocity and yaw increment for the host body.
    pub fn advance_fixed(&mut self, dt: f32, ground: &dyn GroundSensor) -> FixedStepOutput {
        self.advance_fixed_dbg(dt, ground, None)
    }

    /// Variant of `advance_fixed` that fills out an optional telemetry
    /// breakdown.
    pub fn advance_fixed_dbg(
        &mut self,
        dt: f32,
        ground: &dyn GroundSensor,
        dbg: Option<&mut KartStepDebug>,
    ) -> FixedStepOutput {
        if dt <= 0.0 {
            return FixedStepOutput {
                velocity: self.state.velocity,
                yaw_delta: 0.0,
            };
        }

        // Probe once per tick. A miss means "not grounded", never fatal;
        // the stored normal keeps its last known value so alignment does
        // not snap.
        let down = self.state.orientation * -BODY_UP;
        match ground.probe(self.state.position, down, self.cfg.ground_probe_distance) {
            Some(hit) => {
                self.state.grounded = true;
                self.state.ground_normal = hit.normal;
            }
            None => self.state.grounded = false,
        }

        // The boost gates the speed cap, so its countdown runs in
        // simulation time. Expiry restores the exact baseline.
        if self.boost.advance(dt) {
            self.state.max_speed = self.cfg.max_speed;
            self.events.push(KartEvent::BoostEnded);
        }

        let regime = SpeedRegime::from_inputs(&self.inputs);
        self.state.current_speed = step_speed(
            &self.cfg,
            self.state.current_speed,
            regime,
            self.state.max_speed,
            dt,
        );

        // Speed floor: breaching it cancels the drift without payout,
        // before any drift steering is applied this tick.
        if self.drift.is_active() && self.state.current_speed.abs() < self.cfg.min_drift_speed {
            self.drift.cancel();
            self.events.push(KartEvent::DriftEnded { boosted: false });
        }

        let ratio = speed_ratio(self.state.velocity, self.cfg.max_speed);
        let mut drift_steer = 0.0;
        let yaw = match self.drift.session() {
            Some(session) => {
                let normalized = drift_normalized_steer(self.inputs.steer, session.direction);
                drift_steer = normalized;
                drift_yaw_delta(&self.cfg, normalized, session.direction, ratio, dt)
            }
            None => {
                let forward_motion = is_moving_forward(self.state.orientation, self.state.velocity);
                yaw_delta(&self.cfg, self.inputs.steer, ratio, forward_motion, dt)
            }
        };
        // Yaw rotates about the body up axis; ground alignment only ever
        // remaps the up vector, so the two compose without interference.
        let up = self.state.orientation * BODY_UP;
        self.state.orientation = (Quat::from_axis_angle(up, yaw) * self.state.orientation).normalize();

        // Kinematic override plus accumulated fall speed while airborne.
        self.fall_speed = step_fall_speed(&self.cfg, self.fall_speed, self.state.grounded, dt);
        let forward = self.state.orientation * BODY_FWD;
        self.state.velocity = forward * self.state.current_speed - Vec3::Y * self.fall_speed;
        self.state.position += self.state.velocity * dt;

        if let Some(d) = dbg {
            d.dt = dt;
            d.regime = regime;
            d.target_speed = target_speed(regime, self.state.max_speed);
            d.speed_ratio = ratio;
            d.drift_steer = drift_steer;
            d.yaw_delta = yaw;
            d.forward = forward;
            d.fall_speed = self.fall_speed;
        }

        FixedStepOutput {
            velocity: self.state.velocity,
            yaw_delta: yaw,
        }
    }

    /// One presentation tick: ground alignment smoothing, drift tier
    /// evaluation, lean and wheel cosmetics, boost effect envelope.
    /// Tolerates a variable `dt`.
    pub fn advance_presentation(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }

        self.state.orientation = align_to_ground(
            self.state.orientation,
            self.state.grounded,
            self.state.ground_normal,
            self.cfg.ground_align_rate,
            dt,
        );

        if let Some(tier) = self.drift.evaluate_tier(&self.cfg, dt) {
            self.events.push(KartEvent::DriftTierChanged { tier });
        }

        let drift = self
            .drift
            .session()
            .map(|s| (drift_normalized_steer(self.inputs.steer, s.direction), s.direction));
        self.lean = step_lean(&self.cfg, self.lean, drift, dt);
        self.wheel_angle = step_wheel_angle(&self.cfg, self.wheel_angle, self.inputs.steer, dt);

        if self.boost.is_active() {
            let generation = self.boost.generation();
            match self.boost_fx.as_mut() {
                Some((bound, fx)) if *bound == generation => {
                    fx.advance(dt);
                }
                // First tick of a new boost, or the previous boost was
                // superseded: restart the envelope from zero.
                _ => {
                    let ramp = self.boost.duration() * 0.5;
                    self.boost_fx = Some((generation, TimedLerp::new(0.0, 1.0, ramp)));
                }
            }
        } else {
            self.boost_fx = None;
        }
    }

    // --- Read-only telemetry ---

    pub fn config(&self) -> &KartConfig {
        &self.cfg
    }

    pub fn state(&self) -> &KartState {
        &self.state
    }

    pub fn position(&self) -> Vec3 {
        self.state.position
    }

    pub fn orientation(&self) -> Quat {
        self.state.orientation
    }

    pub fn velocity(&self) -> Vec3 {
        self.state.velocity
    }

    pub fn current_speed(&self) -> f32 {
        self.state.current_speed
    }

    pub fn max_speed(&self) -> f32 {
        self.state.max_speed
    }

    /// Heading about the world up axis (rad); grows turning left, so
    /// steering right decreases it.
    pub fn heading_yaw(&self) -> f32 {
        quat_to_yaw(self.state.orientation)
    }

    pub fn is_grounded(&self) -> bool {
        self.state.grounded
    }

    pub fn is_jumping(&self) -> bool {
        self.jumping
    }

    pub fn is_drifting(&self) -> bool {
        self.drift.is_active()
    }

    pub fn drift_tier(&self) -> DriftTier {
        self.drift.tier()
    }

    pub fn drift_direction(&self) -> Option<DriftDirection> {
        self.drift.direction()
    }

    pub fn is_boost_active(&self) -> bool {
        self.boost.is_active()
    }

    /// Cosmetic body roll about the forward axis (rad); positive leans
    /// into a right-hand drift.
    pub fn visual_lean(&self) -> f32 {
        self.lean
    }

    /// Front wheel visual angle (rad); positive steers right.
    pub fn wheel_angle(&self) -> f32 {
        self.wheel_angle
    }

    /// Boost effect envelope in [0, 1]; 0 when no boost is in flight.
    pub fn boost_envelope(&self) -> f32 {
        self.boost_fx.as_ref().map_or(0.0, |(_, fx)| fx.value())
    }

    /// Drains the edge events accumulated since the last call, in order.
    pub fn take_events(&mut self) -> Vec<KartEvent> {
        std::mem::take(&mut self.events)
    }
}
