//! Arcade kart driving controller.
//!
//! This crate intentionally avoids any engine types. It exposes a
//! deterministic, fixed-timestep controller core: the host feeds it input
//! snapshots, jump/land edge events and a ground probe, applies the
//! returned velocity and yaw to its physics body, and reads back
//! drift/boost telemetry for presentation.

mod config;
pub use config::{ConfigError, KartConfig};

pub mod kart_physics;
pub use kart_physics::{
    BoostLifecycle, DriftDirection, DriftSession, DriftStateMachine, DriftTier, FixedStepOutput,
    FlatGround, GroundHit, GroundSensor, KartController, KartEvent, KartInputs, KartState,
    KartStepDebug, SpeedRegime,
};

mod tween;
pub use tween::TimedLerp;
