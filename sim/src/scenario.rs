use anyhow::Result;
use tracing::{debug, info};

use kart::{FlatGround, KartConfig, KartController, KartInputs, KartStepDebug};

use crate::args::Args;

// Script timeline (seconds)
const JUMP_AT: f32 = 2.0;
const LAND_AT: f32 = 2.4;
const RELEASE_AT: f32 = 4.9;
const DRIFT_STEER: f32 = 0.8;

/// Scripted lap on a flat plane: accelerate, jump while grabbing the
/// drift button, land steering right, hold the drift through its tiers,
/// release, ride the boost out.
pub fn run(cfg: KartConfig, args: &Args) -> Result<()> {
    let mut kart = KartController::new(cfg)?;
    let ground = FlatGround { height: 0.0 };

    let dt = 1.0 / args.hz.max(1) as f32;
    let ticks = (args.seconds / dt).ceil() as u64;

    let mut jumped = false;
    let mut landed = false;
    let mut released = false;
    let mut top_speed = 0.0_f32;
    let mut dbg = KartStepDebug::default();

    for tick in 0..ticks {
        let t = tick as f32 * dt;

        if !jumped && t >= JUMP_AT {
            jumped = true;
            kart.on_jump_started();
        }
        if !landed && t >= LAND_AT {
            landed = true;
            kart.on_landed();
        }
        if !released && t >= RELEASE_AT {
            released = true;
            kart.on_drift_button_released();
        }

        let steer = if jumped && !released { DRIFT_STEER } else { 0.0 };
        kart.set_input(KartInputs {
            steer,
            throttle: true,
            reverse: false,
            drift_held: jumped && !released,
        });

        kart.advance_fixed_dbg(dt, &ground, Some(&mut dbg));
        kart.advance_presentation(dt);
        top_speed = top_speed.max(kart.velocity().length());

        for event in kart.take_events() {
            info!(t, ?event, "kart event");
        }
        if tick % (args.hz.max(1) as u64 / 2).max(1) == 0 {
            debug!(
                t,
                speed = kart.current_speed(),
                max_speed = kart.max_speed(),
                target = dbg.target_speed,
                ratio = dbg.speed_ratio,
                heading = kart.heading_yaw(),
                drifting = kart.is_drifting(),
                boosting = kart.is_boost_active(),
                "telemetry"
            );
        }
    }

    info!(
        top_speed,
        final_speed = kart.current_speed(),
        heading = kart.heading_yaw(),
        "run complete"
    );
    Ok(())
}
