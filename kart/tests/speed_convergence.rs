use kart::{FlatGround, GroundHit, GroundSensor, KartConfig, KartController, KartInputs};
use bevy_math::Vec3;

const DT: f32 = 0.02;

fn controller() -> KartController {
    KartController::new(KartConfig::default()).expect("default config is valid")
}

#[test]
fn throttle_converges_to_max_speed_without_overshoot() {
    let mut kart = controller();
    let ground = FlatGround { height: 0.0 };

    kart.set_input(KartInputs {
        throttle: true,
        ..Default::default()
    });
    for _ in 0..200 {
        kart.advance_fixed(DT, &ground);
        assert!(
            kart.current_speed() <= 20.0 + 1e-4,
            "speed must never exceed the cap (got {})",
            kart.current_speed()
        );
    }
    assert!(
        kart.current_speed() > 19.9,
        "4s of throttle should approach max speed (got {})",
        kart.current_speed()
    );
}

#[test]
fn reverse_converges_to_half_max_backward() {
    let mut kart = controller();
    let ground = FlatGround { height: 0.0 };

    kart.set_input(KartInputs {
        reverse: true,
        ..Default::default()
    });
    for _ in 0..300 {
        kart.advance_fixed(DT, &ground);
        assert!(
            kart.current_speed() >= -10.0 - 1e-4,
            "reverse speed must never exceed half the cap (got {})",
            kart.current_speed()
        );
    }
    assert!(kart.current_speed() < -9.9);
}

#[test]
fn neutral_coasts_back_to_rest() {
    let mut kart = controller();
    let ground = FlatGround { height: 0.0 };

    kart.set_input(KartInputs {
        throttle: true,
        ..Default::default()
    });
    for _ in 0..200 {
        kart.advance_fixed(DT, &ground);
    }

    kart.set_input(KartInputs::default());
    for _ in 0..200 {
        kart.advance_fixed(DT, &ground);
    }
    assert!(
        kart.current_speed().abs() < 1e-3,
        "coasting should decay to rest (got {})",
        kart.current_speed()
    );
}

#[test]
fn velocity_is_the_forward_axis_times_speed_on_flat_ground() {
    let mut kart = controller();
    let ground = FlatGround { height: 0.0 };

    kart.set_input(KartInputs {
        throttle: true,
        ..Default::default()
    });
    for _ in 0..100 {
        kart.advance_fixed(DT, &ground);
    }
    let speed = kart.current_speed();
    assert!(
        (kart.velocity().length() - speed.abs()).abs() < 1e-4,
        "grounded velocity magnitude should equal |current_speed|"
    );
}

/// Probe that never finds a surface.
struct Void;

impl GroundSensor for Void {
    fn probe(&self, _position: Vec3, _down: Vec3, _max_distance: f32) -> Option<GroundHit> {
        None
    }
}

#[test]
fn airborne_kart_accumulates_fall_speed() {
    let mut kart = controller();

    kart.set_input(KartInputs {
        throttle: true,
        ..Default::default()
    });
    for _ in 0..50 {
        kart.advance_fixed(DT, &Void);
    }
    assert!(!kart.is_grounded());
    let vy_early = kart.velocity().y;
    for _ in 0..50 {
        kart.advance_fixed(DT, &Void);
    }
    let vy_late = kart.velocity().y;
    assert!(vy_early < 0.0, "gravity should pull downward while airborne");
    assert!(
        vy_late < vy_early,
        "fall speed should keep building while airborne"
    );
}

#[test]
fn touchdown_clears_fall_speed() {
    let mut kart = controller();
    let ground = FlatGround { height: -1000.0 };

    kart.set_input(KartInputs {
        throttle: true,
        ..Default::default()
    });
    // Far above the plane: airborne, falling
    for _ in 0..100 {
        kart.advance_fixed(DT, &ground);
    }
    assert!(kart.velocity().y < 0.0);

    // Once the probe reaches the plane, contact zeroes the fall speed
    while !kart.is_grounded() {
        kart.advance_fixed(DT, &ground);
    }
    kart.advance_fixed(DT, &ground);
    assert!(kart.velocity().y.abs() < 1e-4);
}
