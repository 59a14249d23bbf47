use kart::{
    DriftDirection, DriftTier, FlatGround, KartConfig, KartController, KartEvent, KartInputs,
};

const DT: f32 = 0.02;
const GROUND: FlatGround = FlatGround { height: 0.0 };

fn drifting_inputs(steer: f32) -> KartInputs {
    KartInputs {
        steer,
        throttle: true,
        reverse: false,
        drift_held: true,
    }
}

/// Accelerates to cruise speed, jumps, and lands with the given steer and
/// the drift button held.
fn land_drifting(kart: &mut KartController, steer: f32) {
    kart.set_input(KartInputs {
        throttle: true,
        ..Default::default()
    });
    for _ in 0..300 {
        kart.advance_fixed(DT, &GROUND);
    }
    kart.on_jump_started();
    kart.set_input(drifting_inputs(steer));
    kart.on_landed();
}

#[test]
fn landing_with_zero_steer_never_starts_a_drift() {
    let mut kart = KartController::new(KartConfig::default()).unwrap();
    land_drifting(&mut kart, 0.0);
    assert!(!kart.is_drifting());
    assert!(!kart
        .take_events()
        .iter()
        .any(|e| matches!(e, KartEvent::DriftStarted { .. })));
}

#[test]
fn direction_locks_for_the_whole_session() {
    let mut kart = KartController::new(KartConfig::default()).unwrap();
    land_drifting(&mut kart, 0.6);
    assert_eq!(kart.drift_direction(), Some(DriftDirection::Right));

    // Steer hard the other way; the session must stay committed
    kart.set_input(drifting_inputs(-1.0));
    for _ in 0..50 {
        kart.advance_fixed(DT, &GROUND);
        kart.advance_presentation(DT);
    }
    assert!(kart.is_drifting());
    assert_eq!(kart.drift_direction(), Some(DriftDirection::Right));
}

#[test]
fn duplicate_landing_while_active_is_a_noop() {
    let mut kart = KartController::new(KartConfig::default()).unwrap();
    land_drifting(&mut kart, 0.6);
    kart.take_events();

    kart.set_input(drifting_inputs(-0.8));
    kart.on_landed();
    assert_eq!(kart.drift_direction(), Some(DriftDirection::Right));
    assert!(!kart
        .take_events()
        .iter()
        .any(|e| matches!(e, KartEvent::DriftStarted { .. })));
}

#[test]
fn tiers_step_up_once_each_in_order() {
    let mut kart = KartController::new(KartConfig::default()).unwrap();
    land_drifting(&mut kart, 0.6);
    kart.take_events();

    // Default thresholds: MEDIUM at 1s, STRONG at 2s of session time
    for _ in 0..125 {
        kart.advance_fixed(DT, &GROUND);
        kart.advance_presentation(DT);
    }
    let tiers: Vec<DriftTier> = kart
        .take_events()
        .into_iter()
        .filter_map(|e| match e {
            KartEvent::DriftTierChanged { tier } => Some(tier),
            _ => None,
        })
        .collect();
    assert_eq!(
        tiers,
        vec![DriftTier::Base, DriftTier::Medium, DriftTier::Strong],
        "each tier change must fire exactly once"
    );
    assert_eq!(kart.drift_tier(), DriftTier::Strong);
}

#[test]
fn speed_floor_cancels_without_payout() {
    let mut kart = KartController::new(KartConfig::default()).unwrap();
    land_drifting(&mut kart, 0.6);
    // Ride the session to STRONG before starving it
    for _ in 0..125 {
        kart.advance_fixed(DT, &GROUND);
        kart.advance_presentation(DT);
    }
    assert_eq!(kart.drift_tier(), DriftTier::Strong);
    kart.take_events();

    // Let go of the throttle while still holding drift: speed decays
    // through the floor and the session dies on the penalty path
    kart.set_input(KartInputs {
        steer: 0.6,
        throttle: false,
        reverse: false,
        drift_held: true,
    });
    for _ in 0..100 {
        kart.advance_fixed(DT, &GROUND);
        kart.advance_presentation(DT);
    }

    assert!(!kart.is_drifting());
    assert!(!kart.is_boost_active(), "a cancelled drift must not pay out");
    let events = kart.take_events();
    assert!(events.contains(&KartEvent::DriftEnded { boosted: false }));
    assert!(!events
        .iter()
        .any(|e| matches!(e, KartEvent::BoostStarted { .. })));
}

#[test]
fn button_release_pays_out_the_tier_reached() {
    let mut kart = KartController::new(KartConfig::default()).unwrap();
    land_drifting(&mut kart, 0.6);
    for _ in 0..125 {
        kart.advance_fixed(DT, &GROUND);
        kart.advance_presentation(DT);
    }
    assert_eq!(kart.drift_tier(), DriftTier::Strong);
    kart.take_events();

    kart.on_drift_button_released();
    assert!(!kart.is_drifting());
    assert!(kart.is_boost_active());
    let events = kart.take_events();
    assert!(events.contains(&KartEvent::DriftEnded { boosted: true }));

    // STRONG payout: bonus = boost_speed * 4/3, duration = boost_duration * 2
    let cfg = KartConfig::default();
    assert!((kart.max_speed() - (cfg.max_speed + cfg.boost_speed * 4.0 / 3.0)).abs() < 1e-4);
    let Some(KartEvent::BoostStarted { bonus, duration }) = events
        .iter()
        .find(|e| matches!(e, KartEvent::BoostStarted { .. }))
    else {
        panic!("expected a BoostStarted event");
    };
    assert!((bonus - cfg.boost_speed * 4.0 / 3.0).abs() < 1e-4);
    assert!((duration - cfg.boost_duration * 2.0).abs() < 1e-4);
}
