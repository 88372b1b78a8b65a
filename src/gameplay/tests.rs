//! Gameplay domain: unit tests for the session.

use super::{GameplaySession, SessionTuning};
use crate::movement::{MovementController, MovementTuning};

fn controller() -> MovementController {
    MovementController::new(MovementTuning::default())
}

#[test]
fn test_pickup_applies_deltas_once() {
    let mut session = GameplaySession::new(SessionTuning::default());
    let mut controller = controller();
    let before = controller.tuning().clone();
    let tuning = session.tuning.clone();

    let score = session.on_collectible(&mut controller);

    assert_eq!(score, 1);
    assert_eq!(session.score(), 1);
    let after = controller.tuning();
    assert!((after.move_speed - (before.move_speed + tuning.speed_boost)).abs() < 1e-4);
    assert!((after.jump_time - (before.jump_time + tuning.jump_time_boost)).abs() < 1e-4);
    assert!(
        (after.jump_speed - (before.jump_speed - tuning.jump_speed_reduction)).abs() < 1e-4
    );
}

#[test]
fn test_score_counts_each_pickup() {
    let mut session = GameplaySession::default();
    let mut controller = controller();

    for _ in 0..3 {
        session.on_collectible(&mut controller);
    }

    assert_eq!(session.score(), 3);
}

#[test]
fn test_hazard_freezes_movement_immediately() {
    let mut session = GameplaySession::default();
    let mut controller = controller();

    session.on_hazard(&mut controller);

    assert!(session.is_dead());
    assert!(!controller.can_move());
}

#[test]
fn test_restart_fires_once_after_dead_time() {
    let mut session = GameplaySession::new(SessionTuning {
        dead_time: 1.0,
        ..Default::default()
    });
    let mut controller = controller();

    session.on_hazard(&mut controller);

    // 0.9s in: not yet
    let mut fired = 0;
    for _ in 0..9 {
        if session.tick(0.1, &mut controller) {
            fired += 1;
        }
    }
    assert_eq!(fired, 0);
    assert!(!controller.can_move());

    for _ in 0..20 {
        if session.tick(0.1, &mut controller) {
            fired += 1;
        }
    }
    assert_eq!(fired, 1);
}

#[test]
fn test_tick_keeps_movement_disabled_while_dead() {
    let mut session = GameplaySession::default();
    let mut controller = controller();

    session.on_hazard(&mut controller);
    controller.set_can_move(true);
    session.tick(0.01, &mut controller);

    assert!(!controller.can_move());
}

#[test]
fn test_tick_is_inert_while_alive() {
    let mut session = GameplaySession::default();
    let mut controller = controller();

    assert!(!session.tick(5.0, &mut controller));
    assert!(controller.can_move());
    assert_eq!(session.death_timer(), 0.0);
}

#[test]
fn test_second_hazard_does_not_restart_timer() {
    let mut session = GameplaySession::default();
    let mut controller = controller();

    session.on_hazard(&mut controller);
    session.tick(0.5, &mut controller);
    session.on_hazard(&mut controller);

    assert!((session.death_timer() - 0.5).abs() < 1e-6);
}

#[test]
fn test_reset_restores_alive_state() {
    let mut session = GameplaySession::default();
    let mut controller = controller();

    session.on_collectible(&mut controller);
    session.on_hazard(&mut controller);
    session.tick(2.0, &mut controller);
    session.reset();

    assert_eq!(session.score(), 0);
    assert!(!session.is_dead());
    assert_eq!(session.death_timer(), 0.0);

    // A new death after reset signals again
    session.on_hazard(&mut controller);
    assert!(session.tick(2.0, &mut controller));
}
