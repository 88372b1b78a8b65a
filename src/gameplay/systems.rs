//! Gameplay domain: systems reacting to controller notifications.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use std::collections::HashSet;

use crate::gameplay::{GameplaySession, RestartLevelEvent, SessionTuning};
use crate::movement::{
    CollectibleTouchedEvent, MovementController, Player, PlayerGroundedEvent,
    PlayerHitDeadZoneEvent, SurfaceKind,
};

/// Pick up the tuning loaded at PreStartup.
pub(crate) fn configure_session(
    tuning: Res<SessionTuning>,
    mut session: ResMut<GameplaySession>,
) {
    session.tuning = tuning.clone();
}

pub(crate) fn handle_dead_zone(
    mut events: MessageReader<PlayerHitDeadZoneEvent>,
    mut session: ResMut<GameplaySession>,
    mut controllers: Query<&mut MovementController, With<Player>>,
) {
    for event in events.read() {
        let Ok(mut controller) = controllers.get_mut(event.player) else {
            continue;
        };
        session.on_hazard(&mut controller);
    }
}

/// Apply each collectible once and despawn it. Several contacts with the
/// same collectible can arrive in one frame.
pub(crate) fn collect_collectibles(
    mut commands: Commands,
    mut events: MessageReader<CollectibleTouchedEvent>,
    mut session: ResMut<GameplaySession>,
    surfaces: Query<&SurfaceKind>,
    mut controllers: Query<&mut MovementController, With<Player>>,
) {
    let mut collected = HashSet::new();

    for event in events.read() {
        if !matches!(surfaces.get(event.collectible), Ok(SurfaceKind::Collectible)) {
            continue;
        }
        if !collected.insert(event.collectible) {
            continue;
        }
        let Ok(mut controller) = controllers.get_mut(event.player) else {
            continue;
        };

        let score = session.on_collectible(&mut controller);
        commands.entity(event.collectible).despawn();
        info!(
            "Collected {:?}, score {} (move speed {:.0})",
            event.collectible,
            score,
            controller.tuning().move_speed
        );
    }
}

pub(crate) fn tick_death_timer(
    time: Res<Time>,
    mut session: ResMut<GameplaySession>,
    mut controllers: Query<&mut MovementController, With<Player>>,
    mut restart_events: MessageWriter<RestartLevelEvent>,
) {
    if !session.is_dead() {
        return;
    }
    let Ok(mut controller) = controllers.single_mut() else {
        return;
    };

    if session.tick(time.delta_secs(), &mut controller) {
        info!("Restarting level");
        restart_events.write(RestartLevelEvent);
    }
}

pub(crate) fn log_landings(mut events: MessageReader<PlayerGroundedEvent>) {
    for event in events.read() {
        debug!("Player {:?} landed", event.player);
    }
}
