//! Level domain: the sandbox level and its reload on restart.

mod spawn;

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::gameplay::{GameplaySession, RestartLevelEvent};
use crate::movement::MovementTuning;

use crate::level::spawn::{spawn_level_geometry, spawn_player};

/// Everything despawned when the level reloads.
#[derive(Component, Debug)]
pub struct LevelEntity;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_level)
            .add_systems(Update, reload_level);
    }
}

fn setup_level(mut commands: Commands, tuning: Res<MovementTuning>) {
    spawn_level_geometry(&mut commands);
    spawn_player(&mut commands, &tuning);
    info!("Level ready");
}

/// Rebuild the level from scratch. Pickup effects die with the old player.
fn reload_level(
    mut commands: Commands,
    mut restart_events: MessageReader<RestartLevelEvent>,
    level_entities: Query<Entity, With<LevelEntity>>,
    mut session: ResMut<GameplaySession>,
    tuning: Res<MovementTuning>,
) {
    if restart_events.read().count() == 0 {
        return;
    }

    for entity in &level_entities {
        commands.entity(entity).despawn();
    }
    session.reset();

    spawn_level_geometry(&mut commands);
    spawn_player(&mut commands, &tuning);
    info!("Level reloaded");
}
