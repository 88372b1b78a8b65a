//! Gameplay domain: score, pickups and the death/restart sequence.

mod events;
mod session;
mod systems;

#[cfg(test)]
mod tests;

pub use events::RestartLevelEvent;
pub use session::{GameplaySession, SessionTuning};

use bevy::prelude::*;

use crate::gameplay::systems::{
    collect_collectibles, configure_session, handle_dead_zone, log_landings, tick_death_timer,
};

pub struct GameplayPlugin;

impl Plugin for GameplayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SessionTuning>()
            .init_resource::<GameplaySession>()
            .add_message::<RestartLevelEvent>()
            .add_systems(Startup, configure_session)
            .add_systems(
                Update,
                (
                    handle_dead_zone,
                    collect_collectibles,
                    tick_death_timer,
                    log_landings,
                )
                    .chain(),
            );
    }
}
