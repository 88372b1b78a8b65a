//! Movement domain: the character controller and its plugin wiring.

pub(crate) mod body;
mod components;
mod controller;
mod events;
mod intent;
mod resources;
mod state;
mod systems;


pub use body::CharacterBody;
pub use components::{AnimatorFlags, GameLayer, Player, SurfaceKind};
pub use controller::{MovementController, TeleportOutcome};
pub use events::{
    CollectibleTouchedEvent, ControllerEvent, PlayerGroundedEvent, PlayerHitDeadZoneEvent,
};
pub use intent::InputIntent;
pub use resources::MovementTuning;
pub use state::{AbilityState, Facing};

use bevy::prelude::*;

use crate::movement::systems::{
    apply_input_intents, forward_controller_events, read_input, route_player_contacts,
    step_controllers, tick_controller_timers,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .add_message::<InputIntent>()
            .add_message::<PlayerGroundedEvent>()
            .add_message::<PlayerHitDeadZoneEvent>()
            .add_message::<CollectibleTouchedEvent>()
            .add_systems(
                Update,
                (
                    read_input,
                    apply_input_intents,
                    tick_controller_timers,
                    route_player_contacts,
                    forward_controller_events,
                )
                    .chain(),
            )
            .add_systems(FixedUpdate, step_controllers);
    }
}
