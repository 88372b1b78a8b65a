//! Movement domain: drains controller events into messages and display state.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{
    AbilityState, AnimatorFlags, ControllerEvent, Facing, MovementController, Player,
    PlayerGroundedEvent, PlayerHitDeadZoneEvent,
};

/// Body color per ability, so the state is readable without an animator.
fn ability_color(ability: AbilityState) -> Color {
    match ability {
        AbilityState::Normal => Color::srgb(0.9, 0.9, 0.9),
        AbilityState::Puffed => Color::srgb(0.75, 0.85, 1.0),
        AbilityState::Flattened => Color::srgb(0.95, 0.7, 0.55),
    }
}

/// Display and gameplay collaborators are optional: a player without a
/// sprite or animator still gets its gameplay messages.
pub(crate) fn forward_controller_events(
    mut query: Query<
        (
            Entity,
            &mut MovementController,
            Option<&mut Sprite>,
            Option<&mut AnimatorFlags>,
        ),
        With<Player>,
    >,
    mut grounded_events: MessageWriter<PlayerGroundedEvent>,
    mut dead_zone_events: MessageWriter<PlayerHitDeadZoneEvent>,
) {
    for (player, mut controller, mut sprite, mut animator) in &mut query {
        for event in controller.drain_events() {
            match event {
                ControllerEvent::Grounded => {
                    grounded_events.write(PlayerGroundedEvent { player });
                }
                ControllerEvent::HitDeadZone => {
                    dead_zone_events.write(PlayerHitDeadZoneEvent { player });
                }
                ControllerEvent::FacingChanged(facing) => {
                    // Bo's sprite sheet is drawn facing left
                    if let Some(sprite) = sprite.as_mut() {
                        sprite.flip_x = facing == Facing::Right;
                    }
                }
                ControllerEvent::AnimatorFlag { name, value } => {
                    if let Some(animator) = animator.as_mut() {
                        animator.set(name, value);
                    }
                }
                ControllerEvent::AbilityChanged { from, to } => {
                    debug!("Ability {:?} -> {:?}", from, to);
                    if let Some(sprite) = sprite.as_mut() {
                        sprite.color = ability_color(to);
                    }
                }
                ControllerEvent::Jumped => debug!("Jump"),
                ControllerEvent::SuperJumped => debug!("Super jump"),
                ControllerEvent::Teleported { from, to } => {
                    debug!("Teleported {:?} -> {:?}", from, to);
                }
            }
        }
    }
}
