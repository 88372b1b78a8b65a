//! Movement domain: contact routing from the physics engine to the controller.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::body::AvianBody;
use crate::movement::{CollectibleTouchedEvent, MovementController, Player, SurfaceKind};

/// Classify collision starts/ends that involve the player and hand them to
/// its controller. Collectibles are forwarded to gameplay as messages.
pub(crate) fn route_player_contacts(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    mut collectible_events: MessageWriter<CollectibleTouchedEvent>,
    spatial_query: SpatialQuery,
    surfaces: Query<&SurfaceKind>,
    mut player_query: Query<
        (
            Entity,
            &Collider,
            &mut MovementController,
            &mut LinearVelocity,
            &mut GravityScale,
            &mut Transform,
        ),
        With<Player>,
    >,
) {
    let Ok((player, collider, mut controller, mut velocity, mut gravity, mut transform)) =
        player_query.single_mut()
    else {
        // Consume events if no player
        for _ in collision_start_events.read() {}
        for _ in collision_end_events.read() {}
        return;
    };

    let classify = |a: Entity, b: Entity| -> Option<(Entity, SurfaceKind)> {
        let other = if a == player {
            b
        } else if b == player {
            a
        } else {
            return None;
        };
        surfaces.get(other).ok().map(|kind| (other, *kind))
    };

    for event in collision_start_events.read() {
        let Some((other, kind)) = classify(event.collider1, event.collider2) else {
            continue;
        };

        if kind == SurfaceKind::Collectible {
            collectible_events.write(CollectibleTouchedEvent {
                player,
                collectible: other,
            });
            continue;
        }

        let body = AvianBody::new(
            player,
            &mut velocity,
            &mut gravity,
            &mut transform,
            &spatial_query,
            collider,
        );
        controller.on_contact_enter(kind, &body);
        debug!("[CONTACT] Player touched {:?} {:?}", kind, other);
    }

    for event in collision_end_events.read() {
        let Some((other, kind)) = classify(event.collider1, event.collider2) else {
            continue;
        };

        controller.on_contact_exit(kind);
        debug!("[CONTACT] Player left {:?} {:?}", kind, other);
    }
}
