//! Movement domain: input sampling for locomotion.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::body::AvianBody;
use crate::movement::{InputIntent, MovementController, Player};

/// Turn keyboard state into discrete intents. Only edges are reported; the
/// axis is reported whenever it changes.
pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut last_axis: Local<Vec2>,
    mut intents: MessageWriter<InputIntent>,
) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    let axis = Vec2::new(x, y);
    if axis != *last_axis {
        *last_axis = axis;
        intents.write(InputIntent::MoveAxis(axis));
    }

    let bindings = [
        (
            [KeyCode::Space, KeyCode::KeyK],
            InputIntent::JumpPressed,
            Some(InputIntent::JumpReleased),
        ),
        (
            [KeyCode::ShiftLeft, KeyCode::KeyL],
            InputIntent::RollPressed,
            Some(InputIntent::RollReleased),
        ),
        (
            [KeyCode::KeyQ, KeyCode::KeyU],
            InputIntent::PuffPressed,
            Some(InputIntent::PuffReleased),
        ),
        (
            [KeyCode::KeyE, KeyCode::KeyI],
            InputIntent::FlattenPressed,
            Some(InputIntent::FlattenReleased),
        ),
        ([KeyCode::KeyF, KeyCode::KeyJ], InputIntent::TeleportPressed, None),
    ];

    for (keys, pressed, released) in bindings {
        // A second key of the same binding must not re-press or release early
        let was_held = keys
            .iter()
            .any(|k| keyboard.pressed(*k) && !keyboard.just_pressed(*k));
        let now_held = keys.iter().any(|k| keyboard.pressed(*k));

        if !was_held && keys.iter().any(|k| keyboard.just_pressed(*k)) {
            intents.write(pressed);
        }
        if let Some(released) = released {
            if !now_held && keys.iter().any(|k| keyboard.just_released(*k)) {
                intents.write(released);
            }
        }
    }
}

/// Feed intents to every player controller as they arrive.
pub(crate) fn apply_input_intents(
    mut intents: MessageReader<InputIntent>,
    spatial_query: SpatialQuery,
    mut query: Query<
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
    for intent in intents.read() {
        for (entity, collider, mut controller, mut velocity, mut gravity, mut transform) in
            &mut query
        {
            let mut body = AvianBody::new(
                entity,
                &mut velocity,
                &mut gravity,
                &mut transform,
                &spatial_query,
                collider,
            );
            controller.handle_intent(*intent, &mut body);
        }
    }
}
