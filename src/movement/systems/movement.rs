//! Movement domain: controller clocks.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::body::AvianBody;
use crate::movement::{MovementController, Player};

/// Frame update: cooldowns and the jump buffer run on frame time.
pub(crate) fn tick_controller_timers(
    time: Res<Time>,
    mut query: Query<&mut MovementController, With<Player>>,
) {
    let dt = time.delta_secs();

    for mut controller in &mut query {
        controller.update(dt);
    }
}

/// Fixed update: one state machine step per physics step.
pub(crate) fn step_controllers(
    time: Res<Time>,
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
    let dt = time.delta_secs();

    for (entity, collider, mut controller, mut velocity, mut gravity, mut transform) in &mut query
    {
        let mut body = AvianBody::new(
            entity,
            &mut velocity,
            &mut gravity,
            &mut transform,
            &spatial_query,
            collider,
        );
        controller.fixed_tick(dt, &mut body);
    }
}
