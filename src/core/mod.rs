//! Core domain: camera, world gravity and simulation rate.

use avian2d::prelude::*;
use bevy::prelude::*;

/// World units are pixels, so gravity is expressed in px/s².
pub const WORLD_GRAVITY: f32 = 1800.0;

/// Fixed physics rate the movement controller ticks at.
pub const PHYSICS_HZ: f64 = 60.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Gravity(Vec2::NEG_Y * WORLD_GRAVITY))
            .insert_resource(Time::<Fixed>::from_hz(PHYSICS_HZ))
            .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
