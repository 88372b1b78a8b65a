//! Level domain: sandbox geometry and player spawning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::level::LevelEntity;
use crate::movement::{
    AnimatorFlags, GameLayer, MovementController, MovementTuning, Player, SurfaceKind,
};

/// Gravity scale the controller captures as its base on the first tick.
const PLAYER_GRAVITY_SCALE: f32 = 1.0;
const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);
const PLAYER_SPAWN: Vec3 = Vec3::new(-300.0, -100.0, 1.0);

const COLLECTIBLE_RADIUS: f32 = 10.0;

pub(crate) fn spawn_player(commands: &mut Commands, tuning: &MovementTuning) {
    commands.spawn((
        LevelEntity,
        // Identity & Movement
        (
            Player,
            MovementController::new(tuning.clone()),
            AnimatorFlags::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_translation(PLAYER_SPAWN),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(PLAYER_GRAVITY_SCALE),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Sensor]),
        ),
    ));
}

/// Static slab the player can stand on.
fn spawn_solid(
    commands: &mut Commands,
    kind: SurfaceKind,
    size: Vec2,
    transform: Transform,
    color: Color,
) {
    commands.spawn((
        LevelEntity,
        kind,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        transform,
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
    ));
}

pub(crate) fn spawn_level_geometry(commands: &mut Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let slope_color = Color::srgb(0.45, 0.45, 0.35);

    // Ground, split by a pit
    spawn_solid(
        commands,
        SurfaceKind::Ground,
        Vec2::new(600.0, 40.0),
        Transform::from_xyz(-300.0, -200.0, 0.0),
        ground_color,
    );
    spawn_solid(
        commands,
        SurfaceKind::Ground,
        Vec2::new(500.0, 40.0),
        Transform::from_xyz(450.0, -200.0, 0.0),
        ground_color,
    );

    // Slope rising to the right, for crawling
    spawn_solid(
        commands,
        SurfaceKind::Ground,
        Vec2::new(260.0, 20.0),
        Transform::from_xyz(-420.0, -150.0, 0.0).with_rotation(Quat::from_rotation_z(0.35)),
        slope_color,
    );

    // Platforms
    spawn_solid(
        commands,
        SurfaceKind::Platform,
        Vec2::new(150.0, 20.0),
        Transform::from_xyz(-150.0, -60.0, 0.0),
        platform_color,
    );
    spawn_solid(
        commands,
        SurfaceKind::Platform,
        Vec2::new(150.0, 20.0),
        Transform::from_xyz(100.0, 40.0, 0.0),
        platform_color,
    );
    spawn_solid(
        commands,
        SurfaceKind::Platform,
        Vec2::new(120.0, 20.0),
        Transform::from_xyz(400.0, 140.0, 0.0),
        platform_color,
    );

    // Thin wall to blink through
    spawn_solid(
        commands,
        SurfaceKind::Ground,
        Vec2::new(20.0, 120.0),
        Transform::from_xyz(560.0, -120.0, 0.0),
        ground_color,
    );

    // Collectibles
    for position in [
        Vec2::new(-150.0, -20.0),
        Vec2::new(100.0, 80.0),
        Vec2::new(400.0, 180.0),
        Vec2::new(620.0, -160.0),
    ] {
        commands.spawn((
            LevelEntity,
            SurfaceKind::Collectible,
            Sprite {
                color: Color::srgb(1.0, 0.85, 0.2),
                custom_size: Some(Vec2::splat(COLLECTIBLE_RADIUS * 2.0)),
                ..default()
            },
            Transform::from_translation(position.extend(0.0)),
            RigidBody::Static,
            Collider::circle(COLLECTIBLE_RADIUS),
            Sensor,
            CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
        ));
    }

    // Kill volume under the pit
    commands.spawn((
        LevelEntity,
        SurfaceKind::DeadZone,
        Transform::from_xyz(0.0, -500.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(4000.0, 100.0),
        Sensor,
        CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
    ));
}
