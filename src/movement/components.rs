//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;
use std::collections::HashMap;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms, slopes). Also blocks teleports.
    Ground,
    /// Player character
    Player,
    /// Pickups and kill volumes - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Tag classification a collider carries. The controller reacts to the
/// class only, never to the identity of what it touched.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    Ground,
    Platform,
    Collectible,
    DeadZone,
}

impl SurfaceKind {
    /// Surfaces the character can stand on.
    pub fn is_ground_like(self) -> bool {
        matches!(self, SurfaceKind::Ground | SurfaceKind::Platform)
    }
}

/// Boolean animator parameters published by the controller.
#[derive(Component, Debug, Default)]
pub struct AnimatorFlags {
    pub flags: HashMap<&'static str, bool>,
}

impl AnimatorFlags {
    pub fn set(&mut self, name: &'static str, value: bool) {
        self.flags.insert(name, value);
    }

    pub fn get(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }
}
