//! Movement domain: controller notifications and the messages they become.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::state::{AbilityState, Facing};

/// Everything the controller reports to the outside world. Queued in the
/// controller and drained by systems once per frame.
#[derive(Debug, Clone, PartialEq)]
pub enum ControllerEvent {
    Grounded,
    HitDeadZone,
    FacingChanged(Facing),
    AnimatorFlag { name: &'static str, value: bool },
    Jumped,
    SuperJumped,
    AbilityChanged { from: AbilityState, to: AbilityState },
    Teleported { from: Vec2, to: Vec2 },
}

/// Event fired when the player lands on a ground-like surface
#[derive(Debug)]
pub struct PlayerGroundedEvent {
    pub player: Entity,
}

impl Message for PlayerGroundedEvent {}

/// Event fired when the player touches a kill volume
#[derive(Debug)]
pub struct PlayerHitDeadZoneEvent {
    pub player: Entity,
}

impl Message for PlayerHitDeadZoneEvent {}

/// Event fired when the player touches a collectible
#[derive(Debug)]
pub struct CollectibleTouchedEvent {
    pub player: Entity,
    pub collectible: Entity,
}

impl Message for CollectibleTouchedEvent {}
