//! Movement domain: input intents delivered to the controller.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Discrete input events. Presses and releases arrive as separate intents so
/// the controller can track holds itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputIntent {
    MoveAxis(Vec2),
    JumpPressed,
    JumpReleased,
    RollPressed,
    RollReleased,
    /// Ability A
    PuffPressed,
    PuffReleased,
    /// Ability B
    FlattenPressed,
    FlattenReleased,
    TeleportPressed,
}

impl Message for InputIntent {}
