//! Gameplay domain: events for level flow.

use bevy::ecs::message::Message;

/// Event fired once the death timer has run out and the level should reload
#[derive(Debug)]
pub struct RestartLevelEvent;

impl Message for RestartLevelEvent {}

