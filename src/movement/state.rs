//! Movement domain: state machine data owned by the controller.

use bevy::prelude::*;

/// Shape ability currently applied to the character.
///
/// Puffed and Flattened are variants of one enum, so the two can never be
/// active together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AbilityState {
    #[default]
    Normal,
    Puffed,
    Flattened,
}

impl AbilityState {
    /// Resolve a transition request against the current state.
    ///
    /// When both abilities are requested the one that was not already active
    /// wins, so a fresh press always beats a stale hold. From `Normal` the
    /// puff wins.
    pub fn resolve(current: AbilityState, puff: bool, flatten: bool) -> AbilityState {
        match (puff, flatten) {
            (true, true) => match current {
                AbilityState::Puffed => AbilityState::Flattened,
                AbilityState::Flattened | AbilityState::Normal => AbilityState::Puffed,
            },
            (true, false) => AbilityState::Puffed,
            (false, true) => AbilityState::Flattened,
            (false, false) => AbilityState::Normal,
        }
    }

    pub fn is_puffed(self) -> bool {
        self == AbilityState::Puffed
    }

    pub fn is_flattened(self) -> bool {
        self == AbilityState::Flattened
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Discrete facing for a horizontal axis value, `None` inside the dead zone.
    pub fn from_axis(x: f32) -> Option<Facing> {
        if x > 0.1 {
            Some(Facing::Right)
        } else if x < -0.1 {
            Some(Facing::Left)
        } else {
            None
        }
    }

    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Grounded/jump bookkeeping.
///
/// `jumping` implies `!grounded`. `consumed` is only cleared by a new press
/// or by landing.
#[derive(Debug, Clone, Default)]
pub struct JumpState {
    pub grounded: bool,
    pub jumping: bool,
    pub consumed: bool,
    /// Seconds left in which a press before landing still counts.
    pub buffer_remaining: f32,
    /// Jump was released since the last press; selects the low-jump gravity
    /// while rising. Cleared on landing.
    pub released: bool,
    /// A press arrived since the last physics tick.
    pub pressed: bool,
    /// Time spent in the current jump hold.
    pub hold_timer: f32,
    /// Number of ground colliders currently touched.
    pub ground_contacts: u32,
}

#[derive(Debug, Clone, Default)]
pub struct TeleportState {
    pub cooldown_remaining: f32,
}

#[derive(Debug, Clone, Default)]
pub struct PuffState {
    /// Horizontal velocity managed while puffed.
    pub velocity_x: f32,
    /// Horizontal velocity at the moment puff was engaged.
    pub entry_velocity_x: f32,
    pub entry_remaining: f32,
    pub flap_cooldown: f32,
    /// A flap fired since the last physics tick.
    pub flap_pending: bool,
}

/// Ground stick while flattened.
#[derive(Debug, Clone, Default)]
pub struct FlattenState {
    pub stuck_to_ground: bool,
    /// Last sampled ground normal used to project the crawl.
    pub ground_normal: Option<Vec2>,
}
