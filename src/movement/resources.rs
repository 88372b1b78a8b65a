//! Movement domain: tuning resource.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Tunable movement parameters. World units are pixels.
///
/// The resource holds the values a freshly spawned character starts with;
/// each controller owns its own copy, which pickups and rolling mutate.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub move_speed: f32,
    pub jump_speed: f32,
    /// Seconds the held jump keeps pushing upward.
    pub jump_time: f32,
    /// Vertical speed factor applied while a jump is held.
    pub jump_hold_factor: f32,
    pub jump_buffer_time: f32,
    pub fall_gravity_multiplier: f32,
    pub low_jump_multiplier: f32,
    /// Per-tick velocity factor when idle or coasting.
    pub idle_damping: f32,

    pub roll_speed_bonus: f32,
    /// Degrees of spin per unit of horizontal speed per second.
    pub roll_spin: f32,

    pub puff_gravity_multiplier: f32,
    pub puff_max_speed: f32,
    pub puff_acceleration: f32,
    pub puff_decay: f32,
    pub puff_entry_smoothing: f32,
    pub puff_flap_speed: f32,
    pub puff_flap_cooldown: f32,

    pub flatten_gravity_multiplier: f32,
    pub crawl_speed: f32,
    pub mini_hop_speed: f32,
    /// When false, flattening on the ground locks the character in place.
    pub flatten_allows_crawl: bool,

    pub super_jump_multiplier: f32,
    pub super_jump_window: f32,

    pub teleport_distance: f32,
    pub teleport_cooldown: f32,
    pub teleport_clear_radius: f32,
    /// Number of slices the teleport line is split into when backing off.
    pub teleport_samples: u32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 200.0,
            jump_speed: 720.0,
            jump_time: 0.1,
            jump_hold_factor: 0.6,
            jump_buffer_time: 0.2,
            fall_gravity_multiplier: 0.5,
            low_jump_multiplier: 4.0,
            idle_damping: 0.6,
            roll_speed_bonus: 200.0,
            roll_spin: 5.0,
            puff_gravity_multiplier: 0.1,
            puff_max_speed: 130.0,
            puff_acceleration: 6.0,
            puff_decay: 160.0,
            puff_entry_smoothing: 0.08,
            puff_flap_speed: 450.0,
            puff_flap_cooldown: 0.25,
            flatten_gravity_multiplier: 4.0,
            crawl_speed: 64.0,
            mini_hop_speed: 270.0,
            flatten_allows_crawl: true,
            super_jump_multiplier: 2.5,
            super_jump_window: 0.3,
            teleport_distance: 96.0,
            teleport_cooldown: 0.8,
            teleport_clear_radius: 12.0,
            teleport_samples: 6,
        }
    }
}

impl MovementTuning {
    /// Vertical speed of the flatten-to-puff combo jump.
    pub fn super_jump_speed(&self) -> f32 {
        self.jump_speed * self.super_jump_multiplier
    }

    /// Vertical speed while a jump is held.
    pub fn held_jump_speed(&self) -> f32 {
        self.jump_speed * self.jump_hold_factor
    }

    /// Fractions of the teleport distance tried after the full distance is
    /// blocked, farthest first. Six samples give 5/6 down to 1/6.
    pub fn teleport_backoff_fractions(&self) -> impl Iterator<Item = f32> {
        let samples = self.teleport_samples.max(1);
        (1..samples).rev().map(move |i| i as f32 / samples as f32)
    }
}
