//! Gameplay domain: score, pickups and the death sequence.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::MovementController;

/// Tunable session values. Pickup deltas are in pixels and seconds.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionTuning {
    /// Seconds between touching a hazard and the restart signal.
    pub dead_time: f32,
    pub speed_boost: f32,
    pub jump_time_boost: f32,
    pub jump_speed_reduction: f32,
}

impl Default for SessionTuning {
    fn default() -> Self {
        Self {
            dead_time: 1.0,
            speed_boost: 10.0,
            jump_time_boost: 0.01,
            jump_speed_reduction: 4.0,
        }
    }
}

/// Per-level gameplay state.
///
/// The session never touches the body directly; it only talks to the
/// controller through its public methods.
#[derive(Resource, Debug, Default)]
pub struct GameplaySession {
    pub tuning: SessionTuning,
    score: u32,
    dead: bool,
    death_timer: f32,
    restart_signalled: bool,
}

impl GameplaySession {
    pub fn new(tuning: SessionTuning) -> Self {
        Self {
            tuning,
            ..Default::default()
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn death_timer(&self) -> f32 {
        self.death_timer
    }

    /// Hazard touched: freeze the character and start the death timer.
    /// Further hazards while dead are ignored.
    pub fn on_hazard(&mut self, controller: &mut MovementController) {
        controller.set_can_move(false);
        if self.dead {
            return;
        }

        self.dead = true;
        self.death_timer = 0.0;
        info!("Player died, restarting in {:.1}s", self.tuning.dead_time);
    }

    /// Apply one pickup. Returns the new score.
    pub fn on_collectible(&mut self, controller: &mut MovementController) -> u32 {
        self.score += 1;
        controller.update_movement_params(
            self.tuning.speed_boost,
            self.tuning.jump_time_boost,
            self.tuning.jump_speed_reduction,
        );
        self.score
    }

    /// Advance the death sequence. Returns true exactly once, on the frame
    /// the timer runs past `dead_time`.
    pub fn tick(&mut self, dt: f32, controller: &mut MovementController) -> bool {
        if !self.dead {
            return false;
        }

        controller.set_can_move(false);
        self.death_timer += dt;

        if self.death_timer > self.tuning.dead_time && !self.restart_signalled {
            self.restart_signalled = true;
            return true;
        }
        false
    }

    /// Fresh level: score back to zero and alive again.
    pub fn reset(&mut self) {
        self.score = 0;
        self.dead = false;
        self.death_timer = 0.0;
        self.restart_signalled = false;
    }
}
