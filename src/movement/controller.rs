//! Movement domain: the character state machine.
//!
//! `MovementController` turns input intents into velocity, gravity and
//! rotation writes on a [`CharacterBody`]. It is driven from two clocks: a
//! variable frame update that runs timers, and a fixed physics tick that
//! resolves jumps, abilities and movement. Everything it wants to tell the
//! rest of the game goes into an outbox of [`ControllerEvent`]s.

use bevy::prelude::*;

use crate::movement::body::CharacterBody;
use crate::movement::events::ControllerEvent;
use crate::movement::intent::InputIntent;
use crate::movement::resources::MovementTuning;
use crate::movement::state::{
    AbilityState, Facing, FlattenState, JumpState, PuffState, TeleportState,
};
use crate::movement::SurfaceKind;

/// Result of a teleport attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TeleportOutcome {
    /// Relocated to `to`, `fraction` of the full distance away.
    Moved { to: Vec2, fraction: f32 },
    /// Every sample along the line overlapped an obstacle.
    Blocked,
    CoolingDown,
    Disabled,
}

#[derive(Component, Debug, Clone)]
pub struct MovementController {
    tuning: MovementTuning,
    /// Body gravity scale at the first physics tick.
    base_gravity_scale: Option<f32>,
    can_move: bool,

    axis: Vec2,
    facing: Option<Facing>,
    last_facing: Facing,
    /// Facing last reported to the display.
    shown_facing: Option<Facing>,

    ability: AbilityState,
    puff_held: bool,
    flatten_held: bool,
    /// Controller clock at the last ability change.
    last_transition_at: f32,
    clock: f32,

    rolling: bool,

    jump: JumpState,
    puff: PuffState,
    flatten: FlattenState,
    teleport: TeleportState,

    events: Vec<ControllerEvent>,
}

impl MovementController {
    pub fn new(tuning: MovementTuning) -> Self {
        Self {
            tuning,
            base_gravity_scale: None,
            can_move: true,
            axis: Vec2::ZERO,
            facing: None,
            last_facing: Facing::Right,
            shown_facing: None,
            ability: AbilityState::Normal,
            puff_held: false,
            flatten_held: false,
            last_transition_at: 0.0,
            clock: 0.0,
            rolling: false,
            jump: JumpState::default(),
            puff: PuffState::default(),
            flatten: FlattenState::default(),
            teleport: TeleportState::default(),
            events: Vec::new(),
        }
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    pub fn can_move(&self) -> bool {
        self.can_move
    }

    pub fn set_can_move(&mut self, can_move: bool) {
        self.can_move = can_move;
    }

    pub fn is_grounded(&self) -> bool {
        self.jump.grounded
    }

    pub fn is_jumping(&self) -> bool {
        self.jump.jumping
    }

    pub fn is_rolling(&self) -> bool {
        self.rolling
    }

    pub fn is_stuck_to_ground(&self) -> bool {
        self.flatten.stuck_to_ground
    }

    pub fn ability(&self) -> AbilityState {
        self.ability
    }

    pub fn facing(&self) -> Option<Facing> {
        self.facing
    }

    pub fn jump_state(&self) -> &JumpState {
        &self.jump
    }

    pub fn teleport_cooldown(&self) -> f32 {
        self.teleport.cooldown_remaining
    }

    /// Direction a teleport would go right now.
    pub fn teleport_direction(&self) -> Vec2 {
        let facing = self.facing.unwrap_or(self.last_facing);
        Vec2::new(facing.sign(), 0.0)
    }

    pub fn ground_normal(&self) -> Option<Vec2> {
        self.flatten.ground_normal
    }

    /// Permanent tuning change applied by gameplay (collectibles).
    pub fn update_movement_params(
        &mut self,
        speed_delta: f32,
        jump_time_delta: f32,
        jump_speed_delta: f32,
    ) {
        self.tuning.move_speed += speed_delta;
        self.tuning.jump_time += jump_time_delta;
        self.tuning.jump_speed -= jump_speed_delta;
    }

    /// Take everything queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<ControllerEvent> {
        std::mem::take(&mut self.events)
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    pub fn handle_intent(&mut self, intent: InputIntent, body: &mut impl CharacterBody) {
        match intent {
            InputIntent::MoveAxis(axis) => {
                let was_walking = self.axis.x.abs() > 0.1;
                self.axis = axis;
                let walking = axis.x.abs() > 0.1;
                if walking != was_walking {
                    self.emit_flag("isWalking", walking);
                }
            }
            InputIntent::JumpPressed => self.press_jump(body),
            InputIntent::JumpReleased => {
                self.jump.released = true;
            }
            InputIntent::RollPressed => {
                if !self.ability.is_flattened() && !self.rolling {
                    self.rolling = true;
                    self.tuning.move_speed += self.tuning.roll_speed_bonus;
                }
            }
            InputIntent::RollReleased => {
                if self.rolling {
                    self.rolling = false;
                    self.tuning.move_speed -= self.tuning.roll_speed_bonus;
                }
            }
            InputIntent::PuffPressed => {
                self.puff_held = true;
                self.puff.entry_velocity_x = body.velocity().x;
                self.puff.entry_remaining = self.tuning.puff_entry_smoothing;
                self.puff.velocity_x = 0.0;
                self.request_transition(true, self.flatten_held, body);
            }
            InputIntent::PuffReleased => {
                self.puff_held = false;
                self.request_transition(false, self.flatten_held, body);
            }
            InputIntent::FlattenPressed => {
                self.flatten_held = true;
                self.request_transition(self.puff_held, true, body);
            }
            InputIntent::FlattenReleased => {
                self.flatten_held = false;
                self.request_transition(self.puff_held, false, body);
            }
            InputIntent::TeleportPressed => {
                let outcome = self.teleport(body);
                debug!("Teleport: {:?}", outcome);
            }
        }
    }

    fn press_jump(&mut self, body: &mut impl CharacterBody) {
        self.jump.pressed = true;
        self.jump.released = false;
        self.jump.buffer_remaining = self.tuning.jump_buffer_time;
        self.jump.consumed = false;

        // Flap replaces the jump while puffed, on the ground or in the air
        if self.ability.is_puffed() && self.puff.flap_cooldown <= 0.0 {
            let v = body.velocity();
            body.set_velocity(Vec2::new(v.x, self.tuning.puff_flap_speed));
            self.puff.flap_cooldown = self.tuning.puff_flap_cooldown;
            self.puff.flap_pending = true;
            self.jump.consumed = true;
            self.jump.pressed = false;
            self.jump.buffer_remaining = 0.0;
        }
    }

    /// Apply an ability request. Requests mirror which ability buttons are
    /// held, so releasing one while the other is still down falls back to
    /// the held one. See [`AbilityState::resolve`] for the tie-break.
    pub fn request_transition(&mut self, puff: bool, flatten: bool, body: &mut impl CharacterBody) {
        let previous = self.ability;
        let next = AbilityState::resolve(previous, puff, flatten);
        if next == previous {
            return;
        }

        let time_in_previous = self.clock - self.last_transition_at;
        self.ability = next;
        self.last_transition_at = self.clock;
        self.puff.flap_pending = false;

        self.events.push(ControllerEvent::AbilityChanged {
            from: previous,
            to: next,
        });
        self.emit_flag("isPuffed", next.is_puffed());
        self.emit_flag("isFlattened", next.is_flattened());

        if next.is_flattened() {
            if self.jump.grounded {
                self.stick_to_ground(body);
            }
        } else {
            self.flatten.stuck_to_ground = false;
        }

        if previous.is_flattened()
            && next.is_puffed()
            && self.jump.grounded
            && time_in_previous <= self.tuning.super_jump_window
        {
            self.super_jump(body);
        }
    }

    fn super_jump(&mut self, body: &mut impl CharacterBody) {
        let v = body.velocity();
        body.set_velocity(Vec2::new(v.x, self.tuning.super_jump_speed()));
        self.jump.grounded = false;
        self.jump.jumping = true;
        self.jump.hold_timer = 0.0;
        self.flatten.stuck_to_ground = false;
        self.events.push(ControllerEvent::SuperJumped);
        info!("Super jump at {:.0} px/s", self.tuning.super_jump_speed());
    }

    /// Short-range blink along the facing direction.
    ///
    /// A blocked destination backs off toward the start in fixed slices. If
    /// no slice is clear nothing happens and the cooldown is not spent.
    pub fn teleport(&mut self, body: &mut impl CharacterBody) -> TeleportOutcome {
        if !self.can_move {
            return TeleportOutcome::Disabled;
        }
        if self.teleport.cooldown_remaining > 0.0 {
            return TeleportOutcome::CoolingDown;
        }

        let origin = body.position();
        let direction = self.teleport_direction();
        let radius = self.tuning.teleport_clear_radius;
        let distance = self.tuning.teleport_distance;

        let fraction = std::iter::once(1.0)
            .chain(self.tuning.teleport_backoff_fractions())
            .find(|t| !body.is_obstructed(origin + direction * (distance * t), radius));

        let Some(fraction) = fraction else {
            return TeleportOutcome::Blocked;
        };

        let to = origin + direction * (distance * fraction);
        body.set_position(to);
        let v = body.velocity();
        body.set_velocity(Vec2::new(v.x, 0.0));
        self.teleport.cooldown_remaining = self.tuning.teleport_cooldown;
        self.events.push(ControllerEvent::Teleported { from: origin, to });

        TeleportOutcome::Moved { to, fraction }
    }

    // ------------------------------------------------------------------
    // Contacts
    // ------------------------------------------------------------------

    pub fn on_contact_enter(&mut self, surface: SurfaceKind, body: &impl CharacterBody) {
        match surface {
            SurfaceKind::Ground | SurfaceKind::Platform => {
                self.jump.ground_contacts += 1;
                self.jump.grounded = true;
                self.jump.jumping = false;
                self.jump.hold_timer = 0.0;
                self.jump.consumed = false;
                self.jump.released = false;

                if self.ability.is_flattened() {
                    self.stick_to_ground(body);
                }

                self.events.push(ControllerEvent::Grounded);
            }
            SurfaceKind::DeadZone => {
                self.events.push(ControllerEvent::HitDeadZone);
            }
            SurfaceKind::Collectible => {}
        }
    }

    pub fn on_contact_exit(&mut self, surface: SurfaceKind) {
        if !surface.is_ground_like() {
            return;
        }

        self.jump.ground_contacts = self.jump.ground_contacts.saturating_sub(1);
        if self.jump.ground_contacts == 0 {
            self.jump.grounded = false;
            self.flatten.stuck_to_ground = false;
        }
    }

    fn stick_to_ground(&mut self, body: &impl CharacterBody) {
        self.flatten.stuck_to_ground = true;
        // Keep the previous normal if the probe misses
        if let Some(normal) = body.ground_normal() {
            self.flatten.ground_normal = Some(normal);
        }
    }

    // ------------------------------------------------------------------
    // Clocks
    // ------------------------------------------------------------------

    /// Frame update: advance the clock and count timers down to zero.
    pub fn update(&mut self, dt: f32) {
        self.clock += dt;

        if self.jump.buffer_remaining > 0.0 {
            self.jump.buffer_remaining = (self.jump.buffer_remaining - dt).max(0.0);
            if self.jump.buffer_remaining == 0.0 {
                self.jump.pressed = false;
            }
        }
        self.puff.flap_cooldown = (self.puff.flap_cooldown - dt).max(0.0);
        self.teleport.cooldown_remaining = (self.teleport.cooldown_remaining - dt).max(0.0);
        self.puff.entry_remaining = (self.puff.entry_remaining - dt).max(0.0);
    }

    /// One fixed physics step.
    pub fn fixed_tick(&mut self, dt: f32, body: &mut impl CharacterBody) {
        let base_gravity = *self
            .base_gravity_scale
            .get_or_insert_with(|| body.gravity_scale());

        if !self.can_move {
            let v = body.velocity();
            body.set_velocity(Vec2::new(0.0, v.y));
            return;
        }

        self.sample_facing();

        if self.ability.is_puffed() {
            self.apply_puff(dt, body);
        }

        let jumped = self.resolve_jump(body);
        self.jump.pressed = false;

        self.write_velocity(dt, jumped, body);
        self.apply_gravity_scale(base_gravity, body);
        self.apply_roll_rotation(dt, body);
    }

    fn sample_facing(&mut self) {
        let facing = Facing::from_axis(self.axis.x);
        if let Some(f) = facing {
            if self.shown_facing != Some(f) {
                self.events.push(ControllerEvent::FacingChanged(f));
                self.shown_facing = Some(f);
            }
            self.last_facing = f;
        }
        self.facing = facing;
    }

    fn apply_puff(&mut self, dt: f32, body: &mut impl CharacterBody) {
        let v = body.velocity();
        let smoothing = self.tuning.puff_entry_smoothing;

        let new_x = if self.puff.entry_remaining > 0.0 && smoothing > 0.0 {
            // Bleed off momentum carried in from the previous state
            let progress = 1.0 - (self.puff.entry_remaining / smoothing).clamp(0.0, 1.0);
            self.puff.entry_velocity_x.lerp(0.0, progress)
        } else if self.axis.x.abs() > 0.1 {
            let target = self.axis.x.clamp(-1.0, 1.0) * self.tuning.puff_max_speed;
            let factor = 1.0 - (-self.tuning.puff_acceleration * dt).exp();
            self.puff.velocity_x.lerp(target, factor)
        } else {
            move_towards(self.puff.velocity_x, 0.0, self.tuning.puff_decay * dt)
        };

        self.puff.velocity_x = new_x;
        body.set_velocity(Vec2::new(new_x, v.y));
    }

    /// Returns true when the body was launched upward this tick.
    fn resolve_jump(&mut self, body: &mut impl CharacterBody) -> bool {
        match self.ability {
            // Flap is applied on the press itself; report it once here
            AbilityState::Puffed => std::mem::take(&mut self.puff.flap_pending),
            AbilityState::Flattened => {
                if self.jump.pressed
                    && self.jump.grounded
                    && !self.jump.consumed
                    && self.tuning.flatten_allows_crawl
                {
                    let v = body.velocity();
                    body.set_velocity(Vec2::new(v.x, self.tuning.mini_hop_speed));
                    self.jump.grounded = false;
                    self.jump.consumed = true;
                    self.jump.buffer_remaining = 0.0;
                    self.flatten.stuck_to_ground = false;
                    return true;
                }
                false
            }
            AbilityState::Normal => {
                let wants_jump = self.jump.pressed || self.jump.buffer_remaining > 0.0;
                if !(self.jump.grounded && !self.jump.consumed && wants_jump) {
                    return false;
                }

                self.jump.jumping = true;
                self.jump.grounded = false;
                self.jump.consumed = true;
                self.jump.buffer_remaining = 0.0;
                self.jump.hold_timer = 0.0;
                let v = body.velocity();
                body.set_velocity(Vec2::new(v.x, self.tuning.jump_speed));
                self.events.push(ControllerEvent::Jumped);
                true
            }
        }
    }

    fn write_velocity(&mut self, dt: f32, jumped: bool, body: &mut impl CharacterBody) {
        let v = body.velocity();
        let direction = self.facing.map_or(0.0, Facing::sign);

        // Horizontal belongs to the puff handler
        if self.ability.is_puffed() {
            if self.jump.jumping {
                self.advance_jump_hold(dt);
            } else if !jumped {
                body.set_velocity(Vec2::new(v.x, v.y * self.tuning.idle_damping));
            }
            return;
        }

        if self.jump.jumping && !self.jump.grounded {
            let horizontal = direction * self.tuning.move_speed;
            if jumped {
                body.set_velocity(Vec2::new(horizontal, v.y));
            } else {
                body.set_velocity(Vec2::new(horizontal, self.tuning.held_jump_speed()));
                self.advance_jump_hold(dt);
            }
            return;
        }

        if self.ability.is_flattened() && self.flatten.stuck_to_ground {
            let velocity = if self.tuning.flatten_allows_crawl {
                self.crawl_tangent() * direction * self.tuning.crawl_speed
            } else {
                Vec2::ZERO
            };
            body.set_velocity(velocity);
            return;
        }

        let damping = self.tuning.idle_damping;
        // A hop launched this tick keeps its full speed
        let vy = if jumped { v.y } else { v.y * damping };
        if direction != 0.0 {
            body.set_velocity(Vec2::new(direction * self.tuning.move_speed, vy));
        } else {
            body.set_velocity(Vec2::new(v.x * damping, vy));
        }
    }

    /// Unit vector along the ground, pointing right. Flat ground if the
    /// surface was never sampled.
    fn crawl_tangent(&self) -> Vec2 {
        match self.flatten.ground_normal {
            Some(n) if n.length_squared() > f32::EPSILON => {
                let n = n.normalize();
                Vec2::new(n.y, -n.x)
            }
            _ => Vec2::X,
        }
    }

    fn advance_jump_hold(&mut self, dt: f32) {
        self.jump.hold_timer += dt;
        if self.jump.hold_timer > self.tuning.jump_time {
            self.jump.hold_timer = 0.0;
            self.jump.jumping = false;
        }
    }

    fn apply_gravity_scale(&mut self, base: f32, body: &mut impl CharacterBody) {

        let scale = if self.jump.grounded {
            if self.ability.is_flattened() { 0.0 } else { base }
        } else {
            match self.ability {
                AbilityState::Puffed => base * self.tuning.puff_gravity_multiplier,
                AbilityState::Flattened => base * self.tuning.flatten_gravity_multiplier,
                AbilityState::Normal => {
                    let vy = body.velocity().y;
                    if vy < 0.0 {
                        base * self.tuning.fall_gravity_multiplier
                    } else if vy > 0.0 && self.jump.released {
                        base * self.tuning.low_jump_multiplier
                    } else {
                        base
                    }
                }
            }
        };

        body.set_gravity_scale(scale);
    }

    fn apply_roll_rotation(&mut self, dt: f32, body: &mut impl CharacterBody) {
        let vx = body.velocity().x;
        if self.rolling && self.jump.grounded && vx.abs() > 0.01 && !self.ability.is_flattened() {
            let degrees = vx * self.tuning.roll_spin * dt;
            body.set_rotation(body.rotation() - degrees.to_radians());
        } else {
            body.set_rotation(0.0);
        }
    }

    fn emit_flag(&mut self, name: &'static str, value: bool) {
        self.events.push(ControllerEvent::AnimatorFlag { name, value });
    }
}

fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    if (target - current).abs() <= max_delta {
        target
    } else {
        current + (target - current).signum() * max_delta
    }
}
