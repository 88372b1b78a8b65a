//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod display;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::route_player_contacts;
pub(crate) use display::forward_controller_events;
pub(crate) use input::{apply_input_intents, read_input};
pub(crate) use movement::{step_controllers, tick_controller_timers};
