//! Debug overlays for tuning the controller.
//!
//! Features:
//! - Teleport probe circles, red where blocked
//! - Sampled ground normal
//! - Controller and session info panel

mod state;
mod systems;
mod ui;

use bevy::prelude::*;

pub use state::DebugState;

use systems::{draw_controller_gizmos, toggle_debug_overlays, update_debug_info_overlay};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (toggle_debug_overlays, update_debug_info_overlay).chain(),
            )
            .add_systems(
                Update,
                draw_controller_gizmos.run_if(|state: Res<DebugState>| state.show_gizmos),
            );
    }
}
