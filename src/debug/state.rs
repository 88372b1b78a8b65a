//! Debug domain: overlay toggles.

use bevy::prelude::*;

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether teleport probes and the ground normal are drawn
    pub show_gizmos: bool,
    /// Whether to show the controller info panel
    pub show_info: bool,
}
