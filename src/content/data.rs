//! Content data definitions for RON deserialization.
//!
//! These structs mirror `assets/data/gameplay_defaults.ron`. Every section
//! falls back to its compiled-in default when omitted.

use serde::{Deserialize, Serialize};

use crate::gameplay::SessionTuning;
use crate::movement::MovementTuning;

/// Schema version this build understands.
pub const SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Gameplay Defaults (gameplay_defaults.ron)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameplayDefaults {
    pub schema_version: u32,
    pub movement: MovementTuning,
    pub session: SessionTuning,
}

impl Default for GameplayDefaults {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            movement: MovementTuning::default(),
            session: SessionTuning::default(),
        }
    }
}
