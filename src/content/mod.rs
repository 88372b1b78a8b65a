//! Content domain: data-driven tuning loaded from RON at startup.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::GameplayDefaults;
pub use loader::{ContentLoadError, load_gameplay_defaults};
pub use validation::{ValidationError, validate_defaults};

use bevy::prelude::*;
use std::path::Path;

/// Directory holding the RON content files.
pub const CONTENT_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_content);
    }
}

/// Load and validate gameplay defaults, replacing the compiled-in tuning.
/// Any failure keeps the compiled-in values.
fn load_content(mut commands: Commands) {
    let defaults = match load_gameplay_defaults(Path::new(CONTENT_DIR)) {
        Ok(defaults) => defaults,
        Err(e) => {
            warn!("{}; using built-in gameplay defaults", e);
            return;
        }
    };

    let errors = validate_defaults(&defaults);
    if !errors.is_empty() {
        for error in &errors {
            error!("Content validation error: {}", error);
        }
        warn!(
            "{} invalid tuning values; using built-in gameplay defaults",
            errors.len()
        );
        return;
    }

    info!(
        "Loaded gameplay defaults (schema v{})",
        defaults.schema_version
    );
    commands.insert_resource(defaults.movement);
    commands.insert_resource(defaults.session);
}
