//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::{GameplayDefaults, SCHEMA_VERSION};

pub const GAMEPLAY_DEFAULTS_FILE: &str = "gameplay_defaults.ron";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a single RON struct. `file` only labels errors.
pub fn parse_single<T>(contents: &str, file: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load a single RON struct from disk.
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_single(&contents, &file_name)
}

/// Reject files written for a different schema.
pub fn check_schema(defaults: &GameplayDefaults, file: &str) -> Result<(), ContentLoadError> {
    if defaults.schema_version != SCHEMA_VERSION {
        return Err(ContentLoadError {
            file: file.to_string(),
            message: format!(
                "schema_version {} is not supported (expected {})",
                defaults.schema_version, SCHEMA_VERSION
            ),
        });
    }
    Ok(())
}

/// Load `gameplay_defaults.ron` from `base_path`.
pub fn load_gameplay_defaults(base_path: &Path) -> Result<GameplayDefaults, ContentLoadError> {
    let path = base_path.join(GAMEPLAY_DEFAULTS_FILE);
    let defaults: GameplayDefaults = load_single_file(&path)?;
    check_schema(&defaults, &path.display().to_string())?;
    Ok(defaults)
}
