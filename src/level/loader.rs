//! Loader for the RON level file at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::LevelDef;

/// Error type for level loading failures.
#[derive(Debug)]
pub struct LevelLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for LevelLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a level definition from RON text.
pub fn parse_level(contents: &str, file: &str) -> Result<LevelDef, LevelLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| LevelLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load the level definition from disk.
pub fn load_level(path: &Path) -> Result<LevelDef, LevelLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| LevelLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;
    parse_level(&contents, &file_name)
}
