//! Ball preset loader.
//!
//! Loads [`BallParams`] from YAML files, allowing different balls to be
//! tried out without recompiling the host.
//!
//! ## Directory Structure
//!
//! ```text
//! presets/
//! └── balls/
//!     ├── beachball.yaml
//!     ├── basketball.yaml
//!     └── ...
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::types::BallParams;

/// Error type for preset loading operations.
#[derive(Debug)]
pub enum PresetError {
    IoError(std::io::Error),
    ParseError(serde_yaml::Error),
    NotFound(String),
}

impl std::fmt::Display for PresetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PresetError::IoError(e) => write!(f, "IO error: {}", e),
            PresetError::ParseError(e) => write!(f, "YAML parse error: {}", e),
            PresetError::NotFound(name) => write!(f, "Preset not found: {}", name),
        }
    }
}

impl std::error::Error for PresetError {}

impl From<std::io::Error> for PresetError {
    fn from(err: std::io::Error) -> Self {
        PresetError::IoError(err)
    }
}

impl From<serde_yaml::Error> for PresetError {
    fn from(err: serde_yaml::Error) -> Self {
        PresetError::ParseError(err)
    }
}

/// Preset loader with configurable base directory.
pub struct PresetLoader {
    base_path: PathBuf,
}

impl PresetLoader {
    /// Create a new loader with the given base path.
    ///
    /// The base path should contain a `balls/` subdirectory.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Load a ball by name (without .yaml extension).
    ///
    /// # Example
    /// ```ignore
    /// let loader = PresetLoader::new("presets");
    /// let ball = loader.load_ball("beachball")?;
    /// ```
    pub fn load_ball(&self, name: &str) -> Result<BallParams, PresetError> {
        let path = self.base_path.join("balls").join(format!("{}.yaml", name));
        if !path.exists() {
            return Err(PresetError::NotFound(name.to_string()));
        }
        let contents = fs::read_to_string(&path)?;
        let params: BallParams = serde_yaml::from_str(&contents)?;
        Ok(params)
    }

    /// List all available balls.
    pub fn list_balls(&self) -> Result<Vec<String>, PresetError> {
        let dir = self.base_path.join("balls");
        if !dir.exists() {
            return Ok(vec![]);
        }

        let mut names: Vec<String> = fs::read_dir(&dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "yaml"))
            .filter_map(|path| {
                path.file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
            })
            .collect();
        names.sort();
        Ok(names)
    }
}

// =============================================================================
// Tests
// =============================================================================
