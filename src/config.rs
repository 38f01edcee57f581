//! Track dimension configuration.
//!
//! An optional `~/.lanedodge/config.json` overrides the 800x600 defaults.
//! Anything missing, unreadable, or out of range falls back to a default;
//! configuration is normalized, never rejected.

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::PathBuf;

pub const DEFAULT_WIDTH: f64 = 800.0;
pub const DEFAULT_HEIGHT: f64 = 600.0;

/// Requested track dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameDimensions {
    pub width: f64,
    pub height: f64,
}

impl Default for GameDimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl GameDimensions {
    /// Replace non-finite or non-positive values with the defaults.
    pub fn normalized(self) -> Self {
        let mut dims = self;
        if !dims.width.is_finite() || dims.width <= 0.0 {
            dims.width = DEFAULT_WIDTH;
        }
        if !dims.height.is_finite() || dims.height <= 0.0 {
            dims.height = DEFAULT_HEIGHT;
        }
        dims
    }
}

/// Get the ~/.lanedodge/ directory path, creating it if needed.
pub fn config_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".lanedodge");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Load dimensions from ~/.lanedodge/config.json, falling back to the
/// defaults when the file is absent or malformed.
pub fn load_dimensions() -> GameDimensions {
    let path = match config_dir() {
        Ok(dir) => dir.join("config.json"),
        Err(_) => return GameDimensions::default(),
    };
    let dims: GameDimensions = match fs::read_to_string(&path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => GameDimensions::default(),
    };
    dims.normalized()
}
