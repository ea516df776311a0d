//! Game settings
//!
//! Every tuning value the simulation reads, loadable from a JSON file.
//! Fields missing from the file keep their defaults.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Arena, GridLayout};

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Viewport ===
    /// Available drawing width; the arena is fitted into it
    pub viewport_width: u32,
    /// Available drawing height
    pub viewport_height: u32,

    // === Ball ===
    pub ball_radius: f32,
    /// Launch velocity after a full reset
    pub ball_dx: f32,
    pub ball_dy: f32,
    pub ball_speed: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Paddle top edge distance from the floor
    pub paddle_floor_offset: f32,
    pub paddle_speed: f32,

    // === Blocks ===
    pub block_rows: usize,
    pub block_columns: usize,
    pub block_height: f32,
    pub block_padding: f32,
    pub block_offset_left: f32,
    pub block_offset_top: f32,

    // === Rules ===
    pub max_misses: u32,
    /// Seed for the respawn RNG; a full reset re-seeds from it
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,

            ball_radius: BALL_RADIUS,
            ball_dx: BALL_START_DX,
            ball_dy: BALL_START_DY,
            ball_speed: BALL_SPEED,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_floor_offset: PADDLE_FLOOR_OFFSET,
            paddle_speed: PADDLE_SPEED,

            block_rows: BLOCK_ROWS,
            block_columns: BLOCK_COLUMNS,
            block_height: BLOCK_HEIGHT,
            block_padding: BLOCK_PADDING,
            block_offset_left: BLOCK_OFFSET_LEFT,
            block_offset_top: BLOCK_OFFSET_TOP,

            max_misses: MAX_MISSES,
            seed: DEFAULT_SEED,
        }
    }
}

impl Settings {
    /// Block grid layout for an arena, cell width stretched to fill it
    pub fn grid_layout(&self, arena: &Arena) -> GridLayout {
        GridLayout::fitted(
            arena,
            self.block_columns,
            self.block_rows,
            self.block_height,
            self.block_padding,
            self.block_offset_left,
            self.block_offset_top,
        )
    }

    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize settings as pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Invalid settings in {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings as JSON
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let json = self.to_json().map_err(io::Error::other)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let settings = Settings::default();
        assert_eq!(settings.max_misses, 5);
        assert_eq!(settings.block_rows * settings.block_columns, 40);
        assert_eq!(settings.ball_dx, 4.0);
        assert_eq!(settings.ball_dy, -4.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "max_misses": 3, "seed": 7 }"#).unwrap();
        assert_eq!(settings.max_misses, 3);
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.paddle_width, PADDLE_WIDTH);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Settings::from_json("{ not json").is_err());
        assert!(Settings::from_json(r#"{ "max_misses": "five" }"#).is_err());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let settings = Settings::load("/nonexistent/block-breaker/settings.json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!(
            "block_breaker_settings_{}.json",
            std::process::id()
        ));
        let settings = Settings {
            block_rows: 2,
            seed: 42,
            ..Settings::default()
        };
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path);
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_grid_layout_uses_arena_width() {
        let settings = Settings::default();
        let layout = settings.grid_layout(&Arena::new(380, 680));
        assert!((layout.cell_width - (380.0 - 70.0) / 8.0).abs() < 1e-4);
    }
}
