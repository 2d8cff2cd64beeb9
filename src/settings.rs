//! Simulation settings
//!
//! Loaded from a JSON file; any field left out keeps its default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::consts::SNAKE_COLOR;
use crate::sim::SnakeParams;

/// Options for the headless demo driver
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Drawable area in pixels
    pub surface_width: u32,
    pub surface_height: u32,
    /// Present rate of the render loop
    pub fps: u32,
    /// Pixels per text cell
    pub cell_size: f32,
    /// Print every n-th frame
    pub print_every: u64,
    /// Autopilot picks a new target this often
    pub retarget_ms: u64,
    /// Seed for the autopilot
    pub seed: u64,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            surface_width: 400,
            surface_height: 600,
            fps: 60,
            cell_size: 10.0,
            print_every: 30,
            retarget_ms: 700,
            seed: 12345,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Body color (ARGB)
    pub color: u32,
    /// Physics and collision parameters
    pub snake: SnakeParams,
    pub demo: DemoSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: SNAKE_COLOR,
            snake: SnakeParams::default(),
            demo: DemoSettings::default(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let settings = Self::from_json(&fs::read_to_string(path)?)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path`, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings ({}: {})", path.as_ref().display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{"snake": {"width": 4.0, "spring": {"k": 10.0, "b": 9.0}}}"#).unwrap();
        assert_eq!(settings.snake.width, 4.0);
        assert_eq!(settings.snake.spring.k, 10.0);
        assert_eq!(settings.snake.spring.b, 9.0);
        assert_eq!(settings.snake.max_trail_length, MAX_TRAIL_LENGTH);
        assert_eq!(settings.color, SNAKE_COLOR);
        assert_eq!(settings.demo.fps, 60);
    }

    #[test]
    fn test_empty_object_is_default() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings.snake, SnakeParams::default());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_or_default("/nonexistent/spring-snake/settings.json");
        assert_eq!(settings.snake.goal_distance, GOAL_DISTANCE);
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("spring-snake-settings-{}.json", std::process::id()));
        let mut settings = Settings::default();
        settings.snake.head_exclusion = 0.1;
        settings.demo.seed = 7;
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded.snake.head_exclusion, 0.1);
        assert_eq!(loaded.demo.seed, 7);
        let _ = fs::remove_file(&path);
    }
}
