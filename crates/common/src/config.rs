use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::types::Bounds;

/// Errors from loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Benchmark configuration.
///
/// Defaults reproduce the canonical run: a 1920x1080 window, 1000 frames,
/// seed 42, per-axis speeds uniform in `[-5, 5)`, sprites drawn at 40x50
/// pixels (the 160x200 source art at quarter scale).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Window width in pixels.
    pub width: u32,
    /// Window height in pixels.
    pub height: u32,
    /// Number of frames to run before the loop terminates.
    pub frames: u32,
    /// Number of sprites to spawn at startup.
    pub sprites: usize,
    /// Seed for the deterministic entity initializer.
    pub seed: u64,
    /// Per-axis speed range: velocities are uniform in `[-speed_scale, +speed_scale)`.
    pub speed_scale: f32,
    /// Drawn sprite width in pixels.
    pub sprite_width: f32,
    /// Drawn sprite height in pixels.
    pub sprite_height: f32,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            frames: 1000,
            sprites: 1000,
            seed: 42,
            speed_scale: 5.0,
            sprite_width: 40.0,
            sprite_height: 50.0,
        }
    }
}

impl BenchConfig {
    /// Load a configuration from a JSON file. Missing fields take their
    /// defaults; unreadable or malformed files are errors.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }

    /// The window-space rectangle sprites bounce inside.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width as f32, self.height as f32)
    }

    /// Drawn sprite extent as a vector.
    pub fn sprite_extent(&self) -> Vec2 {
        Vec2::new(self.sprite_width, self.sprite_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_documented_constants() {
        let c = BenchConfig::default();
        assert_eq!(c.width, 1920);
        assert_eq!(c.height, 1080);
        assert_eq!(c.frames, 1000);
        assert_eq!(c.seed, 42);
        assert_eq!(c.speed_scale, 5.0);
        assert_eq!(c.sprite_extent(), Vec2::new(40.0, 50.0));
    }

    #[test]
    fn json_roundtrip() {
        let c = BenchConfig {
            sprites: 5000,
            frames: 10,
            ..BenchConfig::default()
        };
        let json = serde_json::to_string(&c).unwrap();
        let back: BenchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let c: BenchConfig = serde_json::from_str(r#"{"sprites": 7, "seed": 9}"#).unwrap();
        assert_eq!(c.sprites, 7);
        assert_eq!(c.seed, 9);
        assert_eq!(c.width, 1920);
        assert_eq!(c.frames, 1000);
    }

    #[test]
    fn load_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bench.json");
        std::fs::write(&path, r#"{"frames": 25}"#).unwrap();
        let c = BenchConfig::load(&path).unwrap();
        assert_eq!(c.frames, 25);
        assert_eq!(c.height, 1080);
    }

    #[test]
    fn load_malformed_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bench.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            BenchConfig::load(&path),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn load_missing_is_error() {
        assert!(matches!(
            BenchConfig::load("/nonexistent/bench.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
