//! Game configuration
//!
//! Read from assets/config.ron at start-up. Every field has a default, so
//! the file may list only what it changes, or be missing entirely.

use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::app::FpsLimit;
use crate::game::GameMode;

/// Where the config file lives, relative to the working directory
pub const CONFIG_PATH: &str = "assets/config.ron";

/// Simulation ticks per second. Speeds and accelerations are per tick.
pub const TICK_RATE: u32 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub high_dpi: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Game".to_string(),
            high_dpi: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub width: f32,
    pub height: f32,
    pub hp: u32,
    /// Pixels per tick
    pub speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 50.0,
            hp: 20,
            speed: 10.0,
        }
    }
}

/// Platformer mode physics, all per tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub jump_speed: f32,
    /// Keep below the thinnest floor so fast falls can't tunnel through it
    pub max_fall_speed: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 1.0,
            jump_speed: 20.0,
            max_fall_speed: 15.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub player: PlayerConfig,
    pub physics: PhysicsConfig,
    /// Mode preselected in the menu
    pub start_mode: GameMode,
    pub fps_limit: FpsLimit,
    /// 1.0 snaps the camera to the player, lower values trail behind
    pub camera_smoothing: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            player: PlayerConfig::default(),
            physics: PhysicsConfig::default(),
            start_mode: GameMode::default(),
            fps_limit: FpsLimit::default(),
            camera_smoothing: 1.0,
        }
    }
}

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
    Validation(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

fn positive(value: f32, name: &str) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Validation(format!("{} must be positive, got {}", name, value)))
    }
}

impl Config {
    pub fn from_ron(s: &str) -> Result<Self, ConfigError> {
        let config: Config = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::from_ron(&fs::read_to_string(path)?)
    }

    /// Load `path`, or fall back to defaults (logging why)
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width < 320 || self.window.height < 240 {
            return Err(ConfigError::Validation(format!(
                "window must be at least 320x240, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        positive(self.player.width, "player.width")?;
        positive(self.player.height, "player.height")?;
        positive(self.player.speed, "player.speed")?;
        if self.player.hp == 0 {
            return Err(ConfigError::Validation("player.hp must be at least 1".to_string()));
        }
        if !self.physics.gravity.is_finite() || self.physics.gravity < 0.0 {
            return Err(ConfigError::Validation(format!(
                "physics.gravity must be >= 0, got {}",
                self.physics.gravity
            )));
        }
        positive(self.physics.jump_speed, "physics.jump_speed")?;
        positive(self.physics.max_fall_speed, "physics.max_fall_speed")?;
        if !(self.camera_smoothing > 0.0 && self.camera_smoothing <= 1.0) {
            return Err(ConfigError::Validation(format!(
                "camera_smoothing must be in (0, 1], got {}",
                self.camera_smoothing
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_values() {
        let c = Config::default();
        assert_eq!((c.window.width, c.window.height), (800, 600));
        assert_eq!(c.player.hp, 20);
        assert_eq!(c.player.speed, 10.0);
        assert_eq!((c.player.width, c.player.height), (100.0, 50.0));
        assert_eq!(c.fps_limit, FpsLimit::Fps60);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let c = Config::from_ron("(player: (speed: 6.0), start_mode: Free)").expect("parse");
        assert_eq!(c.player.speed, 6.0);
        assert_eq!(c.player.hp, 20);
        assert_eq!(c.start_mode, GameMode::Free);
        assert_eq!(c.window, WindowConfig::default());
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::from_ron("()").expect("parse"), Config::default());
    }

    #[test]
    fn test_validation_errors() {
        assert!(matches!(
            Config::from_ron("(window: (width: 100))"),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            Config::from_ron("(player: (hp: 0))"),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            Config::from_ron("(physics: (gravity: -1.0))"),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            Config::from_ron("(camera_smoothing: 0.0)"),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(Config::from_ron("(window: "), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let dir = tempfile::tempdir().expect("tempdir");

        let missing = dir.path().join("missing.ron");
        assert_eq!(Config::load_or_default(&missing), Config::default());

        let broken = dir.path().join("broken.ron");
        fs::write(&broken, "(player: (speed: -3.0))").expect("write");
        assert_eq!(Config::load_or_default(&broken), Config::default());

        let good = dir.path().join("good.ron");
        fs::write(&good, "(fps_limit: Fps30)").expect("write");
        assert_eq!(Config::load_or_default(&good).fps_limit, FpsLimit::Fps30);
    }

    #[test]
    fn test_shipped_config_is_valid() {
        let shipped = include_str!("../assets/config.ron");
        assert!(Config::from_ron(shipped).is_ok());
    }
}
