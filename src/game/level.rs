//! Level data and loading
//!
//! Levels are RON (Rusty Object Notation) files under assets/levels/, one
//! per game mode. Each mode also has an embedded copy so the game starts
//! even without the assets folder.

#[cfg(not(target_arch = "wasm32"))]
use std::{fs, path::Path};

use log::{error, info, warn};
use serde::{Deserialize, Serialize};

use crate::ui::Rect;
use super::GameMode;

/// Validation limits to keep hand-edited files sane
pub mod limits {
    /// Maximum number of walls in a level
    pub const MAX_WALLS: usize = 4096;
    /// Maximum level name length (bytes)
    pub const MAX_NAME_LEN: usize = 256;
    /// Maximum coordinate value (prevents overflow issues)
    pub const MAX_COORD: f32 = 1_000_000.0;
}

/// Directory levels are read from
pub const LEVELS_DIR: &str = "assets/levels";

/// A static, solid rectangle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub rect: Rect,
    /// Fill override as (r, g, b, a); theme color when absent
    #[serde(default)]
    pub color: Option<[u8; 4]>,
}

impl Wall {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { rect: Rect::new(x, y, w, h), color: None }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    pub width: f32,
    pub height: f32,
    /// Top-left of the player at spawn
    pub spawn: (f32, f32),
    #[serde(default)]
    pub walls: Vec<Wall>,
}

impl Level {
    /// Walled box of the given size, used when nothing else loads
    pub fn arena(width: f32, height: f32) -> Self {
        let t = 20.0;
        Self {
            name: "Arena".to_string(),
            width,
            height,
            spawn: (t * 2.0, t * 2.0),
            walls: vec![
                Wall::new(0.0, 0.0, width, t),
                Wall::new(0.0, height - t, width, t),
                Wall::new(0.0, 0.0, t, height),
                Wall::new(width - t, 0.0, t, height),
            ],
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// True if `r` lies completely inside the level
    pub fn contains_fully(&self, r: &Rect) -> bool {
        self.bounds().contains_rect(r)
    }

    pub fn wall_rects(&self) -> Vec<Rect> {
        self.walls.iter().map(|w| w.rect).collect()
    }
}

/// Error type for level loading
#[derive(Debug)]
pub enum LevelError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for LevelError {
    fn from(e: std::io::Error) -> Self {
        LevelError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for LevelError {
    fn from(e: ron::error::SpannedError) -> Self {
        LevelError::ParseError(e)
    }
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::IoError(e) => write!(f, "IO error: {}", e),
            LevelError::ParseError(e) => write!(f, "Parse error: {}", e),
            LevelError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for LevelError {}

fn is_valid_coord(f: f32) -> bool {
    f.is_finite() && f.abs() <= limits::MAX_COORD
}

fn validate_rect(r: &Rect, context: &str) -> Result<(), String> {
    for (label, v) in [("x", r.x), ("y", r.y), ("w", r.w), ("h", r.h)] {
        if !is_valid_coord(v) {
            return Err(format!("{}: invalid {} = {}", context, label, v));
        }
    }
    if r.w <= 0.0 || r.h <= 0.0 {
        return Err(format!("{}: empty rect {}x{}", context, r.w, r.h));
    }
    Ok(())
}

/// Validate level to reject broken or hostile files
pub fn validate_level(level: &Level) -> Result<(), LevelError> {
    let fail = |msg: String| Err(LevelError::ValidationError(msg));

    if level.name.len() > limits::MAX_NAME_LEN {
        return fail(format!("name too long ({} > {})", level.name.len(), limits::MAX_NAME_LEN));
    }
    if !is_valid_coord(level.width) || !is_valid_coord(level.height) || level.width <= 0.0 || level.height <= 0.0 {
        return fail(format!("invalid level size {}x{}", level.width, level.height));
    }
    if level.walls.len() > limits::MAX_WALLS {
        return fail(format!("too many walls ({} > {})", level.walls.len(), limits::MAX_WALLS));
    }

    let (sx, sy) = level.spawn;
    if !is_valid_coord(sx) || !is_valid_coord(sy) || !level.bounds().contains(sx, sy) {
        return fail(format!("spawn ({}, {}) outside level bounds", sx, sy));
    }

    for (i, wall) in level.walls.iter().enumerate() {
        validate_rect(&wall.rect, &format!("walls[{}]", i)).map_err(LevelError::ValidationError)?;
    }

    Ok(())
}

/// Load a level from a RON string (for embedded levels or testing)
pub fn load_level_from_str(s: &str) -> Result<Level, LevelError> {
    let level: Level = ron::from_str(s)?;
    validate_level(&level)?;
    Ok(level)
}

/// Load a level from a file (native only)
#[cfg(not(target_arch = "wasm32"))]
pub fn load_level<P: AsRef<Path>>(path: P) -> Result<Level, LevelError> {
    let contents = fs::read_to_string(path)?;
    load_level_from_str(&contents)
}

fn embedded_source(mode: GameMode) -> &'static str {
    match mode {
        GameMode::Basic => include_str!("../../assets/levels/basic.ron"),
        GameMode::Platformer => include_str!("../../assets/levels/platformer.ron"),
        GameMode::Free => include_str!("../../assets/levels/free.ron"),
    }
}

/// The level compiled into the binary for `mode`
pub fn builtin_level(mode: GameMode) -> Level {
    match load_level_from_str(embedded_source(mode)) {
        Ok(level) => level,
        Err(e) => {
            error!("Embedded {} level is broken: {}", mode.label(), e);
            Level::arena(800.0, 600.0)
        }
    }
}

/// Path of the on-disk level for `mode`
pub fn level_path(mode: GameMode) -> String {
    format!("{}/{}.ron", LEVELS_DIR, mode.level_name())
}

/// Load the level for `mode` from assets/levels/, falling back to the
/// embedded copy when the file is missing or invalid
#[cfg(not(target_arch = "wasm32"))]
pub async fn load_mode_level(mode: GameMode) -> Level {
    load_level_or_builtin(level_path(mode), mode)
}

/// Load `path`, or `mode`'s built-in level when it is missing or invalid
#[cfg(not(target_arch = "wasm32"))]
pub fn load_level_or_builtin<P: AsRef<Path>>(path: P, mode: GameMode) -> Level {
    let path = path.as_ref();
    if !path.exists() {
        info!("No level at {}, using built-in level", path.display());
        return builtin_level(mode);
    }
    match load_level(path) {
        Ok(level) => {
            info!("Loaded level '{}' from {}", level.name, path.display());
            level
        }
        Err(e) => {
            warn!("Failed to load {}: {}, using built-in level", path.display(), e);
            builtin_level(mode)
        }
    }
}

/// Load the level for `mode` over HTTP (WASM can't touch the filesystem)
#[cfg(target_arch = "wasm32")]
pub async fn load_mode_level(mode: GameMode) -> Level {
    let path = level_path(mode);
    match macroquad::prelude::load_string(&path).await {
        Ok(contents) => match load_level_from_str(&contents) {
            Ok(level) => {
                info!("Loaded level '{}' from {}", level.name, path);
                level
            }
            Err(e) => {
                warn!("Failed to load {}: {}, using built-in level", path, e);
                builtin_level(mode)
            }
        },
        Err(e) => {
            info!("No level at {} ({}), using built-in level", path, e);
            builtin_level(mode)
        }
    }
}
