//! Game modes
//!
//! The three movement models the prototype went through, kept side by side.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Four-way movement, any move that would hit a wall is refused
    Basic,
    /// Gravity and jumping, walls resolved one axis at a time
    #[default]
    Platformer,
    /// Gravity-free movement, walls push the player out along the shallowest axis
    Free,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::Basic, GameMode::Platformer, GameMode::Free];

    pub fn label(&self) -> &'static str {
        match self {
            GameMode::Basic => "Basic",
            GameMode::Platformer => "Platformer",
            GameMode::Free => "Free",
        }
    }

    /// File stem of this mode's level under assets/levels/
    pub fn level_name(&self) -> &'static str {
        match self {
            GameMode::Basic => "basic",
            GameMode::Platformer => "platformer",
            GameMode::Free => "free",
        }
    }

    /// Cycle to next mode
    pub fn next(self) -> Self {
        match self {
            GameMode::Basic => GameMode::Platformer,
            GameMode::Platformer => GameMode::Free,
            GameMode::Free => GameMode::Basic,
        }
    }
}
