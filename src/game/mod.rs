//! Game Module
//!
//! Everything that happens after the menu's Start button:
//! - Level: static walls loaded from RON
//! - Player: the rectangle the keyboard moves
//! - Collision: one AABB resolver per game mode
//! - Camera: view rect following the player
//! - Session: fixed-step update and drawing for one run

pub mod camera;
pub mod clock;
pub mod collision;
pub mod level;
pub mod mode;
pub mod player;
pub mod session;

pub use camera::GameCamera;
pub use clock::FixedClock;
pub use level::{load_mode_level, Level};
pub use mode::GameMode;
pub use player::Player;
pub use session::{GameSession, SessionEvent};
