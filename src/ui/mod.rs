//! Immediate-mode UI helpers for the menu and HUD
//!
//! - Rectangle geometry (also used by the collision code)
//! - Mouse snapshot taken once per frame
//! - Buttons with hover colors
//! - Shared palette and color helpers

mod rect;
mod input;
mod button;
mod theme;

pub use rect::*;
pub use input::*;
pub use button::*;
pub use theme::*;
