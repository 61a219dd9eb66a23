//! Application state and screen management
//!
//! Two screens: the main menu and the game. The menu stays alive while a
//! session runs, so returning to it keeps the selected mode.

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::game::{load_mode_level, GameMode, GameSession, SessionEvent};
use crate::input::{Action, FrameInput, InputState};
use crate::menu::{MainMenu, MenuAction};
use crate::ui::{MouseState, UiContext};

/// The screen currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
}

/// FPS limit setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FpsLimit {
    Fps30,
    #[default]
    Fps60,
    /// As fast as the display allows
    Unlocked,
}

impl FpsLimit {
    /// Get the target frame time in seconds (None = unlocked)
    pub fn frame_time(&self) -> Option<f64> {
        match self {
            FpsLimit::Fps30 => Some(1.0 / 30.0),
            FpsLimit::Fps60 => Some(1.0 / 60.0),
            FpsLimit::Unlocked => None,
        }
    }
}

/// Sleep (native) or spin (WASM) until `target_frame_time` has passed
/// since `frame_start`, both in seconds of macroquad's clock
pub fn limit_frame(frame_start: f64, limit: FpsLimit) {
    use macroquad::prelude::get_time;

    let Some(target_frame_time) = limit.frame_time() else {
        return;
    };
    if get_time() - frame_start >= target_frame_time {
        return;
    }

    // Native: use sleep for bulk, then spin-wait for precision
    #[cfg(not(target_arch = "wasm32"))]
    {
        let spin_margin = 0.002; // 2ms
        while get_time() - frame_start + spin_margin < target_frame_time {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
        while get_time() - frame_start < target_frame_time {
            std::hint::spin_loop();
        }
    }
    // WASM: the browser paces frames, just spin
    #[cfg(target_arch = "wasm32")]
    {
        while get_time() - frame_start < target_frame_time {}
    }
}

/// What the main loop should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Main application state
pub struct AppState {
    pub screen: Screen,
    pub config: Config,
    pub menu: MainMenu,
    pub session: Option<GameSession>,
    pub ui: UiContext,
    pub input: InputState,
}

impl AppState {
    pub fn new(config: Config, screen_w: f32, screen_h: f32) -> Self {
        let menu = MainMenu::new(screen_w, screen_h, config.start_mode);
        Self {
            screen: Screen::Menu,
            config,
            menu,
            session: None,
            ui: UiContext::new(),
            input: InputState::new(),
        }
    }

    /// Run and draw one frame of whichever screen is active
    pub async fn frame(&mut self, screen_w: f32, screen_h: f32, frame_dt: f32) -> Flow {
        let keys = self.input.poll();
        self.ui.begin_frame(MouseState::poll());

        match self.screen {
            Screen::Menu => {
                self.menu.relayout(screen_w, screen_h);
                let action = self.menu.update(&mut self.ui, keys.pressed(Action::Back));
                let flow = self.handle_menu(action, screen_w, screen_h).await;
                self.draw_current();
                flow
            }
            Screen::Playing => {
                self.update_session(screen_w, screen_h, frame_dt, &keys);
                Flow::Continue
            }
        }
    }

    /// React to a menu action: start a session, change mode, or quit
    pub async fn handle_menu(&mut self, action: MenuAction, screen_w: f32, screen_h: f32) -> Flow {
        match action {
            MenuAction::None => Flow::Continue,
            MenuAction::Quit => {
                info!("Exit requested from menu");
                Flow::Quit
            }
            MenuAction::CycleMode => {
                self.menu.set_mode(self.menu.mode.next());
                info!("Mode set to {}", self.menu.mode.label());
                Flow::Continue
            }
            MenuAction::Start(mode) => {
                let level = load_mode_level(mode).await;
                self.start_session(mode, level, screen_w, screen_h);
                Flow::Continue
            }
        }
    }

    pub fn start_session(&mut self, mode: GameMode, level: crate::game::Level, screen_w: f32, screen_h: f32) {
        self.session = Some(GameSession::new(mode, level, &self.config, screen_w, screen_h));
        self.screen = Screen::Playing;
    }

    /// The session to draw this frame, or None for the menu. Checked after
    /// input is handled, so the frame that switches screens shows the new one.
    fn visible_session(&self) -> Option<&GameSession> {
        match self.screen {
            Screen::Playing => self.session.as_ref(),
            Screen::Menu => None,
        }
    }

    fn draw_current(&self) {
        match self.visible_session() {
            Some(session) => session.draw(),
            None => self.menu.draw(),
        }
    }

    fn update_session(&mut self, screen_w: f32, screen_h: f32, frame_dt: f32, keys: &FrameInput) {
        let Some(session) = self.session.as_mut() else {
            self.screen = Screen::Menu;
            return;
        };

        session.resize(screen_w, screen_h);
        match session.update(frame_dt, keys) {
            SessionEvent::None => session.draw(),
            SessionEvent::ExitToMenu => {
                info!("Back to menu after {} ticks", session.ticks);
                self.session = None;
                self.screen = Screen::Menu;
                self.menu.draw();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Level;

    #[test]
    fn test_fps_limit_frame_times() {
        assert_eq!(FpsLimit::Fps30.frame_time(), Some(1.0 / 30.0));
        assert_eq!(FpsLimit::Fps60.frame_time(), Some(1.0 / 60.0));
        assert_eq!(FpsLimit::Unlocked.frame_time(), None);
        assert_eq!(FpsLimit::default(), FpsLimit::Fps60);
    }

    #[test]
    fn test_starts_on_menu_with_config_mode() {
        let mut config = Config::default();
        config.start_mode = GameMode::Free;
        let app = AppState::new(config, 800.0, 600.0);
        assert_eq!(app.screen, Screen::Menu);
        assert_eq!(app.menu.mode, GameMode::Free);
        assert!(app.session.is_none());
    }

    #[test]
    fn test_start_session_switches_screen() {
        let mut app = AppState::new(Config::default(), 800.0, 600.0);
        app.start_session(GameMode::Basic, Level::arena(800.0, 600.0), 800.0, 600.0);
        assert_eq!(app.screen, Screen::Playing);
        assert_eq!(app.session.as_ref().map(|s| s.mode), Some(GameMode::Basic));
    }

    #[test]
    fn test_started_session_is_drawn_the_same_frame() {
        let mut app = AppState::new(Config::default(), 800.0, 600.0);
        assert!(app.visible_session().is_none());

        app.start_session(GameMode::Free, Level::arena(800.0, 600.0), 800.0, 600.0);
        assert_eq!(app.visible_session().map(|s| s.mode), Some(GameMode::Free));

        app.screen = Screen::Menu;
        assert!(app.visible_session().is_none());
    }
}
