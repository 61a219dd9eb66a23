//! RECTRUN: a rectangle, some walls and three ways to move
//!
//! Menu screen with Start/Exit buttons, then a player rectangle steered by
//! the keyboard through static walls:
//! - Basic: four-way movement, blocked moves are refused
//! - Platformer: gravity, jumping, one-axis collision response
//! - Free: gravity-free movement with a camera that follows the player

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod config;
mod game;
mod input;
mod logging;
mod menu;
mod ui;

use std::sync::OnceLock;

use log::info;
use macroquad::prelude::*;

use app::{limit_frame, AppState, Flow};
use config::{Config, CONFIG_PATH};

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Config is needed before the window exists, so it is loaded once here
fn config() -> &'static Config {
    CONFIG.get_or_init(|| {
        logging::init();
        Config::load_or_default(CONFIG_PATH)
    })
}

fn window_conf() -> Conf {
    let window = &config().window;
    Conf {
        window_title: window.title.clone(),
        window_width: window.width as i32,
        window_height: window.height as i32,
        window_resizable: true,
        high_dpi: window.high_dpi,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let config = config().clone();
    let fps_limit = config.fps_limit;

    info!("=== RECTRUN v{} ===", VERSION);

    let mut app = AppState::new(config, screen_width(), screen_height());

    loop {
        // Track frame start time for FPS limiting
        let frame_start = get_time();

        let flow = app.frame(screen_width(), screen_height(), get_frame_time()).await;
        if flow == Flow::Quit {
            break;
        }

        limit_frame(frame_start, fps_limit);
        next_frame().await;
    }

    info!("Bye");
}
