// Library crate shared by the desktop binary, web and Android builds

use macroquad::prelude::*;

pub mod util;
pub use util::asset_path;

pub mod config;
pub mod game;
pub mod render;
pub mod input;
pub mod ui;
pub mod audio;
mod app;

use audio::AudioManager;
use game::GameState;
use render::Renderer;

pub use app::{window_conf, apply_command, CommandEffect, FixedStep};
use app::{load_config, run_game_frame, AppState};

// For Android, miniquad's JNI code spawns a thread that calls quad_main
#[cfg(target_os = "android")]
#[no_mangle]
pub extern "C" fn quad_main() {
    macroquad::Window::from_config(window_conf(), run());
}

/// Load everything and run the frame loop until quit
pub async fn run() {
    let config = load_config().await;
    let game_state = match GameState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Failed to build the scene: {}", e);
            return;
        }
    };
    log::info!(
        "Loaded {} items, {} in the world",
        game_state.item_registry.len(),
        game_state.world.items().len()
    );

    let renderer = Renderer::new(&game_state.item_registry).await;
    let mut audio = AudioManager::new().await;
    let mut app = AppState::new(game_state, config.physics.fixed_hz);

    loop {
        if !run_game_frame(&mut app, &renderer, &mut audio) {
            break;
        }
        next_frame().await;
    }
}
