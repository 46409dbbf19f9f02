// Frame loop shared between desktop, web and Android builds

use macroquad::prelude::*;

use crate::audio::{AudioManager, Sfx};
use crate::config::{GameConfig, CONFIG_PATH};
use crate::game::{DragOutcome, GameState, PickupOutcome};
use crate::input::{InputCommand, InputHandler};
use crate::render::Renderer;

/// Physics steps allowed per frame before the accumulator is dropped
const MAX_STEPS_PER_FRAME: u32 = 5;

pub fn window_conf() -> Conf {
    Conf {
        window_title: "FPS Inventory".to_string(),
        window_width: 1280,
        window_height: 720,
        fullscreen: false,
        ..Default::default()
    }
}

/// Fixed-rate accumulator for physics and detection
#[derive(Debug, Clone)]
pub struct FixedStep {
    pub step: f32,
    accumulator: f32,
}

impl FixedStep {
    pub fn new(hz: f32) -> Self {
        Self {
            step: 1.0 / hz.max(1.0),
            accumulator: 0.0,
        }
    }

    /// Add frame time and return how many fixed steps to run
    pub fn advance(&mut self, delta: f32) -> u32 {
        self.accumulator += delta.max(0.0);
        let mut steps = 0;
        while self.accumulator >= self.step && steps < MAX_STEPS_PER_FRAME {
            self.accumulator -= self.step;
            steps += 1;
        }
        if steps == MAX_STEPS_PER_FRAME {
            // Fell behind; skip the backlog instead of spiralling
            self.accumulator = self.accumulator.min(self.step);
        }
        steps
    }
}

/// What the frame loop has to do after a command was applied to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandEffect {
    None,
    Play(Sfx),
    ToggleMute,
    Quit,
}

/// Apply one input command to the game state
pub fn apply_command(cmd: InputCommand, state: &mut GameState) -> CommandEffect {
    match cmd {
        InputCommand::ToggleInventory => {
            state.toggle_inventory();
            CommandEffect::None
        }
        InputCommand::BeginDrag => {
            if state.begin_drag() {
                CommandEffect::Play(Sfx::ItemGrab)
            } else {
                CommandEffect::None
            }
        }
        InputCommand::ReleaseDrag => match state.release_drag() {
            Some(DragOutcome::Swapped { .. }) => CommandEffect::Play(Sfx::ItemPut),
            Some(DragOutcome::Dropped { .. }) => CommandEffect::Play(Sfx::Drop),
            None => CommandEffect::None,
        },
        InputCommand::Pickup => match state.try_pickup() {
            PickupOutcome::PickedUp { .. } => CommandEffect::Play(Sfx::Pickup),
            PickupOutcome::InventoryFull | PickupOutcome::NothingDetected => CommandEffect::None,
        },
        InputCommand::ToggleMute => CommandEffect::ToggleMute,
        InputCommand::Quit => CommandEffect::Quit,
    }
}

/// Everything the frame loop owns between frames
pub struct AppState {
    pub game_state: GameState,
    pub input_handler: InputHandler,
    pub fixed_step: FixedStep,
    /// Cursor grab last applied to the window
    cursor_locked: Option<bool>,
}

impl AppState {
    pub fn new(game_state: GameState, fixed_hz: f32) -> Self {
        Self {
            game_state,
            input_handler: InputHandler::new(),
            fixed_step: FixedStep::new(fixed_hz),
            cursor_locked: None,
        }
    }

    /// Grab and hide the cursor while playing, release it while the inventory is shown
    fn apply_cursor(&mut self) {
        let locked = !self.game_state.ui_state.show_inventory;
        if self.cursor_locked != Some(locked) {
            set_cursor_grab(locked);
            show_mouse(!locked);
            self.cursor_locked = Some(locked);
        }
    }
}

/// Load the config the way the current platform can read assets
pub async fn load_config() -> GameConfig {
    #[cfg(all(not(target_arch = "wasm32"), not(target_os = "android")))]
    {
        GameConfig::load_or_default(std::path::Path::new(CONFIG_PATH))
    }

    #[cfg(any(target_arch = "wasm32", target_os = "android"))]
    {
        let path = crate::util::asset_path(CONFIG_PATH);
        match load_string(&path).await {
            Ok(content) => GameConfig::from_toml_str(&content).unwrap_or_else(|e| {
                log::warn!("Using default config ({}): {}", path, e);
                GameConfig::default()
            }),
            Err(e) => {
                log::warn!("Using default config ({}): {}", path, e);
                GameConfig::default()
            }
        }
    }
}

/// Run a single frame. Returns false when the game should exit.
pub fn run_game_frame(app: &mut AppState, renderer: &Renderer, audio: &mut AudioManager) -> bool {
    let delta = get_frame_time();

    // 1. Physics and detection at a fixed rate
    for _ in 0..app.fixed_step.advance(delta) {
        app.game_state.fixed_update(app.fixed_step.step);
    }

    // 2. Render; the layout is what input hit-tests against
    let layout = renderer.render(&app.game_state);

    // 3. Input against the layout that is on screen
    let commands = app.input_handler.process(&mut app.game_state, &layout, delta);

    for cmd in commands {
        match apply_command(cmd, &mut app.game_state) {
            CommandEffect::None => {}
            CommandEffect::Play(sfx) => audio.play(sfx),
            CommandEffect::ToggleMute => audio.toggle_mute(),
            CommandEffect::Quit => {
                log::info!("Quit requested");
                return false;
            }
        }
    }

    // 4. Panel slide and player lock
    app.game_state.update(delta);

    // 5. Cursor follows the inventory state
    app.apply_cursor();

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::vec2;

    fn state() -> GameState {
        GameState::from_config(&GameConfig::default()).unwrap()
    }

    #[test]
    fn test_fixed_step_counts() {
        let mut step = FixedStep::new(50.0);
        assert_eq!(step.advance(0.01), 0);
        assert_eq!(step.advance(0.011), 1);
        assert_eq!(step.advance(0.045), 2);
    }

    #[test]
    fn test_fixed_step_caps_backlog() {
        let mut step = FixedStep::new(50.0);
        assert_eq!(step.advance(2.0), MAX_STEPS_PER_FRAME);
        // Backlog dropped, at most one step left over
        assert!(step.advance(0.0) <= 1);
        assert_eq!(step.advance(0.0), 0);
    }

    #[test]
    fn test_toggle_command() {
        let mut s = state();
        assert_eq!(apply_command(InputCommand::ToggleInventory, &mut s), CommandEffect::None);
        assert!(s.ui_state.show_inventory);
    }

    #[test]
    fn test_drag_commands_play_feedback() {
        let mut s = state();
        s.inventory.add(0);
        s.inventory.add(1);
        apply_command(InputCommand::ToggleInventory, &mut s);
        s.update(1.0);

        // Empty slot cannot be grabbed
        s.hover_slot(5, vec2(0.0, 0.0), vec2(0.0, 0.0));
        assert_eq!(apply_command(InputCommand::BeginDrag, &mut s), CommandEffect::None);

        s.hover_slot(0, vec2(0.0, 0.0), vec2(0.0, 0.0));
        assert_eq!(apply_command(InputCommand::BeginDrag, &mut s), CommandEffect::Play(Sfx::ItemGrab));
        s.hover_slot(1, vec2(0.0, 0.0), vec2(0.0, 0.0));
        assert_eq!(apply_command(InputCommand::ReleaseDrag, &mut s), CommandEffect::Play(Sfx::ItemPut));

        s.hover_slot(0, vec2(0.0, 0.0), vec2(0.0, 0.0));
        apply_command(InputCommand::BeginDrag, &mut s);
        s.clear_hover();
        assert_eq!(apply_command(InputCommand::ReleaseDrag, &mut s), CommandEffect::Play(Sfx::Drop));
        assert_eq!(apply_command(InputCommand::ReleaseDrag, &mut s), CommandEffect::None);
    }

    #[test]
    fn test_pickup_command() {
        let mut s = state();
        assert_eq!(apply_command(InputCommand::Pickup, &mut s), CommandEffect::None);

        let eye = s.player.eye_position();
        let id = s.world.spawn_item(0, eye + s.player.forward() * 1.5, 0.2);
        s.detect();
        assert!(s.detected.is_some());
        assert_eq!(apply_command(InputCommand::Pickup, &mut s), CommandEffect::Play(Sfx::Pickup));
        assert!(s.world.item(id).is_none());
    }

    #[test]
    fn test_mute_and_quit_pass_through() {
        let mut s = state();
        assert_eq!(apply_command(InputCommand::ToggleMute, &mut s), CommandEffect::ToggleMute);
        assert_eq!(apply_command(InputCommand::Quit, &mut s), CommandEffect::Quit);
    }
}
