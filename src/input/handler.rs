use macroquad::prelude::*;
use crate::game::GameState;
use crate::ui::{UiElementId, UiLayout};

/// Commands produced by one frame of input, applied by the frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    ToggleInventory,
    BeginDrag,
    ReleaseDrag,
    Pickup,
    ToggleMute,
    Quit,
}

/// Raw input sampled once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub mouse: Vec2,
    pub toggle_inventory: bool,
    pub pickup: bool,
    pub mouse_pressed: bool,
    pub mouse_released: bool,
    pub toggle_mute: bool,
    pub quit: bool,
    /// -1 back, 1 forward
    pub forward: f32,
    /// -1 left, 1 right
    pub strafe: f32,
}

impl FrameInput {
    pub fn sample() -> Self {
        let (mx, my) = mouse_position();
        let axis = |pos: [KeyCode; 2], neg: [KeyCode; 2]| {
            let held = |keys: [KeyCode; 2]| keys.iter().any(|&k| is_key_down(k));
            (held(pos) as i32 - held(neg) as i32) as f32
        };

        Self {
            mouse: vec2(mx, my),
            toggle_inventory: is_key_pressed(KeyCode::Tab),
            pickup: is_key_pressed(KeyCode::F),
            mouse_pressed: is_mouse_button_pressed(MouseButton::Left),
            mouse_released: is_mouse_button_released(MouseButton::Left),
            toggle_mute: is_key_pressed(KeyCode::M),
            quit: is_key_pressed(KeyCode::Escape),
            forward: axis([KeyCode::W, KeyCode::Up], [KeyCode::S, KeyCode::Down]),
            strafe: axis([KeyCode::D, KeyCode::Right], [KeyCode::A, KeyCode::Left]),
        }
    }
}

pub struct InputHandler {
    // Mouse position last frame, for look deltas
    last_mouse: Option<Vec2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self { last_mouse: None }
    }

    /// Sample macroquad input and process it against the last rendered layout
    pub fn process(&mut self, state: &mut GameState, layout: &UiLayout, delta: f32) -> Vec<InputCommand> {
        let input = FrameInput::sample();
        self.process_frame(&input, state, layout, delta)
    }

    pub fn process_frame(
        &mut self,
        input: &FrameInput,
        state: &mut GameState,
        layout: &UiLayout,
        delta: f32,
    ) -> Vec<InputCommand> {
        let mut commands = Vec::new();

        if input.quit {
            commands.push(InputCommand::Quit);
            return commands;
        }

        if input.toggle_inventory {
            commands.push(InputCommand::ToggleInventory);
        }
        if input.toggle_mute {
            commands.push(InputCommand::ToggleMute);
        }
        if input.pickup {
            commands.push(InputCommand::Pickup);
        }

        // Look delta is measured every frame so reopening the view does not jump
        let look = self.last_mouse.map_or(Vec2::ZERO, |last| input.mouse - last);
        self.last_mouse = Some(input.mouse);

        if state.ui_state.show_inventory {
            match layout.hit_test(input.mouse.x, input.mouse.y) {
                Some(id @ UiElementId::InventorySlot(slot)) => {
                    if let Some(bounds) = layout.bounds_of(id) {
                        state.hover_slot(slot, bounds.point(), input.mouse);
                    }
                }
                // Gaps between slots keep the last hovered slot
                Some(UiElementId::InventoryGrid) => {}
                None => state.clear_hover(),
            }

            if input.mouse_pressed {
                commands.push(InputCommand::BeginDrag);
            }
            if input.mouse_released && state.ui_state.is_dragging() {
                commands.push(InputCommand::ReleaseDrag);
            }
        } else {
            state.clear_hover();
            state.player.apply_look(look.x, look.y);
            state.move_player(input.forward, input.strafe, delta);
        }

        commands
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
