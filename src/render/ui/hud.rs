//! Crosshair and pickup prompt

use macroquad::prelude::*;
use crate::game::GameState;
use super::super::Renderer;
use super::common::*;

const DETECTED_COLOR: Color = GREEN;

pub fn pickup_prompt(name: &str) -> String {
    format!("Press 'F' to pick '{}'", name)
}

impl Renderer {
    pub(crate) fn render_crosshair(&self, state: &GameState) {
        if state.ui_state.show_inventory {
            return;
        }

        let (cx, cy) = (screen_width() / 2.0, screen_height() / 2.0);
        let tint = if state.detected.is_some() { DETECTED_COLOR } else { WHITE };
        let rect = Rect::new(
            cx - CROSSHAIR_SIZE / 2.0,
            cy - CROSSHAIR_SIZE / 2.0,
            CROSSHAIR_SIZE,
            CROSSHAIR_SIZE,
        );
        self.draw_texture_in(&self.crosshair, rect, tint);

        if let Some(name) = state.detected_name() {
            let text = pickup_prompt(&name);
            let rect = Rect::new(cx - PROMPT_WIDTH / 2.0, cy - PROMPT_RAISE, PROMPT_WIDTH, PROMPT_HEIGHT);
            let shadow = Rect::new(rect.x + 1.0, rect.y + 1.0, rect.w, rect.h);
            self.font.draw_text_centered(&text, shadow, FONT_SIZE, PROMPT_SHADOW);
            self.font.draw_text_centered(&text, rect, FONT_SIZE, DETECTED_COLOR);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pickup_prompt() {
        assert_eq!(pickup_prompt("Lantern"), "Press 'F' to pick 'Lantern'");
    }
}
