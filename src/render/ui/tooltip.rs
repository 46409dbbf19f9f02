//! Item tooltip rendering

use macroquad::prelude::*;
use crate::game::GameState;
use super::super::Renderer;
use super::common::*;

/// Registry index of the item under the cursor, if a tooltip should show
pub fn tooltip_item(state: &GameState) -> Option<usize> {
    let ui = &state.ui_state;
    if !ui.show_inventory || ui.is_dragging() {
        return None;
    }
    ui.hovered_slot.and_then(|slot| state.inventory.get(slot))
}

impl Renderer {
    /// Small name box above the cursor for the hovered slot
    pub(crate) fn render_item_tooltip(&self, state: &GameState) {
        let Some(item_index) = tooltip_item(state) else {
            return;
        };

        let (mx, my) = mouse_position();
        let rect = Rect::new(mx, my - TOOLTIP_RAISE, TOOLTIP_WIDTH, TOOLTIP_HEIGHT);
        self.draw_box(rect, BOX_BG, BOX_BORDER);

        let name = state.item_registry.display_name(item_index);
        self.font.draw_text_centered(&name, rect, FONT_SIZE, TEXT_NORMAL);
    }
}
