//! Inventory panel rendering

use macroquad::prelude::*;
use crate::game::inventory::{INVENTORY_COLUMNS, INVENTORY_SIZE};
use crate::game::GameState;
use crate::ui::{UiElementId, UiLayout};
use super::super::Renderer;
use super::common::*;

/// Panel geometry for one frame. Pure so it can be checked without a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InventoryPanel {
    pub frame: Rect,
    /// Area holding the slots, below the title
    pub grid: Rect,
}

impl InventoryPanel {
    /// Layout for the given screen height and slide amount (0 = shown, 1 = hidden)
    pub fn at(screen_h: f32, window_animation: f32) -> Self {
        let frame = Rect::new(
            PANEL_X - PANEL_SLIDE * window_animation,
            screen_h / 2.0 - PANEL_CENTER_OFFSET,
            PANEL_WIDTH,
            PANEL_HEIGHT,
        );
        let rows = INVENTORY_SIZE.div_ceil(INVENTORY_COLUMNS);
        let grid = Rect::new(
            frame.x + PANEL_PADDING,
            frame.y + PANEL_PADDING + TITLE_HEIGHT,
            span(INVENTORY_COLUMNS),
            span(rows),
        );
        Self { frame, grid }
    }

    pub fn title_rect(&self) -> Rect {
        Rect::new(self.frame.x, self.frame.y + PANEL_PADDING, self.frame.w, TITLE_HEIGHT - PANEL_PADDING)
    }

    /// Bounds of a slot, row-major
    pub fn slot_rect(&self, index: usize) -> Rect {
        let col = (index % INVENTORY_COLUMNS) as f32;
        let row = (index / INVENTORY_COLUMNS) as f32;
        Rect::new(
            self.grid.x + col * (SLOT_SIZE + SLOT_SPACING),
            self.grid.y + row * (SLOT_SIZE + SLOT_SPACING),
            SLOT_SIZE,
            SLOT_SIZE,
        )
    }
}

/// Length of `count` slots laid out with spacing between them
fn span(count: usize) -> f32 {
    let n = count as f32;
    n * SLOT_SIZE + (n - 1.0).max(0.0) * SLOT_SPACING
}

/// Visual state of a slot given the drag and hover state
pub fn slot_state(index: usize, hovered: Option<usize>, drag_slot: Option<usize>) -> SlotState {
    let hovered = hovered == Some(index);
    match drag_slot {
        Some(source) if source == index => SlotState::Disabled,
        Some(_) if hovered => SlotState::Disabled,
        _ if hovered => SlotState::Hovered,
        _ => SlotState::Normal,
    }
}

impl Renderer {
    pub(crate) fn render_inventory(&self, state: &GameState, layout: &mut UiLayout) {
        let ui = &state.ui_state;
        let panel = InventoryPanel::at(screen_height(), ui.window_animation);

        self.draw_box(panel.frame, PANEL_BG, PANEL_BORDER);
        self.font.draw_text_centered("Inventory", panel.title_rect(), FONT_SIZE, TEXT_TITLE);

        // Grid first so slots win the hit test
        layout.add(UiElementId::InventoryGrid, panel.grid);

        for (index, item) in state.inventory.iter() {
            let rect = panel.slot_rect(index);
            layout.add(UiElementId::InventorySlot(index), rect);

            let slot_state = slot_state(index, ui.hovered_slot, ui.drag_slot);
            let alpha = if slot_state == SlotState::Disabled { DISABLED_ALPHA } else { 1.0 };

            let bg = if item.is_some() { SLOT_BG_FILLED } else { SLOT_BG_EMPTY };
            let border = if slot_state == SlotState::Hovered { SLOT_HOVER_BORDER } else { BOX_BORDER };
            self.draw_box(rect, faded(bg, alpha), faded(border, alpha));

            if let Some(item_index) = item {
                let icon = Rect::new(
                    rect.x + SLOT_ICON_INSET,
                    rect.y + SLOT_ICON_INSET,
                    rect.w - SLOT_ICON_INSET * 2.0,
                    rect.h - SLOT_ICON_INSET * 2.0,
                );
                let texture = self.preview(item_index).unwrap_or(&self.white);
                self.draw_texture_in(texture, icon, faded(WHITE, alpha));
            }
        }
    }

    /// Item following the cursor while dragging
    pub(crate) fn render_dragged_item(&self, state: &GameState) {
        let ui = &state.ui_state;
        let Some(item_index) = ui.drag_slot.and_then(|slot| state.inventory.get(slot)) else {
            return;
        };

        let (mx, my) = mouse_position();
        let origin = vec2(mx, my) + ui.drag_offset;
        let rect = Rect::new(origin.x, origin.y, SLOT_SIZE, SLOT_SIZE);

        match self.preview(item_index) {
            Some(texture) => self.draw_texture_in(texture, rect, WHITE),
            None => {
                self.draw_box(rect, BOX_BG, BOX_BORDER);
                let name = state.item_registry.display_name(item_index);
                self.font.draw_text_centered(&name, rect, FONT_SIZE, TEXT_NORMAL);
            }
        }
    }
}
