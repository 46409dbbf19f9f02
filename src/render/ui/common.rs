//! Common UI constants shared across overlay components

use macroquad::prelude::Color;

// ============================================================================
// UI Color Palette
// ============================================================================

// Panel and box backgrounds
pub const PANEL_BG: Color = Color::new(0.071, 0.071, 0.094, 0.902);          // rgba(18, 18, 24, 230)
pub const BOX_BG: Color = Color::new(0.110, 0.110, 0.149, 0.902);            // rgba(28, 28, 38, 230)
pub const BOX_BORDER: Color = Color::new(0.322, 0.282, 0.227, 1.0);          // rgba(82, 72, 58, 255)
pub const PANEL_BORDER: Color = Color::new(0.557, 0.424, 0.267, 1.0);        // rgba(142, 108, 68, 255)

// Slot states
pub const SLOT_BG_EMPTY: Color = Color::new(0.086, 0.086, 0.118, 0.941);     // rgba(22, 22, 30, 240)
pub const SLOT_BG_FILLED: Color = Color::new(0.125, 0.125, 0.173, 0.941);    // rgba(32, 32, 44, 240)
pub const SLOT_HOVER_BORDER: Color = Color::new(0.659, 0.580, 0.424, 1.0);   // rgba(168, 148, 108, 255)

/// Alpha multiplier for disabled (drag source / drag target) slots
pub const DISABLED_ALPHA: f32 = 0.45;

// Text
pub const TEXT_TITLE: Color = Color::new(0.855, 0.737, 0.502, 1.0);          // rgba(218, 188, 128, 255)
pub const TEXT_NORMAL: Color = Color::new(0.824, 0.824, 0.855, 1.0);         // rgba(210, 210, 218, 255)

// Crosshair and pickup prompt
pub const PROMPT_SHADOW: Color = Color::new(0.0, 0.0, 0.0, 0.84);

// ============================================================================
// Layout Constants
// ============================================================================

pub const FONT_SIZE: f32 = 16.0;

pub const HINT_X: f32 = 5.0;
pub const HINT_Y: f32 = 5.0;
pub const HINT_WIDTH: f32 = 200.0;
pub const HINT_HEIGHT: f32 = 25.0;

/// Panel left edge when fully shown
pub const PANEL_X: f32 = 10.0;
/// How far the panel slides out to the left when hidden
pub const PANEL_SLIDE: f32 = 430.0;
/// Panel top relative to the vertical screen center
pub const PANEL_CENTER_OFFSET: f32 = 200.0;
pub const PANEL_WIDTH: f32 = 302.0;
pub const PANEL_HEIGHT: f32 = 430.0;
pub const PANEL_PADDING: f32 = 6.0;
pub const TITLE_HEIGHT: f32 = 25.0;

pub const SLOT_SIZE: f32 = 95.0;
pub const SLOT_SPACING: f32 = 2.5;
/// Inset of the preview texture inside its slot box
pub const SLOT_ICON_INSET: f32 = 6.0;

pub const TOOLTIP_WIDTH: f32 = 100.0;
pub const TOOLTIP_HEIGHT: f32 = 25.0;
/// Tooltip sits this far above the cursor
pub const TOOLTIP_RAISE: f32 = 30.0;

pub const CROSSHAIR_SIZE: f32 = 8.0;

pub const PROMPT_WIDTH: f32 = 150.0;
pub const PROMPT_HEIGHT: f32 = 20.0;
/// Prompt sits this far above the screen center
pub const PROMPT_RAISE: f32 = 50.0;

// ============================================================================
// Shared Types
// ============================================================================

/// Slot visual state for rendering
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SlotState {
    Normal,
    Hovered,
    /// Drag source, or the slot a drag is currently over
    Disabled,
}

/// Multiply a color's alpha
pub fn faded(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, color.a * alpha)
}
