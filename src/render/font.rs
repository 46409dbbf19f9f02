//! Pixel font for overlay text
//!
//! Loads a TTF once and draws it with nearest filtering. Falls back to
//! macroquad's built-in font when the file is missing.

use macroquad::prelude::*;

pub struct UiFont {
    font: Option<Font>,
}

impl UiFont {
    /// Load from a path, falling back gracefully
    pub async fn load_or_default(path: &str) -> Self {
        match load_ttf_font(path).await {
            Ok(mut font) => {
                font.set_filter(FilterMode::Nearest);
                log::info!("Loaded font: {}", path);
                Self { font: Some(font) }
            }
            Err(e) => {
                log::warn!("Failed to load font {}: {}. Using default font.", path, e);
                Self { font: None }
            }
        }
    }

    /// Draw text with its baseline at y
    pub fn draw_text(&self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        draw_text_ex(
            text,
            x.floor(),  // Pixel-perfect positioning
            y.floor(),
            TextParams {
                font: self.font.as_ref(),
                font_size: font_size as u16,
                color,
                ..Default::default()
            },
        );
    }

    pub fn measure_text(&self, text: &str, font_size: f32) -> TextDimensions {
        measure_text(text, self.font.as_ref(), font_size as u16, 1.0)
    }

    /// Draw text centered inside a rect
    pub fn draw_text_centered(&self, text: &str, rect: Rect, font_size: f32, color: Color) {
        let dims = self.measure_text(text, font_size);
        let x = rect.x + (rect.w - dims.width) / 2.0;
        let y = rect.y + (rect.h + dims.offset_y) / 2.0;
        self.draw_text(text, x, y, font_size, color);
    }

    /// Draw text at the top-left of a rect, like a label
    pub fn draw_label(&self, text: &str, rect: Rect, font_size: f32, color: Color) {
        let dims = self.measure_text(text, font_size);
        let y = rect.y + (rect.h + dims.offset_y) / 2.0;
        self.draw_text(text, rect.x + 2.0, y, font_size, color);
    }
}

impl Default for UiFont {
    fn default() -> Self {
        Self { font: None }
    }
}
