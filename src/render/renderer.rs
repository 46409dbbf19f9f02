use macroquad::prelude::*;
use crate::game::{GameState, ItemRegistry};
use crate::ui::UiLayout;
use crate::util::asset_path;
use super::font::UiFont;

const CROSSHAIR_PATH: &str = "assets/ui/crosshair.png";
const FONT_PATH: &str = "assets/fonts/monogram.ttf";

const SKY_COLOR: Color = Color::new(0.46, 0.62, 0.78, 1.0);
const GROUND_COLOR: Color = Color::new(0.29, 0.33, 0.26, 1.0);
const DETECTED_OUTLINE: Color = Color::new(0.3, 1.0, 0.3, 1.0);

pub struct Renderer {
    /// Crosshair texture, tinted at draw time
    pub(crate) crosshair: Texture2D,
    /// 1x1 white texture used where an item has no preview
    pub(crate) white: Texture2D,
    /// Preview textures by registry index
    pub(crate) previews: Vec<Option<Texture2D>>,
    pub(crate) font: UiFont,
}

impl Renderer {
    pub async fn new(registry: &ItemRegistry) -> Self {
        let white = Texture2D::from_rgba8(1, 1, &[255, 255, 255, 255]);

        let crosshair = match load_texture(&asset_path(CROSSHAIR_PATH)).await {
            Ok(tex) => {
                tex.set_filter(FilterMode::Nearest);
                log::info!("Loaded crosshair: {}x{}", tex.width(), tex.height());
                tex
            }
            Err(e) => {
                log::warn!("Failed to load crosshair: {}. Using a plain square.", e);
                white.clone()
            }
        };

        let mut previews = Vec::with_capacity(registry.len());
        for def in registry.iter() {
            let preview = match &def.preview {
                Some(path) => match load_texture(&asset_path(path)).await {
                    Ok(tex) => {
                        tex.set_filter(FilterMode::Nearest);
                        log::debug!("Loaded preview for {}: {}", def.name, path);
                        Some(tex)
                    }
                    Err(e) => {
                        log::warn!("Failed to load preview {}: {}", path, e);
                        None
                    }
                },
                None => None,
            };
            previews.push(preview);
        }
        log::info!(
            "Loaded {} of {} item previews",
            previews.iter().filter(|p| p.is_some()).count(),
            registry.len()
        );

        let font = UiFont::load_or_default(&asset_path(FONT_PATH)).await;

        Self {
            crosshair,
            white,
            previews,
            font,
        }
    }

    /// Preview texture for a registry index
    pub(crate) fn preview(&self, item_index: usize) -> Option<&Texture2D> {
        self.previews.get(item_index).and_then(|p| p.as_ref())
    }

    /// Draw the frame and return the layout of hoverable UI elements
    pub fn render(&self, state: &GameState) -> UiLayout {
        clear_background(SKY_COLOR);
        self.render_world(state);

        set_default_camera();
        let mut layout = UiLayout::new();
        self.render_hint();
        if state.ui_state.panel_visible() {
            self.render_inventory(state, &mut layout);
        }
        self.render_dragged_item(state);
        self.render_item_tooltip(state);
        self.render_crosshair(state);
        layout
    }

    fn render_world(&self, state: &GameState) {
        set_camera(&state.player.camera());

        let half = state.player.bounds;
        draw_plane(Vec3::ZERO, vec2(half, half), None, GROUND_COLOR);
        draw_grid(((half * 2.0) as u32).max(1), 1.0, Color::new(0.2, 0.2, 0.2, 0.6), Color::new(0.35, 0.35, 0.3, 0.4));

        for prop in state.world.props() {
            draw_cube(prop.aabb.center(), prop.aabb.size(), None, prop.color);
            draw_cube_wires(prop.aabb.center(), prop.aabb.size(), Color::new(0.0, 0.0, 0.0, 0.35));
        }

        let detected_id = state.detected.map(|d| d.id);
        for item in state.world.items() {
            let color = state
                .item_registry
                .get(item.item_index)
                .map_or(WHITE, |def| def.world_color());
            let size = Vec3::splat(item.half_size * 2.0);
            draw_cube(item.position, size, None, color);

            if detected_id == Some(item.id) {
                draw_cube_wires(item.position, size * 1.05, DETECTED_OUTLINE);
            }
        }
    }

    /// Top-left control hint
    fn render_hint(&self) {
        use super::ui::common::*;
        let rect = Rect::new(HINT_X, HINT_Y, HINT_WIDTH, HINT_HEIGHT);
        self.font.draw_label("Press 'Tab' to open Inventory", rect, FONT_SIZE, WHITE);
    }

    /// Box with a border, the immediate-mode equivalent of a skin box
    pub(crate) fn draw_box(&self, rect: Rect, bg: Color, border: Color) {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, bg);
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, border);
    }

    /// Stretch a texture over a rect
    pub(crate) fn draw_texture_in(&self, texture: &Texture2D, rect: Rect, tint: Color) {
        draw_texture_ex(
            texture,
            rect.x,
            rect.y,
            tint,
            DrawTextureParams {
                dest_size: Some(vec2(rect.w, rect.h)),
                ..Default::default()
            },
        );
    }
}
