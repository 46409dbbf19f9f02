pub mod font;
mod renderer;
pub mod ui;

pub use font::UiFont;
pub use renderer::Renderer;
pub use ui::inventory::InventoryPanel;
