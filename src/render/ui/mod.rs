//! Overlay components split from the main renderer

pub mod common;
pub mod hud;
pub mod inventory;
pub mod tooltip;
