pub mod state;
pub mod inventory;
pub mod item_registry;
pub mod player;
pub mod raycast;
pub mod world;

pub use state::{GameState, UiState, DetectedItem, DragOutcome, PickupOutcome};
pub use inventory::{Inventory, INVENTORY_SIZE, INVENTORY_COLUMNS};
pub use item_registry::{ItemDefinition, ItemRegistry};
pub use player::Player;
pub use world::{World, WorldItem, WorldItemId, HitTarget};
