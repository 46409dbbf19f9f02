use macroquad::prelude::*;
use super::inventory::Inventory;
use super::item_registry::ItemRegistry;
use super::player::Player;
use super::raycast::Aabb;
use super::world::{HitTarget, World, WorldItemId};
use crate::config::{ConfigError, GameConfig};
use crate::util::clamp01;

/// Horizontal radius of the player body used against props
const PLAYER_RADIUS: f32 = 0.3;

/// World item currently under the crosshair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectedItem {
    pub id: WorldItemId,
    /// Index into the item registry
    pub item_index: usize,
}

/// Result of releasing a dragged slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Released outside the grid, the item was spawned into the world
    Dropped { slot: usize, item_index: usize, id: WorldItemId },
    /// Released over a slot, contents exchanged
    Swapped { from: usize, to: usize },
}

/// Result of pressing the pickup key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupOutcome {
    PickedUp { slot: usize, item_index: usize },
    InventoryFull,
    NothingDetected,
}

/// Inventory window and drag-and-drop state
pub struct UiState {
    pub show_inventory: bool,
    /// 0 = panel fully on screen, 1 = fully slid out
    pub window_animation: f32,
    /// Seconds since the last toggle, capped once it reaches 1
    pub animation_timer: f32,
    pub hovered_slot: Option<usize>,
    /// Slot being dragged
    pub drag_slot: Option<usize>,
    /// Offset from the cursor to the top-left of the grabbed slot
    pub drag_offset: Vec2,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            show_inventory: false,
            window_animation: 1.0,
            animation_timer: 0.0,
            hovered_slot: None,
            drag_slot: None,
            drag_offset: Vec2::ZERO,
        }
    }
}

impl UiState {
    pub fn is_dragging(&self) -> bool {
        self.drag_slot.is_some()
    }

    /// Whether the panel is on screen at all (including while sliding out)
    pub fn panel_visible(&self) -> bool {
        self.window_animation < 1.0
    }
}

pub struct GameState {
    pub inventory: Inventory,
    pub item_registry: ItemRegistry,
    pub world: World,
    pub player: Player,
    pub ui_state: UiState,
    pub detected: Option<DetectedItem>,
    pub pickup_range: f32,
    pub gravity: f32,
}

impl GameState {
    pub fn new(item_registry: ItemRegistry, world: World, player: Player) -> Self {
        Self {
            inventory: Inventory::new(),
            item_registry,
            world,
            player,
            ui_state: UiState::default(),
            detected: None,
            pickup_range: 2.5,
            gravity: 9.81,
        }
    }

    /// Build the registry, scene and player described by the config
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        let item_registry = ItemRegistry::from_definitions(config.items.clone())?;

        let mut world = World::new();
        for prop in &config.props {
            let [r, g, b, a] = prop.color;
            world.add_prop(
                Aabb::new(Vec3::from_array(prop.min), Vec3::from_array(prop.max)),
                Color::from_rgba(r, g, b, a),
            );
        }
        for spawn in &config.spawns {
            let index = item_registry
                .index_of(&spawn.item)
                .ok_or_else(|| ConfigError::UnknownSpawnItem(spawn.item.clone()))?;
            let half = item_registry.get(index).map_or(0.2, |def| def.half_size());
            world.spawn_item(index, Vec3::from_array(spawn.position), half);
        }

        let player = Player::new(&config.player, config.arena.half_extent);

        let mut state = Self::new(item_registry, world, player);
        state.pickup_range = config.pickup.range;
        state.gravity = config.physics.gravity;
        Ok(state)
    }

    /// Open or close the inventory. Returns true when it is now shown.
    pub fn toggle_inventory(&mut self) -> bool {
        let ui = &mut self.ui_state;
        ui.show_inventory = !ui.show_inventory;
        ui.animation_timer = 0.0;

        if !ui.show_inventory {
            // Closing mid-drag leaves the item where it was
            ui.drag_slot = None;
            ui.hovered_slot = None;
        }

        log::debug!("Inventory {}", if ui.show_inventory { "opened" } else { "closed" });
        ui.show_inventory
    }

    /// Per-frame window slide and player lock
    pub fn update(&mut self, delta: f32) {
        let ui = &mut self.ui_state;
        if ui.animation_timer < 1.0 {
            ui.animation_timer += delta;
        }

        let target = if ui.show_inventory { 0.0 } else { 1.0 };
        let t = clamp01(ui.animation_timer);
        ui.window_animation += (target - ui.window_animation) * t;

        self.player.can_move = !ui.show_inventory;
    }

    /// Walk the player, sliding along props instead of entering them
    pub fn move_player(&mut self, forward: f32, strafe: f32, dt: f32) {
        let before = self.player.position;
        self.player.apply_move(forward, strafe, dt);
        let after = self.player.position;

        // Already inside a prop (bad spawn): let the player walk out
        if !self.world.is_blocked(after, PLAYER_RADIUS) || self.world.is_blocked(before, PLAYER_RADIUS) {
            return;
        }

        let x_only = vec3(after.x, before.y, before.z);
        let z_only = vec3(before.x, before.y, after.z);
        self.player.position = if !self.world.is_blocked(x_only, PLAYER_RADIUS) {
            x_only
        } else if !self.world.is_blocked(z_only, PLAYER_RADIUS) {
            z_only
        } else {
            before
        };
    }

    /// Record the slot under the cursor. `slot_origin` is the slot's top-left corner.
    pub fn hover_slot(&mut self, slot: usize, slot_origin: Vec2, mouse: Vec2) {
        let ui = &mut self.ui_state;
        ui.hovered_slot = Some(slot);
        if !ui.is_dragging() {
            ui.drag_offset = slot_origin - mouse;
        }
    }

    pub fn clear_hover(&mut self) {
        self.ui_state.hovered_slot = None;
    }

    /// Start dragging the hovered slot. Only filled slots can be dragged.
    pub fn begin_drag(&mut self) -> bool {
        let ui = &mut self.ui_state;
        if !ui.show_inventory || ui.is_dragging() {
            return false;
        }
        match ui.hovered_slot {
            Some(slot) if self.inventory.is_occupied(slot) => {
                ui.drag_slot = Some(slot);
                true
            }
            _ => false,
        }
    }

    /// Finish a drag: swap with the hovered slot, or drop into the world when
    /// the cursor is outside the grid.
    pub fn release_drag(&mut self) -> Option<DragOutcome> {
        let from = self.ui_state.drag_slot.take()?;

        match self.ui_state.hovered_slot {
            Some(to) => {
                self.inventory.swap(from, to);
                Some(DragOutcome::Swapped { from, to })
            }
            None => {
                let item_index = self.inventory.take(from)?;
                let half = self.item_registry.get(item_index).map_or(0.2, |def| def.half_size());
                let position = self.world.drop_position(self.player.eye_position(), self.player.drop_point(), half);
                let id = self.world.spawn_item(item_index, position, half);
                log::info!("Dropped {} into the world", self.item_registry.display_name(item_index));
                Some(DragOutcome::Dropped { slot: from, item_index, id })
            }
        }
    }

    /// Fixed-step view raycast that keeps `detected` in sync with the crosshair
    pub fn detect(&mut self) {
        let ray = self.player.view_ray();
        let hit = self.world.raycast(&ray, self.pickup_range);

        let Some(HitTarget::Item(id)) = hit.map(|h| h.target) else {
            self.detected = None;
            return;
        };

        if self.detected.map(|d| d.id) == Some(id) {
            return;
        }

        self.detected = self
            .world
            .item(id)
            .filter(|item| item.pickable && self.item_registry.get(item.item_index).is_some())
            .map(|item| DetectedItem { id, item_index: item.item_index });
    }

    /// Move the detected item into the first empty slot
    pub fn try_pickup(&mut self) -> PickupOutcome {
        let Some(detected) = self.detected else {
            return PickupOutcome::NothingDetected;
        };

        let Some(slot) = self.inventory.add(detected.item_index) else {
            log::info!("Inventory full, cannot pick up {}", self.item_registry.display_name(detected.item_index));
            return PickupOutcome::InventoryFull;
        };

        self.world.despawn_item(detected.id);
        self.detected = None;
        log::info!("Picked up {} into slot {}", self.item_registry.display_name(detected.item_index), slot);
        PickupOutcome::PickedUp { slot, item_index: detected.item_index }
    }

    /// One physics tick: falling items, then detection
    pub fn fixed_update(&mut self, dt: f32) {
        self.world.step(dt, self.gravity);
        self.detect();
    }

    /// Display name of the detected item, if any
    pub fn detected_name(&self) -> Option<String> {
        self.detected.map(|d| self.item_registry.display_name(d.item_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerConfig;
    use crate::game::inventory::INVENTORY_SIZE;
    use crate::game::item_registry::ItemDefinition;

    /// Player at the origin looking down -Z with an eye height of 1.6
    fn state() -> GameState {
        let registry = ItemRegistry::from_definitions(vec![
            ItemDefinition::new("Apple"),
            ItemDefinition::new("Lantern"),
        ])
        .unwrap();
        let mut config = PlayerConfig::default();
        config.start = [0.0, 0.0, 0.0];
        GameState::new(registry, World::new(), Player::new(&config, 20.0))
    }

    fn spawn_in_view(state: &mut GameState, item_index: usize, distance: f32) -> WorldItemId {
        let id = state.world.spawn_item(item_index, vec3(0.0, 1.6, -distance), 0.2);
        state.world.step(0.0, 0.0);
        id
    }

    fn open(state: &mut GameState) {
        state.toggle_inventory();
        state.update(1.0);
    }

    #[test]
    fn test_toggle_and_animation() {
        let mut s = state();
        assert!(!s.ui_state.panel_visible());

        assert!(s.toggle_inventory());
        assert_eq!(s.ui_state.animation_timer, 0.0);
        s.update(0.25);
        assert!(s.ui_state.panel_visible());
        assert!(s.ui_state.window_animation > 0.0);
        assert!(!s.player.can_move);

        s.update(1.0);
        assert_eq!(s.ui_state.window_animation, 0.0);

        assert!(!s.toggle_inventory());
        s.update(0.5);
        assert!(s.player.can_move);
        assert!(s.ui_state.panel_visible());
        s.update(0.6);
        assert_eq!(s.ui_state.window_animation, 1.0);
        assert!(!s.ui_state.panel_visible());
    }

    #[test]
    fn test_timer_stops_growing() {
        let mut s = state();
        s.toggle_inventory();
        for _ in 0..10 {
            s.update(0.3);
        }
        assert!(s.ui_state.animation_timer < 1.3);
    }

    #[test]
    fn test_detect_item_in_range() {
        let mut s = state();
        let id = spawn_in_view(&mut s, 1, 2.0);
        s.detect();
        assert_eq!(s.detected, Some(DetectedItem { id, item_index: 1 }));
        assert_eq!(s.detected_name().as_deref(), Some("Lantern"));
    }

    #[test]
    fn test_detect_out_of_range_clears() {
        let mut s = state();
        spawn_in_view(&mut s, 0, 2.0);
        s.detect();
        assert!(s.detected.is_some());

        s.player.yaw = std::f32::consts::PI;
        s.detect();
        assert_eq!(s.detected, None);

        let mut far = state();
        spawn_in_view(&mut far, 0, 4.0);
        far.detect();
        assert_eq!(far.detected, None);
    }

    #[test]
    fn test_detect_ignores_unpickable_and_unknown() {
        let mut s = state();
        // Index 7 is not in the registry
        let id = spawn_in_view(&mut s, 7, 1.5);
        s.detect();
        assert_eq!(s.detected, None);
        s.world.despawn_item(id);

        let id = spawn_in_view(&mut s, 0, 1.5);
        if let Some(item) = s.world.items_mut().iter_mut().find(|item| item.id == id) {
            item.pickable = false;
        }
        s.detect();
        assert_eq!(s.detected, None);
    }

    #[test]
    fn test_prop_blocks_detection() {
        let mut s = state();
        spawn_in_view(&mut s, 0, 2.0);
        s.world.add_prop(Aabb::new(vec3(-1.0, 0.0, -1.2), vec3(1.0, 3.0, -1.0)), GRAY);
        s.detect();
        assert_eq!(s.detected, None);
    }

    #[test]
    fn test_detect_keeps_same_item_without_resolving() {
        let mut s = state();
        let id = spawn_in_view(&mut s, 0, 2.0);
        s.detect();
        assert_eq!(s.detected, Some(DetectedItem { id, item_index: 0 }));

        // Same world item hit again: the stored entry is kept as is
        if let Some(item) = s.world.items_mut().iter_mut().find(|item| item.id == id) {
            item.item_index = 1;
        }
        s.detect();
        assert_eq!(s.detected, Some(DetectedItem { id, item_index: 0 }));

        // A different item is resolved afresh
        s.world.despawn_item(id);
        let other = spawn_in_view(&mut s, 1, 1.5);
        s.detect();
        assert_eq!(s.detected, Some(DetectedItem { id: other, item_index: 1 }));
    }

    #[test]
    fn test_pickup_moves_item_into_inventory() {
        let mut s = state();
        let id = spawn_in_view(&mut s, 1, 2.0);
        s.detect();

        assert_eq!(s.try_pickup(), PickupOutcome::PickedUp { slot: 0, item_index: 1 });
        assert_eq!(s.inventory.get(0), Some(1));
        assert!(s.world.item(id).is_none());
        assert_eq!(s.detected, None);

        assert_eq!(s.try_pickup(), PickupOutcome::NothingDetected);
    }

    #[test]
    fn test_pickup_with_full_inventory() {
        let mut s = state();
        for _ in 0..INVENTORY_SIZE {
            s.inventory.add(0);
        }
        let id = spawn_in_view(&mut s, 1, 2.0);
        s.detect();

        assert_eq!(s.try_pickup(), PickupOutcome::InventoryFull);
        assert!(s.world.item(id).is_some());
        assert!(s.detected.is_some());
    }

    #[test]
    fn test_drag_requires_open_inventory_and_filled_slot() {
        let mut s = state();
        s.inventory.add(0);
        s.hover_slot(0, Vec2::ZERO, Vec2::ZERO);
        assert!(!s.begin_drag());

        open(&mut s);
        s.hover_slot(1, Vec2::ZERO, Vec2::ZERO);
        assert!(!s.begin_drag());

        s.hover_slot(0, vec2(10.0, 20.0), vec2(40.0, 50.0));
        assert!(s.begin_drag());
        assert_eq!(s.ui_state.drag_slot, Some(0));
        assert_eq!(s.ui_state.drag_offset, vec2(-30.0, -30.0));
    }

    #[test]
    fn test_drag_offset_frozen_while_dragging() {
        let mut s = state();
        s.inventory.add(0);
        open(&mut s);
        s.hover_slot(0, vec2(10.0, 10.0), vec2(15.0, 15.0));
        s.begin_drag();
        s.hover_slot(2, vec2(200.0, 10.0), vec2(230.0, 40.0));
        assert_eq!(s.ui_state.drag_offset, vec2(-5.0, -5.0));
        assert_eq!(s.ui_state.hovered_slot, Some(2));
    }

    #[test]
    fn test_release_over_slot_swaps() {
        let mut s = state();
        s.inventory.add(0);
        s.inventory.add(1);
        open(&mut s);

        s.hover_slot(0, Vec2::ZERO, Vec2::ZERO);
        s.begin_drag();
        s.hover_slot(1, Vec2::ZERO, Vec2::ZERO);
        assert_eq!(s.release_drag(), Some(DragOutcome::Swapped { from: 0, to: 1 }));
        assert_eq!(s.inventory.get(0), Some(1));
        assert_eq!(s.inventory.get(1), Some(0));
        assert!(!s.ui_state.is_dragging());

        // Onto an empty slot
        s.hover_slot(1, Vec2::ZERO, Vec2::ZERO);
        s.begin_drag();
        s.hover_slot(5, Vec2::ZERO, Vec2::ZERO);
        s.release_drag();
        assert_eq!(s.inventory.get(1), None);
        assert_eq!(s.inventory.get(5), Some(0));
    }

    #[test]
    fn test_release_onto_source_slot_is_noop() {
        let mut s = state();
        s.inventory.add(1);
        s.inventory.add(0);
        open(&mut s);

        s.hover_slot(0, Vec2::ZERO, Vec2::ZERO);
        s.begin_drag();
        assert_eq!(s.release_drag(), Some(DragOutcome::Swapped { from: 0, to: 0 }));
        assert_eq!(s.inventory.get(0), Some(1));
        assert_eq!(s.inventory.get(1), Some(0));
        assert!(s.world.items().is_empty());
        assert!(!s.ui_state.is_dragging());
    }

    #[test]
    fn test_drop_facing_wall_stays_reachable() {
        let mut s = state();
        let wall = Aabb::new(vec3(-6.0, 0.0, -4.0), vec3(6.0, 3.0, -3.6));
        s.world.add_prop(wall, GRAY);
        s.player.position = vec3(0.0, 0.0, -2.8);
        s.inventory.add(0);
        open(&mut s);

        s.hover_slot(0, Vec2::ZERO, Vec2::ZERO);
        s.begin_drag();
        s.clear_hover();
        let Some(DragOutcome::Dropped { id, .. }) = s.release_drag() else {
            panic!("expected a drop");
        };

        for _ in 0..200 {
            s.fixed_update(0.02);
        }
        let item = s.world.item(id).unwrap().clone();
        assert!(item.resting);
        assert!(item.aabb().min.z > wall.max.z);

        // Look at it and pick it up again
        s.toggle_inventory();
        s.update(1.0);
        let to_item = item.position - s.player.eye_position();
        s.player.pitch = to_item.y.atan2(-to_item.z);
        s.detect();
        assert_eq!(s.detected.map(|d| d.id), Some(id));
        assert!(matches!(s.try_pickup(), PickupOutcome::PickedUp { .. }));
    }

    #[test]
    fn test_move_player_stays_out_of_props() {
        let mut s = state();
        let table = Aabb::new(vec3(-1.0, 0.0, -2.0), vec3(1.0, 0.9, -1.0));
        s.world.add_prop(table, BROWN);

        // Straight at the table
        for _ in 0..100 {
            s.move_player(1.0, 0.0, 0.05);
        }
        assert!(s.player.position.z > table.max.z + PLAYER_RADIUS - 1e-4);
        assert!(!s.world.is_blocked(s.player.position, PLAYER_RADIUS));

        // Diagonal input slides along the edge
        let z = s.player.position.z;
        s.move_player(1.0, 1.0, 0.1);
        assert!(s.player.position.x > 0.0);
        assert_eq!(s.player.position.z, z);
    }

    #[test]
    fn test_release_outside_grid_drops_into_world() {
        let mut s = state();
        s.inventory.add(1);
        open(&mut s);

        s.hover_slot(0, Vec2::ZERO, Vec2::ZERO);
        s.begin_drag();
        s.clear_hover();

        let outcome = s.release_drag().unwrap();
        let DragOutcome::Dropped { slot, item_index, id } = outcome else {
            panic!("expected a drop, got {:?}", outcome);
        };
        assert_eq!((slot, item_index), (0, 1));
        assert_eq!(s.inventory.get(0), None);

        let item = s.world.item(id).unwrap();
        assert!((item.position - s.player.drop_point()).length() < 1e-5);
        assert!(item.pickable);
    }

    #[test]
    fn test_release_without_drag() {
        let mut s = state();
        assert_eq!(s.release_drag(), None);
    }

    #[test]
    fn test_closing_cancels_drag() {
        let mut s = state();
        s.inventory.add(0);
        open(&mut s);
        s.hover_slot(0, Vec2::ZERO, Vec2::ZERO);
        s.begin_drag();

        s.toggle_inventory();
        assert!(!s.ui_state.is_dragging());
        assert_eq!(s.ui_state.hovered_slot, None);
        assert_eq!(s.release_drag(), None);
        assert_eq!(s.inventory.get(0), Some(0));
        assert!(s.world.items().is_empty());
    }

    #[test]
    fn test_dropped_item_can_be_picked_up_again() {
        let mut s = state();
        s.inventory.add(0);
        open(&mut s);
        s.hover_slot(0, Vec2::ZERO, Vec2::ZERO);
        s.begin_drag();
        s.clear_hover();
        s.release_drag();

        s.toggle_inventory();
        s.update(1.0);
        s.detect();
        assert!(s.detected.is_some());
        assert!(matches!(s.try_pickup(), PickupOutcome::PickedUp { slot: 0, item_index: 0 }));
    }

    #[test]
    fn test_from_default_config() {
        let config = GameConfig::default();
        let s = GameState::from_config(&config).unwrap();
        assert_eq!(s.item_registry.len(), config.items.len());
        assert_eq!(s.world.items().len(), config.spawns.len());
        assert_eq!(s.world.props().len(), config.props.len());
        assert_eq!(s.pickup_range, 2.5);
        assert!(s.inventory.is_empty());
    }
}
