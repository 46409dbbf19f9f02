use std::collections::HashMap;
use macroquad::prelude::*;
use serde::Deserialize;

use crate::config::ConfigError;

fn default_color() -> [u8; 4] {
    [200, 200, 200, 255]
}

fn default_size() -> f32 {
    0.4
}

/// Definition of an item that can exist in the world and in the inventory
#[derive(Debug, Clone, Deserialize)]
pub struct ItemDefinition {
    /// Unique name, referenced by scene spawns
    pub name: String,
    /// Preview texture path shown in the inventory
    #[serde(default)]
    pub preview: Option<String>,
    /// Tint used for the world cube
    #[serde(default = "default_color")]
    pub color: [u8; 4],
    /// Edge length of the world cube
    #[serde(default = "default_size")]
    pub size: f32,
}

impl ItemDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            preview: None,
            color: default_color(),
            size: default_size(),
        }
    }

    pub fn world_color(&self) -> Color {
        let [r, g, b, a] = self.color;
        Color::from_rgba(r, g, b, a)
    }

    pub fn half_size(&self) -> f32 {
        self.size / 2.0
    }
}

/// The available items, in catalog order. Inventory slots store indices into this list.
#[derive(Debug, Clone, Default)]
pub struct ItemRegistry {
    items: Vec<ItemDefinition>,
    by_name: HashMap<String, usize>,
}

impl ItemRegistry {
    /// Build the registry, rejecting duplicate names
    pub fn from_definitions(items: Vec<ItemDefinition>) -> Result<Self, ConfigError> {
        let mut by_name = HashMap::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            if by_name.insert(item.name.clone(), index).is_some() {
                return Err(ConfigError::DuplicateItem(item.name.clone()));
            }
        }
        log::info!("Loaded {} item definitions", items.len());
        Ok(Self { items, by_name })
    }

    pub fn get(&self, index: usize) -> Option<&ItemDefinition> {
        self.items.get(index)
    }

    /// Catalog index of the item with this name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Display name for a catalog index
    pub fn display_name(&self, index: usize) -> String {
        self.items
            .get(index)
            .map(|def| def.name.clone())
            .unwrap_or_else(|| format!("Unknown (#{})", index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ItemRegistry {
        ItemRegistry::from_definitions(vec![
            ItemDefinition::new("Apple"),
            ItemDefinition::new("Lantern"),
            ItemDefinition::new("Key"),
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup_by_name() {
        let reg = registry();
        assert_eq!(reg.len(), 3);
        assert_eq!(reg.index_of("Lantern"), Some(1));
        assert_eq!(reg.index_of("lantern"), None);
        assert_eq!(reg.get(2).map(|d| d.name.as_str()), Some("Key"));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = ItemRegistry::from_definitions(vec![
            ItemDefinition::new("Apple"),
            ItemDefinition::new("Apple"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateItem(name) if name == "Apple"));
    }

    #[test]
    fn test_display_name_fallback() {
        let reg = registry();
        assert_eq!(reg.display_name(0), "Apple");
        assert_eq!(reg.display_name(17), "Unknown (#17)");
    }

    #[test]
    fn test_world_color() {
        let mut def = ItemDefinition::new("Gem");
        def.color = [255, 0, 0, 255];
        let color = def.world_color();
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert_eq!(def.half_size(), 0.2);
    }
}
