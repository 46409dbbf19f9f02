//! Game configuration loaded from `assets/config.toml`

use std::path::Path;
use serde::Deserialize;
use thiserror::Error;

use crate::game::item_registry::ItemDefinition;

pub const CONFIG_PATH: &str = "assets/config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("duplicate item name '{0}'")]
    DuplicateItem(String),
    #[error("spawn refers to unknown item '{0}'")]
    UnknownSpawnItem(String),
    #[error("config defines no items")]
    NoItems,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PickupConfig {
    /// Maximum distance of the detection ray
    pub range: f32,
}

impl Default for PickupConfig {
    fn default() -> Self {
        Self { range: 2.5 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    /// Fixed steps per second
    pub fixed_hz: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            fixed_hz: 50.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub move_speed: f32,
    /// Radians per pixel of mouse movement
    pub mouse_sensitivity: f32,
    pub eye_height: f32,
    pub start: [f32; 3],
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: 4.0,
            mouse_sensitivity: 0.003,
            eye_height: 1.6,
            start: [0.0, 0.0, 4.0],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Half the side length of the square play area
    pub half_extent: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self { half_extent: 12.0 }
    }
}

/// An item placed in the scene at startup
#[derive(Debug, Clone, Deserialize)]
pub struct SpawnConfig {
    pub item: String,
    pub position: [f32; 3],
}

/// A static box collider
#[derive(Debug, Clone, Deserialize)]
pub struct PropConfig {
    pub min: [f32; 3],
    pub max: [f32; 3],
    #[serde(default = "default_prop_color")]
    pub color: [u8; 4],
}

fn default_prop_color() -> [u8; 4] {
    [110, 100, 90, 255]
}

/// Sections left out of the file use their defaults; lists default to empty
#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub pickup: PickupConfig,
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub arena: ArenaConfig,
    #[serde(default)]
    pub items: Vec<ItemDefinition>,
    #[serde(default)]
    pub spawns: Vec<SpawnConfig>,
    #[serde(default)]
    pub props: Vec<PropConfig>,
}

impl Default for GameConfig {
    fn default() -> Self {
        let mut apple = ItemDefinition::new("Apple");
        apple.color = [200, 40, 40, 255];
        apple.size = 0.3;
        let mut lantern = ItemDefinition::new("Lantern");
        lantern.color = [240, 200, 80, 255];
        let mut key = ItemDefinition::new("Key");
        key.color = [180, 180, 200, 255];
        key.size = 0.25;

        Self {
            pickup: PickupConfig::default(),
            physics: PhysicsConfig::default(),
            player: PlayerConfig::default(),
            arena: ArenaConfig::default(),
            items: vec![apple, lantern, key],
            spawns: vec![
                SpawnConfig { item: "Apple".to_string(), position: [0.0, 1.5, 0.0] },
                SpawnConfig { item: "Lantern".to_string(), position: [1.5, 1.5, 0.0] },
                SpawnConfig { item: "Key".to_string(), position: [-1.5, 1.5, 0.0] },
            ],
            props: vec![
                // Table the items start on
                PropConfig {
                    min: [-2.5, 0.0, -0.5],
                    max: [2.5, 0.9, 0.5],
                    color: [120, 85, 55, 255],
                },
                PropConfig {
                    min: [-6.0, 0.0, -4.0],
                    max: [6.0, 3.0, -3.6],
                    color: default_prop_color(),
                },
            ],
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load the config, falling back to built-in defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from_path(path) {
            Ok(config) => {
                log::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                log::warn!("Using default config ({:?}): {}", path, e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.items.is_empty() {
            return Err(ConfigError::NoItems);
        }
        for (i, item) in self.items.iter().enumerate() {
            if self.items[..i].iter().any(|other| other.name == item.name) {
                return Err(ConfigError::DuplicateItem(item.name.clone()));
            }
        }
        for spawn in &self.spawns {
            if !self.items.iter().any(|item| item.name == spawn.item) {
                return Err(ConfigError::UnknownSpawnItem(spawn.item.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
[pickup]
range = 3.0

[player]
move_speed = 6.0

[[items]]
name = "Apple"
preview = "assets/previews/apple.png"
color = [200, 40, 40, 255]

[[items]]
name = "Torch"

[[spawns]]
item = "Torch"
position = [0.0, 1.0, -2.0]

[[props]]
min = [-1.0, 0.0, -1.0]
max = [1.0, 1.0, 1.0]
"#;

    #[test]
    fn test_parse_sample() {
        let config = GameConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.pickup.range, 3.0);
        assert_eq!(config.player.move_speed, 6.0);
        // Unset fields keep their defaults
        assert_eq!(config.player.eye_height, 1.6);
        assert_eq!(config.physics.fixed_hz, 50.0);
        assert_eq!(config.items.len(), 2);
        assert_eq!(config.items[0].preview.as_deref(), Some("assets/previews/apple.png"));
        assert_eq!(config.items[1].preview, None);
        assert_eq!(config.items[1].size, 0.4);
        assert_eq!(config.spawns[0].item, "Torch");
        assert_eq!(config.props[0].color, [110, 100, 90, 255]);
    }

    #[test]
    fn test_duplicate_item_names() {
        let content = r#"
[[items]]
name = "Apple"

[[items]]
name = "Apple"
"#;
        let err = GameConfig::from_toml_str(content).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateItem(name) if name == "Apple"));
    }

    #[test]
    fn test_unknown_spawn_item() {
        let content = r#"
[[items]]
name = "Apple"

[[spawns]]
item = "Pear"
position = [0.0, 0.0, 0.0]
"#;
        let err = GameConfig::from_toml_str(content).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownSpawnItem(name) if name == "Pear"));
    }

    #[test]
    fn test_no_items() {
        let err = GameConfig::from_toml_str("[pickup]\nrange = 1.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::NoItems));
    }

    #[test]
    fn test_parse_error() {
        let err = GameConfig::from_toml_str("[pickup\nrange = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pickup.range, 2.5);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let config = GameConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.items[1].name, "Torch");
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(matches!(GameConfig::load_from_path(&path), Err(ConfigError::Io(_))));

        let config = GameConfig::load_or_default(&path);
        assert_eq!(config.items.len(), GameConfig::default().items.len());
    }
}
