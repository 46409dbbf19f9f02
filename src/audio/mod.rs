use macroquad::audio::{load_sound, play_sound, PlaySoundParams, Sound};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use crate::util::asset_path;

/// Inventory feedback sounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sfx {
    /// Drag started
    ItemGrab,
    /// Drag released onto a slot
    ItemPut,
    Pickup,
    /// Dragged out of the panel into the world
    Drop,
}

impl Sfx {
    pub const ALL: [Sfx; 4] = [Sfx::ItemGrab, Sfx::ItemPut, Sfx::Pickup, Sfx::Drop];

    pub fn path(self) -> &'static str {
        match self {
            Sfx::ItemGrab => "assets/audio/sfx/item_grab.wav",
            Sfx::ItemPut => "assets/audio/sfx/item_put.wav",
            Sfx::Pickup => "assets/audio/sfx/pickup.wav",
            Sfx::Drop => "assets/audio/sfx/drop.wav",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AudioSettings {
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            sfx_volume: 0.7,
            muted: false,
        }
    }
}

impl AudioSettings {
    /// Volume to play effects at, or None while muted
    pub fn sfx_playback_volume(&self) -> Option<f32> {
        (!self.muted).then_some(self.sfx_volume)
    }
}

pub struct AudioManager {
    settings: AudioSettings,
    /// Preloaded sound effects
    sfx: HashMap<Sfx, Sound>,
}

impl AudioManager {
    pub async fn new() -> Self {
        let settings = load_settings();
        let mut manager = Self {
            settings,
            sfx: HashMap::new(),
        };
        manager.preload_sfx().await;
        manager
    }

    async fn preload_sfx(&mut self) {
        for sfx in Sfx::ALL {
            let path = sfx.path();
            match load_sound(&asset_path(path)).await {
                Ok(sound) => {
                    self.sfx.insert(sfx, sound);
                    log::debug!("Loaded SFX: {:?}", sfx);
                }
                Err(e) => {
                    log::warn!("Failed to load SFX '{}': {:?}", path, e);
                }
            }
        }
        log::info!("Loaded {} of {} SFX", self.sfx.len(), Sfx::ALL.len());
    }

    pub fn play(&self, sfx: Sfx) {
        // Missing sounds were already reported at load
        let Some(sound) = self.sfx.get(&sfx) else {
            return;
        };
        let Some(volume) = self.settings.sfx_playback_volume() else {
            return;
        };
        play_sound(sound, PlaySoundParams { looped: false, volume });
    }

    pub fn toggle_mute(&mut self) {
        self.settings.muted = !self.settings.muted;
        log::info!("Sound {}", if self.settings.muted { "muted" } else { "unmuted" });
        save_settings(&self.settings);
    }
}

// Platform-specific settings persistence

#[cfg(not(target_arch = "wasm32"))]
fn read_settings(path: &std::path::Path) -> AudioSettings {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("Invalid audio settings {}: {}", path.display(), e);
            AudioSettings::default()
        }),
        Err(_) => AudioSettings::default(),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_settings(path: &std::path::Path, settings: &AudioSettings) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(settings)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, contents)
}

#[cfg(all(not(target_arch = "wasm32"), not(target_os = "android")))]
fn settings_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|p| p.join("fps-inventory").join("audio.toml"))
}

#[cfg(target_os = "android")]
fn settings_path() -> Option<std::path::PathBuf> {
    // Relative to the app's internal storage
    Some(std::path::PathBuf::from("audio_settings.toml"))
}

#[cfg(not(target_arch = "wasm32"))]
fn load_settings() -> AudioSettings {
    settings_path().map(|path| read_settings(&path)).unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn save_settings(settings: &AudioSettings) {
    let Some(path) = settings_path() else {
        return;
    };
    if let Err(e) = write_settings(&path, settings) {
        log::warn!("Failed to save audio settings to {}: {}", path.display(), e);
    }
}

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "audio_settings";

#[cfg(target_arch = "wasm32")]
fn load_settings() -> AudioSettings {
    let Ok(storage) = quad_storage::STORAGE.lock() else {
        return AudioSettings::default();
    };
    storage
        .get(STORAGE_KEY)
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn save_settings(settings: &AudioSettings) {
    if let (Ok(json), Ok(mut storage)) = (serde_json::to_string(settings), quad_storage::STORAGE.lock()) {
        storage.set(STORAGE_KEY, &json);
    }
}
