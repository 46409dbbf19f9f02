//! Utility functions shared across the codebase

/// Convert an asset path to the correct format for the current platform.
/// On desktop: paths are relative to the working directory (e.g., "assets/ui/crosshair.png")
/// On Android: paths are relative to the APK's assets folder (e.g., "ui/crosshair.png")
pub fn asset_path(path: &str) -> String {
    #[cfg(target_os = "android")]
    {
        if let Some(stripped) = path.strip_prefix("assets/") {
            stripped.to_string()
        } else {
            path.to_string()
        }
    }
    #[cfg(not(target_os = "android"))]
    {
        path.to_string()
    }
}

/// Clamp to [0, 1]
pub fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_os = "android"))]
    #[test]
    fn test_asset_path_desktop_unchanged() {
        assert_eq!(asset_path("assets/config.toml"), "assets/config.toml");
        assert_eq!(asset_path("other/file.png"), "other/file.png");
    }

    #[test]
    fn test_clamp01() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(0.25), 0.25);
        assert_eq!(clamp01(3.0), 1.0);
    }
}
