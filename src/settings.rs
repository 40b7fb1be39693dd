//! Game settings and preferences
//!
//! Persisted separately from the best score, as JSON under its own key.

use serde::{Deserialize, Serialize};

use crate::consts::CLOUD_COUNT;
use crate::persistence::Storage;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Maximum live particles for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 100,
            QualityPreset::Medium => 500,
            QualityPreset::High => 2000,
        }
    }

    /// Number of background clouds
    pub fn cloud_count(&self) -> usize {
        match self {
            QualityPreset::Low => 0,
            QualityPreset::Medium | QualityPreset::High => CLOUD_COUNT,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Jump and coin particle bursts
    pub particles: bool,
    /// Drifting background clouds
    pub clouds: bool,
    /// Spawn speed power-ups alongside coins
    pub power_ups: bool,
    /// Show the HUD score/coin/best readouts
    pub show_hud: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            particles: true,
            clouds: true,
            power_ups: true,
            show_hud: true,
        }
    }
}

impl Settings {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "climb_high_settings";

    /// Create settings from a quality preset (applies preset defaults)
    pub fn from_preset(preset: QualityPreset) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    /// Apply a quality preset (updates quality-dependent settings)
    pub fn apply_preset(&mut self, preset: QualityPreset) {
        self.quality = preset;
        if preset == QualityPreset::Low {
            self.clouds = false;
        }
    }

    /// Effective particle count cap
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.quality.max_particles()
        }
    }

    /// Effective cloud count
    pub fn cloud_count(&self) -> usize {
        if !self.clouds {
            0
        } else {
            self.quality.cloud_count()
        }
    }

    /// Load settings, falling back to defaults
    pub fn load(storage: &dyn Storage) -> Self {
        if let Some(json) = storage.get(Self::STORAGE_KEY) {
            match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    return settings;
                }
                Err(e) => log::warn!("Ignoring unreadable settings: {}", e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings (best effort)
    pub fn save(&self, storage: &mut dyn Storage) {
        let result = serde_json::to_string(self)
            .map_err(anyhow::Error::from)
            .and_then(|json| storage.set(Self::STORAGE_KEY, &json));
        match result {
            Ok(()) => log::info!("Settings saved"),
            Err(e) => log::warn!("Could not save settings: {e:#}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;

    #[test]
    fn test_preset_parse() {
        assert_eq!(QualityPreset::parse("LOW"), Some(QualityPreset::Low));
        assert_eq!(QualityPreset::parse("med"), Some(QualityPreset::Medium));
        assert_eq!(QualityPreset::parse("ultra"), None);
        assert_eq!(QualityPreset::High.as_str(), "High");
    }

    #[test]
    fn test_particles_toggle_zeroes_cap() {
        let mut s = Settings::default();
        assert_eq!(s.max_particles(), 500);
        s.particles = false;
        assert_eq!(s.max_particles(), 0);
    }

    #[test]
    fn test_low_preset_drops_clouds() {
        let s = Settings::from_preset(QualityPreset::Low);
        assert_eq!(s.cloud_count(), 0);
        assert_eq!(s.max_particles(), 100);
        assert_eq!(Settings::default().cloud_count(), CLOUD_COUNT);
    }

    #[test]
    fn test_save_load_round_trip() {
        let mut storage = MemoryStorage::new();
        let mut s = Settings::from_preset(QualityPreset::High);
        s.power_ups = false;
        s.save(&mut storage);
        assert_eq!(Settings::load(&storage), s);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let mut storage = MemoryStorage::new();
        storage.set(Settings::STORAGE_KEY, r#"{"particles":false}"#).unwrap();
        let s = Settings::load(&storage);
        assert!(!s.particles);
        assert!(s.clouds);
        assert_eq!(s.quality, QualityPreset::Medium);
    }

    #[test]
    fn test_garbage_falls_back_to_default() {
        let mut storage = MemoryStorage::new();
        storage.set(Settings::STORAGE_KEY, "][").unwrap();
        assert_eq!(Settings::load(&storage), Settings::default());
    }
}
