//! Game configuration and presets
//!
//! Configuration is fixed at startup. Zone bounds are written as fractions of
//! π so config files stay readable (`0.25` means a quarter of the dial).

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::consts::{DEFAULT_SPEED, MAX_TRIES};
use crate::error::ConfigError;
use crate::sim::{Category, Zone, ZoneTable};

/// Built-in dial layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Preset {
    /// Seven zones, red bullseye in the middle
    #[default]
    Classic,
    /// Three zones, narrow blue target, faster pointer
    Duo,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Classic, Preset::Duo];

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Classic => "Classic",
            Preset::Duo => "Duo",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Preset::Classic),
            "duo" | "blue" => Some(Preset::Duo),
            _ => None,
        }
    }

    /// Pointer speed multiplier for this preset
    pub fn speed(&self) -> f64 {
        match self {
            Preset::Classic => DEFAULT_SPEED,
            Preset::Duo => 1.5,
        }
    }

    pub fn zones(&self) -> Vec<ZoneConfig> {
        use Category::*;
        let bands: &[(f64, f64, Category)] = match self {
            Preset::Classic => &[
                (0.0, 0.25, Green),
                (0.25, 0.35, Yellow),
                (0.35, 0.45, Orange),
                (0.45, 0.55, Red),
                (0.55, 0.65, Orange),
                (0.65, 0.75, Yellow),
                (0.75, 1.0, Green),
            ],
            Preset::Duo => &[(0.0, 0.45, Green), (0.45, 0.55, Blue), (0.55, 1.0, Green)],
        };
        bands
            .iter()
            .map(|&(from, to, label)| ZoneConfig { from, to, label })
            .collect()
    }
}

/// One zone, bounds as fractions of π
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneConfig {
    pub from: f64,
    pub to: f64,
    pub label: Category,
}

impl From<ZoneConfig> for Zone {
    fn from(z: ZoneConfig) -> Self {
        Zone::from_pi_fractions(z.from, z.to, z.label)
    }
}

/// Startup configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Tries per game (at least 1)
    pub max_tries: u32,
    /// Pointer speed multiplier (positive)
    pub speed: f64,
    /// Zones in ascending order, covering the whole dial
    pub zones: Vec<ZoneConfig>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Classic)
    }
}

impl GameConfig {
    pub fn from_preset(preset: Preset) -> Self {
        Self {
            max_tries: MAX_TRIES,
            speed: preset.speed(),
            zones: preset.zones(),
        }
    }

    /// Look up a preset by name
    pub fn from_preset_name(name: &str) -> Result<Self, ConfigError> {
        Preset::from_str(name)
            .map(Self::from_preset)
            .ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))
    }

    /// Parse and validate a JSON config; missing fields take Classic defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_tries < 1 {
            return Err(ConfigError::MaxTries(self.max_tries));
        }
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(ConfigError::Speed(self.speed));
        }
        self.build_table().map(|_| ())
    }

    /// Convert the zone list into a validated table
    pub fn build_table(&self) -> Result<ZoneTable, ConfigError> {
        ZoneTable::new(self.zones.iter().copied().map(Zone::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for preset in Preset::ALL {
            let config = GameConfig::from_preset(preset);
            assert!(config.validate().is_ok(), "{} preset invalid", preset.as_str());
            assert_eq!(config.max_tries, MAX_TRIES);
        }
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!(Preset::from_str("Classic"), Some(Preset::Classic));
        assert_eq!(Preset::from_str("DUO"), Some(Preset::Duo));
        assert_eq!(Preset::from_str("hard"), None);
        assert!(matches!(
            GameConfig::from_preset_name("hard"),
            Err(ConfigError::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_duo_scores_blue_in_middle() {
        let table = GameConfig::from_preset(Preset::Duo).build_table().unwrap();
        assert_eq!(table.classify(std::f64::consts::FRAC_PI_2), Category::Blue);
        assert_eq!(table.classify(0.1), Category::Green);
        assert_eq!(table.fallback(), Category::Green);
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = GameConfig::from_json(r#"{ "max_tries": 5 }"#).unwrap();
        assert_eq!(config.max_tries, 5);
        assert_eq!(config.speed, DEFAULT_SPEED);
        assert_eq!(config.zones.len(), 7);
    }

    #[test]
    fn test_from_json_custom_zones() {
        let json = r#"{
            "speed": 2.0,
            "zones": [
                { "from": 0.0, "to": 0.5, "label": "Green" },
                { "from": 0.5, "to": 1.0, "label": "Red" }
            ]
        }"#;
        let config = GameConfig::from_json(json).unwrap();
        let table = config.build_table().unwrap();
        assert_eq!(table.zones().len(), 2);
        assert_eq!(table.classify(3.0), Category::Red);
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "max_tries": 0 }"#),
            Err(ConfigError::MaxTries(0))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "speed": -1.0 }"#),
            Err(ConfigError::Speed(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "zones": [] }"#),
            Err(ConfigError::EmptyZones)
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "zones": [{ "from": 0.0, "to": 1.0, "label": "Purple" }] }"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "max_tries": -3 }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_json_round_trip_keeps_preset() {
        let config = GameConfig::from_preset(Preset::Duo);
        let back = GameConfig::from_json(&config.to_json()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            GameConfig::load("/nonexistent/dial-stop.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
