//! Tunables for the map-select button.
//!
//! Values are set once by the host before the button is spawned; the button
//! copies them and never reads this resource again.
use bevy::prelude::*;
use serde::Deserialize;

const DEFAULT_CONFIG_JSON: &str = include_str!("./map_select_button.json");

#[derive(Resource, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct MapSelectButtonConfig {
    /// Upper bound for hover growth.
    pub max_scale: f32,
    /// Per-frame scale increment and decrement.
    pub speed: f32,
    /// While set, pointer handlers are no-ops.
    pub locked: bool,
}

impl Default for MapSelectButtonConfig {
    fn default() -> Self {
        Self {
            max_scale: 1.1,
            speed: 0.01,
            locked: true,
        }
    }
}

impl MapSelectButtonConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn embedded() -> Self {
        match Self::from_json(DEFAULT_CONFIG_JSON) {
            Ok(config) => {
                info!("Loaded map select button config: {config:?}");
                config
            }
            Err(error) => {
                warn!("Failed to parse embedded map select button config, using defaults: {error}");
                Self::default()
            }
        }
    }

    pub const fn unlocked(mut self) -> Self {
        self.locked = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        assert_eq!(MapSelectButtonConfig::embedded(), MapSelectButtonConfig::default());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = MapSelectButtonConfig::from_json(r#"{ "locked": false }"#)
            .expect("partial config should parse");

        assert!(!config.locked);
        assert_eq!(config.max_scale, 1.1);
        assert_eq!(config.speed, 0.01);
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(MapSelectButtonConfig::from_json("{ max_scale: }").is_err());
        assert!(MapSelectButtonConfig::from_json(r#"{ "speed": "fast" }"#).is_err());
    }
}
