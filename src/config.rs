//! Game tuning loaded from JSON, falling back to the built-in constants.

use crate::constants::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or validating a [`GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tunable game parameters. Missing JSON fields take their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// X coordinate of each wire, left to right.
    pub wires: Vec<f64>,
    pub field_width: f64,
    pub field_height: f64,
    pub bird_width: f64,
    pub bird_height: f64,
    pub bug_width: f64,
    pub bug_height: f64,
    pub bug_bottom_margin: f64,
    /// Units per frame a bird falls at the start of a round.
    pub initial_speed: f64,
    pub speed_increment: f64,
    pub speed_milestone: u32,
    pub near_miss_distance: f64,
    pub collision_tolerance: f64,
    pub spawn_interval_ms: u64,
    pub frame_interval_ms: u64,
    pub music_volume: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            wires: WIRE_POSITIONS.to_vec(),
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            bug_width: BUG_WIDTH,
            bug_height: BUG_HEIGHT,
            bug_bottom_margin: BUG_BOTTOM_MARGIN,
            initial_speed: INITIAL_BIRD_SPEED,
            speed_increment: SPEED_INCREMENT,
            speed_milestone: SPEED_MILESTONE,
            near_miss_distance: NEAR_MISS_DISTANCE,
            collision_tolerance: COLLISION_TOLERANCE,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            frame_interval_ms: FRAME_INTERVAL_MS,
            music_volume: MUSIC_VOLUME,
        }
    }
}

impl GameConfig {
    /// Location of the per-user config file, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "wirebug").map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Parse and validate a JSON document.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file that must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Load `explicit` if given, otherwise the default location when present,
    /// otherwise the built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.wires.is_empty() {
            return Err(ConfigError::Invalid("at least one wire is required".into()));
        }
        if self.wires.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::Invalid(
                "wire positions must be strictly increasing".into(),
            ));
        }
        if self
            .wires
            .iter()
            .any(|&x| !(0.0..=self.field_width).contains(&x))
        {
            return Err(ConfigError::Invalid(
                "wire positions must lie inside the field".into(),
            ));
        }

        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("bug_width", self.bug_width),
            ("bug_height", self.bug_height),
            ("initial_speed", self.initial_speed),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be positive")));
            }
        }

        if self.speed_increment < 0.0 {
            return Err(ConfigError::Invalid(
                "speed_increment must not be negative".into(),
            ));
        }
        if self.speed_milestone == 0 {
            return Err(ConfigError::Invalid("speed_milestone must be at least 1".into()));
        }
        if self.spawn_interval_ms == 0 || self.frame_interval_ms == 0 {
            return Err(ConfigError::Invalid("intervals must be non-zero".into()));
        }
        if self.bug_y() < 0.0 {
            return Err(ConfigError::Invalid(
                "bug does not fit inside the field".into(),
            ));
        }
        Ok(())
    }

    pub fn wire_count(&self) -> usize {
        self.wires.len()
    }

    /// X coordinate of wire `index`, clamped to the last wire.
    pub fn wire_x(&self, index: usize) -> f64 {
        let last = self.wires.len().saturating_sub(1);
        self.wires.get(index.min(last)).copied().unwrap_or(0.0)
    }

    /// Wire the bug starts on.
    pub fn middle_wire(&self) -> usize {
        self.wires.len() / 2
    }

    /// Top edge of the bug, fixed for the whole round.
    pub fn bug_y(&self) -> f64 {
        self.field_height - self.bug_height - self.bug_bottom_margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.wire_count(), 4);
        assert_eq!(config.middle_wire(), 2);
        assert!((config.bug_y() - 530.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "initial_speed": 5.5 }"#).unwrap();
        assert!((config.initial_speed - 5.5).abs() < f64::EPSILON);
        assert_eq!(config.wires, WIRE_POSITIONS.to_vec());
        assert_eq!(config.spawn_interval_ms, SPAWN_INTERVAL_MS);
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_empty_wires_rejected() {
        let err = GameConfig::from_json(r#"{ "wires": [] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_unsorted_wires_rejected() {
        let err = GameConfig::from_json(r#"{ "wires": [300, 100] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_non_positive_speed_rejected() {
        let err = GameConfig::from_json(r#"{ "initial_speed": 0 }"#).unwrap_err();
        assert!(err.to_string().contains("initial_speed"));
    }

    #[test]
    fn test_wire_x_clamps_index() {
        let config = GameConfig::default();
        assert!((config.wire_x(0) - 100.0).abs() < f64::EPSILON);
        assert!((config.wire_x(99) - 400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let path = std::env::temp_dir().join("wirebug-definitely-missing-config.json");
        let err = GameConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("wirebug-definitely-missing-config.json"));
    }
}
