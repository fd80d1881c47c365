//! Game tuning configuration
//!
//! Static for the duration of a session. Malformed values are a programming
//! error and are rejected at construction time, never per frame.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration rejected at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config field `{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("health_max must be at least 1")]
    NoHealth,
    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Game tuning, immutable during a session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Paddle speed in keys mode (px/s)
    pub move_speed: f32,
    /// Item fall speed at score 0 (px/s)
    pub fall_base: f32,
    /// Fall speed increment per 10 points of score (px/s)
    pub fall_scale: f32,
    /// Health at the start of a session
    pub health_max: u8,
    /// Shrink applied to both collision half-extents (px), so the effective
    /// hitbox is smaller than the sprites
    pub catch_grace: f32,
    /// Sprite scale factors
    pub paddle_scale: f32,
    pub item_scale: f32,
    /// Logical arena dimensions (px)
    pub arena_w: f32,
    pub arena_h: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            move_speed: 520.0,
            fall_base: 220.0,
            fall_scale: 100.0,
            health_max: 3,
            catch_grace: 6.0,
            paddle_scale: 0.9,
            item_scale: 0.9,
            arena_w: 800.0,
            arena_h: 600.0,
        }
    }
}

impl Config {
    /// Fail-fast validation: every numeric constant must be positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("move_speed", self.move_speed),
            ("fall_base", self.fall_base),
            ("fall_scale", self.fall_scale),
            ("catch_grace", self.catch_grace),
            ("paddle_scale", self.paddle_scale),
            ("item_scale", self.item_scale),
            ("arena_w", self.arena_w),
            ("arena_h", self.arena_h),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if self.health_max == 0 {
            return Err(ConfigError::NoHealth);
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Clamp a paddle center x so the paddle never leaves the arena
    pub fn clamp_paddle_x(&self, x: f32, paddle_w: f32) -> f32 {
        let half_w = paddle_w / 2.0;
        x.clamp(half_w, self.arena_w - half_w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_non_positive_rejected() {
        let mut config = Config::default();
        config.fall_base = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { field: "fall_base", .. })
        ));

        let mut config = Config::default();
        config.move_speed = -1.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.health_max = 0;
        assert!(matches!(config.validate(), Err(ConfigError::NoHealth)));
    }

    #[test]
    fn test_from_json_partial() {
        let config = Config::from_json(r#"{"move_speed": 300.0, "health_max": 5}"#).unwrap();
        assert_eq!(config.move_speed, 300.0);
        assert_eq!(config.health_max, 5);
        // Unspecified fields keep their defaults
        assert_eq!(config.fall_base, 220.0);
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        assert!(Config::from_json(r#"{"arena_w": -100.0}"#).is_err());
        assert!(Config::from_json("not json").is_err());
    }

    #[test]
    fn test_clamp_paddle_x() {
        let config = Config::default();
        assert_eq!(config.clamp_paddle_x(-50.0, 72.0), 36.0);
        assert_eq!(config.clamp_paddle_x(10_000.0, 72.0), config.arena_w - 36.0);
        assert_eq!(config.clamp_paddle_x(400.0, 72.0), 400.0);
    }
}
