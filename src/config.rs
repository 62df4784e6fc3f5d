//! Scene configuration parsed from environment variables.

use optics::consts::{
    PINHOLE_X, PINHOLE_Y, SCENE_HEIGHT, SCENE_WIDTH, SCREEN_X, SOURCE_MARGIN_Y, SOURCE_MIN_ANCHOR_GAP, SOURCE_MIN_GAP,
    SOURCE_MIN_X,
};
use optics::geometry::Point;
use optics::scene::{Scene, SceneBounds, SceneError};

/// Errors produced while building the scene from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but is not a number.
    #[error("invalid {var}: '{value}' is not a number")]
    InvalidNumber { var: &'static str, value: String },

    /// The values parse but describe an unusable scene.
    #[error("invalid scene: {0}")]
    Scene(#[from] SceneError),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    pub scene: Scene,
}

impl SceneConfig {
    /// Build a validated scene from environment variables.
    ///
    /// Optional (defaults in parentheses):
    /// - `PINHOLE_X` (400), `PINHOLE_Y` (250)
    /// - `SCREEN_X` (700)
    /// - `SCENE_WIDTH` (800), `SCENE_HEIGHT` (500)
    /// - `SOURCE_MIN_X` (50): leftmost source origin
    /// - `SOURCE_MIN_GAP` (50): minimum distance kept from the pinhole
    /// - `SOURCE_MIN_ANCHOR_GAP` (10): same, for every anchor of the shape
    /// - `SOURCE_MARGIN_Y` (100): margin kept from top and bottom
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`Self::from_env`] but reads variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let num = |var: &'static str, default: f64| parse_f64(var, lookup(var), default);
        let pinhole = Point::new(num("PINHOLE_X", PINHOLE_X)?, num("PINHOLE_Y", PINHOLE_Y)?);
        let screen_x = num("SCREEN_X", SCREEN_X)?;
        let bounds = SceneBounds {
            width: num("SCENE_WIDTH", SCENE_WIDTH)?,
            height: num("SCENE_HEIGHT", SCENE_HEIGHT)?,
            min_x: num("SOURCE_MIN_X", SOURCE_MIN_X)?,
            min_gap: num("SOURCE_MIN_GAP", SOURCE_MIN_GAP)?,
            min_anchor_gap: num("SOURCE_MIN_ANCHOR_GAP", SOURCE_MIN_ANCHOR_GAP)?,
            margin_y: num("SOURCE_MARGIN_Y", SOURCE_MARGIN_Y)?,
        };
        let scene = Scene::new(pinhole, screen_x, bounds)?;
        tracing::debug!(?scene, "scene configured");
        Ok(Self { scene })
    }
}

fn parse_f64(var: &'static str, raw: Option<String>, default: f64) -> Result<f64, ConfigError> {
    match raw {
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| ConfigError::InvalidNumber { var, value: raw }),
        None => Ok(default),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
