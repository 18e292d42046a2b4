//! Game configuration
//!
//! Numeric tunables injected as JSON by the host, one record per game post.
//! The core never touches storage: it receives the resolved JSON string and
//! every missing field falls back to the documented default here, so a
//! sparse or empty config still produces a playable game.

use serde::{Deserialize, Serialize};

use crate::sim::effect::EffectKind;
use crate::sim::personality::Personality;

/// Frog appearance and round setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrogConfig {
    pub base_color: [f32; 3],
    pub size: f32,
    /// Personalities the round generator draws from
    pub personalities: Vec<Personality>,
    /// Effects the round generator may apply at round start
    pub effects: Vec<EffectKind>,
}

impl Default for FrogConfig {
    fn default() -> Self {
        Self {
            base_color: [0.45, 0.78, 0.36],
            size: 1.0,
            personalities: vec![
                Personality::Plain,
                Personality::Cheerful,
                Personality::Lazy,
                Personality::Daredevil,
                Personality::Zen,
                Personality::Grumpy,
            ],
            effects: vec![
                EffectKind::Rainbow,
                EffectKind::Giant,
                EffectKind::Tiny,
                EffectKind::Bouncy,
                EffectKind::Glowing,
                EffectKind::Spinning,
                EffectKind::Wiggly,
            ],
        }
    }
}

/// Launch and flight tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    pub min_power: f32,
    pub max_power: f32,
    pub gravity: f32,
    pub bounce_decay: f32,
    pub max_bounces: u32,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            min_power: 4.0,
            max_power: 20.0,
            gravity: 9.8,
            bounce_decay: 0.55,
            max_bounces: 8,
        }
    }
}

/// Scoring weights and contact thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub distance_weight: f32,
    pub bounce_weight: f32,
    pub effect_bonus: f32,
    pub catch_points: u64,
    pub catch_radius: f32,
    pub catch_height_window: f32,
    pub slice_perfect_points: u64,
    pub slice_streak_bonus: u64,
    pub slice_chop_points: u64,
    /// Round-based games end after a landing; continuous games respawn
    pub round_based: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            distance_weight: 2.0,
            bounce_weight: 1.5,
            effect_bonus: 5.0,
            catch_points: 10,
            catch_radius: 1.2,
            catch_height_window: 1.5,
            slice_perfect_points: 25,
            slice_streak_bonus: 10,
            slice_chop_points: 10,
            round_based: true,
        }
    }
}

/// Camera parameters, passed through to the render layer untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub distance: f32,
    pub height: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            distance: 14.0,
            height: 6.0,
        }
    }
}

/// Background clear color, passed through to the render layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub color: [f32; 3],
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            color: [0.55, 0.78, 0.92],
        }
    }
}

/// Scene light, passed through to the render layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    pub color: [f32; 3],
    pub intensity: f32,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 0.95],
            intensity: 1.0,
        }
    }
}

/// Complete per-post configuration, immutable for a round.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub frog: FrogConfig,
    pub launch: LaunchConfig,
    pub scoring: ScoringConfig,
    pub camera: CameraConfig,
    pub background: BackgroundConfig,
    pub light: LightConfig,
}

impl GameConfig {
    /// Parse a config record. Missing fields take their defaults; only
    /// malformed JSON is an error.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse the host-provided record, falling back to defaults (with a
    /// warning) when the record is absent or malformed. Gameplay is never
    /// interrupted by a bad config.
    pub fn load_or_default(json: Option<&str>) -> Self {
        match json {
            Some(text) => match Self::from_json(text) {
                Ok(config) => config,
                Err(err) => {
                    log::warn!("malformed game config, using defaults: {err}");
                    Self::default()
                }
            },
            None => {
                log::info!("no game config provided, using defaults");
                Self::default()
            }
        }
    }
}
