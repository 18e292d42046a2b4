//! Frog Fling - a frog-launching physics arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (flight physics, slicing, scoring, game state)
//! - `config`: Data-driven tunables injected as JSON by the host
//! - `highscores`: Session leaderboard table

pub mod config;
pub mod highscores;
pub mod sim;

pub use config::GameConfig;
pub use highscores::HighScores;

use glam::Vec3;

/// Game tuning constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matching the host's frame pump)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Ground plane height; a settled frog never sits below this
    pub const GROUND_LEVEL: f32 = 0.0;
    /// Vertical speed below which a ground contact stops bouncing
    pub const BOUNCE_THRESHOLD: f32 = 0.5;

    /// Launch velocity scale applied to charged power on every axis
    pub const LAUNCH_SCALE: f32 = 0.45;
    /// Gravity tuning scale (config gravity is in nominal m/s^2)
    pub const GRAVITY_SCALE: f32 = 2.2;
    /// Displacement tuning scale for the integration step
    pub const MOVE_SCALE: f32 = 1.2;

    /// Charge meter growth per second while the button is held
    pub const CHARGE_RATE: f32 = 12.0;

    /// Spin rate while the spinning effect is active (radians/sec)
    pub const SPIN_RATE: f32 = 6.0;
    /// Bounce decay boost while the bouncy effect is active
    pub const BOUNCY_DECAY_BOOST: f32 = 1.3;
    /// Hard ceiling on effective bounce decay so flights always terminate
    pub const MAX_EFFECTIVE_DECAY: f32 = 0.95;

    /// Ticks between a landing and the round-end / respawn transition
    pub const LANDING_DISPLAY_DELAY_TICKS: u64 = 90;

    /// Accuracy window for a perfect slice
    pub const SLICE_ACCURACY_THRESHOLD: f32 = 0.2;
    /// How far the moving slice block travels from center before reversing
    pub const SLICE_TRAVEL_EXTENT: f32 = 3.0;
    /// Moving slice block speed (units/sec)
    pub const SLICE_SPEED: f32 = 2.4;
    /// Blocks thinner than this respawn as a fresh full-size pair
    pub const MIN_SLICE_SIZE: f32 = 0.1;

    /// Snack fall speed (units/sec)
    pub const SNACK_FALL_SPEED: f32 = 1.8;
    /// Height snacks respawn at
    pub const SNACK_SPAWN_HEIGHT: f32 = 8.0;
    /// Planar radius snacks respawn within
    pub const SNACK_SPAWN_RADIUS: f32 = 5.0;
}

/// Horizontal unit direction for an aim angle (XZ plane)
#[inline]
pub fn planar_from_angle(angle: f32) -> Vec3 {
    Vec3::new(angle.cos(), 0.0, angle.sin())
}

/// Distance between two points ignoring height
#[inline]
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    let dx = a.x - b.x;
    let dz = a.z - b.z;
    (dx * dx + dz * dz).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planar_from_angle() {
        let d = planar_from_angle(0.0);
        assert!((d.x - 1.0).abs() < 1e-6);
        assert!(d.y.abs() < 1e-6);
        assert!(d.z.abs() < 1e-6);

        let d = planar_from_angle(std::f32::consts::FRAC_PI_2);
        assert!(d.x.abs() < 1e-6);
        assert!((d.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_planar_distance_ignores_height() {
        let a = Vec3::new(0.0, 100.0, 0.0);
        let b = Vec3::new(3.0, -50.0, 4.0);
        assert!((planar_distance(a, b) - 5.0).abs() < 1e-6);
    }
}
