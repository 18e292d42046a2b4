//! Contact tests and score formulas
//!
//! Pure functions of simulation state: the tick coordinator decides what to
//! do with the answers, and all accumulation goes through `ScoreState`.

use glam::Vec3;

use crate::config::ScoringConfig;
use crate::planar_distance;

/// "Drop into container" contact: the falling body must be planar-close to
/// the catcher and sitting inside the height window above it. A body at or
/// below the catcher's mouth does not count.
pub fn catch_contact(
    falling: Vec3,
    catcher: Vec3,
    radius_threshold: f32,
    height_window: f32,
) -> bool {
    let height_diff = falling.y - catcher.y;
    planar_distance(falling, catcher) < radius_threshold
        && height_diff > 0.0
        && height_diff < height_window
}

/// Landing score for the launch/bounce variant.
///
/// `floor(distance * distance_weight + personality_bonus +
/// bounces * bounce_weight + effect bonus when one is active)`, clamped at
/// zero so a degenerate flight can never subtract score.
pub fn landing_score(
    planar_dist: f32,
    personality_bonus: f32,
    bounce_count: u32,
    effect_active: bool,
    scoring: &ScoringConfig,
) -> u64 {
    let effect_bonus = if effect_active {
        scoring.effect_bonus
    } else {
        0.0
    };
    let raw = planar_dist * scoring.distance_weight
        + personality_bonus
        + bounce_count as f32 * scoring.bounce_weight
        + effect_bonus;
    if !raw.is_finite() {
        return 0;
    }
    raw.max(0.0).floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catch_requires_planar_proximity() {
        let catcher = Vec3::ZERO;
        assert!(catch_contact(Vec3::new(0.5, 1.0, 0.0), catcher, 1.2, 1.5));
        assert!(!catch_contact(Vec3::new(3.0, 1.0, 0.0), catcher, 1.2, 1.5));
    }

    #[test]
    fn test_catch_requires_height_window() {
        let catcher = Vec3::ZERO;
        // At the same height: no catch
        assert!(!catch_contact(Vec3::new(0.2, 0.0, 0.0), catcher, 1.2, 1.5));
        // Below: no catch
        assert!(!catch_contact(Vec3::new(0.2, -0.5, 0.0), catcher, 1.2, 1.5));
        // Too far above: no catch
        assert!(!catch_contact(Vec3::new(0.2, 2.0, 0.0), catcher, 1.2, 1.5));
        // Inside the window: catch
        assert!(catch_contact(Vec3::new(0.2, 0.8, 0.0), catcher, 1.2, 1.5));
    }

    #[test]
    fn test_landing_score_formula() {
        let scoring = ScoringConfig::default();
        // distance 10 * weight 2 + bonus 3 + 2 bounces * 1.5 + no effect
        let score = landing_score(10.0, 3.0, 2, false, &scoring);
        let expected = (10.0 * scoring.distance_weight
            + 3.0
            + 2.0 * scoring.bounce_weight)
            .floor() as u64;
        assert_eq!(score, expected);
    }

    #[test]
    fn test_landing_score_effect_bonus_only_when_active() {
        let scoring = ScoringConfig::default();
        let without = landing_score(5.0, 0.0, 0, false, &scoring);
        let with = landing_score(5.0, 0.0, 0, true, &scoring);
        assert_eq!(with, without + scoring.effect_bonus as u64);
    }

    #[test]
    fn test_landing_score_never_negative_or_nan() {
        let scoring = ScoringConfig::default();
        assert_eq!(landing_score(f32::NAN, 0.0, 0, false, &scoring), 0);
        let mut punitive = ScoringConfig::default();
        punitive.distance_weight = -100.0;
        assert_eq!(landing_score(10.0, 0.0, 0, false, &punitive), 0);
    }
}
