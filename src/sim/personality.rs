//! Frog personalities
//!
//! Static reference data selected once per round. Dispatch is an exhaustive
//! match so adding a variant without its tuning fails to compile.

use serde::{Deserialize, Serialize};

/// Personality assigned to the frog for a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    #[default]
    Plain,
    Cheerful,
    Lazy,
    Daredevil,
    Zen,
    Grumpy,
}

impl Personality {
    /// Multiplier applied to launch velocity.
    pub fn launch_multiplier(&self) -> f32 {
        match self {
            Personality::Plain => 1.0,
            Personality::Cheerful => 1.1,
            Personality::Lazy => 0.85,
            Personality::Daredevil => 1.3,
            Personality::Zen => 1.0,
            Personality::Grumpy => 0.95,
        }
    }

    /// Flat bonus folded into the landing score.
    pub fn score_bonus(&self) -> f32 {
        match self {
            Personality::Plain => 0.0,
            Personality::Cheerful => 2.0,
            Personality::Lazy => 4.0,
            Personality::Daredevil => 1.0,
            Personality::Zen => 3.0,
            Personality::Grumpy => 2.0,
        }
    }

    /// Tint the renderer applies over the configured base color.
    pub fn color(&self) -> [f32; 3] {
        match self {
            Personality::Plain => [0.45, 0.78, 0.36],
            Personality::Cheerful => [0.95, 0.80, 0.30],
            Personality::Lazy => [0.55, 0.62, 0.85],
            Personality::Daredevil => [0.90, 0.35, 0.30],
            Personality::Zen => [0.60, 0.85, 0.80],
            Personality::Grumpy => [0.50, 0.45, 0.40],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_multipliers_are_positive() {
        for p in [
            Personality::Plain,
            Personality::Cheerful,
            Personality::Lazy,
            Personality::Daredevil,
            Personality::Zen,
            Personality::Grumpy,
        ] {
            assert!(p.launch_multiplier() > 0.0);
            assert!(p.score_bonus() >= 0.0);
        }
    }

    #[test]
    fn test_personality_deserializes_from_lowercase() {
        let p: Personality = serde_json::from_str("\"daredevil\"").unwrap();
        assert_eq!(p, Personality::Daredevil);
    }
}
