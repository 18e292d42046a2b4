//! Timed effect modifiers
//!
//! An effect maps a name to numeric multipliers on the frog (scale, bounce,
//! spin, color cycling) and auto-reverts after its duration. At most one
//! effect is active per entity: applying a new one supersedes the old and
//! invalidates its pending revert, so a stale revert can never clobber a
//! newer effect. Reverts fire from the coordinator's scheduled-event queue,
//! never from free-running timers.

use serde::{Deserialize, Serialize};

use super::frog::Frog;

/// Named effect kinds. Physical kinds (`Bouncy`, `Spinning`) only flag state
/// consumed by the integrator; they never write velocity directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectKind {
    #[default]
    None,
    Normal,
    Rainbow,
    Giant,
    Tiny,
    Bouncy,
    Glowing,
    Spinning,
    Wiggly,
}

impl EffectKind {
    /// Scale multiplier for a given magnitude; 1.0 for non-scaling kinds.
    pub fn scale_multiplier(&self, magnitude: f32) -> f32 {
        match self {
            EffectKind::Giant => 1.0 + 0.8 * magnitude,
            EffectKind::Tiny => (1.0 - 0.45 * magnitude).max(0.2),
            EffectKind::None
            | EffectKind::Normal
            | EffectKind::Rainbow
            | EffectKind::Bouncy
            | EffectKind::Glowing
            | EffectKind::Spinning
            | EffectKind::Wiggly => 1.0,
        }
    }

    /// Whether this kind clears the active effect instead of setting one.
    pub fn is_baseline(&self) -> bool {
        matches!(self, EffectKind::None | EffectKind::Normal)
    }
}

/// A requested effect application.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub kind: EffectKind,
    pub magnitude: f32,
    pub duration_ticks: u32,
}

/// The effect currently applied to the frog.
///
/// `token` identifies this particular application; a scheduled revert only
/// fires if its token still matches, which is how supersession cancels the
/// old revert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveEffect {
    pub kind: EffectKind,
    pub magnitude: f32,
    pub token: u64,
}

/// Apply an effect to the frog, replacing whatever was active.
///
/// Returns the token of the new application (or `None` for baseline kinds,
/// which just revert). The caller schedules the matching revert event.
pub fn apply(
    frog: &mut Frog,
    base_size: f32,
    active: &mut Option<ActiveEffect>,
    effect: Effect,
    token: u64,
) -> Option<u64> {
    // Reset to baseline first so effects compose by replacement, not stacking
    revert(frog, base_size, active);

    if effect.kind.is_baseline() {
        return None;
    }

    let magnitude = if effect.magnitude.is_finite() {
        effect.magnitude.clamp(0.0, 2.0)
    } else {
        1.0
    };

    frog.scale = glam::Vec3::splat(base_size * effect.kind.scale_multiplier(magnitude));
    match effect.kind {
        EffectKind::Bouncy => frog.bouncy = true,
        EffectKind::Spinning => frog.spinning = true,
        _ => {}
    }

    *active = Some(ActiveEffect {
        kind: effect.kind,
        magnitude,
        token,
    });
    Some(token)
}

/// Revert the frog to its baseline multipliers and clear the active effect.
pub fn revert(frog: &mut Frog, base_size: f32, active: &mut Option<ActiveEffect>) {
    frog.scale = glam::Vec3::splat(base_size);
    frog.bouncy = false;
    frog.spinning = false;
    *active = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effect(kind: EffectKind) -> Effect {
        Effect {
            kind,
            magnitude: 1.0,
            duration_ticks: 120,
        }
    }

    #[test]
    fn test_giant_scales_up_and_reverts() {
        let mut frog = Frog::new(1.0);
        let mut active = None;

        apply(&mut frog, 1.0, &mut active, effect(EffectKind::Giant), 1);
        assert!(frog.scale.x > 1.0);
        assert_eq!(active.unwrap().kind, EffectKind::Giant);

        revert(&mut frog, 1.0, &mut active);
        assert_eq!(frog.scale.x, 1.0);
        assert!(active.is_none());
    }

    #[test]
    fn test_bouncy_only_flags_the_integrator() {
        let mut frog = Frog::new(1.0);
        let mut active = None;
        let before = frog.velocity;

        apply(&mut frog, 1.0, &mut active, effect(EffectKind::Bouncy), 1);
        assert!(frog.bouncy);
        assert_eq!(frog.velocity, before);
    }

    #[test]
    fn test_new_effect_supersedes_old() {
        let mut frog = Frog::new(1.0);
        let mut active = None;

        apply(&mut frog, 1.0, &mut active, effect(EffectKind::Giant), 1);
        apply(&mut frog, 1.0, &mut active, effect(EffectKind::Tiny), 2);

        let current = active.unwrap();
        assert_eq!(current.kind, EffectKind::Tiny);
        assert_eq!(current.token, 2);
        assert!(frog.scale.x < 1.0);
    }

    #[test]
    fn test_baseline_kind_clears_active() {
        let mut frog = Frog::new(1.0);
        let mut active = None;

        apply(&mut frog, 1.0, &mut active, effect(EffectKind::Spinning), 1);
        assert!(frog.spinning);

        let token = apply(&mut frog, 1.0, &mut active, effect(EffectKind::Normal), 2);
        assert!(token.is_none());
        assert!(active.is_none());
        assert!(!frog.spinning);
    }

    #[test]
    fn test_non_finite_magnitude_is_tamed() {
        let mut frog = Frog::new(1.0);
        let mut active = None;
        let bad = Effect {
            kind: EffectKind::Giant,
            magnitude: f32::NAN,
            duration_ticks: 60,
        };

        apply(&mut frog, 1.0, &mut active, bad, 1);
        assert!(frog.scale.x.is_finite());
    }
}
