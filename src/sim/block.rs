//! Slice block geometry
//!
//! Pure overlap math for the block-slicing mechanic: a block travelling along
//! one axis is cut against a stationary target, and the outcome is classified
//! as missed, perfect, or chopped. No physics stepping happens here, so every
//! case is testable with literal coordinates.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis a block travels along. Exactly one of the two participates per cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TravelAxis {
    X,
    Z,
}

/// Classification of a cut attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CutOutcome {
    /// No overlap with the target on the travel axis
    Missed,
    /// Within the accuracy window; the block snaps onto the target
    Perfect,
    /// Partial overlap; a kept piece remains and the rest is discarded
    Chopped,
}

/// Geometry of the piece discarded by a chopped cut.
///
/// Returned rather than mutated onto the block: the caller hands it to the
/// render layer as the half that tumbles away.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscardedPiece {
    pub position: Vec3,
    pub scale: Vec3,
}

/// Result of [`SliceBlock::cut`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutResult {
    pub outcome: CutOutcome,
    pub discarded: Option<DiscardedPiece>,
}

impl CutResult {
    fn missed() -> Self {
        Self {
            outcome: CutOutcome::Missed,
            discarded: None,
        }
    }
}

/// A block in the slicing round: either the stationary target or the piece
/// travelling over it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliceBlock {
    pub position: Vec3,
    pub scale: Vec3,
    /// Unit travel direction; X or Z dominant, never both
    pub direction: Vec3,
}

const AXIS_EPSILON: f32 = 1e-4;

impl SliceBlock {
    pub fn new(position: Vec3, scale: Vec3, axis: TravelAxis) -> Self {
        let direction = match axis {
            TravelAxis::X => Vec3::X,
            TravelAxis::Z => Vec3::Z,
        };
        Self {
            position,
            scale,
            direction,
        }
    }

    /// Dominant travel axis, derived from the direction vector.
    pub fn travel_axis(&self) -> TravelAxis {
        if self.direction.x.abs() > AXIS_EPSILON {
            TravelAxis::X
        } else {
            TravelAxis::Z
        }
    }

    fn pos(&self, axis: TravelAxis) -> f32 {
        match axis {
            TravelAxis::X => self.position.x,
            TravelAxis::Z => self.position.z,
        }
    }

    fn set_pos(&mut self, axis: TravelAxis, value: f32) {
        match axis {
            TravelAxis::X => self.position.x = value,
            TravelAxis::Z => self.position.z = value,
        }
    }

    fn size(&self, axis: TravelAxis) -> f32 {
        match axis {
            TravelAxis::X => self.scale.x,
            TravelAxis::Z => self.scale.z,
        }
    }

    fn set_size(&mut self, axis: TravelAxis, value: f32) {
        match axis {
            TravelAxis::X => self.scale.x = value,
            TravelAxis::Z => self.scale.z = value,
        }
    }

    /// Half-width of the block along the axis (extent to either side).
    fn extent(&self, axis: TravelAxis) -> f32 {
        self.size(axis) / 2.0
    }

    /// Cut this block against a stationary target along the travel axis.
    ///
    /// `overlap = target.extent(axis) - |self.pos - target.pos|`:
    /// - negative overlap misses outright;
    /// - a residue under `accuracy_threshold` snaps the block onto the target
    ///   and counts as a full success, so near-perfect cuts never score worse
    ///   than exact ones;
    /// - otherwise the block is chopped: it keeps the overlap span centered
    ///   on the overlap midpoint, and the piece outside the target is
    ///   returned, offset to whichever side of the target the cut occurred.
    ///
    /// The off axis is untouched. Degenerate (non-finite) geometry classifies
    /// as a miss so a broken frame can never panic out of the tick loop.
    pub fn cut(&mut self, target: &SliceBlock, accuracy_threshold: f32) -> CutResult {
        let axis = self.travel_axis();
        let delta = self.pos(axis) - target.pos(axis);
        let overlap = target.extent(axis) - delta.abs();

        if !overlap.is_finite() {
            return CutResult::missed();
        }
        if overlap < 0.0 {
            return CutResult::missed();
        }

        if self.size(axis) - overlap < accuracy_threshold {
            self.set_pos(axis, target.pos(axis));
            return CutResult {
                outcome: CutOutcome::Perfect,
                discarded: None,
            };
        }

        // Gameplay-visible tie-break: the discarded half flies off toward the
        // side of the target the moving block was on.
        let side = if self.pos(axis) < target.pos(axis) {
            -0.5
        } else {
            0.5
        };

        let kept_size = overlap;
        let discard_size = self.size(axis) - overlap;
        let kept_pos = self.pos(axis) - delta / 2.0;

        self.set_size(axis, kept_size);
        self.set_pos(axis, kept_pos);

        let mut discarded = DiscardedPiece {
            position: self.position,
            scale: self.scale,
        };
        match axis {
            TravelAxis::X => {
                discarded.scale.x = discard_size;
                discarded.position.x = kept_pos + side * (kept_size + discard_size);
            }
            TravelAxis::Z => {
                discarded.scale.z = discard_size;
                discarded.position.z = kept_pos + side * (kept_size + discard_size);
            }
        }

        CutResult {
            outcome: CutOutcome::Chopped,
            discarded: Some(discarded),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f32 = 0.2;

    fn target_block() -> SliceBlock {
        // Width 2 on X: extent 1 to each side of the origin
        SliceBlock::new(Vec3::ZERO, Vec3::new(2.0, 1.0, 1.0), TravelAxis::X)
    }

    fn moving_block(x: f32) -> SliceBlock {
        SliceBlock::new(Vec3::new(x, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0), TravelAxis::X)
    }

    #[test]
    fn test_cut_perfect_snaps_to_target() {
        let target = target_block();
        let mut moving = moving_block(0.05);

        let result = moving.cut(&target, THRESHOLD);
        // overlap = 1 - 0.05 = 0.95; residue 0.05 < 0.2
        assert_eq!(result.outcome, CutOutcome::Perfect);
        assert!(result.discarded.is_none());
        assert_eq!(moving.position.x, 0.0);
        assert_eq!(moving.scale.x, 1.0);
    }

    #[test]
    fn test_cut_missed_outside_target() {
        let target = target_block();
        let mut moving = moving_block(1.5);

        let result = moving.cut(&target, THRESHOLD);
        // overlap = 1 - 1.5 = -0.5
        assert_eq!(result.outcome, CutOutcome::Missed);
        assert_eq!(moving.position.x, 1.5);
        assert_eq!(moving.scale.x, 1.0);
    }

    #[test]
    fn test_cut_chopped_keeps_overlap_at_midpoint() {
        let target = target_block();
        let mut moving = moving_block(0.7);

        let result = moving.cut(&target, THRESHOLD);
        // overlap = 1 - 0.7 = 0.3; residue 0.7 >= 0.2
        assert_eq!(result.outcome, CutOutcome::Chopped);
        assert!((moving.scale.x - 0.3).abs() < 1e-6);
        assert!((moving.position.x - 0.35).abs() < 1e-6);

        let discarded = result.discarded.unwrap();
        assert!((discarded.scale.x - 0.7).abs() < 1e-6);
        // Moving block sat on the positive side, so the discard flies right:
        // kept spans [0.2, 0.5], discard spans [0.5, 1.2], center 0.85
        assert!((discarded.position.x - 0.85).abs() < 1e-6);
    }

    #[test]
    fn test_cut_chopped_discard_side_tie_break() {
        let target = target_block();
        let mut moving = moving_block(-0.7);

        let result = moving.cut(&target, THRESHOLD);
        assert_eq!(result.outcome, CutOutcome::Chopped);
        assert!((moving.position.x - (-0.35)).abs() < 1e-6);
        let discarded = result.discarded.unwrap();
        // Negative side mirrors the positive case
        assert!((discarded.position.x - (-0.85)).abs() < 1e-6);
    }

    #[test]
    fn test_cut_leaves_off_axis_untouched() {
        let target = target_block();
        let mut moving = moving_block(0.7);
        moving.position.z = 2.5;
        moving.scale.z = 0.8;

        moving.cut(&target, THRESHOLD);
        assert_eq!(moving.position.z, 2.5);
        assert_eq!(moving.scale.z, 0.8);
    }

    #[test]
    fn test_cut_along_z_axis() {
        let target = SliceBlock::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 2.0), TravelAxis::Z);
        let mut moving =
            SliceBlock::new(Vec3::new(0.0, 0.0, 0.7), Vec3::ONE, TravelAxis::Z);

        let result = moving.cut(&target, THRESHOLD);
        assert_eq!(result.outcome, CutOutcome::Chopped);
        assert!((moving.scale.z - 0.3).abs() < 1e-6);
        assert!((moving.position.z - 0.35).abs() < 1e-6);
        assert_eq!(moving.position.x, 0.0);
    }

    #[test]
    fn test_cut_degenerate_geometry_is_missed() {
        let mut target = target_block();
        target.position.x = f32::NAN;
        let mut moving = moving_block(0.1);

        let result = moving.cut(&target, THRESHOLD);
        assert_eq!(result.outcome, CutOutcome::Missed);
        // Block untouched on a miss
        assert!((moving.position.x - 0.1).abs() < 1e-6);
    }
}
