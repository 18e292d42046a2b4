//! Frog flight integrator
//!
//! Semi-implicit Euler integration of the launched frog: gravity pulls the
//! vertical velocity, ground contact either bounces with decayed velocity or
//! settles the frog. Given identical inputs the trajectory is bit-identical,
//! which the replay and scoring tests rely on.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Result of one integration step while the frog is airborne.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightStep {
    /// Still in the air
    StillFlying,
    /// Touched the ground and rebounded with decayed velocity
    Bounced,
    /// Came to rest; velocity zeroed, no longer flying
    Landed,
}

/// The launched frog body.
///
/// Physics owns this state; the renderer mirrors it from a snapshot after
/// each tick and never writes back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frog {
    pub position: Vec3,
    pub velocity: Vec3,
    pub orientation: Quat,
    pub scale: Vec3,
    pub is_flying: bool,
    /// Ground contacts since launch
    pub bounce_count: u32,
    /// Set by the bouncy effect; boosts bounce decay toward its ceiling
    pub bouncy: bool,
    /// Set by the spinning effect; integrator spins orientation while flying
    pub spinning: bool,
}

impl Frog {
    pub fn new(size: f32) -> Self {
        Self {
            position: Vec3::new(0.0, GROUND_LEVEL, 0.0),
            velocity: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            scale: Vec3::splat(size),
            is_flying: false,
            bounce_count: 0,
            bouncy: false,
            spinning: false,
        }
    }

    /// Impart launch velocity from a charged power value and aim angle.
    ///
    /// `power` is assumed caller-clamped into the configured range; a
    /// non-finite angle is treated as straight ahead rather than poisoning
    /// the trajectory.
    pub fn launch(&mut self, power: f32, angle_rad: f32, personality_multiplier: f32) {
        let angle = if angle_rad.is_finite() { angle_rad } else { 0.0 };
        let v = power * LAUNCH_SCALE * personality_multiplier;
        self.velocity = Vec3::new(angle.cos() * v, v, angle.sin() * v);
        self.orientation = Quat::from_rotation_y(-angle);
        self.is_flying = true;
        self.bounce_count = 0;
    }

    /// Advance the flight by one time step.
    ///
    /// Integration order: gravity into velocity, velocity into position, then
    /// ground contact. A contact bounces while `|velocity.y|` stays above
    /// [`BOUNCE_THRESHOLD`] and the bounce cap is not exhausted; otherwise the
    /// frog settles and `Landed` is returned exactly once.
    pub fn update(
        &mut self,
        dt: f32,
        gravity: f32,
        bounce_decay: f32,
        max_bounces: u32,
    ) -> FlightStep {
        if !self.is_flying {
            return FlightStep::Landed;
        }

        self.velocity.y -= gravity * dt * GRAVITY_SCALE;
        self.position += self.velocity * dt * MOVE_SCALE;

        if self.spinning {
            self.orientation = Quat::from_rotation_y(SPIN_RATE * dt) * self.orientation;
        }

        if self.position.y <= GROUND_LEVEL {
            // Discrete steps overshoot the ground plane; fold the extra fall
            // back into the impact speed so successive bounce speeds decay
            // monotonically instead of picking up penetration energy.
            let penetration = GROUND_LEVEL - self.position.y;
            let impact = (self.velocity.y * self.velocity.y
                - 2.0 * (gravity * GRAVITY_SCALE / MOVE_SCALE) * penetration)
                .max(0.0)
                .sqrt();
            self.position.y = GROUND_LEVEL;

            let decay = self.effective_decay(bounce_decay);
            if impact > BOUNCE_THRESHOLD && self.bounce_count < max_bounces {
                self.velocity.y = impact * decay;
                self.velocity.x *= decay;
                self.velocity.z *= decay;
                self.bounce_count += 1;
                return FlightStep::Bounced;
            }

            self.velocity = Vec3::ZERO;
            self.is_flying = false;
            return FlightStep::Landed;
        }

        FlightStep::StillFlying
    }

    /// Put the frog back on the launch pad for the next flight. Effect
    /// state (scale, bouncy, spinning) is left alone; effects expire on
    /// their own schedule, not on respawn.
    pub fn reset_on_pad(&mut self) {
        self.position = Vec3::new(0.0, GROUND_LEVEL, 0.0);
        self.velocity = Vec3::ZERO;
        self.orientation = Quat::IDENTITY;
        self.is_flying = false;
        self.bounce_count = 0;
    }

    /// Bounce decay with the bouncy-effect boost, capped below 1 so the
    /// bounce sequence always dies out.
    fn effective_decay(&self, bounce_decay: f32) -> f32 {
        let decay = if self.bouncy {
            bounce_decay * BOUNCY_DECAY_BOOST
        } else {
            bounce_decay
        };
        decay.clamp(0.0, MAX_EFFECTIVE_DECAY)
    }
}
