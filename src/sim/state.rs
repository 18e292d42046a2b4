//! Game state and core simulation types
//!
//! Everything that must be persisted for determinism lives here. The tick
//! loop exclusively owns this state; render and UI code only ever see the
//! read-only snapshot taken after a tick completes.

use glam::{Quat, Vec3};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::block::{CutOutcome, SliceBlock};
use super::effect::{ActiveEffect, Effect, EffectKind};
use super::frog::Frog;
use super::personality::Personality;
use crate::config::GameConfig;

/// High-level game mode gating input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Assets/config still loading; all input ignored
    Loading,
    /// Waiting for the start action
    Ready,
    /// Active gameplay
    Playing,
    /// Round over, waiting for restart
    Ended,
    /// One-tick cleanup before the next round
    Resetting,
}

/// Score for the current round.
///
/// Mutated only by the collision/landing paths in the tick loop; the score
/// never decreases within a round and resets only on an explicit restart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    pub score: u64,
    pub bounce_count: u32,
}

impl ScoreState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A falling snack the frog can catch mid-air.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snack {
    pub id: u32,
    pub position: Vec3,
}

/// Deterministic RNG handle: a fresh stream per round, reproducible from the
/// run seed. Tests inject seeds instead of entropy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub round: u32,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, round: 0 }
    }

    /// RNG stream for the current round.
    pub fn rng_for_round(&self) -> Pcg32 {
        let stream = (self.round as u64)
            .wrapping_mul(0x9E37_79B9_7F4A_7C15)
            .wrapping_add(self.seed);
        Pcg32::seed_from_u64(stream)
    }
}

/// Discrete notifications for the external UI/leaderboard layer, drained
/// once per frame after the tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    RoundStarted { round: u32, personality: Personality },
    Scored { delta: u64, total: u64 },
    FrogLanded { distance: f32, bounces: u32 },
    FrogRespawned,
    SnackCaught { id: u32 },
    SliceResolved { outcome: CutOutcome, streak: u32 },
    RoundEnded { score: u64 },
}

/// Deferred work processed once per tick by the coordinator. Replaces the
/// original free-running timers so nothing races the physics step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScheduledKind {
    /// Revert the effect application identified by `token`
    EffectRevert { token: u64 },
    /// Put a fresh frog on the pad (continuous mode)
    FrogRespawn,
    /// Close the round (round-based mode)
    RoundEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    pub fire_at_tick: u64,
    pub kind: ScheduledKind,
}

/// State of the block-slicing mechanic within a round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliceRound {
    pub target: SliceBlock,
    pub moving: SliceBlock,
    /// Ping-pong travel sign for the moving block
    pub travel_sign: f32,
    pub perfect_streak: u32,
}

/// What a body snapshot represents, so the renderer can map it onto its
/// scene graph without guessing by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    Frog,
    Snack,
    SliceTarget,
    SliceMoving,
}

/// Read-only transform mirror for one body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BodySnapshot {
    pub kind: BodyKind,
    pub position: Vec3,
    pub orientation: Quat,
    pub scale: Vec3,
}

/// Per-tick render sync payload. Physics owns the truth; the renderer reads
/// this and never writes back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub bodies: Vec<BodySnapshot>,
    pub score: ScoreState,
    pub phase: Phase,
    /// Active visual effect, if any (rainbow tint, glow, wiggle)
    pub effect: Option<EffectKind>,
    /// Charge meter fill while the launch button is held
    pub charge: Option<f32>,
}

/// Complete game state (deterministic, serializable).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: RngState,
    pub phase: Phase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Charge meter while the launch input is held
    pub charge: Option<f32>,
    pub frog: Frog,
    pub personality: Personality,
    /// Baseline frog size from config, restored when effects revert
    pub base_size: f32,
    pub active_effect: Option<ActiveEffect>,
    pub snacks: Vec<Snack>,
    pub slice: SliceRound,
    pub score: ScoreState,
    scheduled: Vec<ScheduledEvent>,
    events: Vec<GameEvent>,
    next_effect_token: u64,
    next_id: u32,
}

impl GameState {
    /// Create a new game in the `Loading` phase.
    pub fn new(seed: u64, config: &GameConfig) -> Self {
        let base_size = config.frog.size;
        Self {
            seed,
            rng: RngState::new(seed),
            phase: Phase::Loading,
            time_ticks: 0,
            charge: None,
            frog: Frog::new(base_size),
            personality: Personality::default(),
            base_size,
            active_effect: None,
            snacks: Vec::new(),
            slice: SliceRound {
                target: SliceBlock::new(
                    Vec3::ZERO,
                    Vec3::new(2.0, 0.5, 2.0),
                    super::block::TravelAxis::X,
                ),
                moving: SliceBlock::new(
                    Vec3::ZERO,
                    Vec3::new(1.0, 0.5, 2.0),
                    super::block::TravelAxis::X,
                ),
                travel_sign: 1.0,
                perfect_streak: 0,
            },
            score: ScoreState::default(),
            scheduled: Vec::new(),
            events: Vec::new(),
            next_effect_token: 1,
            next_id: 1,
        }
    }

    /// Host signals that loading finished; gates the `Ready` phase.
    pub fn mark_loaded(&mut self) {
        if self.phase == Phase::Loading {
            self.phase = Phase::Ready;
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Queue a notification for the external UI layer.
    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending notifications, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Defer work by `delay_ticks` from the current tick.
    pub fn schedule(&mut self, delay_ticks: u64, kind: ScheduledKind) {
        self.scheduled.push(ScheduledEvent {
            fire_at_tick: self.time_ticks + delay_ticks,
            kind,
        });
    }

    /// Drop all pending scheduled work. Round transitions call this so
    /// nothing deferred leaks from one round into the next.
    pub fn clear_schedule(&mut self) {
        self.scheduled.clear();
    }

    /// Remove and return every scheduled event that is due.
    pub fn take_due_events(&mut self) -> Vec<ScheduledKind> {
        let now = self.time_ticks;
        let mut due = Vec::new();
        self.scheduled.retain(|ev| {
            if ev.fire_at_tick <= now {
                due.push(ev.kind);
                false
            } else {
                true
            }
        });
        due
    }

    /// Apply an effect to the frog and schedule its revert.
    ///
    /// A previously pending revert is invalidated by the token bump, which
    /// is the whole cancellation mechanism: the stale event still fires but
    /// no longer matches.
    pub fn apply_effect(&mut self, effect: Effect) {
        let token = self.next_effect_token;
        self.next_effect_token += 1;

        let applied = super::effect::apply(
            &mut self.frog,
            self.base_size,
            &mut self.active_effect,
            effect,
            token,
        );
        if applied.is_some() {
            self.schedule(
                effect.duration_ticks as u64,
                ScheduledKind::EffectRevert { token },
            );
        }
    }

    /// Revert the active effect if `token` still identifies it.
    pub fn revert_effect_if_current(&mut self, token: u64) {
        if self.active_effect.map(|e| e.token) == Some(token) {
            super::effect::revert(&mut self.frog, self.base_size, &mut self.active_effect);
        }
    }

    /// Read-only mirror for the render layer, taken after a tick completes.
    pub fn snapshot(&self) -> RenderSnapshot {
        let mut bodies = Vec::with_capacity(3 + self.snacks.len());
        bodies.push(BodySnapshot {
            kind: BodyKind::Frog,
            position: self.frog.position,
            orientation: self.frog.orientation,
            scale: self.frog.scale,
        });
        bodies.push(BodySnapshot {
            kind: BodyKind::SliceTarget,
            position: self.slice.target.position,
            orientation: Quat::IDENTITY,
            scale: self.slice.target.scale,
        });
        bodies.push(BodySnapshot {
            kind: BodyKind::SliceMoving,
            position: self.slice.moving.position,
            orientation: Quat::IDENTITY,
            scale: self.slice.moving.scale,
        });
        for snack in &self.snacks {
            bodies.push(BodySnapshot {
                kind: BodyKind::Snack,
                position: snack.position,
                orientation: Quat::IDENTITY,
                scale: Vec3::splat(0.3),
            });
        }

        RenderSnapshot {
            bodies,
            score: self.score,
            phase: self.phase,
            effect: self.active_effect.map(|e| e.kind),
            charge: self.charge,
        }
    }
}
