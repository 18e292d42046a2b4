//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! Within one tick the ordering is fixed: scheduled events, then input and
//! physics integration, then collision resolution, then score/state mutation.
//! External components only read snapshots after a tick completes.

pub mod block;
pub mod collision;
pub mod effect;
pub mod frog;
pub mod personality;
pub mod state;
pub mod tick;

pub use block::{CutOutcome, CutResult, SliceBlock};
pub use collision::{catch_contact, landing_score};
pub use effect::{ActiveEffect, Effect, EffectKind};
pub use frog::{FlightStep, Frog};
pub use personality::Personality;
pub use state::{
    GameEvent, GameState, Phase, RenderSnapshot, RngState, ScoreState, Snack,
};
pub use tick::{TickInput, tick};
