//! Fixed timestep simulation tick
//!
//! The coordinator that advances the game deterministically. Within one tick
//! the order is fixed and load-bearing: scheduled events, then phase/input
//! handling and physics integration, then collision resolution, then
//! score/state mutation. Render sync happens outside, on the snapshot.

use glam::Vec3;
use rand::Rng;

use super::block::{CutOutcome, SliceBlock, TravelAxis};
use super::collision::{catch_contact, landing_score};
use super::effect::Effect;
use super::frog::FlightStep;
use super::state::{GameEvent, GameState, Phase, ScheduledKind, Snack};
use crate::config::GameConfig;
use crate::consts::*;
use crate::planar_distance;

/// Input commands for a single tick (deterministic).
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Begin charging the launch meter
    pub charge_start: bool,
    /// Release the charge, launching toward this aim angle (radians)
    pub charge_release: Option<f32>,
    /// Slice action (tap/click)
    pub pointer_action: bool,
    /// Start a round from `Ready`
    pub start: bool,
    /// Restart after `Ended`
    pub restart: bool,
}

/// Advance the game state by one fixed timestep.
///
/// Inputs that are invalid for the current phase are dropped silently: no
/// state change, no score effect, and nothing ever panics out of a tick.
pub fn tick(state: &mut GameState, input: &TickInput, config: &GameConfig, dt: f32) {
    state.time_ticks += 1;

    // Deferred work first, so reverts/respawns land before new input
    for kind in state.take_due_events() {
        match kind {
            ScheduledKind::EffectRevert { token } => state.revert_effect_if_current(token),
            ScheduledKind::FrogRespawn => {
                // A frog already relaunched mid-delay keeps flying
                if state.phase == Phase::Playing && !state.frog.is_flying {
                    state.frog.reset_on_pad();
                    state.emit(GameEvent::FrogRespawned);
                }
            }
            ScheduledKind::RoundEnd => {
                if state.phase == Phase::Playing {
                    state.phase = Phase::Ended;
                    state.emit(GameEvent::RoundEnded {
                        score: state.score.score,
                    });
                }
            }
        }
    }

    match state.phase {
        Phase::Loading => {}

        Phase::Ready => {
            if input.start {
                begin_round(state, config);
            }
        }

        Phase::Playing => playing_tick(state, input, config, dt),

        Phase::Ended => {
            if input.restart {
                state.phase = Phase::Resetting;
            }
        }

        Phase::Resetting => {
            begin_round(state, config);
        }
    }
}

/// Reset score and spawn a fresh round; shared by `Ready`+start and the
/// `Resetting` pass-through.
fn begin_round(state: &mut GameState, config: &GameConfig) {
    state.score.reset();
    state.charge = None;
    state.clear_schedule();
    state.rng.round += 1;
    generate_round(state, config);
    state.phase = Phase::Playing;
    state.emit(GameEvent::RoundStarted {
        round: state.rng.round,
        personality: state.personality,
    });
}

fn playing_tick(state: &mut GameState, input: &TickInput, config: &GameConfig, dt: f32) {
    let launch = &config.launch;

    // --- Charge meter ---
    if input.charge_start && state.charge.is_none() && !state.frog.is_flying {
        state.charge = Some(launch.min_power);
    }
    if let Some(charge) = state.charge.as_mut() {
        *charge = (*charge + CHARGE_RATE * dt).min(launch.max_power);
    }
    if let Some(angle) = input.charge_release {
        // Release with no prior charge-start is a state violation: ignored.
        if let Some(power) = state.charge.take() {
            let power = power.clamp(launch.min_power, launch.max_power);
            state
                .frog
                .launch(power, angle, state.personality.launch_multiplier());
        }
    }

    // --- Physics integration (before any collision/scoring) ---
    if state.frog.is_flying {
        match state
            .frog
            .update(dt, launch.gravity, launch.bounce_decay, launch.max_bounces)
        {
            FlightStep::StillFlying => {}
            FlightStep::Bounced => {
                state.score.bounce_count = state.frog.bounce_count;
            }
            FlightStep::Landed => {
                let distance = planar_distance(state.frog.position, Vec3::ZERO);
                let delta = landing_score(
                    distance,
                    state.personality.score_bonus(),
                    state.frog.bounce_count,
                    state.active_effect.is_some(),
                    &config.scoring,
                );
                state.score.score += delta;
                state.score.bounce_count = state.frog.bounce_count;
                state.emit(GameEvent::FrogLanded {
                    distance,
                    bounces: state.frog.bounce_count,
                });
                state.emit(GameEvent::Scored {
                    delta,
                    total: state.score.score,
                });

                // The landing display lingers, then the round either closes
                // or loops with a fresh frog.
                if config.scoring.round_based {
                    state.schedule(LANDING_DISPLAY_DELAY_TICKS, ScheduledKind::RoundEnd);
                } else {
                    state.schedule(LANDING_DISPLAY_DELAY_TICKS, ScheduledKind::FrogRespawn);
                }
            }
        }
    }

    // --- Snacks: fall, then catch resolution against the frog ---
    for snack in &mut state.snacks {
        snack.position.y -= SNACK_FALL_SPEED * dt;
    }
    let frog_pos = state.frog.position;
    let mut caught: Vec<u32> = Vec::new();
    for snack in &state.snacks {
        if catch_contact(
            snack.position,
            frog_pos,
            config.scoring.catch_radius,
            config.scoring.catch_height_window,
        ) {
            caught.push(snack.id);
        }
    }
    let seed = state.seed;
    let tick_now = state.time_ticks;
    for snack in &mut state.snacks {
        if caught.contains(&snack.id) {
            snack.position = snack_spawn_position(seed, tick_now, snack.id);
        } else if snack.position.y < GROUND_LEVEL {
            // Missed the frog entirely; recycle without scoring
            snack.position = snack_spawn_position(seed, tick_now, snack.id.wrapping_add(97));
        }
    }
    for id in caught {
        state.score.score += config.scoring.catch_points;
        state.emit(GameEvent::SnackCaught { id });
        state.emit(GameEvent::Scored {
            delta: config.scoring.catch_points,
            total: state.score.score,
        });
    }

    // --- Moving slice block: ping-pong along its travel axis ---
    advance_slice_block(state, dt);

    if input.pointer_action {
        resolve_cut(state, config);
    }
}

/// Ping-pong the moving block between the travel extents.
fn advance_slice_block(state: &mut GameState, dt: f32) {
    let slice = &mut state.slice;
    let step = SLICE_SPEED * slice.travel_sign * dt;
    match slice.moving.travel_axis() {
        TravelAxis::X => {
            slice.moving.position.x += step;
            if slice.moving.position.x.abs() > SLICE_TRAVEL_EXTENT {
                slice.moving.position.x =
                    slice.moving.position.x.clamp(-SLICE_TRAVEL_EXTENT, SLICE_TRAVEL_EXTENT);
                slice.travel_sign = -slice.travel_sign;
            }
        }
        TravelAxis::Z => {
            slice.moving.position.z += step;
            if slice.moving.position.z.abs() > SLICE_TRAVEL_EXTENT {
                slice.moving.position.z =
                    slice.moving.position.z.clamp(-SLICE_TRAVEL_EXTENT, SLICE_TRAVEL_EXTENT);
                slice.travel_sign = -slice.travel_sign;
            }
        }
    }
}

/// Resolve a slice action against the current target block.
fn resolve_cut(state: &mut GameState, config: &GameConfig) {
    let target = state.slice.target.clone();
    let result = state.slice.moving.cut(&target, SLICE_ACCURACY_THRESHOLD);

    match result.outcome {
        CutOutcome::Missed => {
            state.slice.perfect_streak = 0;
            state.emit(GameEvent::SliceResolved {
                outcome: CutOutcome::Missed,
                streak: 0,
            });
            // Terminal cut: both blocks are replaced for a fresh pair
            spawn_slice_pair(state, TravelAxis::X);
        }
        CutOutcome::Perfect => {
            state.slice.perfect_streak += 1;
            let streak = state.slice.perfect_streak;
            let delta = config.scoring.slice_perfect_points
                + (streak as u64 - 1) * config.scoring.slice_streak_bonus;
            state.score.score += delta;
            state.emit(GameEvent::SliceResolved {
                outcome: CutOutcome::Perfect,
                streak,
            });
            state.emit(GameEvent::Scored {
                delta,
                total: state.score.score,
            });
            promote_cut_block(state);
        }
        CutOutcome::Chopped => {
            state.slice.perfect_streak = 0;
            let delta = config.scoring.slice_chop_points;
            state.score.score += delta;
            state.emit(GameEvent::SliceResolved {
                outcome: CutOutcome::Chopped,
                streak: 0,
            });
            state.emit(GameEvent::Scored {
                delta,
                total: state.score.score,
            });
            promote_cut_block(state);
        }
    }
}

/// After a successful cut the kept piece becomes the new target, and a new
/// moving block half its width starts from the far end of the other axis
/// (the travel axis alternates every cut; only a half-width block can land
/// inside the perfect window). Once the pieces get too thin a fresh
/// full-size pair spawns instead.
fn promote_cut_block(state: &mut GameState) {
    let kept = state.slice.moving.clone();
    let next_axis = match kept.travel_axis() {
        TravelAxis::X => TravelAxis::Z,
        TravelAxis::Z => TravelAxis::X,
    };

    let mut scale = kept.scale;
    let next_size = match next_axis {
        TravelAxis::X => {
            scale.x /= 2.0;
            scale.x
        }
        TravelAxis::Z => {
            scale.z /= 2.0;
            scale.z
        }
    };
    if next_size < MIN_SLICE_SIZE {
        spawn_slice_pair(state, next_axis);
        return;
    }

    let mut start = kept.position;
    match next_axis {
        TravelAxis::X => start.x = -SLICE_TRAVEL_EXTENT,
        TravelAxis::Z => start.z = -SLICE_TRAVEL_EXTENT,
    }

    state.slice.target = kept;
    state.slice.moving = SliceBlock::new(start, scale, next_axis);
    state.slice.travel_sign = 1.0;
}

/// Fresh target/moving pair, target nudged off center deterministically.
/// The moving block is half the target's width on the travel axis.
fn spawn_slice_pair(state: &mut GameState, axis: TravelAxis) {
    let hash = (state.time_ticks as u32)
        .wrapping_mul(2654435761)
        .wrapping_add(state.seed as u32);
    let offset = (hash % 1000) as f32 / 1000.0 - 0.5;

    let target_pos = Vec3::new(offset, 0.0, 0.0);
    let target_scale = Vec3::new(2.0, 0.5, 2.0);
    let mut moving_pos = target_pos;
    let mut moving_scale = target_scale;
    match axis {
        TravelAxis::X => {
            moving_pos.x = -SLICE_TRAVEL_EXTENT;
            moving_scale.x /= 2.0;
        }
        TravelAxis::Z => {
            moving_pos.z = -SLICE_TRAVEL_EXTENT;
            moving_scale.z /= 2.0;
        }
    }

    state.slice.target = SliceBlock::new(target_pos, target_scale, axis);
    state.slice.moving = SliceBlock::new(moving_pos, moving_scale, axis);
    state.slice.travel_sign = 1.0;
}

/// Deterministic snack respawn position from (seed, tick, salt).
fn snack_spawn_position(seed: u64, tick: u64, salt: u32) -> Vec3 {
    let hash = (tick as u32)
        .wrapping_mul(2654435761)
        .wrapping_add(salt.wrapping_mul(7919))
        .wrapping_add(seed as u32);
    let rx = (hash % 1000) as f32 / 1000.0 - 0.5;
    let rz = ((hash >> 10) % 1000) as f32 / 1000.0 - 0.5;
    Vec3::new(
        rx * 2.0 * SNACK_SPAWN_RADIUS,
        SNACK_SPAWN_HEIGHT,
        rz * 2.0 * SNACK_SPAWN_RADIUS,
    )
}

/// Generate a round: personality, optional starting effect, slice pair and
/// snacks, all drawn from the round's seeded RNG stream.
pub fn generate_round(state: &mut GameState, config: &GameConfig) {
    let mut rng = state.rng.rng_for_round();

    // Personality for the round
    let personalities = &config.frog.personalities;
    state.personality = if personalities.is_empty() {
        super::personality::Personality::default()
    } else {
        personalities[rng.random_range(0..personalities.len())]
    };

    // Reset the frog to baseline on its pad
    super::effect::revert(&mut state.frog, state.base_size, &mut state.active_effect);
    state.frog.reset_on_pad();

    // Config-driven starting effect, half the rounds
    if !config.frog.effects.is_empty() && rng.random_range(0..100u32) < 50 {
        let kind = config.frog.effects[rng.random_range(0..config.frog.effects.len())];
        state.apply_effect(Effect {
            kind,
            magnitude: 1.0,
            duration_ticks: 600,
        });
    }

    // Slice pair; the moving block is half the target's width so a clean
    // cut can land inside the perfect window
    let offset: f32 = rng.random_range(-0.5..0.5);
    let target_pos = Vec3::new(offset, 0.0, 0.0);
    state.slice.target =
        SliceBlock::new(target_pos, Vec3::new(2.0, 0.5, 2.0), TravelAxis::X);
    state.slice.moving = SliceBlock::new(
        Vec3::new(-SLICE_TRAVEL_EXTENT, 0.0, 0.0),
        Vec3::new(1.0, 0.5, 2.0),
        TravelAxis::X,
    );
    state.slice.travel_sign = 1.0;
    state.slice.perfect_streak = 0;

    // Snacks
    state.snacks.clear();
    for _ in 0..3 {
        let id = state.next_entity_id();
        let x: f32 = rng.random_range(-SNACK_SPAWN_RADIUS..SNACK_SPAWN_RADIUS);
        let z: f32 = rng.random_range(-SNACK_SPAWN_RADIUS..SNACK_SPAWN_RADIUS);
        state.snacks.push(Snack {
            id,
            position: Vec3::new(x, SNACK_SPAWN_HEIGHT, z),
        });
    }

    log::info!(
        "round {} start: personality={:?} effect={:?}",
        state.rng.round,
        state.personality,
        state.active_effect.map(|e| e.kind),
    );
}
