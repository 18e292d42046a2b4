//! Frog Fling entry point
//!
//! Headless demo driver: runs a few scripted rounds at the fixed timestep
//! and logs the resulting scores. The host platform normally drives the
//! same `tick`/`snapshot`/`drain_events` surface from its frame pump.

use frog_fling::consts::*;
use frog_fling::sim::{GameEvent, GameState, Phase, TickInput, tick};
use frog_fling::{GameConfig, HighScores};

/// Sample per-post config record; sparse on purpose to exercise defaults.
const DEMO_CONFIG: &str = r#"{
    "frog": { "personalities": ["cheerful", "daredevil", "zen"] },
    "launch": { "max_power": 18.0, "bounce_decay": 0.6 },
    "scoring": { "round_based": true }
}"#;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xF406);

    let config = GameConfig::load_or_default(Some(DEMO_CONFIG));
    let mut state = GameState::new(seed, &config);
    let mut highscores = HighScores::new();

    state.mark_loaded();
    log::info!("demo run, seed {seed}");

    for round in 0..3u32 {
        play_round(&mut state, &config, round, &mut highscores);
    }

    println!("--- leaderboard ---");
    for (i, entry) in highscores.entries.iter().enumerate() {
        println!("{:>2}. {:>6}  (round {})", i + 1, entry.score, entry.round);
    }
}

/// Script one round: charge, launch at a round-specific angle, slice a few
/// times while the frog flies, then wait out the round end.
fn play_round(
    state: &mut GameState,
    config: &GameConfig,
    round: u32,
    highscores: &mut HighScores,
) {
    let begin = TickInput {
        start: state.phase == Phase::Ready,
        restart: state.phase == Phase::Ended,
        ..Default::default()
    };
    tick(state, &begin, config, SIM_DT);
    // Ended -> Resetting needs the pass-through tick
    if state.phase == Phase::Resetting {
        tick(state, &TickInput::default(), config, SIM_DT);
    }

    let hold_ticks = 20 + round * 15;
    let angle = 0.3 + round as f32 * 0.5;

    let hold = TickInput {
        charge_start: true,
        ..Default::default()
    };
    for _ in 0..hold_ticks {
        tick(state, &hold, config, SIM_DT);
    }
    let release = TickInput {
        charge_release: Some(angle),
        ..Default::default()
    };
    tick(state, &release, config, SIM_DT);

    let mut ticks = 0u32;
    loop {
        let input = TickInput {
            pointer_action: ticks % 120 == 60,
            ..Default::default()
        };
        tick(state, &input, config, SIM_DT);
        ticks += 1;

        for event in state.drain_events() {
            match event {
                GameEvent::FrogLanded { distance, bounces } => {
                    log::info!("landed {distance:.2} units out after {bounces} bounces");
                }
                GameEvent::Scored { delta, total } => {
                    log::debug!("+{delta} -> {total}");
                }
                GameEvent::RoundEnded { score } => {
                    println!("round {} score: {}", round + 1, score);
                    highscores.add_score(score, round + 1, 0.0);
                }
                _ => {}
            }
        }

        if state.phase == Phase::Ended || ticks > 60 * 60 {
            break;
        }
    }
}
