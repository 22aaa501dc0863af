//! Flick Arena headless runner
//!
//! Drives the simulation without a window: loads tuning, flicks each player
//! at an enemy in turn, lets the table settle, then records the score and
//! prints the final snapshot as JSON.
//!
//! Usage: `flick-arena [tuning.json]`

#[cfg(not(target_arch = "wasm32"))]
use flick_arena::{
    ScoreBook, Tuning,
    highscores::DEFAULT_SCORE_FILE,
    sim::{BodyKind, GameEvent, GameState, TickInput, tick},
};

/// Ticks of charge per flick, cycling so launches vary in power
#[cfg(not(target_arch = "wasm32"))]
const CHARGE_PATTERN: [usize; 4] = [250, 180, 120, 60];
/// Give up waiting for the table to settle after this many ticks
#[cfg(not(target_arch = "wasm32"))]
const SETTLE_LIMIT: usize = 20_000;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flick Arena (headless) starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run() -> Result<(), Box<dyn std::error::Error>> {
    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let dt = tuning.sim_dt;

    let mut state = GameState::new(tuning)?;
    let mut scores = ScoreBook::open(DEFAULT_SCORE_FILE)?;

    for player in 0..state.players.len() {
        let Some(target) = state.enemies.get(player % state.enemies.len().max(1)).map(|e| e.pos)
        else {
            log::warn!("No enemies to aim at");
            break;
        };

        let press = TickInput {
            select: Some(player),
            charge_start: true,
            ..Default::default()
        };
        tick(&mut state, &press, dt);
        for _ in 1..CHARGE_PATTERN[player % CHARGE_PATTERN.len()] {
            tick(&mut state, &TickInput::default(), dt);
        }
        log::info!(
            "Player {} charged to {:.0}%",
            player,
            state.charge_ratio() * 100.0
        );

        let release = TickInput {
            charge_release: Some(target),
            ..Default::default()
        };
        tick(&mut state, &release, dt);
        score_events(&state, &mut scores);

        let mut ticks = 0;
        while !state.is_at_rest() && ticks < SETTLE_LIMIT {
            tick(&mut state, &TickInput::default(), dt);
            score_events(&state, &mut scores);
            ticks += 1;
        }
        log::info!("Table settled after {ticks} ticks (score {})", scores.current());
    }

    println!("{}", serde_json::to_string_pretty(&state.snapshot())?);
    println!(
        "Score: {}  High score: {}",
        scores.current(),
        scores.high_score().max(scores.current())
    );
    scores.save()?;
    Ok(())
}

/// One point for every player-enemy contact
#[cfg(not(target_arch = "wasm32"))]
fn score_events(state: &GameState, scores: &mut ScoreBook) {
    for event in &state.events {
        match event {
            GameEvent::Collision { a, b }
                if a.kind == BodyKind::Player && b.kind == BodyKind::Enemy =>
            {
                log::debug!("{a} struck {b}");
                scores.increment();
            }
            GameEvent::WallHit { body } => log::trace!("{body} hit a wall"),
            _ => {}
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library has no browser front end; nothing to run
}
