//! Fixed timestep simulation tick
//!
//! Core game loop that advances the world deterministically.

use glam::Vec2;

use super::collision::{pair_mut, resolve_pair};
use super::state::{Body, GameEvent, GameState};
use crate::error::SimError;

/// Input events for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Player index chosen this tick (number keys)
    pub select: Option<usize>,
    /// Launch button pressed
    pub charge_start: bool,
    /// Launch button released at this cursor position
    pub charge_release: Option<Vec2>,
}

/// Advance the game state by one step of `dt`.
///
/// `dt` is the fixed integration step from tuning, not the measured frame
/// time. Events from the previous tick are cleared first.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();
    state.time_ticks += 1;

    apply_input(state, input);

    let tuning = &state.tuning;
    state.charge.tick(tuning.charge_tick, tuning.charge_max);

    // Integrate enemies first, then players
    for body in state.enemies.iter_mut().chain(state.players.iter_mut()) {
        body.integrate(dt, tuning.friction_coefficient, tuning.stop_threshold);
    }

    // Walls: players first, then enemies
    let world = Vec2::new(tuning.world_width, tuning.world_height);
    for body in state.players.iter_mut().chain(state.enemies.iter_mut()) {
        if body.resolve_boundary(world, tuning.rebound_coefficient).any() {
            state.events.push(GameEvent::WallHit { body: body.id });
        }
    }

    resolve_collisions(state);
}

fn apply_input(state: &mut GameState, input: &TickInput) {
    if let Some(index) = input.select {
        state.charge.select(index, state.players.len());
    }

    if input.charge_start && state.charge.start() {
        log::debug!("Charging player {:?}", state.charge.selected);
    }

    if let Some(target) = input.charge_release {
        let tuning = &state.tuning;
        match state.charge.release(
            target,
            &mut state.players,
            tuning.charge_max,
            tuning.launch_speed_scale,
        ) {
            Ok(Some(launch)) => {
                let speed = launch.vel.length();
                log::debug!("Launched player {} at speed {:.1}", launch.player, speed);
                state.events.push(GameEvent::Launch {
                    player: launch.player,
                    speed,
                });
            }
            Ok(None) => {}
            Err(err) => log::warn!("Launch ignored: {err}"),
        }
    }
}

/// Resolve every pair once: player/enemy, then player/player, then enemy/enemy
fn resolve_collisions(state: &mut GameState) {
    let rebound = state.tuning.rebound_coefficient;
    let events = &mut state.events;

    for player in state.players.iter_mut() {
        for enemy in state.enemies.iter_mut() {
            check_pair(player, enemy, rebound, events);
        }
    }

    for bodies in [&mut state.players, &mut state.enemies] {
        let n = bodies.len();
        for i in 0..n {
            for j in i + 1..n {
                let (a, b) = pair_mut(bodies.as_mut_slice(), i, j);
                check_pair(a, b, rebound, events);
            }
        }
    }
}

fn check_pair(a: &mut Body, b: &mut Body, rebound: f32, events: &mut Vec<GameEvent>) {
    let hit = match resolve_pair(a, b, rebound) {
        Ok(contact) => contact.is_hit(),
        Err(err @ SimError::DegenerateCollision { .. }) => {
            log::debug!("{err}; skipping resolution this tick");
            true
        }
        Err(err) => {
            log::warn!("Unexpected collision error: {err}");
            false
        }
    };
    if hit {
        events.push(GameEvent::Collision { a: a.id, b: b.id });
    }
}
