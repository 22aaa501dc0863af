//! Game state and core simulation types
//!
//! Everything a presentation layer needs to draw or replay a session lives here.

use std::fmt;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::charge::ChargeController;
use super::spawn::{spawn_enemies, spawn_players};
use crate::error::SimError;
use crate::tuning::Tuning;

/// Which collection a body belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    /// Launchable by the player
    Player,
    /// Target piece, only moves when struck
    Enemy,
}

/// Stable identity of a body: its kind plus its index in that collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyId {
    pub kind: BodyKind,
    pub index: usize,
}

impl BodyId {
    pub fn player(index: usize) -> Self {
        Self {
            kind: BodyKind::Player,
            index,
        }
    }

    pub fn enemy(index: usize) -> Self {
        Self {
            kind: BodyKind::Enemy,
            index,
        }
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            BodyKind::Player => write!(f, "player {}", self.index),
            BodyKind::Enemy => write!(f, "enemy {}", self.index),
        }
    }
}

/// A circular body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: BodyId,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Not used by collision response; all bodies exchange velocity equally
    pub mass: f32,
    /// Skips integration until a collision or launch wakes the body
    pub stopped: bool,
}

impl Body {
    /// Create a body at rest. `radius` must be positive.
    pub fn new(id: BodyId, pos: Vec2, radius: f32, mass: f32) -> Self {
        debug_assert!(radius > 0.0, "body radius must be positive");
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            radius,
            mass,
            stopped: true,
        }
    }

    /// Set a new velocity and wake the body
    pub fn apply_impulse(&mut self, vel: Vec2) {
        self.vel = vel;
        self.stopped = false;
    }
}

/// Events produced during a tick, for audio and effects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Bounding boxes of two bodies overlapped
    Collision { a: BodyId, b: BodyId },
    /// A body rebounded off one or both walls
    WallHit { body: BodyId },
    /// A player was launched
    Launch { player: usize, speed: f32 },
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the enemy layout was generated from
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Constants this world was built with
    pub tuning: Tuning,
    /// Player bodies, indexable by selection
    pub players: Vec<Body>,
    /// Enemy bodies
    pub enemies: Vec<Body>,
    /// Press/hold/release launch state
    pub charge: ChargeController,
    /// Events raised by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Build a world from validated tuning, placing enemies with the tuning seed
    pub fn new(tuning: Tuning) -> Result<Self, SimError> {
        tuning.validate()?;

        let mut rng = Pcg32::seed_from_u64(tuning.seed);
        let enemies = spawn_enemies(&tuning, &mut rng)?;
        let players = spawn_players(&tuning);

        log::info!(
            "World {}x{} ready: {} players, {} enemies (seed {})",
            tuning.world_width,
            tuning.world_height,
            players.len(),
            enemies.len(),
            tuning.seed
        );

        Ok(Self {
            seed: tuning.seed,
            time_ticks: 0,
            tuning,
            players,
            enemies,
            charge: ChargeController::default(),
            events: Vec::new(),
        })
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        match id.kind {
            BodyKind::Player => self.players.get(id.index),
            BodyKind::Enemy => self.enemies.get(id.index),
        }
    }

    /// Fill level of the charge bar, 0 to 1
    pub fn charge_ratio(&self) -> f32 {
        self.charge.ratio(self.tuning.charge_max)
    }

    /// Whether every body has zero velocity.
    ///
    /// Bodies resting with overlapping bounding boxes get woken by the pair
    /// resolver each tick, so `stopped` alone does not mean the world is still.
    pub fn is_at_rest(&self) -> bool {
        self.players
            .iter()
            .chain(&self.enemies)
            .all(|b| b.vel == Vec2::ZERO)
    }

    /// Read-only view handed to rendering/audio after a tick
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.time_ticks,
            bodies: self
                .players
                .iter()
                .chain(&self.enemies)
                .map(|b| BodySnapshot {
                    id: b.id,
                    pos: b.pos,
                    vel: b.vel,
                    stopped: b.stopped,
                })
                .collect(),
            events: self.events.clone(),
            charge_ratio: self.charge_ratio(),
            selected: self.charge.selected,
        }
    }
}

/// Per-body output of a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodySnapshot {
    pub id: BodyId,
    pub pos: Vec2,
    pub vel: Vec2,
    pub stopped: bool,
}

/// Everything the presentation layer reads after a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub bodies: Vec<BodySnapshot>,
    pub events: Vec<GameEvent>,
    pub charge_ratio: f32,
    pub selected: Option<usize>,
}
