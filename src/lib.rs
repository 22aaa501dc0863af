//! Flick Arena - a charge-and-flick circle physics toy
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, walls, collisions, charge/launch)
//! - `tuning`: Data-driven configuration of every physics constant
//! - `error`: Error conditions raised by the simulation core
//! - `highscores`: Score file append/scan used by the runner

pub mod error;
pub mod highscores;
pub mod sim;
pub mod tuning;

pub use error::SimError;
pub use highscores::ScoreBook;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Fixed integration timestep, applied every tick regardless of frame time
    pub const SIM_DT: f32 = 0.1;
    /// Charge added per tick while the launch button is held (~60 Hz frame)
    pub const CHARGE_TICK: f32 = 0.016;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 1920.0;
    pub const WORLD_HEIGHT: f32 = 1080.0;

    /// Center zone (enemy spawn area) top-left corner and size
    pub const CENTER_ZONE_X: f32 = 710.0;
    pub const CENTER_ZONE_Y: f32 = 290.0;
    pub const CENTER_ZONE_W: f32 = 500.0;
    pub const CENTER_ZONE_H: f32 = 500.0;

    /// Body defaults
    pub const PLAYER_RADIUS: f32 = 25.0;
    pub const ENEMY_RADIUS: f32 = 25.0;
    pub const PLAYER_MASS: f32 = 1.0;
    pub const ENEMY_MASS: f32 = 1.0;
    pub const PLAYER_COUNT: usize = 4;
    pub const ENEMY_COUNT: usize = 6;
    /// Player spawn sits this far above the bottom edge, horizontally centered
    pub const PLAYER_SPAWN_INSET: f32 = 50.0;

    /// Energy kept on wall and body collisions
    pub const REBOUND_COEFFICIENT: f32 = 0.8;
    /// Per-tick velocity decay
    pub const FRICTION_COEFFICIENT: f32 = 0.98;
    /// Per-axis speed under which a body snaps to stopped
    pub const STOP_THRESHOLD: f32 = 0.01;

    /// Seconds of charge for a full-power launch
    pub const CHARGE_MAX: f32 = 4.0;
    /// Launch speed at full charge
    pub const LAUNCH_SPEED_SCALE: f32 = 250.0;

    /// Rejection-sampling budget for placing all enemies
    pub const MAX_SPAWN_ATTEMPTS: u32 = 10_000;
}

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Whether `other` lies entirely inside this rectangle
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.min.cmpge(self.min).all() && other.max().cmple(self.max()).all()
    }
}
