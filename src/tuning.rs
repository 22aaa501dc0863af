//! Data-driven physics tuning
//!
//! Every constant the simulation reads lives here. Defaults come from
//! [`crate::consts`]; a JSON file may override any subset of fields.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::error::SimError;
use crate::Rect;

/// Failure to load a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] SimError),
}

/// Simulation tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === World ===
    pub world_width: f32,
    pub world_height: f32,
    /// Enemy spawn area (not a runtime constraint)
    pub center_zone: Rect,
    /// Where every player starts
    pub player_spawn: Vec2,

    // === Bodies ===
    pub player_count: usize,
    pub enemy_count: usize,
    pub player_radius: f32,
    pub enemy_radius: f32,
    /// Carried on each body; collision response does not weight by mass
    pub player_mass: f32,
    pub enemy_mass: f32,

    // === Physics ===
    pub rebound_coefficient: f32,
    pub friction_coefficient: f32,
    pub stop_threshold: f32,
    /// Integration step per tick (fixed, independent of frame time)
    pub sim_dt: f32,

    // === Charge/launch ===
    pub charge_tick: f32,
    pub charge_max: f32,
    pub launch_speed_scale: f32,

    // === Setup ===
    pub seed: u64,
    pub max_spawn_attempts: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            center_zone: Rect::new(
                Vec2::new(CENTER_ZONE_X, CENTER_ZONE_Y),
                Vec2::new(CENTER_ZONE_W, CENTER_ZONE_H),
            ),
            player_spawn: Vec2::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT - PLAYER_SPAWN_INSET),

            player_count: PLAYER_COUNT,
            enemy_count: ENEMY_COUNT,
            player_radius: PLAYER_RADIUS,
            enemy_radius: ENEMY_RADIUS,
            player_mass: PLAYER_MASS,
            enemy_mass: ENEMY_MASS,

            rebound_coefficient: REBOUND_COEFFICIENT,
            friction_coefficient: FRICTION_COEFFICIENT,
            stop_threshold: STOP_THRESHOLD,
            sim_dt: SIM_DT,

            charge_tick: CHARGE_TICK,
            charge_max: CHARGE_MAX,
            launch_speed_scale: LAUNCH_SPEED_SCALE,

            seed: 0,
            max_spawn_attempts: MAX_SPAWN_ATTEMPTS,
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), SimError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidTuning {
            field,
            value,
            reason: "must be positive and finite",
        })
    }
}

fn unit(field: &'static str, value: f32) -> Result<(), SimError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SimError::InvalidTuning {
            field,
            value,
            reason: "must be within [0, 1]",
        })
    }
}

impl Tuning {
    /// World bounds as a rectangle anchored at the origin
    pub fn bounds(&self) -> Rect {
        Rect::new(Vec2::ZERO, Vec2::new(self.world_width, self.world_height))
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<(), SimError> {
        positive("world_width", self.world_width)?;
        positive("world_height", self.world_height)?;
        positive("player_radius", self.player_radius)?;
        positive("enemy_radius", self.enemy_radius)?;
        positive("player_mass", self.player_mass)?;
        positive("enemy_mass", self.enemy_mass)?;
        positive("sim_dt", self.sim_dt)?;
        positive("charge_tick", self.charge_tick)?;
        positive("charge_max", self.charge_max)?;
        positive("stop_threshold", self.stop_threshold)?;
        unit("rebound_coefficient", self.rebound_coefficient)?;
        unit("friction_coefficient", self.friction_coefficient)?;
        if self.friction_coefficient >= 1.0 {
            return Err(SimError::InvalidTuning {
                field: "friction_coefficient",
                value: self.friction_coefficient,
                reason: "must be below 1 so bodies come to rest",
            });
        }
        if !(self.launch_speed_scale >= 0.0 && self.launch_speed_scale.is_finite()) {
            return Err(SimError::InvalidTuning {
                field: "launch_speed_scale",
                value: self.launch_speed_scale,
                reason: "must be non-negative and finite",
            });
        }
        if self.player_count == 0 {
            return Err(SimError::InvalidTuning {
                field: "player_count",
                value: 0.0,
                reason: "at least one player is required",
            });
        }

        let max_radius = self.player_radius.max(self.enemy_radius);
        if self.world_width.min(self.world_height) <= 2.0 * max_radius {
            return Err(SimError::InvalidTuning {
                field: "world_width",
                value: self.world_width.min(self.world_height),
                reason: "world must be wider and taller than a body",
            });
        }

        if !self.bounds().contains_rect(&self.center_zone) {
            return Err(SimError::InvalidTuning {
                field: "center_zone",
                value: self.center_zone.size.min_element(),
                reason: "must lie inside the world bounds",
            });
        }
        if self.enemy_count > 0 && self.center_zone.size.min_element() <= 2.0 * self.enemy_radius {
            return Err(SimError::InvalidTuning {
                field: "center_zone",
                value: self.center_zone.size.min_element(),
                reason: "too small to hold an enemy",
            });
        }
        Ok(())
    }

    /// Parse tuning from JSON text; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
