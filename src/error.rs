//! Simulation error conditions.
//!
//! Only two conditions can arise while ticking (`DegenerateCollision` and
//! `NoActiveSelection`), and both are recoverable: the step logs them and moves
//! on. The remaining variants are construction-time rejections from
//! [`crate::sim::GameState::new`].

use thiserror::Error;

use crate::sim::BodyId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Two overlapping bodies share a center, so no contact normal exists.
    #[error("degenerate collision between {a} and {b}: centers coincide")]
    DegenerateCollision { a: BodyId, b: BodyId },

    /// A launch was requested without a valid selected player.
    #[error("no active selection (selected: {selected:?}, players: {player_count})")]
    NoActiveSelection {
        selected: Option<usize>,
        player_count: usize,
    },

    /// A tuning value is outside its valid range.
    #[error("invalid tuning: {field} = {value} ({reason})")]
    InvalidTuning {
        field: &'static str,
        value: f32,
        reason: &'static str,
    },

    /// Enemy placement ran out of attempts before every enemy was placed.
    #[error("could only place {placed} of {requested} enemies in the center zone")]
    SpawnFailed { placed: usize, requested: usize },
}
