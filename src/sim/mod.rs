//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (players, then enemies, by index)
//! - No rendering, audio or platform dependencies

pub mod charge;
pub mod collision;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod tick;

pub use charge::{ChargeController, ChargePhase, Launch, launch_velocity};
pub use collision::{Aabb, Contact, resolve_pair};
pub use motion::WallHit;
pub use state::{Body, BodyId, BodyKind, BodySnapshot, GameEvent, GameState, Snapshot};
pub use tick::{TickInput, tick};
