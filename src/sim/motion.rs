//! Per-body motion: friction integration and wall rebound

use glam::Vec2;

use super::state::Body;

/// Which walls a body rebounded off this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHit {
    pub x: bool,
    pub y: bool,
}

impl WallHit {
    #[inline]
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

impl Body {
    /// Advance position by one step and decay velocity.
    ///
    /// Friction is a per-step multiplier, so speed decays exponentially. Once
    /// both components fall under `stop_threshold` the body snaps to rest.
    pub fn integrate(&mut self, dt: f32, friction: f32, stop_threshold: f32) {
        if self.stopped {
            return;
        }
        self.pos += self.vel * dt;
        self.vel *= friction;
        if self.vel.x.abs() < stop_threshold && self.vel.y.abs() < stop_threshold {
            self.stopped = true;
            self.vel = Vec2::ZERO;
        }
    }

    /// Reflect off the walls of `[0, size.x] x [0, size.y]`.
    ///
    /// Each axis is handled independently: the velocity component is negated and
    /// damped by `rebound`, then the center is clamped so the bounding square
    /// sits back inside the world.
    pub fn resolve_boundary(&mut self, size: Vec2, rebound: f32) -> WallHit {
        let r = self.radius;
        let mut hit = WallHit::default();

        if self.pos.x - r < 0.0 || self.pos.x + r > size.x {
            self.vel.x = -self.vel.x * rebound;
            self.pos.x = self.pos.x.min(size.x - r).max(r);
            hit.x = true;
        }

        if self.pos.y - r < 0.0 || self.pos.y + r > size.y {
            self.vel.y = -self.vel.y * rebound;
            self.pos.y = self.pos.y.min(size.y - r).max(r);
            hit.y = true;
        }

        hit
    }
}
