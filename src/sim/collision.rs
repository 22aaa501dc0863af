//! Body-vs-body collision detection and response
//!
//! Detection uses each body's bounding square rather than a circle distance
//! test, so corners of the squares can register a hit before the circles
//! touch. Response is an equal-weight velocity exchange damped by the rebound
//! coefficient; mass is ignored.

use glam::Vec2;

use super::state::Body;
use crate::error::SimError;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Bounding square of a body (`pos ± radius`)
    pub fn of(body: &Body) -> Self {
        let half = Vec2::splat(body.radius);
        Self {
            min: body.pos - half,
            max: body.pos + half,
        }
    }

    /// Strict overlap test; boxes that only share an edge do not intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// Outcome of checking one pair of bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Bounding boxes do not overlap
    Miss,
    /// Boxes overlap but the bodies are already moving apart
    Separating,
    /// Velocities were exchanged
    Resolved,
}

impl Contact {
    /// Whether the pair overlapped (and should raise a collision event)
    #[inline]
    pub fn is_hit(&self) -> bool {
        !matches!(self, Contact::Miss)
    }
}

/// Unit vector from `b` toward `a`
pub fn contact_normal(a: &Body, b: &Body) -> Result<Vec2, SimError> {
    let delta = a.pos - b.pos;
    let dist = delta.length();
    if dist == 0.0 {
        return Err(SimError::DegenerateCollision { a: a.id, b: b.id });
    }
    Ok(delta / dist)
}

/// Post-collision velocities for an approaching pair.
///
/// `a' = (a + b + e(b - a)) / 2` and symmetrically for `b`, computed from the
/// pre-collision values of both.
#[inline]
pub fn exchange_velocities(va: Vec2, vb: Vec2, rebound: f32) -> (Vec2, Vec2) {
    let a = 0.5 * (va + vb + rebound * (vb - va));
    let b = 0.5 * (vb + va + rebound * (va - vb));
    (a, b)
}

/// Detect and resolve a collision between two bodies.
///
/// An `Err(DegenerateCollision)` means the boxes overlap but the centers
/// coincide; velocities are left untouched for this tick.
pub fn resolve_pair(a: &mut Body, b: &mut Body, rebound: f32) -> Result<Contact, SimError> {
    if !Aabb::of(a).intersects(&Aabb::of(b)) {
        return Ok(Contact::Miss);
    }

    let normal = contact_normal(a, b)?;
    let relative_vel = a.vel - b.vel;
    if relative_vel.dot(normal) > 0.0 {
        return Ok(Contact::Separating);
    }

    let (va, vb) = exchange_velocities(a.vel, b.vel, rebound);
    a.vel = va;
    b.vel = vb;
    a.stopped = false;
    b.stopped = false;

    log::debug!(
        "Collision {} <-> {}: {} vel {:?} | {} vel {:?}",
        a.id,
        b.id,
        a.id,
        a.vel,
        b.id,
        b.vel
    );

    Ok(Contact::Resolved)
}

/// Mutable references to two distinct elements of a slice (`i < j`)
pub fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    debug_assert!(i < j);
    let (left, right) = items.split_at_mut(j);
    (&mut left[i], &mut right[0])
}
