//! Charge and launch controller
//!
//! Press to start charging the selected player, hold to build charge, release
//! to launch it toward the cursor with speed proportional to the charge held.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Body;
use crate::error::SimError;

/// Controller phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChargePhase {
    #[default]
    Idle,
    Charging,
}

/// A completed launch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    pub player: usize,
    pub vel: Vec2,
}

/// Charge state for the launch gesture
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChargeController {
    pub phase: ChargePhase,
    /// Seconds of charge accumulated, within `[0, charge_max]`
    pub elapsed: f32,
    /// Player index that will be launched
    pub selected: Option<usize>,
}

impl ChargeController {
    #[inline]
    pub fn is_charging(&self) -> bool {
        self.phase == ChargePhase::Charging
    }

    /// Choose which player to launch.
    ///
    /// Ignored while charging so the body being aimed cannot change mid-gesture,
    /// and ignored for indices past the last player. Returns whether the
    /// selection changed.
    pub fn select(&mut self, index: usize, player_count: usize) -> bool {
        if self.is_charging() {
            log::debug!("Ignoring selection of player {index} during charge");
            return false;
        }
        if index >= player_count {
            log::warn!("Ignoring selection of player {index}: only {player_count} players");
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// Begin charging. Requires a selected player; resets accumulated charge.
    pub fn start(&mut self) -> bool {
        if self.selected.is_none() {
            return false;
        }
        self.phase = ChargePhase::Charging;
        self.elapsed = 0.0;
        true
    }

    /// Accumulate one tick of charge, clamped to `charge_max`
    pub fn tick(&mut self, increment: f32, charge_max: f32) {
        if self.is_charging() {
            self.elapsed = (self.elapsed + increment).min(charge_max);
        }
    }

    /// Fill level of the charge bar, 0 to 1
    pub fn ratio(&self, charge_max: f32) -> f32 {
        self.elapsed / charge_max
    }

    /// Release the charge toward `target`.
    ///
    /// Returns `Ok(None)` if no charge was in progress. The controller returns
    /// to idle whether or not the launch succeeds.
    pub fn release(
        &mut self,
        target: Vec2,
        players: &mut [Body],
        charge_max: f32,
        launch_speed_scale: f32,
    ) -> Result<Option<Launch>, SimError> {
        if !self.is_charging() {
            return Ok(None);
        }
        self.phase = ChargePhase::Idle;

        let player_count = players.len();
        let (index, body) = self
            .selected
            .and_then(|i| players.get_mut(i).map(|b| (i, b)))
            .ok_or(SimError::NoActiveSelection {
                selected: self.selected,
                player_count,
            })?;

        let vel = launch_velocity(body.pos, target, self.elapsed, charge_max, launch_speed_scale);
        body.apply_impulse(vel);
        Ok(Some(Launch { player: index, vel }))
    }
}

/// Velocity toward `target` scaled by the fraction of charge held.
/// A target on top of `from` yields zero velocity.
pub fn launch_velocity(
    from: Vec2,
    target: Vec2,
    elapsed: f32,
    charge_max: f32,
    launch_speed_scale: f32,
) -> Vec2 {
    let direction = (target - from).normalize_or_zero();
    direction * (elapsed / charge_max * launch_speed_scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::BodyId;
    use proptest::prelude::*;

    fn players() -> Vec<Body> {
        (0..4)
            .map(|i| Body::new(BodyId::player(i), Vec2::new(960.0, 1030.0), 25.0, 1.0))
            .collect()
    }

    #[test]
    fn test_start_requires_selection() {
        let mut charge = ChargeController::default();
        assert!(!charge.start());
        assert_eq!(charge.phase, ChargePhase::Idle);

        assert!(charge.select(2, 4));
        assert!(charge.start());
        assert!(charge.is_charging());
    }

    #[test]
    fn test_start_resets_elapsed() {
        let mut charge = ChargeController {
            elapsed: 3.0,
            selected: Some(0),
            ..Default::default()
        };
        charge.start();
        assert_eq!(charge.elapsed, 0.0);
    }

    #[test]
    fn test_select_during_charge_is_ignored() {
        let mut charge = ChargeController::default();
        charge.select(1, 4);
        charge.start();
        assert!(!charge.select(3, 4));
        assert_eq!(charge.selected, Some(1));
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut charge = ChargeController::default();
        charge.select(0, 4);
        assert!(!charge.select(4, 4));
        assert_eq!(charge.selected, Some(0));
    }

    #[test]
    fn test_tick_only_while_charging() {
        let mut charge = ChargeController::default();
        charge.tick(0.016, 4.0);
        assert_eq!(charge.elapsed, 0.0);

        charge.select(0, 4);
        charge.start();
        charge.tick(0.016, 4.0);
        charge.tick(0.016, 4.0);
        assert!((charge.elapsed - 0.032).abs() < 1e-6);
        assert!((charge.ratio(4.0) - 0.008).abs() < 1e-6);
    }

    #[test]
    fn test_full_charge_launches_at_scale() {
        let mut bodies = players();
        let mut charge = ChargeController::default();
        charge.select(0, 4);
        charge.start();
        for _ in 0..1000 {
            charge.tick(0.016, 4.0);
        }
        assert_eq!(charge.elapsed, 4.0);

        let launch = charge
            .release(Vec2::new(960.0, 0.0), &mut bodies, 4.0, 250.0)
            .unwrap()
            .unwrap();
        assert_eq!(launch.player, 0);
        assert!((launch.vel.length() - 250.0).abs() < 1e-3);
        assert!(launch.vel.y < 0.0);
        assert!(!bodies[0].stopped);
        assert_eq!(bodies[0].vel, launch.vel);
        assert!(bodies[1].stopped);
        assert_eq!(charge.phase, ChargePhase::Idle);
    }

    #[test]
    fn test_zero_charge_launches_at_rest_speed() {
        let mut bodies = players();
        let mut charge = ChargeController::default();
        charge.select(1, 4);
        charge.start();
        let launch = charge
            .release(Vec2::new(0.0, 0.0), &mut bodies, 4.0, 250.0)
            .unwrap()
            .unwrap();
        assert_eq!(launch.vel, Vec2::ZERO);
        assert!(!bodies[1].stopped);
    }

    #[test]
    fn test_release_on_body_gives_zero_velocity() {
        let vel = launch_velocity(Vec2::new(10.0, 10.0), Vec2::new(10.0, 10.0), 4.0, 4.0, 250.0);
        assert_eq!(vel, Vec2::ZERO);
    }

    #[test]
    fn test_release_while_idle_does_nothing() {
        let mut bodies = players();
        let mut charge = ChargeController::default();
        charge.select(0, 4);
        assert_eq!(charge.release(Vec2::ZERO, &mut bodies, 4.0, 250.0), Ok(None));
        assert!(bodies[0].stopped);
    }

    #[test]
    fn test_release_with_stale_selection_fails_and_idles() {
        let mut bodies = players();
        let mut charge = ChargeController {
            phase: ChargePhase::Charging,
            elapsed: 2.0,
            selected: Some(9),
        };
        let err = charge
            .release(Vec2::ZERO, &mut bodies, 4.0, 250.0)
            .unwrap_err();
        assert_eq!(
            err,
            SimError::NoActiveSelection {
                selected: Some(9),
                player_count: 4
            }
        );
        assert_eq!(charge.phase, ChargePhase::Idle);
        assert!(bodies.iter().all(|b| b.stopped));
    }

    proptest! {
        #[test]
        fn prop_charge_never_exceeds_max(ticks in 0usize..2000) {
            let mut charge = ChargeController::default();
            charge.select(0, 1);
            charge.start();
            for _ in 0..ticks {
                charge.tick(0.016, 4.0);
                prop_assert!(charge.elapsed <= 4.0);
            }
            prop_assert!(charge.ratio(4.0) <= 1.0);
        }
    }
}
