//! World setup: player and enemy placement

use glam::Vec2;
use rand::Rng;

use super::state::{Body, BodyId};
use crate::error::SimError;
use crate::tuning::Tuning;

/// All players start stacked on the spawn point
pub fn spawn_players(tuning: &Tuning) -> Vec<Body> {
    (0..tuning.player_count)
        .map(|i| {
            Body::new(
                BodyId::player(i),
                tuning.player_spawn,
                tuning.player_radius,
                tuning.player_mass,
            )
        })
        .collect()
}

/// Scatter enemies inside the center zone without overlapping each other.
///
/// Candidates are drawn uniformly over the part of the zone where a full
/// enemy fits and rejected if they come within two radii of an earlier one.
pub fn spawn_enemies<R: Rng>(tuning: &Tuning, rng: &mut R) -> Result<Vec<Body>, SimError> {
    let r = tuning.enemy_radius;
    let zone = tuning.center_zone;
    let lo = zone.min + Vec2::splat(r);
    let hi = zone.max() - Vec2::splat(r);
    let min_dist = 2.0 * r;

    let mut enemies: Vec<Body> = Vec::with_capacity(tuning.enemy_count);
    let mut attempts = 0;

    while enemies.len() < tuning.enemy_count {
        if attempts >= tuning.max_spawn_attempts {
            log::warn!(
                "Enemy placement gave up after {} attempts ({} of {} placed)",
                attempts,
                enemies.len(),
                tuning.enemy_count
            );
            return Err(SimError::SpawnFailed {
                placed: enemies.len(),
                requested: tuning.enemy_count,
            });
        }
        attempts += 1;

        let candidate = Vec2::new(rng.random_range(lo.x..=hi.x), rng.random_range(lo.y..=hi.y));
        if enemies.iter().any(|e| e.pos.distance(candidate) < min_dist) {
            continue;
        }

        let id = BodyId::enemy(enemies.len());
        enemies.push(Body::new(id, candidate, r, tuning.enemy_mass));
    }

    log::debug!("Placed {} enemies in {} attempts", enemies.len(), attempts);
    Ok(enemies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rect;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_players_share_spawn_point() {
        let tuning = Tuning::default();
        let players = spawn_players(&tuning);
        assert_eq!(players.len(), tuning.player_count);
        assert!(players.iter().all(|p| p.pos == tuning.player_spawn && p.stopped));
    }

    #[test]
    fn test_enemies_inside_zone_and_apart() {
        let tuning = Tuning {
            enemy_count: 12,
            ..Default::default()
        };
        for seed in 0..20 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let enemies = spawn_enemies(&tuning, &mut rng).unwrap();
            assert_eq!(enemies.len(), 12);

            for (i, e) in enemies.iter().enumerate() {
                assert_eq!(e.id, BodyId::enemy(i));
                let bounds = Rect::new(e.pos - Vec2::splat(e.radius), Vec2::splat(2.0 * e.radius));
                assert!(tuning.center_zone.contains_rect(&bounds));
                for other in &enemies[i + 1..] {
                    assert!(e.pos.distance(other.pos) >= 2.0 * tuning.enemy_radius);
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let tuning = Tuning::default();
        let a = spawn_enemies(&tuning, &mut Pcg32::seed_from_u64(7)).unwrap();
        let b = spawn_enemies(&tuning, &mut Pcg32::seed_from_u64(7)).unwrap();
        let c = spawn_enemies(&tuning, &mut Pcg32::seed_from_u64(8)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_overcrowded_zone_fails() {
        // A 120x120 zone cannot hold 20 non-overlapping radius-25 enemies
        let tuning = Tuning {
            center_zone: Rect::new(Vec2::new(100.0, 100.0), Vec2::new(120.0, 120.0)),
            enemy_count: 20,
            max_spawn_attempts: 500,
            ..Default::default()
        };
        let result = spawn_enemies(&tuning, &mut Pcg32::seed_from_u64(1));
        assert!(matches!(
            result,
            Err(SimError::SpawnFailed { requested: 20, .. })
        ));
    }
}
