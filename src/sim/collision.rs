//! Bounding-circle collision detection and per-tick resolution
//!
//! Circles are the sole collision envelope: laser/asteroid and ship/asteroid
//! checks both go through [`circles_intersect`], nothing pixel-accurate.

use glam::Vec2;

use super::state::{Explosion, GameEvent, RunOutcome, RunSession};
use crate::consts::KILL_BONUS;

/// True iff the Euclidean distance between centers is under the radius sum.
#[inline]
pub fn circles_intersect(c1: Vec2, r1: f32, c2: Vec2, r2: f32) -> bool {
    let r = r1 + r2;
    c1.distance_squared(c2) < r * r
}

/// Resolve all collisions for this tick, after every entity has moved.
///
/// Laser/asteroid pairs destroy each other - the asteroid is removed from the
/// world, not recycled - and an entity consumed by one pair cannot match
/// again in the same pass. A ship/asteroid overlap ends the run but leaves
/// the asteroid in place.
pub fn resolve(session: &mut RunSession) {
    let mut laser_used = vec![false; session.lasers.len()];
    let mut asteroid_hit = vec![false; session.asteroids.len()];
    // Explosion centers, collected first to keep the scan borrows simple
    let mut destroyed: Vec<Vec2> = Vec::new();

    for (ai, asteroid) in session.asteroids.iter().enumerate() {
        let (a_pos, a_r) = asteroid.bounding_circle();
        for (li, laser) in session.lasers.iter().enumerate() {
            if laser_used[li] {
                continue;
            }
            let (l_pos, l_r) = laser.bounding_circle();
            if circles_intersect(a_pos, a_r, l_pos, l_r) {
                laser_used[li] = true;
                asteroid_hit[ai] = true;
                destroyed.push(a_pos);
                break;
            }
        }
    }

    let mut li = 0;
    session.lasers.retain(|_| {
        let used = laser_used[li];
        li += 1;
        !used
    });
    let mut ai = 0;
    session.asteroids.retain(|_| {
        let hit = asteroid_hit[ai];
        ai += 1;
        !hit
    });

    for center in destroyed {
        session.explosions.push(Explosion::new(center));
        session.bonus += KILL_BONUS;
        session.push_event(GameEvent::HazardDestroyed);
    }

    // Ship check runs against the survivors; the offending asteroid stays.
    let (p_pos, p_r) = session.player.bounding_circle();
    let ship_hit = session.asteroids.iter().any(|a| {
        let (a_pos, a_r) = a.bounding_circle();
        circles_intersect(p_pos, p_r, a_pos, a_r)
    });
    if ship_hit {
        session.outcome = RunOutcome::PlayerDestroyed;
        session.explosions.push(Explosion::new(p_pos));
        session.push_event(GameEvent::PlayerDestroyed);
    }
}
