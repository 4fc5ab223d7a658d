//! Asteroid spawning and the time-based difficulty ramp
//!
//! Difficulty is a pair of monotonic step functions over the session tick
//! counter: asteroid speed climbs, the spawn interval shrinks to a floor.

use glam::Vec2;
use rand::Rng;

use super::state::{Asteroid, RunSession, SizeClass, WorldBounds};
use crate::consts::*;

/// A step function over elapsed ticks: `initial`, stepped by `step` once per
/// `window_ticks`, clamped at `limit`.
///
/// Monotonic by construction - non-decreasing for a positive step,
/// non-increasing for a negative one.
#[derive(Debug, Clone, Copy)]
pub struct StepRamp {
    pub initial: f32,
    pub step: f32,
    pub window_ticks: u64,
    pub limit: f32,
}

impl StepRamp {
    pub fn at(&self, ticks: u64) -> f32 {
        let windows = (ticks / self.window_ticks) as f32;
        let value = self.initial + self.step * windows;
        if self.step >= 0.0 {
            value.min(self.limit)
        } else {
            value.max(self.limit)
        }
    }
}

/// Difficulty parameters for one run
#[derive(Debug, Clone, Copy)]
pub struct DifficultyConfig {
    /// Asteroid speed multiplier over elapsed run time
    pub speed: StepRamp,
    /// Ticks between periodic spawns; floored so it never reaches zero
    pub spawn_interval: StepRamp,
    /// Population at run start
    pub initial_asteroids: usize,
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            // +0.3 every 5 seconds
            speed: StepRamp {
                initial: 1.5,
                step: 0.3,
                window_ticks: 300,
                limit: f32::MAX,
            },
            // 1500 ms, shrinking by 100 ms every 3 seconds, floored at 250 ms
            spawn_interval: StepRamp {
                initial: 90.0,
                step: -6.0,
                window_ticks: 180,
                limit: 15.0,
            },
            initial_asteroids: 10,
        }
    }
}

/// Pick a spawn point in the buffer band just outside one of the four edges,
/// so new asteroids drift in instead of popping into view.
pub fn edge_position(rng: &mut impl Rng, bounds: &WorldBounds) -> Vec2 {
    let b = SPAWN_BUFFER;
    match rng.random_range(0..4) {
        // top
        0 => Vec2::new(
            rng.random_range(-b..bounds.width + b),
            rng.random_range(-2.0 * b..-b),
        ),
        // bottom
        1 => Vec2::new(
            rng.random_range(-b..bounds.width + b),
            rng.random_range(bounds.height + b..bounds.height + 2.0 * b),
        ),
        // left
        2 => Vec2::new(
            rng.random_range(-2.0 * b..-b),
            rng.random_range(-b..bounds.height + b),
        ),
        // right
        _ => Vec2::new(
            rng.random_range(bounds.width + b..bounds.width + 2.0 * b),
            rng.random_range(-b..bounds.height + b),
        ),
    }
}

/// Per-axis velocity, resampled until the asteroid actually moves.
pub fn sample_velocity(rng: &mut impl Rng, multiplier: f32) -> Vec2 {
    loop {
        let base: f32 = rng.random_range(2.0..4.0);
        let vel = Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0))
            * base
            * multiplier;
        if vel.x.abs() > f32::EPSILON || vel.y.abs() > f32::EPSILON {
            return vel;
        }
    }
}

fn sample_size(rng: &mut impl Rng) -> SizeClass {
    match rng.random_range(0..3) {
        0 => SizeClass::Large,
        1 => SizeClass::Medium,
        _ => SizeClass::Small,
    }
}

fn new_asteroid(rng: &mut impl Rng, bounds: &WorldBounds, multiplier: f32) -> Asteroid {
    Asteroid {
        pos: edge_position(rng, bounds),
        vel: sample_velocity(rng, multiplier),
        size: sample_size(rng),
        spin: 0.0,
        spin_rate: rng.random_range(-8..8) as f32,
        sprite_seed: rng.random(),
    }
}

/// Seed the starting population.
pub fn populate_initial(session: &mut RunSession) {
    let multiplier = session.difficulty.speed.at(0);
    for _ in 0..session.difficulty.initial_asteroids {
        let asteroid = new_asteroid(&mut session.rng, &session.bounds, multiplier);
        session.asteroids.push(asteroid);
    }
}

/// Spawn one asteroid when the interval has elapsed, and reset the timer.
pub fn maybe_spawn(session: &mut RunSession) {
    let now = session.elapsed_ticks;
    let interval = session.difficulty.spawn_interval.at(now) as u64;
    if now - session.last_spawn_tick > interval {
        session.last_spawn_tick = now;
        let multiplier = session.difficulty.speed.at(now);
        let asteroid = new_asteroid(&mut session.rng, &session.bounds, multiplier);
        session.asteroids.push(asteroid);
    }
}

/// Teleport an off-world asteroid back to a fresh edge with fresh velocity
/// and a fresh sprite. The population never shrinks through recycling.
pub fn recycle(
    asteroid: &mut Asteroid,
    rng: &mut impl Rng,
    bounds: &WorldBounds,
    multiplier: f32,
) {
    asteroid.pos = edge_position(rng, bounds);
    asteroid.vel = sample_velocity(rng, multiplier);
    asteroid.sprite_seed = rng.random();
}
