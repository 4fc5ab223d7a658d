//! Game state and core simulation types
//!
//! Everything that changes during a run lives here, owned by one
//! [`RunSession`] and mutated only by the tick loop.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::spawn::{self, DifficultyConfig};
use super::tick::TickInput;
use crate::consts::*;
use crate::{heading_vec, wrap_angle};

/// Sound-relevant events produced while ticking, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ship moved under key input (rate-limited to once per 100 ms)
    Moved,
    /// Laser fired
    Fired,
    /// Asteroid shot down
    HazardDestroyed,
    /// Ship collided with an asteroid
    PlayerDestroyed,
}

/// How the run ended, if it has
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Ongoing,
    PlayerDestroyed,
}

/// Visible world rectangle; origin top-left, y down.
///
/// Resizable at runtime - all clamp and spawn geometry is re-derived from the
/// current value, never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Heading in degrees, wraps mod 360; rotates the sprite and the laser
    /// muzzle but never the translation.
    pub heading: f32,
    /// Energy for shooting lasers, always within [0, 100]
    pub energy: f32,
    /// Tick of the last movement sound, for the rate limit
    last_move_tick: Option<u64>,
}

impl Player {
    pub fn new(bounds: &WorldBounds) -> Self {
        Self {
            pos: bounds.center(),
            vel: Vec2::ZERO,
            heading: 0.0,
            energy: ENERGY_MAX,
            last_move_tick: None,
        }
    }

    /// Set velocity and heading from the held keys.
    ///
    /// Diagonal input is intentionally not normalized, so diagonal travel is
    /// faster than axis-aligned travel. Returns true when a movement sound
    /// should fire this tick.
    pub fn apply_input(&mut self, input: &TickInput, now: u64) -> bool {
        self.vel = Vec2::ZERO;
        let mut moving = false;
        if input.left {
            self.vel.x = -SHIP_SPEED;
            moving = true;
        }
        if input.right {
            self.vel.x = SHIP_SPEED;
            moving = true;
        }
        if input.up {
            self.vel.y = -SHIP_SPEED;
            moving = true;
        }
        if input.down {
            self.vel.y = SHIP_SPEED;
            moving = true;
        }

        let rot = if input.rotate_ccw {
            SHIP_ROT_RATE
        } else if input.rotate_cw {
            -SHIP_ROT_RATE
        } else {
            0.0
        };
        self.heading = wrap_angle(self.heading + rot);

        if moving
            && self
                .last_move_tick
                .is_none_or(|t| now - t > MOVE_SOUND_INTERVAL_TICKS)
        {
            self.last_move_tick = Some(now);
            return true;
        }
        false
    }

    /// Translate, then clamp so the sprite square stays fully on screen.
    pub fn integrate(&mut self, bounds: &WorldBounds) {
        self.pos += self.vel;
        self.pos.x = self
            .pos
            .x
            .max(SHIP_HALF_EXTENT)
            .min(bounds.width - SHIP_HALF_EXTENT);
        self.pos.y = self
            .pos
            .y
            .max(SHIP_HALF_EXTENT)
            .min(bounds.height - SHIP_HALF_EXTENT);
    }

    /// Slow regeneration, capped at the maximum.
    pub fn regenerate_energy(&mut self) {
        if self.energy < ENERGY_MAX {
            self.energy = (self.energy + ENERGY_REGEN_PER_TICK).min(ENERGY_MAX);
        }
    }

    /// Laser muzzle: a fixed local offset rotated by the current heading.
    pub fn nose_pos(&self) -> Vec2 {
        self.pos + heading_vec(self.heading) * SHIP_NOSE_OFFSET
    }

    /// Spawn a laser from the nose, or `None` when energy is short.
    /// A failed shot spends nothing.
    pub fn shoot(&mut self) -> Option<Laser> {
        if self.energy < SHOT_ENERGY_COST {
            return None;
        }
        self.energy -= SHOT_ENERGY_COST;
        Some(Laser::new(self.nose_pos(), self.heading))
    }

    pub fn bounding_circle(&self) -> (Vec2, f32) {
        (self.pos, SHIP_RADIUS)
    }
}

/// A laser beam, travelling along the heading it was fired at
#[derive(Debug, Clone)]
pub struct Laser {
    pub pos: Vec2,
    /// Heading in degrees, fixed at fire time
    pub heading: f32,
    /// Beam glow animation frame
    pub frame: u32,
    age: u64,
}

impl Laser {
    pub fn new(pos: Vec2, heading: f32) -> Self {
        Self {
            pos,
            heading,
            frame: 0,
            age: 0,
        }
    }

    pub fn update(&mut self) {
        self.pos += heading_vec(self.heading) * LASER_SPEED;
        self.age += 1;
        if self.age % ANIM_INTERVAL_TICKS == 0 {
            self.frame = (self.frame + 1) % LASER_FRAMES;
        }
    }

    /// Lifetime is implied by the play area: off screen means gone.
    pub fn is_on_screen(&self, bounds: &WorldBounds) -> bool {
        self.pos.x > -LASER_HALF_LENGTH
            && self.pos.x < bounds.width + LASER_HALF_LENGTH
            && self.pos.y > -LASER_HALF_LENGTH
            && self.pos.y < bounds.height + LASER_HALF_LENGTH
    }

    pub fn bounding_circle(&self) -> (Vec2, f32) {
        (self.pos, LASER_RADIUS)
    }
}

/// Asteroid size classes; radius is a pure function of the class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    Large,
    Medium,
    Small,
}

impl SizeClass {
    pub fn radius(self) -> f32 {
        match self {
            SizeClass::Large => 40.0,
            SizeClass::Medium => 30.0,
            SizeClass::Small => 20.0,
        }
    }
}

/// An asteroid drifting through (and around) the play field
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: SizeClass,
    /// Visual spin in degrees
    pub spin: f32,
    /// Degrees per animation step, sampled in -8..8
    pub spin_rate: f32,
    /// Seed for the renderer's crater pattern; refreshed on recycle
    pub sprite_seed: u32,
}

impl Asteroid {
    /// Advance spin on the 50 ms animation cadence, then translate.
    pub fn update(&mut self, now: u64) {
        if now % ANIM_INTERVAL_TICKS == 0 {
            self.spin = wrap_angle(self.spin + self.spin_rate);
        }
        self.pos += self.vel;
    }

    /// True when the asteroid is more than `margin` outside the bounds.
    pub fn is_beyond(&self, bounds: &WorldBounds, margin: f32) -> bool {
        let r = self.size.radius();
        self.pos.x + r < -margin
            || self.pos.x - r > bounds.width + margin
            || self.pos.y + r < -margin
            || self.pos.y - r > bounds.height + margin
    }

    pub fn bounding_circle(&self) -> (Vec2, f32) {
        (self.pos, self.size.radius())
    }
}

/// Explosion animation, self-terminating after its frame sequence
#[derive(Debug, Clone)]
pub struct Explosion {
    pub pos: Vec2,
    pub frame: u32,
    age: u64,
}

impl Explosion {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            frame: 0,
            age: 0,
        }
    }

    pub fn update(&mut self) {
        self.age += 1;
        if self.age % ANIM_INTERVAL_TICKS == 0 {
            self.frame += 1;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.frame >= EXPLOSION_FRAMES
    }
}

/// Complete state of one playthrough.
///
/// Constructed fresh on every Playing entry; Playing and Paused share it.
#[derive(Debug, Clone)]
pub struct RunSession {
    pub bounds: WorldBounds,
    pub player: Player,
    pub lasers: Vec<Laser>,
    pub asteroids: Vec<Asteroid>,
    pub explosions: Vec<Explosion>,
    /// Single monotonic time source; every timer in the run derives from it
    pub elapsed_ticks: u64,
    /// Destruction bonus, tracked separately from the time baseline
    pub bonus: u64,
    pub outcome: RunOutcome,
    pub paused: bool,
    pub difficulty: DifficultyConfig,
    /// Tick of the last periodic spawn
    pub last_spawn_tick: u64,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    events: Vec<GameEvent>,
}

impl RunSession {
    pub fn new(seed: u64, bounds: WorldBounds, difficulty: DifficultyConfig) -> Self {
        let mut session = Self {
            bounds,
            player: Player::new(&bounds),
            lasers: Vec::new(),
            asteroids: Vec::new(),
            explosions: Vec::new(),
            elapsed_ticks: 0,
            bonus: 0,
            outcome: RunOutcome::Ongoing,
            paused: false,
            difficulty,
            last_spawn_tick: 0,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        };
        spawn::populate_initial(&mut session);
        session
    }

    /// Score is re-derived: time baseline plus accumulated bonus.
    pub fn score(&self) -> u64 {
        self.elapsed_ticks / SCORE_TICK_DIVISOR + self.bonus
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take this tick's events for the audio collaborator.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// The run is over and the explosion drain has completed.
    pub fn finished(&self) -> bool {
        self.outcome == RunOutcome::PlayerDestroyed && self.explosions.is_empty()
    }

    /// Live-resize; clamp and spawn math pick the new value up immediately.
    pub fn set_bounds(&mut self, bounds: WorldBounds) {
        self.bounds = bounds;
    }
}
