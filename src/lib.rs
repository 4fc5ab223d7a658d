//! Asteroid Dodger - a top-down dodge-and-shoot arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, game state)
//! - `app`: Screen state machine and fixed-timestep frame pump
//! - `render`: Frame snapshot handoff to a renderer implementation
//! - `audio`: Fire-and-forget sound event routing
//! - `highscores`: Top-5 leaderboard persisted to a flat file

pub mod app;
pub mod audio;
pub mod highscores;
pub mod render;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default world dimensions (resizable at runtime)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Ship defaults - the sprite is a 60x60 square, collision circle is tighter
    pub const SHIP_HALF_EXTENT: f32 = 30.0;
    pub const SHIP_RADIUS: f32 = 20.0;
    /// Translation speed per axis, pixels per tick
    pub const SHIP_SPEED: f32 = 5.0;
    /// Heading change per tick while a rotate key is held, degrees
    pub const SHIP_ROT_RATE: f32 = 5.0;
    /// Laser muzzle offset from ship center along the heading, pixels
    pub const SHIP_NOSE_OFFSET: f32 = 30.0;

    /// Energy pool for shooting
    pub const ENERGY_MAX: f32 = 100.0;
    pub const ENERGY_REGEN_PER_TICK: f32 = 0.05;
    pub const SHOT_ENERGY_COST: f32 = 10.0;

    /// Laser defaults
    pub const LASER_SPEED: f32 = 10.0;
    pub const LASER_RADIUS: f32 = 5.0;
    /// Half the beam length, used for off-screen culling
    pub const LASER_HALF_LENGTH: f32 = 15.0;
    pub const LASER_FRAMES: u32 = 5;

    /// Explosion animation
    pub const EXPLOSION_FRAMES: u32 = 9;

    /// Sprite animations advance every 50 ms (3 ticks at 60 Hz)
    pub const ANIM_INTERVAL_TICKS: u64 = 3;
    /// Movement sound is rate-limited to once per 100 ms (6 ticks)
    pub const MOVE_SOUND_INTERVAL_TICKS: u64 = 6;

    /// Asteroids spawn in a band this far outside the visible bounds
    pub const SPAWN_BUFFER: f32 = 100.0;
    /// Asteroids further out than this are recycled to a fresh edge
    pub const RECYCLE_MARGIN: f32 = 200.0;

    /// Score accrues one point per 100 ms survived (6 ticks)
    pub const SCORE_TICK_DIVISOR: u64 = 6;
    /// Bonus for shooting down an asteroid
    pub const KILL_BONUS: u64 = 50;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let a = angle % 360.0;
    if a < 0.0 { a + 360.0 } else { a }
}

/// Unit vector for a heading in degrees, screen coordinates (y down).
///
/// Heading 0 points up, increasing counterclockwise on screen, matching the
/// ship sprite rotation.
#[inline]
pub fn heading_vec(degrees: f32) -> Vec2 {
    let r = degrees.to_radians();
    Vec2::new(-r.sin(), -r.cos())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_angle() {
        assert_eq!(wrap_angle(0.0), 0.0);
        assert_eq!(wrap_angle(360.0), 0.0);
        assert_eq!(wrap_angle(365.0), 5.0);
        assert_eq!(wrap_angle(-5.0), 355.0);
        assert_eq!(wrap_angle(725.0), 5.0);
    }

    #[test]
    fn test_heading_vec_cardinals() {
        let up = heading_vec(0.0);
        assert!(up.x.abs() < 1e-6 && (up.y + 1.0).abs() < 1e-6);

        // 90 degrees rotates the nose toward screen left
        let left = heading_vec(90.0);
        assert!((left.x + 1.0).abs() < 1e-6 && left.y.abs() < 1e-6);

        let down = heading_vec(180.0);
        assert!(down.x.abs() < 1e-6 && (down.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_heading_vec_is_unit() {
        for deg in [0.0, 33.0, 117.5, 240.0, 359.9] {
            assert!((heading_vec(deg).length() - 1.0).abs() < 1e-5);
        }
    }
}
