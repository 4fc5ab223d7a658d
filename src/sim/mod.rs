//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Every timer derived from the session tick counter
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::circles_intersect;
pub use spawn::{DifficultyConfig, StepRamp};
pub use state::{
    Asteroid, Explosion, GameEvent, Laser, Player, RunOutcome, RunSession, SizeClass, WorldBounds,
};
pub use tick::{TickInput, tick};
