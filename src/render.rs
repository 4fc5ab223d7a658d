//! Renderer interface boundary
//!
//! The core hands a [`FrameSnapshot`] across this boundary once per frame and
//! consumes nothing back. Any drawing backend implements [`Renderer`]; the
//! headless binary uses [`NullRenderer`].

use glam::Vec2;

use crate::app::{App, Screen};
use crate::sim::{RunSession, WorldBounds};

/// What an entity should be drawn as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Ship,
    Laser,
    Asteroid,
    Explosion,
}

/// One drawable entity
#[derive(Debug, Clone, Copy)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub pos: Vec2,
    /// Rotation in degrees
    pub rotation: f32,
    /// Collision/visual radius
    pub radius: f32,
    /// Animation frame (lasers and explosions)
    pub frame: u32,
    /// Crater-pattern seed for asteroids
    pub sprite_seed: u32,
}

/// Which screen the renderer should draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScreenView {
    Menu,
    Settings,
    HighScores,
    Playing,
    Paused,
    GameOver { final_score: u64 },
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    pub view: ScreenView,
    pub bounds: WorldBounds,
    pub sprites: Vec<Sprite>,
    pub score: u64,
    pub energy: f32,
}

impl FrameSnapshot {
    pub fn capture(app: &App) -> Self {
        let bounds = app.bounds();
        match &app.screen {
            Screen::Menu => Self::without_entities(ScreenView::Menu, bounds),
            Screen::Settings => Self::without_entities(ScreenView::Settings, bounds),
            Screen::HighScores => Self::without_entities(ScreenView::HighScores, bounds),
            Screen::GameOver { final_score } => Self::without_entities(
                ScreenView::GameOver {
                    final_score: *final_score,
                },
                bounds,
            ),
            Screen::Run(session) => {
                let view = if session.paused {
                    ScreenView::Paused
                } else {
                    ScreenView::Playing
                };
                Self {
                    view,
                    bounds: session.bounds,
                    sprites: sprites_of(session),
                    score: session.score(),
                    energy: session.player.energy,
                }
            }
        }
    }

    fn without_entities(view: ScreenView, bounds: WorldBounds) -> Self {
        Self {
            view,
            bounds,
            sprites: Vec::new(),
            score: 0,
            energy: 0.0,
        }
    }
}

fn sprites_of(session: &RunSession) -> Vec<Sprite> {
    let mut sprites = Vec::with_capacity(
        1 + session.lasers.len() + session.asteroids.len() + session.explosions.len(),
    );
    sprites.push(Sprite {
        kind: SpriteKind::Ship,
        pos: session.player.pos,
        rotation: session.player.heading,
        radius: crate::consts::SHIP_RADIUS,
        frame: 0,
        sprite_seed: 0,
    });
    for laser in &session.lasers {
        sprites.push(Sprite {
            kind: SpriteKind::Laser,
            pos: laser.pos,
            rotation: laser.heading,
            radius: crate::consts::LASER_RADIUS,
            frame: laser.frame,
            sprite_seed: 0,
        });
    }
    for asteroid in &session.asteroids {
        sprites.push(Sprite {
            kind: SpriteKind::Asteroid,
            pos: asteroid.pos,
            rotation: asteroid.spin,
            radius: asteroid.size.radius(),
            frame: 0,
            sprite_seed: asteroid.sprite_seed,
        });
    }
    for explosion in &session.explosions {
        sprites.push(Sprite {
            kind: SpriteKind::Explosion,
            pos: explosion.pos,
            rotation: 0.0,
            radius: 25.0,
            frame: explosion.frame,
            sprite_seed: 0,
        });
    }
    sprites
}

/// Draws one frame from a snapshot; no return value is consumed by the core.
pub trait Renderer {
    fn render(&mut self, frame: &FrameSnapshot);
}

/// Headless no-op renderer
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _frame: &FrameSnapshot) {}
}
