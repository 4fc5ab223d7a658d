//! Asteroid Dodger entry point
//!
//! Runs the game headless at the fixed 60 Hz cadence with the demo autopilot
//! on the stick, then logs the final score. A windowed front end drives
//! [`App`] the same way, feeding real key state into [`TickInput`].

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use asteroid_dodger::app::{App, MenuCommand, Screen};
use asteroid_dodger::audio::AudioManager;
use asteroid_dodger::consts::{SHOT_ENERGY_COST, SIM_DT};
use asteroid_dodger::render::{NullRenderer, Renderer};
use asteroid_dodger::sim::TickInput;
use asteroid_dodger::{HighScores, Settings};

fn main() {
    env_logger::init();
    log::info!("Asteroid Dodger starting...");

    let settings = Settings::load("settings.json");
    let high_scores = HighScores::load("scores.txt");
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut app = App::new(seed, settings, high_scores, AudioManager::default());
    let mut renderer = NullRenderer;

    app.handle_command(MenuCommand::Play);

    let frame_duration = Duration::from_secs_f32(SIM_DT);
    let mut next_frame = Instant::now();
    loop {
        let input = autopilot(&app);
        app.advance(SIM_DT, &input);
        renderer.render(&app.snapshot());

        if let Screen::GameOver { final_score } = &app.screen {
            log::info!("Game over - final score {final_score}");
            if let Some(top) = app.high_scores.top_score() {
                log::info!("Best score on record: {top}");
            }
            break;
        }
        if app.should_quit() {
            break;
        }

        next_frame += frame_duration;
        match next_frame.checked_duration_since(Instant::now()) {
            Some(sleep) => std::thread::sleep(sleep),
            // Fell behind; resynchronize rather than spiral
            None => next_frame = Instant::now(),
        }
    }
}

/// Demo pilot: drift away from the nearest asteroid and fire at anything
/// roughly above the ship (it spawns pointing up).
fn autopilot(app: &App) -> TickInput {
    let mut input = TickInput::default();
    let Screen::Run(session) = &app.screen else {
        return input;
    };
    let ship = session.player.pos;

    let Some(nearest) = session.asteroids.iter().min_by(|a, b| {
        a.pos
            .distance_squared(ship)
            .partial_cmp(&b.pos.distance_squared(ship))
            .unwrap_or(std::cmp::Ordering::Equal)
    }) else {
        return input;
    };

    let away = ship - nearest.pos;
    if away.length() < 250.0 {
        input.left = away.x < 0.0;
        input.right = away.x > 0.0;
        input.up = away.y < 0.0;
        input.down = away.y > 0.0;
    }
    input.fire = session.player.energy >= SHOT_ENERGY_COST && nearest.pos.y < ship.y;
    input
}
