//! Screen state machine and frame pump
//!
//! Sequences Menu, Settings, HighScores, Playing/Paused and GameOver. One
//! [`RunSession`] exists per playthrough, constructed fresh on every Playing
//! entry, and is owned exclusively by this single-threaded pump.

use crate::audio::AudioManager;
use crate::consts::*;
use crate::highscores::HighScores;
use crate::render::FrameSnapshot;
use crate::settings::Settings;
use crate::sim::{DifficultyConfig, RunSession, TickInput, WorldBounds, tick};

/// Which screen owns the frame.
///
/// Playing and Paused share the `Run` variant; `RunSession::paused` picks
/// between them.
#[derive(Debug)]
pub enum Screen {
    Menu,
    Settings,
    HighScores,
    Run(RunSession),
    GameOver { final_score: u64 },
}

/// Commands produced by menu buttons on their release edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Play,
    Settings,
    HighScores,
    Back,
    Quit,
}

pub struct App {
    pub screen: Screen,
    pub settings: Settings,
    pub high_scores: HighScores,
    pub audio: AudioManager,
    bounds: WorldBounds,
    difficulty: DifficultyConfig,
    seed: u64,
    runs: u64,
    accumulator: f32,
    should_quit: bool,
}

impl App {
    pub fn new(
        seed: u64,
        settings: Settings,
        high_scores: HighScores,
        mut audio: AudioManager,
    ) -> Self {
        audio.set_volumes(settings.music_volume, settings.effects_volume);
        let bounds = WorldBounds::new(settings.window_width, settings.window_height);
        Self {
            screen: Screen::Menu,
            settings,
            high_scores,
            audio,
            bounds,
            difficulty: DifficultyConfig::default(),
            seed,
            runs: 0,
            accumulator: 0.0,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    /// Apply a menu command for the current screen; pairs that don't apply
    /// are ignored. Quit unwinds from any screen.
    pub fn handle_command(&mut self, command: MenuCommand) {
        match (&self.screen, command) {
            (_, MenuCommand::Quit) => {
                log::info!("Quit requested");
                self.should_quit = true;
            }
            (Screen::Menu, MenuCommand::Play) | (Screen::GameOver { .. }, MenuCommand::Play) => {
                self.start_run();
            }
            (Screen::Menu, MenuCommand::Settings) => self.screen = Screen::Settings,
            (Screen::Menu, MenuCommand::HighScores) => self.screen = Screen::HighScores,
            (Screen::Settings, MenuCommand::Back) => {
                self.settings.save();
                self.screen = Screen::Menu;
            }
            (Screen::HighScores, MenuCommand::Back) => self.screen = Screen::Menu,
            _ => {}
        }
    }

    /// A fresh session every time; nothing leaks between runs.
    fn start_run(&mut self) {
        self.runs += 1;
        let seed = self.seed.wrapping_add(self.runs);
        log::info!("Starting run {} with seed {seed}", self.runs);
        self.screen = Screen::Run(RunSession::new(seed, self.bounds, self.difficulty));
        self.audio.set_music_playing(true);
    }

    /// Live-resize: clamp and spawn geometry re-derive from the new bounds.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = WorldBounds::new(width, height);
        if let Screen::Run(session) = &mut self.screen {
            session.set_bounds(self.bounds);
        }
    }

    /// Adjust volumes from the settings screen sliders.
    pub fn set_volumes(&mut self, music: f32, effects: f32) {
        self.settings.music_volume = music.clamp(0.0, 1.0);
        self.settings.effects_volume = effects.clamp(0.0, 1.0);
        self.audio
            .set_volumes(self.settings.music_volume, self.settings.effects_volume);
    }

    /// Advance wall-clock time, running fixed ticks as needed.
    pub fn advance(&mut self, dt: f32, input: &TickInput) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut input = input.clone();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.step(&input);
            self.accumulator -= SIM_DT;
            substeps += 1;
            // One-shot inputs only apply to the first substep
            input.fire = false;
            input.pause = false;
        }
    }

    /// One fixed simulation step plus the GameOver gate.
    ///
    /// The transition out of Playing waits for the explosion drain, then
    /// submits the final score to the leaderboard.
    pub fn step(&mut self, input: &TickInput) {
        let Screen::Run(session) = &mut self.screen else {
            return;
        };
        tick(session, input);
        for event in session.drain_events() {
            self.audio.play(event);
        }
        if session.finished() {
            let final_score = session.score();
            log::info!("Run over, final score {final_score}");
            self.audio.set_music_playing(false);
            if let Some(rank) = self.high_scores.update(final_score) {
                log::info!("New high score, rank {rank}");
            }
            self.screen = Screen::GameOver { final_score };
        }
    }

    /// Snapshot for the renderer.
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(self)
    }
}
