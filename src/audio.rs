//! Sound event routing
//!
//! The simulation emits fire-and-forget [`GameEvent`]s; this module scales
//! them by the configured volumes and hands them to whatever backend is
//! plugged in. Playback failure never feeds back into the simulation - with
//! no backend every call is a silent no-op.

use crate::sim::GameEvent;

/// Playback backend. Implementations may drop sounds freely.
pub trait AudioSink {
    /// Play the sound for one event at the given volume (0.0 - 1.0).
    fn play(&mut self, event: GameEvent, volume: f32);

    /// Start or stop the background music loop.
    fn set_music(&mut self, _playing: bool, _volume: f32) {}
}

/// Audio manager for the game
pub struct AudioManager {
    sink: Option<Box<dyn AudioSink>>,
    music_volume: f32,
    effects_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(None)
    }
}

impl AudioManager {
    pub fn new(sink: Option<Box<dyn AudioSink>>) -> Self {
        if sink.is_none() {
            log::warn!("No audio backend - sound disabled");
        }
        Self {
            sink,
            music_volume: 0.5,
            effects_volume: 0.5,
            muted: false,
        }
    }

    /// Volumes come from settings; both clamped to 0.0 - 1.0.
    pub fn set_volumes(&mut self, music: f32, effects: f32) {
        self.music_volume = music.clamp(0.0, 1.0);
        self.effects_volume = effects.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.effects_volume }
    }

    /// Route one simulation event to the backend.
    pub fn play(&mut self, event: GameEvent) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        if let Some(sink) = &mut self.sink {
            sink.play(event, vol);
        }
    }

    /// Background music starts with a run and stops with it.
    pub fn set_music_playing(&mut self, playing: bool) {
        let vol = if self.muted { 0.0 } else { self.music_volume };
        if let Some(sink) = &mut self.sink {
            sink.set_music(playing, vol);
        }
    }
}
