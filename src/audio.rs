//! Audio requests
//!
//! The game never decodes or mixes sound itself. It asks a `SoundBackend`
//! collaborator to play one of a few effects, with volume and mute applied here.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Passed an obstacle pair
    Score,
    /// Flap impulse applied
    Flap,
    /// Hit the floor or an obstacle
    Crash,
}

impl SoundEffect {
    /// Asset name the playback backend loads for this effect
    pub fn asset_name(&self) -> &'static str {
        match self {
            SoundEffect::Score => "score",
            SoundEffect::Flap => "flap",
            SoundEffect::Crash => "crash",
        }
    }
}

/// Fire-and-forget sound playback
pub trait SoundBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Backend that only logs playback requests (headless runs)
#[derive(Debug, Default)]
pub struct LogBackend;

impl SoundBackend for LogBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::trace!("Play {} at volume {:.2}", effect.asset_name(), volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<B: SoundBackend> {
    backend: B,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager<LogBackend> {
    fn default() -> Self {
        Self::new(LogBackend)
    }
}

impl<B: SoundBackend> AudioManager<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Create with volumes and mute taken from settings
    pub fn with_settings(backend: B, settings: &Settings) -> Self {
        let mut audio = Self::new(backend);
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.backend.play(effect, vol);
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
