//! Audio collaborator
//!
//! The simulation never plays sound itself; it queues [`SimEvent::HitCue`] and
//! the host forwards cues to an [`AudioSink`]. Requests are fire-and-forget:
//! nothing is awaited and overlapping playback is fine.

use crate::settings::Settings;
use crate::sim::SimEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Actor hit the floor or an obstacle
    Hit,
}

impl SoundEffect {
    /// Cue requested by a simulation event, if any
    pub fn for_event(event: &SimEvent) -> Option<Self> {
        match event {
            SimEvent::HitCue { .. } => Some(SoundEffect::Hit),
            _ => None,
        }
    }
}

/// Something that can play cues
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Forward every cue in `events` to `sink`, in order. Returns the number of cues.
pub fn dispatch<S: AudioSink + ?Sized>(sink: &mut S, events: &[SimEvent]) -> usize {
    let mut played = 0;
    for effect in events.iter().filter_map(SoundEffect::for_event) {
        sink.play(effect);
        played += 1;
    }
    played
}

/// Native audio manager: applies volume/mute and logs the cue. Platform hosts
/// wrap their own backend in an [`AudioSink`] instead.
#[derive(Debug, Clone)]
pub struct AudioManager {
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    /// Cues actually played (not muted)
    played: u64,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self::from_settings(&Settings::default())
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            muted: settings.muted,
            played: 0,
        }
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
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioSink for AudioManager {
    fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.played += 1;
        log::debug!("Cue {:?} at volume {:.2}", effect, vol);
    }
}
