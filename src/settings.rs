//! Host preferences
//!
//! Physics constants are fixed at build time (see `consts`); these are the knobs
//! a host may persist between sessions. Stored as JSON next to the binary on
//! native targets.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::GameState;

/// How often the hit cue may fire for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitCuePolicy {
    /// Once, on the tick the run ends
    #[default]
    OneShot,
    /// Once per qualifying collision on that tick (floor and every pair hit)
    Legacy,
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Hit cue retrigger behaviour
    pub hit_cue: HitCuePolicy,
    /// Fixed session seed; `None` picks one at startup
    pub seed: Option<u64>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hit_cue: HitCuePolicy::OneShot,
            seed: None,
            master_volume: 0.8,
            sfx_volume: 0.3,
            muted: false,
        }
    }
}

impl Settings {
    /// Settings file name (native only)
    pub const FILE_NAME: &'static str = "flappy_sim_settings.json";

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Seed to use for this session
    pub fn session_seed(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }

    /// Fresh simulation state honouring these settings
    pub fn new_game(&self, fallback_seed: u64) -> GameState {
        GameState::with_hit_cue_policy(self.session_seed(fallback_seed), self.hit_cue)
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::info!("Using default settings ({}: {})", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings in {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to `path`, logging failures
    pub fn save_to(&self, path: &Path) {
        let result = self
            .to_json()
            .map_err(std::io::Error::from)
            .and_then(|json| std::fs::write(path, json));

        match result {
            Ok(()) => log::info!("Settings saved"),
            Err(e) => log::warn!("Failed to save settings to {}: {}", path.display(), e),
        }
    }

    /// Load from the working directory (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::FILE_NAME))
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        self.save_to(Path::new(Self::FILE_NAME));
    }
}
