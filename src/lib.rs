//! Flappy Sim - simulation core for a side-scrolling flap-and-dodge game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, phases)
//! - `audio`: Audio collaborator seam for fire-and-forget cues
//! - `settings`: Host-side preferences
//!
//! Rendering, asset loading and input capture live in the host. The host calls
//! [`sim::tick`] once per animation frame, forwards user actions through
//! [`sim::activate`], and draws the returned [`sim::Snapshot`].

pub mod audio;
pub mod settings;
pub mod sim;

pub use audio::{AudioManager, AudioSink, SoundEffect};
pub use settings::{HitCuePolicy, Settings};

/// Game configuration constants (fixed at build time)
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 320.0;
    pub const PLAYFIELD_HEIGHT: f32 = 480.0;

    /// Actor defaults
    pub const ACTOR_X: f32 = 10.0;
    pub const ACTOR_START_Y: f32 = 50.0;
    pub const ACTOR_WIDTH: f32 = 33.0;
    pub const ACTOR_HEIGHT: f32 = 24.0;
    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.25;
    /// Upward speed granted by a flap
    pub const IMPULSE_MAGNITUDE: f32 = 4.6;
    /// Wing sprite frame for each step of the animation cycle (up, mid, down, mid)
    pub const WING_CYCLE: [u8; 4] = [0, 1, 2, 1];

    /// Floor strip
    pub const FLOOR_WIDTH: f32 = 224.0;
    pub const FLOOR_HEIGHT: f32 = 112.0;
    pub const FLOOR_Y: f32 = PLAYFIELD_HEIGHT - FLOOR_HEIGHT;
    pub const FLOOR_SCROLL_SPEED: f32 = 1.0;

    /// Obstacle pair geometry
    pub const OBSTACLE_WIDTH: f32 = 52.0;
    pub const OBSTACLE_HEIGHT: f32 = 400.0;
    pub const OBSTACLE_GAP: f32 = 90.0;
    pub const OBSTACLE_SCROLL_SPEED: f32 = 2.0;
    /// Vertical offset is `-OFFSET_SCALE * uniform[1, 2)`, i.e. in (-300, -150]
    pub const OBSTACLE_OFFSET_SCALE: f32 = 150.0;

    /// Periodic trigger intervals (ticks)
    pub const ANIMATION_INTERVAL: u64 = 10;
    pub const SPAWN_INTERVAL: u64 = 100;
    pub const SCORE_INTERVAL: u64 = 20;
}
