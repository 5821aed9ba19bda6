//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per `tick` call
//! - Seeded RNG only
//! - Stable iteration order (obstacles oldest-first)
//! - No rendering, audio or platform dependencies

pub mod aabb;
pub mod actor;
pub mod autopilot;
pub mod clock;
pub mod collision;
pub mod floor;
pub mod obstacles;
pub mod phase;
pub mod schedule;
pub mod score;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use actor::Actor;
pub use clock::{FrameClock, TickContext};
pub use collision::{CollisionKind, hits_floor, hits_obstacle};
pub use floor::Floor;
pub use obstacles::{ObstacleField, ObstaclePair};
pub use phase::{ActivateEffect, Phase};
pub use schedule::{PhaseGate, Schedule};
pub use score::Score;
pub use snapshot::{ActorView, ObstacleView, Snapshot};
pub use state::{GameState, SimEvent};
pub use tick::{activate, tick};
