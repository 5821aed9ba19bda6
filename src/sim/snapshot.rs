//! Drawable snapshot handed to the renderer after each tick
//!
//! A snapshot is a plain copy of what the renderer needs. Holding one never
//! borrows the game state, and it serializes to JSON for hosts that bridge to a
//! script-side renderer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::phase::Phase;
use super::state::GameState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorView {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub velocity: f32,
    /// Step in the 4-entry animation cycle
    pub anim_index: usize,
    /// Wing sprite frame for that step
    pub wing_frame: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub x: f32,
    pub y: f32,
    pub top: Aabb,
    pub bottom: Aabb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub epoch: u64,
    /// Completed ticks in this epoch
    pub frame: u64,
    pub score: u64,
    pub actor: ActorView,
    /// Floor scroll offset
    pub floor_offset: f32,
    pub floor_y: f32,
    /// Oldest (leftmost) first
    pub obstacles: Vec<ObstacleView>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let body = state.actor.bounds();
        Self {
            phase: state.phase,
            epoch: state.epoch,
            frame: state.clock.ticks(),
            score: state.score.points(),
            actor: ActorView {
                pos: body.min,
                size: body.size(),
                velocity: state.actor.velocity,
                anim_index: state.actor.anim_index,
                wing_frame: state.actor.wing_frame(),
            },
            floor_offset: state.floor.offset,
            floor_y: state.floor.y(),
            obstacles: state
                .obstacles
                .iter()
                .map(|pair| ObstacleView {
                    x: pair.x,
                    y: pair.y,
                    top: pair.top_segment(),
                    bottom: pair.bottom_segment(),
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::obstacles::ObstaclePair;

    #[test]
    fn test_capture_copies_state() {
        let mut state = GameState::new(5);
        state.obstacles.push(ObstaclePair::new(200.0, -180.0));
        state.actor.anim_index = 2;

        let snap = Snapshot::capture(&state);
        assert_eq!(snap.phase, Phase::Ready);
        assert_eq!(snap.actor.pos, Vec2::new(ACTOR_X, ACTOR_START_Y));
        assert_eq!(snap.actor.size, Vec2::new(ACTOR_WIDTH, ACTOR_HEIGHT));
        assert_eq!(snap.actor.wing_frame, 2);
        assert_eq!(snap.floor_y, FLOOR_Y);
        assert_eq!(snap.obstacles.len(), 1);
        assert_eq!(snap.obstacles[0].top.bottom(), 220.0);
        assert_eq!(snap.obstacles[0].bottom.top(), 310.0);
    }

    #[test]
    fn test_json_export() {
        let state = GameState::new(5);
        let json = Snapshot::capture(&state).to_json().expect("snapshot serializes");
        let back: Snapshot = serde_json::from_str(&json).expect("snapshot parses");
        assert_eq!(back.phase, Phase::Ready);
        assert!(json.contains("\"phase\":\"Ready\""));
    }
}
