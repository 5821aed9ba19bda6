//! The flapping actor and its physics
//!
//! The actor never moves horizontally; the world scrolls past it instead.

use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::clock::TickContext;
use super::schedule;
use crate::consts::*;

/// The player-controlled actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Top edge (screen space, grows downward)
    pub y: f32,
    /// Vertical velocity per tick (positive is downward)
    pub velocity: f32,
    /// Index into [`WING_CYCLE`]
    pub anim_index: usize,
    /// Set on first floor contact; halts integration until reinit
    pub floor_frozen: bool,
}

impl Default for Actor {
    fn default() -> Self {
        Self {
            y: ACTOR_START_Y,
            velocity: 0.0,
            anim_index: 0,
            floor_frozen: false,
        }
    }
}

impl Actor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed horizontal position
    #[inline]
    pub fn x(&self) -> f32 {
        ACTOR_X
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_origin_size(ACTOR_X, self.y, ACTOR_WIDTH, ACTOR_HEIGHT)
    }

    /// Wing sprite frame for the current animation step
    pub fn wing_frame(&self) -> u8 {
        WING_CYCLE[self.anim_index % WING_CYCLE.len()]
    }

    /// Flap. Near the top of the playfield the kick is a small downward nudge
    /// instead, so the actor cannot leave the visible area.
    pub fn impulse(&mut self) {
        if self.floor_frozen {
            return;
        }
        if self.y <= IMPULSE_MAGNITUDE * 2.0 {
            self.velocity = IMPULSE_MAGNITUDE / 3.0;
        } else {
            self.velocity = -IMPULSE_MAGNITUDE;
        }
    }

    /// Stick the actor where it is
    pub fn freeze(&mut self) {
        self.floor_frozen = true;
    }
}

/// Apply gravity; move only while a run is active
pub fn integrate(actor: &mut Actor, ctx: &TickContext) {
    if actor.floor_frozen {
        return;
    }

    actor.velocity += GRAVITY;

    if ctx.is_active() {
        actor.y += actor.velocity;
    }
}

/// Step the wing cycle on animation ticks, in any running phase
pub fn advance_animation(actor: &mut Actor, ctx: &TickContext) {
    if schedule::ANIMATION.fires(ctx) {
        actor.anim_index = (actor.anim_index + 1) % WING_CYCLE.len();
    }
}
