//! Per-frame simulation driver
//!
//! The host calls [`tick`] once per animation frame and [`activate`] whenever
//! the player acts. Both run to completion synchronously; activations are
//! applied immediately in arrival order.

use super::actor;
use super::collision::{self, CollisionKind};
use super::obstacles;
use super::phase::{ActivateEffect, Phase};
use super::score;
use super::snapshot::Snapshot;
use super::state::{GameState, SimEvent};

/// Deliver the activate signal
pub fn activate(state: &mut GameState) {
    match state.phase.on_activate() {
        ActivateEffect::StartRun => {
            state.actor.velocity = 0.0;
            state.set_phase(Phase::Active);
        }
        ActivateEffect::Impulse => state.actor.impulse(),
        ActivateEffect::Reinitialize => state.reinitialize(),
    }
}

/// Advance the simulation by one frame and return what to draw.
///
/// Events from the previous tick are dropped first; events recorded by
/// [`activate`] since then are kept for this tick.
pub fn tick(state: &mut GameState) -> Snapshot {
    state.expire_events();

    // Ended is frozen until the next activate
    if state.phase.is_running() {
        step(state);
    }

    state.mark_events_seen();
    Snapshot::capture(state)
}

fn step(state: &mut GameState) {
    let ctx = state.context();

    actor::advance_animation(&mut state.actor, &ctx);
    actor::integrate(&mut state.actor, &ctx);
    state.floor.scroll();

    if ctx.is_active() {
        let field = obstacles::update(&mut state.obstacles, &ctx, &mut state.rng);
        if let Some(pair) = field.spawned {
            state.push_event(SimEvent::ObstacleSpawned {
                x: pair.x,
                y: pair.y,
            });
        }
        if field.pruned.is_some() {
            state.push_event(SimEvent::ObstaclePruned);
        }

        if score::update(&mut state.score, &ctx) {
            let points = state.score.points();
            state.push_event(SimEvent::Scored { points });
        }

        let hits = collision::detect(&state.actor, &state.floor, &state.obstacles);
        if !hits.is_empty() {
            if hits.contains(&CollisionKind::Floor) {
                state.actor.freeze();
            }
            state.request_hit_cues(&hits);
            if let Some(next) = state.phase.on_collision() {
                state.set_phase(next);
            }
        }
    }

    // The collision tick itself is not counted
    if state.phase.is_running() {
        state.clock.advance();
    }
}
