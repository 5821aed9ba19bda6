//! Periodic triggers
//!
//! Every timed event in the game is "once every N ticks since the epoch began",
//! optionally only while a run is active.

use super::clock::TickContext;
use super::phase::Phase;
use crate::consts::{ANIMATION_INTERVAL, SCORE_INTERVAL, SPAWN_INTERVAL};

/// Which phases a schedule is allowed to fire in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseGate {
    /// Ready and Active
    Always,
    /// Active only
    ActiveOnly,
}

/// An "every N ticks" trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub interval: u64,
    pub gate: PhaseGate,
}

/// Wing animation step
pub const ANIMATION: Schedule = Schedule::new(ANIMATION_INTERVAL, PhaseGate::Always);
/// Obstacle pair spawn
pub const SPAWN: Schedule = Schedule::new(SPAWN_INTERVAL, PhaseGate::ActiveOnly);
/// Score increment
pub const SCORE: Schedule = Schedule::new(SCORE_INTERVAL, PhaseGate::ActiveOnly);

impl Schedule {
    pub const fn new(interval: u64, gate: PhaseGate) -> Self {
        assert!(interval > 0, "schedule interval must be non-zero");
        Self { interval, gate }
    }

    /// True when this schedule fires on `frame` in `phase`
    pub fn fires_at(&self, frame: u64, phase: Phase) -> bool {
        let gated_in = match (self.gate, phase) {
            (_, Phase::Ended) => false,
            (PhaseGate::Always, Phase::Ready | Phase::Active) => true,
            (PhaseGate::ActiveOnly, Phase::Active) => true,
            (PhaseGate::ActiveOnly, Phase::Ready) => false,
        };
        gated_in && frame % self.interval == 0
    }

    #[inline]
    pub fn fires(&self, ctx: &TickContext) -> bool {
        self.fires_at(ctx.frame, ctx.phase)
    }
}
