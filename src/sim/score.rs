//! Survival score: one point every score interval while a run is active

use serde::{Deserialize, Serialize};

use super::clock::TickContext;
use super::schedule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    points: u64,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn points(&self) -> u64 {
        self.points
    }

    pub fn reset(&mut self) {
        self.points = 0;
    }
}

/// Award a point on score ticks. Returns true when the score changed.
pub fn update(score: &mut Score, ctx: &TickContext) -> bool {
    if schedule::SCORE.fires(ctx) {
        score.points = score.points.saturating_add(1);
        true
    } else {
        false
    }
}
