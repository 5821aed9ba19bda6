//! Phase state machine
//!
//! Exactly one phase holds at a time. The activate signal and the collision
//! request are the only two inputs; both are resolved here into an effect the
//! driver applies.

use serde::{Deserialize, Serialize};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Attract mode: actor hovers, nothing scrolls except the floor
    #[default]
    Ready,
    /// Gameplay running
    Active,
    /// Run over; everything is frozen until the next activate
    Ended,
}

/// What an activate signal does in the current phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivateEffect {
    /// Ready -> Active, discarding velocity accumulated while hovering
    StartRun,
    /// Stay Active, flap
    Impulse,
    /// Ended -> Ready via full reinitialization
    Reinitialize,
}

impl Phase {
    /// Resolve the activate signal against this phase
    pub fn on_activate(self) -> ActivateEffect {
        match self {
            Phase::Ready => ActivateEffect::StartRun,
            Phase::Active => ActivateEffect::Impulse,
            Phase::Ended => ActivateEffect::Reinitialize,
        }
    }

    /// Phase that follows a collision request, if the request applies
    pub fn on_collision(self) -> Option<Phase> {
        match self {
            Phase::Active => Some(Phase::Ended),
            Phase::Ready | Phase::Ended => None,
        }
    }

    /// Whether the clock and subsystems advance in this phase
    #[inline]
    pub fn is_running(self) -> bool {
        !matches!(self, Phase::Ended)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Ready => "Ready",
            Phase::Active => "Active",
            Phase::Ended => "Ended",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
