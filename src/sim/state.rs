//! Game state and simulation events
//!
//! Everything a run needs lives in [`GameState`]. A full reinitialization puts
//! every component back to its starting value; only the RNG stream and the
//! epoch counter carry over, so each run gets a fresh obstacle layout while the
//! session stays reproducible from its seed.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::clock::{FrameClock, TickContext};
use super::collision::CollisionKind;
use super::floor::Floor;
use super::obstacles::ObstacleField;
use super::phase::Phase;
use super::score::Score;
use crate::settings::HitCuePolicy;

/// Something the host may want to react to (audio, UI, logging)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    PhaseChanged { from: Phase, to: Phase },
    /// Play the hit cue (fire-and-forget)
    HitCue { cause: CollisionKind },
    ObstacleSpawned { x: f32, y: f32 },
    ObstaclePruned,
    Scored { points: u64 },
    Reinitialized { epoch: u64 },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Number of full reinitializations so far
    pub epoch: u64,
    /// Current phase
    pub phase: Phase,
    /// Ticks completed in this epoch
    pub clock: FrameClock,
    pub actor: Actor,
    pub floor: Floor,
    pub obstacles: ObstacleField,
    pub score: Score,
    pub hit_cue_policy: HitCuePolicy,
    /// One-shot guard for the hit cue, cleared on reinit
    hit_cue_fired: bool,
    /// Pending events, oldest first
    events: Vec<SimEvent>,
    /// Leading events already present when the last tick finished
    seen_events: usize,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_hit_cue_policy(seed, HitCuePolicy::default())
    }

    pub fn with_hit_cue_policy(seed: u64, hit_cue_policy: HitCuePolicy) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            epoch: 0,
            phase: Phase::Ready,
            clock: FrameClock::new(),
            actor: Actor::new(),
            floor: Floor::default(),
            obstacles: ObstacleField::new(),
            score: Score::new(),
            hit_cue_policy,
            hit_cue_fired: false,
            events: Vec::new(),
            seen_events: 0,
        }
    }

    /// Context for the tick about to run
    pub fn context(&self) -> TickContext {
        TickContext::new(&self.clock, self.phase)
    }

    /// Back to Ready with every component at its initial value
    pub fn reinitialize(&mut self) {
        self.clock.reset();
        self.actor = Actor::new();
        self.floor = Floor::default();
        self.obstacles.clear();
        self.score.reset();
        self.hit_cue_fired = false;
        self.epoch = self.epoch.wrapping_add(1);

        let from = self.phase;
        self.phase = Phase::Ready;
        self.push_event(SimEvent::Reinitialized { epoch: self.epoch });
        self.push_event(SimEvent::PhaseChanged {
            from,
            to: Phase::Ready,
        });
        log::info!("Epoch {} started", self.epoch);
    }

    /// Move to `to`, recording the change
    pub fn set_phase(&mut self, to: Phase) {
        let from = self.phase;
        if from == to {
            return;
        }
        self.phase = to;
        log::info!(
            "Phase {} -> {} (frame {}, score {})",
            from,
            to,
            self.clock.ticks(),
            self.score.points()
        );
        self.push_event(SimEvent::PhaseChanged { from, to });
    }

    /// Request the hit cue for each collision, honouring the cue policy
    pub fn request_hit_cues(&mut self, hits: &[CollisionKind]) {
        match self.hit_cue_policy {
            HitCuePolicy::OneShot => {
                if self.hit_cue_fired {
                    return;
                }
                if let Some(&cause) = hits.first() {
                    self.hit_cue_fired = true;
                    self.push_event(SimEvent::HitCue { cause });
                }
            }
            HitCuePolicy::Legacy => {
                for &cause in hits {
                    self.push_event(SimEvent::HitCue { cause });
                }
            }
        }
    }

    pub fn push_event(&mut self, event: SimEvent) {
        self.events.push(event);
    }

    /// Events of the last tick plus any recorded since, oldest first
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        self.seen_events = 0;
        std::mem::take(&mut self.events)
    }

    /// Drop events that were already pending when the last tick finished
    pub(crate) fn expire_events(&mut self) {
        self.events.drain(..self.seen_events);
        self.seen_events = 0;
    }

    pub(crate) fn mark_events_seen(&mut self) {
        self.seen_events = self.events.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::obstacles::ObstaclePair;

    #[test]
    fn test_new_state_is_ready() {
        let state = GameState::new(42);
        assert_eq!(state.phase, Phase::Ready);
        assert_eq!(state.clock.ticks(), 0);
        assert_eq!(state.score.points(), 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.actor.y, ACTOR_START_Y);
        assert_eq!(state.actor.velocity, 0.0);
        assert!(state.events().is_empty());
    }

    #[test]
    fn test_reinitialize_resets_components() {
        let mut state = GameState::new(42);
        state.phase = Phase::Ended;
        state.clock = FrameClock::starting_at(345);
        state.actor.y = 344.0;
        state.actor.velocity = 7.0;
        state.actor.freeze();
        state.floor.scroll();
        state.obstacles.push(ObstaclePair::new(120.0, -200.0));
        state.request_hit_cues(&[CollisionKind::Floor]);
        state.drain_events();

        state.reinitialize();

        assert_eq!(state.phase, Phase::Ready);
        assert_eq!(state.clock.ticks(), 0);
        assert_eq!(state.actor, Actor::new());
        assert_eq!(state.floor, Floor::default());
        assert!(state.obstacles.is_empty());
        assert_eq!(state.score.points(), 0);
        assert_eq!(state.epoch, 1);
        assert_eq!(
            state.drain_events(),
            vec![
                SimEvent::Reinitialized { epoch: 1 },
                SimEvent::PhaseChanged {
                    from: Phase::Ended,
                    to: Phase::Ready
                },
            ]
        );

        // Guard is re-armed for the next run
        state.request_hit_cues(&[CollisionKind::Floor]);
        assert_eq!(state.events().len(), 1);
    }

    #[test]
    fn test_expire_keeps_events_recorded_after_mark() {
        let mut state = GameState::new(1);
        state.push_event(SimEvent::ObstaclePruned);
        state.mark_events_seen();
        state.push_event(SimEvent::Scored { points: 1 });

        state.expire_events();
        assert_eq!(state.events(), &[SimEvent::Scored { points: 1 }]);

        // Nothing marked since, so nothing expires
        state.expire_events();
        assert_eq!(state.events().len(), 1);

        state.mark_events_seen();
        state.drain_events();
        state.push_event(SimEvent::ObstaclePruned);
        state.expire_events();
        assert_eq!(state.events(), &[SimEvent::ObstaclePruned]);
    }

    #[test]
    fn test_one_shot_hit_cue() {
        let mut state = GameState::new(1);
        let hits = [CollisionKind::Floor, CollisionKind::Obstacle { index: 0 }];
        state.request_hit_cues(&hits);
        state.request_hit_cues(&hits);
        assert_eq!(
            state.events(),
            &[SimEvent::HitCue {
                cause: CollisionKind::Floor
            }]
        );
    }

    #[test]
    fn test_legacy_hit_cue_refires() {
        let mut state = GameState::with_hit_cue_policy(1, HitCuePolicy::Legacy);
        let hits = [CollisionKind::Floor, CollisionKind::Obstacle { index: 0 }];
        state.request_hit_cues(&hits);
        state.request_hit_cues(&hits[..1]);
        assert_eq!(state.events().len(), 3);
    }

    #[test]
    fn test_set_phase_records_change_once() {
        let mut state = GameState::new(1);
        state.set_phase(Phase::Active);
        state.set_phase(Phase::Active);
        assert_eq!(
            state.drain_events(),
            vec![SimEvent::PhaseChanged {
                from: Phase::Ready,
                to: Phase::Active
            }]
        );
        assert!(state.events().is_empty());
    }
}
