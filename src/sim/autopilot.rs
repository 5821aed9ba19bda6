//! Demo autopilot
//!
//! Plays the game from a snapshot alone, the same view a renderer gets. Used for
//! attract mode and by the headless demo binary.
//!
//! Strategy: hold the actor a little below the top of the oldest pair's gap. A
//! flap lifts the actor about 40 units, so flapping whenever it sinks past that
//! line keeps it bouncing inside the 90-unit gap.

use super::phase::Phase;
use super::snapshot::Snapshot;

/// Flap once the actor's top edge sinks this far below the gap's top edge
pub const FLAP_BELOW_GAP_TOP: f32 = 44.0;
/// Hover line while no obstacle is on screen
pub const CRUISE_Y: f32 = 200.0;
/// Skip the flap while still rising faster than this
const RISING_CUTOFF: f32 = -1.5;

/// Height the actor's top edge should not sink below
pub fn target_y(snapshot: &Snapshot) -> f32 {
    // The oldest pair stays collidable until pruned, so it is always the one to
    // line up with
    snapshot
        .obstacles
        .first()
        .map(|pair| pair.top.bottom() + FLAP_BELOW_GAP_TOP)
        .unwrap_or(CRUISE_Y)
}

/// Whether the autopilot would send the activate signal this frame
pub fn wants_flap(snapshot: &Snapshot) -> bool {
    match snapshot.phase {
        Phase::Ready => true,
        // Restarting is the host's call
        Phase::Ended => false,
        Phase::Active => {
            let actor = &snapshot.actor;
            actor.pos.y > target_y(snapshot) && actor.velocity > RISING_CUTOFF
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacles::ObstaclePair;
    use crate::sim::state::GameState;
    use crate::sim::tick::{activate, tick};

    fn active_snapshot(y: f32, velocity: f32) -> Snapshot {
        let mut state = GameState::new(1);
        activate(&mut state);
        state.actor.y = y;
        state.actor.velocity = velocity;
        Snapshot::capture(&state)
    }

    #[test]
    fn test_starts_but_never_restarts() {
        let mut state = GameState::new(1);
        assert!(wants_flap(&Snapshot::capture(&state)));
        state.phase = Phase::Ended;
        assert!(!wants_flap(&Snapshot::capture(&state)));
    }

    #[test]
    fn test_cruises_without_obstacles() {
        assert!(wants_flap(&active_snapshot(CRUISE_Y + 1.0, 2.0)));
        assert!(!wants_flap(&active_snapshot(CRUISE_Y - 1.0, 2.0)));
        // Still climbing hard: let it coast
        assert!(!wants_flap(&active_snapshot(CRUISE_Y + 1.0, -3.0)));
    }

    #[test]
    fn test_targets_oldest_pair() {
        let mut state = GameState::new(1);
        activate(&mut state);
        state.obstacles.push(ObstaclePair::new(100.0, -250.0));
        state.obstacles.push(ObstaclePair::new(300.0, -150.0));
        let snap = Snapshot::capture(&state);
        assert_eq!(target_y(&snap), 150.0 + FLAP_BELOW_GAP_TOP);
    }

    #[test]
    fn test_survives_first_pair() {
        for seed in 0..8 {
            let mut state = GameState::new(seed);
            let mut snap = Snapshot::capture(&state);
            // First pair spawns on tick 100 and is pruned on tick 285
            for _ in 0..300 {
                if wants_flap(&snap) {
                    activate(&mut state);
                }
                snap = tick(&mut state);
            }
            assert_eq!(snap.phase, Phase::Active, "seed {}", seed);
            assert_eq!(snap.score, 15, "seed {}", seed);
        }
    }
}
