//! Collision predicates
//!
//! Pure functions over actor, floor and obstacle geometry. They report, they do
//! not act: freezing the actor, ending the run and requesting the hit cue are
//! the driver's job.

use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::floor::Floor;
use super::obstacles::{ObstacleField, ObstaclePair};

/// What the actor ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionKind {
    Floor,
    /// Index into the obstacle field at detection time
    Obstacle { index: usize },
}

/// Actor bottom has reached the floor line
pub fn hits_floor(actor: &Actor, floor: &Floor) -> bool {
    actor.bounds().bottom() >= floor.y()
}

/// Actor is outside the gap of a pair it has reached
///
/// The horizontal test only checks that the actor's right edge has reached the
/// pair; a pair the actor has already cleared still counts until it is pruned.
pub fn hits_obstacle(actor: &Actor, pair: &ObstaclePair) -> bool {
    let body = actor.bounds();
    if body.right() < pair.x {
        return false;
    }
    body.top() <= pair.top_segment().bottom() || body.bottom() >= pair.bottom_segment().top()
}

/// Every collision the actor is in this tick, floor first, then pairs oldest-first
pub fn detect(actor: &Actor, floor: &Floor, field: &ObstacleField) -> Vec<CollisionKind> {
    let mut hits = Vec::new();
    if hits_floor(actor, floor) {
        hits.push(CollisionKind::Floor);
    }
    hits.extend(
        field
            .iter()
            .enumerate()
            .filter(|(_, pair)| hits_obstacle(actor, pair))
            .map(|(index, _)| CollisionKind::Obstacle { index }),
    );
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn actor_at(y: f32) -> Actor {
        Actor {
            y,
            ..Actor::default()
        }
    }

    #[test]
    fn test_floor_contact_is_inclusive() {
        let floor = Floor::default();
        assert!(!hits_floor(&actor_at(FLOOR_Y - ACTOR_HEIGHT - 0.1), &floor));
        assert!(hits_floor(&actor_at(FLOOR_Y - ACTOR_HEIGHT), &floor));
        assert!(hits_floor(&actor_at(FLOOR_Y), &floor));
    }

    #[test]
    fn test_pair_not_reached_is_ignored() {
        // Actor right edge is 43; pair starts just past it
        let pair = ObstaclePair::new(43.5, -200.0);
        assert!(!hits_obstacle(&actor_at(0.0), &pair));
    }

    #[test]
    fn test_safe_inside_gap() {
        // Gap spans y in (200, 290)
        let pair = ObstaclePair::new(43.0, -200.0);
        assert!(!hits_obstacle(&actor_at(230.0), &pair));
    }

    #[test]
    fn test_hits_top_segment() {
        let pair = ObstaclePair::new(30.0, -200.0);
        assert!(hits_obstacle(&actor_at(200.0), &pair));
        assert!(hits_obstacle(&actor_at(150.0), &pair));
    }

    #[test]
    fn test_hits_bottom_segment() {
        let pair = ObstaclePair::new(30.0, -200.0);
        // Bottom edge 266 + 24 = 290 touches the bottom segment
        assert!(hits_obstacle(&actor_at(266.0), &pair));
        assert!(!hits_obstacle(&actor_at(265.0), &pair));
    }

    #[test]
    fn test_cleared_pair_still_checked_until_pruned() {
        // Pair fully left of the actor but not yet pruned
        let pair = ObstaclePair::new(-45.0, -200.0);
        assert!(hits_obstacle(&actor_at(100.0), &pair));
        assert!(!hits_obstacle(&actor_at(230.0), &pair));
    }

    #[test]
    fn test_detect_orders_floor_then_pairs() {
        let mut field = ObstacleField::new();
        field.push(ObstaclePair::new(30.0, -250.0));
        field.push(ObstaclePair::new(230.0, -250.0));
        field.push(ObstaclePair::new(40.0 + 200.0, -250.0));

        let actor = actor_at(FLOOR_Y);
        let hits = detect(&actor, &Floor::default(), &field);
        assert_eq!(
            hits,
            vec![CollisionKind::Floor, CollisionKind::Obstacle { index: 0 }]
        );
    }

    #[test]
    fn test_detect_empty_when_clear() {
        let field = ObstacleField::new();
        assert!(detect(&actor_at(ACTOR_START_Y), &Floor::default(), &field).is_empty());
    }
}
