//! Scrolling obstacle pairs
//!
//! Each pair is a top segment hanging from above and a bottom segment rising
//! from below, separated by a fixed gap. Pairs enter at the right edge, scroll
//! left at a constant speed and are dropped once fully off screen.
//!
//! The field is kept oldest-first. Since every pair scrolls at the same speed,
//! the front pair is always the leftmost one, so pruning only ever looks at the
//! front.

use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::clock::TickContext;
use super::schedule;
use crate::consts::*;

/// One top/bottom obstacle pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstaclePair {
    /// Left edge shared by both segments
    pub x: f32,
    /// Top edge of the top segment (negative: the segment hangs above the screen)
    pub y: f32,
}

impl ObstaclePair {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Pick a random vertical offset in (-300, -150]
    pub fn spawn_at<R: Rng + ?Sized>(x: f32, rng: &mut R) -> Self {
        let y = -OBSTACLE_OFFSET_SCALE * rng.random_range(1.0f32..2.0);
        Self { x, y }
    }

    pub fn top_segment(&self) -> Aabb {
        Aabb::from_origin_size(self.x, self.y, OBSTACLE_WIDTH, OBSTACLE_HEIGHT)
    }

    pub fn bottom_segment(&self) -> Aabb {
        Aabb::from_origin_size(
            self.x,
            self.gap_bottom(),
            OBSTACLE_WIDTH,
            OBSTACLE_HEIGHT,
        )
    }

    /// Lower edge of the top segment
    #[inline]
    pub fn gap_top(&self) -> f32 {
        self.y + OBSTACLE_HEIGHT
    }

    /// Upper edge of the bottom segment
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_top() + OBSTACLE_GAP
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + OBSTACLE_WIDTH
    }

    /// Fully past the left edge
    #[inline]
    pub fn is_offscreen(&self) -> bool {
        self.right() <= 0.0
    }
}

/// Oldest-first sequence of obstacle pairs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObstacleField {
    pairs: VecDeque<ObstaclePair>,
}

/// What changed in the field during one update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldUpdate {
    pub spawned: Option<ObstaclePair>,
    pub pruned: Option<ObstaclePair>,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObstaclePair> {
        self.pairs.iter()
    }

    pub fn front(&self) -> Option<&ObstaclePair> {
        self.pairs.front()
    }

    pub fn back(&self) -> Option<&ObstaclePair> {
        self.pairs.back()
    }

    /// Append a pair at the back. It must not be left of the current back pair.
    pub fn push(&mut self, pair: ObstaclePair) {
        if let Some(last) = self.pairs.back() {
            assert!(
                pair.x >= last.x,
                "obstacle field out of scroll order: {} < {}",
                pair.x,
                last.x
            );
        }
        self.pairs.push_back(pair);
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }
}

/// Append a new pair at the right edge on spawn ticks
pub fn spawn<R: Rng + ?Sized>(
    field: &mut ObstacleField,
    ctx: &TickContext,
    rng: &mut R,
) -> Option<ObstaclePair> {
    if !schedule::SPAWN.fires(ctx) {
        return None;
    }
    let pair = ObstaclePair::spawn_at(PLAYFIELD_WIDTH, rng);
    field.push(pair);
    log::debug!("Frame {}: obstacle spawned (y = {:.1})", ctx.frame, pair.y);
    Some(pair)
}

/// Move every pair left by the scroll speed
pub fn scroll(field: &mut ObstacleField) {
    for pair in field.pairs.iter_mut() {
        pair.x -= OBSTACLE_SCROLL_SPEED;
    }
}

/// Drop the front pair once it has fully left the screen
pub fn prune(field: &mut ObstacleField) -> Option<ObstaclePair> {
    if field.pairs.front().is_some_and(ObstaclePair::is_offscreen) {
        let pair = field.pairs.pop_front();
        log::debug!("Obstacle pruned ({} remaining)", field.len());
        return pair;
    }
    None
}

/// One tick of the field: spawn, scroll, prune. The caller runs this only
/// while a run is active; a new pair is scrolled in its spawn tick.
pub fn update<R: Rng + ?Sized>(
    field: &mut ObstacleField,
    ctx: &TickContext,
    rng: &mut R,
) -> FieldUpdate {
    let spawned = spawn(field, ctx, rng);
    scroll(field);
    let pruned = prune(field);

    FieldUpdate { spawned, pruned }
}
