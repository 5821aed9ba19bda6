//! Scrolling floor strip
//!
//! The floor is drawn twice side by side and its offset wraps at half the strip
//! width, which makes the seam invisible.

use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    /// Horizontal scroll offset, in (-FLOOR_WIDTH / 2, 0]
    pub offset: f32,
}

impl Default for Floor {
    fn default() -> Self {
        Self { offset: 0.0 }
    }
}

impl Floor {
    /// Collision boundary
    #[inline]
    pub fn y(&self) -> f32 {
        FLOOR_Y
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_origin_size(self.offset, FLOOR_Y, FLOOR_WIDTH * 2.0, FLOOR_HEIGHT)
    }

    pub fn scroll(&mut self) {
        self.offset = (self.offset - FLOOR_SCROLL_SPEED) % (FLOOR_WIDTH / 2.0);
    }
}
