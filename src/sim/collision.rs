//! Geometric containment tests
//!
//! Everything here is axis-aligned in screen space (Y grows downward), so the
//! tests reduce to interval checks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Point containment, inclusive of the top/left edges and exclusive of
    /// the bottom/right edges
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}

/// Check whether a falling bomb touches the tank hull
///
/// The bomb's center must be inside the hull horizontally; vertically its
/// lower edge must have reached the hull top while its center has not yet
/// passed the hull bottom.
pub fn bomb_hits_tank(bomb_pos: Vec2, bomb_radius: f32, hull: &Rect) -> bool {
    bomb_pos.x >= hull.left()
        && bomb_pos.x <= hull.right()
        && bomb_pos.y + bomb_radius >= hull.top()
        && bomb_pos.y <= hull.bottom()
}

/// Shells are discarded below the bottom edge or past either side margin.
/// Nothing is checked above the top: gravity always brings a shell back.
pub fn shell_out_of_bounds(pos: Vec2, tuning: &Tuning) -> bool {
    pos.y > tuning.screen_height
        || pos.x < -tuning.shell_margin
        || pos.x > tuning.screen_width + tuning.shell_margin
}

/// Bombs are only discarded once they fall past the bottom margin
pub fn bomb_out_of_bounds(pos: Vec2, tuning: &Tuning) -> bool {
    pos.y > tuning.screen_height + tuning.bomb_margin
}
