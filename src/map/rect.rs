//! Axis-aligned room rectangles.

use serde::{Deserialize, Serialize};

/// Room bounds: top-left corner plus extent.
///
/// ```
/// use rogue_core::map::Rect;
///
/// let room = Rect::new(2, 3, 6, 4);
/// assert_eq!(room.x2(), 7);
/// assert_eq!(room.center(), (5, 5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// Spawn area used when a grid has no rooms.
    pub const FALLBACK: Rect = Rect::new(1, 1, 3, 3);

    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rightmost column, inclusive.
    #[must_use]
    pub const fn x2(&self) -> i32 {
        self.x.saturating_add(self.w).saturating_sub(1)
    }

    /// Bottom row, inclusive.
    #[must_use]
    pub const fn y2(&self) -> i32 {
        self.y.saturating_add(self.h).saturating_sub(1)
    }

    /// Centre cell, rounded toward the top-left for even extents.
    #[must_use]
    pub const fn center(&self) -> (i32, i32) {
        (self.x.saturating_add(self.w / 2), self.y.saturating_add(self.h / 2))
    }

    /// Inclusive-bound overlap: rooms that share even one cell overlap,
    /// rooms that merely touch edges do not.
    #[must_use]
    pub const fn overlaps(&self, other: &Rect) -> bool {
        self.x <= other.x2() && self.x2() >= other.x && self.y <= other.y2() && self.y2() >= other.y
    }

    /// Positive extent and fully inside a `width` x `height` grid.
    #[must_use]
    pub const fn fits_within(&self, width: i32, height: i32) -> bool {
        self.w > 0
            && self.h > 0
            && self.x >= 0
            && self.y >= 0
            && self.x <= width.saturating_sub(self.w)
            && self.y <= height.saturating_sub(self.h)
    }

    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x <= self.x2() && y >= self.y && y <= self.y2()
    }

    /// Every cell of the rectangle, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let Rect { x, y, w, h } = *self;
        (y..y.saturating_add(h)).flat_map(move |cy| (x..x.saturating_add(w)).map(move |cx| (cx, cy)))
    }
}
