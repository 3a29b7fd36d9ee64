//! Integer line tracing and line-of-sight.

use crate::map::Grid;

/// Cells stepped by Bresenham's algorithm from `from` to `to`.
///
/// The source cell is not yielded; the target cell is always the last item.
/// Tracing a cell to itself yields nothing.
///
/// ```
/// use rogue_core::fov::BresenhamLine;
///
/// let cells: Vec<_> = BresenhamLine::new((0, 0), (3, 1)).collect();
/// assert_eq!(cells.last(), Some(&(3, 1)));
/// assert_eq!(cells.len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct BresenhamLine {
    x: i32,
    y: i32,
    target: (i32, i32),
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
}

impl BresenhamLine {
    #[must_use]
    pub fn new(from: (i32, i32), to: (i32, i32)) -> Self {
        let (x0, y0) = from;
        let (x1, y1) = to;
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        Self {
            x: x0,
            y: y0,
            target: to,
            dx,
            dy,
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
            err: dx + dy,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if (self.x, self.y) == self.target {
            return None;
        }

        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }

        Some((self.x, self.y))
    }
}

/// Can `to` be seen from `from` on `grid`?
///
/// Every intermediate cell on the Bresenham trace must be walkable. The target
/// itself is never tested, so wall faces are visible. A trace whose step
/// strays beyond `radius` from the source counts as not visible; callers that
/// pre-filter by radius never hit that bound in practice.
#[must_use]
pub fn line_of_sight(grid: &Grid, from: (i32, i32), to: (i32, i32), radius: f64) -> bool {
    let (x0, y0) = from;
    let radius_sq = radius * radius;

    for (x, y) in BresenhamLine::new(from, to) {
        let dist_sq = f64::from((x - x0) * (x - x0) + (y - y0) * (y - y0));
        if dist_sq > radius_sq {
            return false;
        }
        if (x, y) != to && !grid.is_walkable(x, y) {
            return false;
        }
    }

    true
}
