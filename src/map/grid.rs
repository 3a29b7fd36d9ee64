//! Grid model: tiles plus the rooms carved into them.
//!
//! Tiles are stored row-major (`y * width + x`). Coordinates are `i32` so that
//! neighbour arithmetic can step off the map; every query treats
//! out-of-bounds as "not there" rather than panicking.
//!
//! Only the generator mutates tiles. Outside the crate a `Grid` is a read-only
//! value, replaced wholesale on regeneration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rect::Rect;
use super::tile::Tile;

/// Failure to read a grid from its ASCII picture.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridParseError {
    /// A row's length differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    /// A character other than `#` or `.`.
    #[error("unknown tile {glyph:?} at ({x}, {y})")]
    UnknownGlyph { glyph: char, x: usize, y: usize },
}

/// A generated level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
    rooms: Vec<Rect>,
}

impl Grid {
    /// Create an all-wall grid with no rooms.
    ///
    /// Negative dimensions are treated as zero.
    #[must_use]
    pub fn filled(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            tiles: vec![Tile::Wall; (width as usize) * (height as usize)],
            rooms: Vec::new(),
        }
    }

    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells (`width * height`).
    #[must_use]
    pub fn area(&self) -> usize {
        self.tiles.len()
    }

    /// Rooms in placement order.
    #[must_use]
    pub fn rooms(&self) -> &[Rect] {
        &self.rooms
    }

    /// Row-major tiles.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[must_use]
    pub const fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    /// Row-major index of `(x, y)`, if in bounds.
    #[must_use]
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Tile at `(x, y)`, if in bounds.
    #[must_use]
    pub fn tile(&self, x: i32, y: i32) -> Option<Tile> {
        self.index(x, y).map(|i| self.tiles[i])
    }

    /// Floor inside the grid.
    #[must_use]
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.tile(x, y).is_some_and(Tile::is_walkable)
    }

    /// Number of floor tiles.
    #[must_use]
    pub fn floor_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_walkable()).count()
    }

    /// ASCII picture, one line per row.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.tiles.len() + self.height as usize);
        for row in self.tiles.chunks(self.width.max(1) as usize) {
            out.extend(row.iter().map(|t| t.glyph()));
            out.push('\n');
        }
        out
    }

    /// Read a grid back from the `render` format (`#` wall, `.` floor).
    ///
    /// The result has no rooms. A trailing newline is optional.
    ///
    /// ```
    /// use rogue_core::map::Grid;
    ///
    /// let grid = Grid::parse("###\n#.#\n###").unwrap();
    /// assert!(grid.is_walkable(1, 1));
    /// assert_eq!(grid.render(), "###\n#.#\n###\n");
    /// ```
    pub fn parse(picture: &str) -> Result<Self, GridParseError> {
        let mut tiles = Vec::with_capacity(picture.len());
        let mut width = 0usize;
        let mut height = 0usize;

        for (y, line) in picture.lines().enumerate() {
            let start = tiles.len();
            for (x, glyph) in line.chars().enumerate() {
                let tile = match glyph {
                    '#' => Tile::Wall,
                    '.' => Tile::Floor,
                    _ => return Err(GridParseError::UnknownGlyph { glyph, x, y }),
                };
                tiles.push(tile);
            }

            let found = tiles.len() - start;
            if y == 0 {
                width = found;
            } else if found != width {
                return Err(GridParseError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            height += 1;
        }

        Ok(Self {
            width: width as i32,
            height: height as i32,
            tiles,
            rooms: Vec::new(),
        })
    }

    // === Carving (generator only) ===

    pub(crate) fn set(&mut self, x: i32, y: i32, tile: Tile) {
        if let Some(i) = self.index(x, y) {
            self.tiles[i] = tile;
        }
    }

    pub(crate) fn carve_room(&mut self, room: &Rect) {
        for (x, y) in room.cells() {
            self.set(x, y, Tile::Floor);
        }
    }

    pub(crate) fn carve_h_tunnel(&mut self, x1: i32, x2: i32, y: i32) {
        for x in x1.min(x2)..=x1.max(x2) {
            self.set(x, y, Tile::Floor);
        }
    }

    pub(crate) fn carve_v_tunnel(&mut self, y1: i32, y2: i32, x: i32) {
        for y in y1.min(y2)..=y1.max(y2) {
            self.set(x, y, Tile::Floor);
        }
    }

    pub(crate) fn push_room(&mut self, room: Rect) {
        self.rooms.push(room);
    }

    /// Force the outermost ring back to wall.
    pub(crate) fn seal_border(&mut self) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        for x in 0..self.width {
            self.set(x, 0, Tile::Wall);
            self.set(x, self.height - 1, Tile::Wall);
        }
        for y in 0..self.height {
            self.set(0, y, Tile::Wall);
            self.set(self.width - 1, y, Tile::Wall);
        }
    }
}
