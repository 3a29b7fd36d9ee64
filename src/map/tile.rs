//! Tile kinds.

use serde::{Deserialize, Serialize};

/// A single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// Solid rock. Blocks movement and sight.
    #[default]
    Wall,
    /// Carved floor.
    Floor,
}

impl Tile {
    /// Can the player stand here?
    #[must_use]
    pub const fn is_walkable(self) -> bool {
        matches!(self, Tile::Floor)
    }

    /// ASCII symbol used by `Grid::render`.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
        }
    }
}
