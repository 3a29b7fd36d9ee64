//! Grid model: tiles, room rectangles, and the level grid.
//!
//! A `Grid` is plain data. The generator builds it; everything else reads it.

pub mod tile;
pub mod rect;
pub mod grid;

pub use tile::Tile;
pub use rect::Rect;
pub use grid::{Grid, GridParseError};
