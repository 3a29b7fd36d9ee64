//! Movement intents and their outcomes.
//!
//! The input layer maps keys to a [`Direction`]; `GameState::try_move` turns
//! it into a [`MoveOutcome`]. Bumping into a blocking entity is reported, not
//! resolved: combat belongs to the caller.

use serde::{Deserialize, Serialize};

use super::entity::EntityId;

/// One orthogonal step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Grid delta `(dx, dy)`; y grows downward.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// What happened when the player tried to step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Target was a wall or off the grid. Nothing changed.
    Blocked,
    /// A blocking entity occupies the target. Nothing changed.
    Bumped(EntityId),
    /// The player now stands on the target.
    Moved { x: i32, y: i32 },
}

impl MoveOutcome {
    /// Whether the player's position changed (and FOV needs recomputing).
    #[must_use]
    pub const fn moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}
