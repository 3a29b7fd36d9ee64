//! Dungeon generation configuration.
//!
//! `DungeonConfig` carries the knobs of the room placer:
//! - `max_rooms`: how many rooms to aim for (attempt budget is `max_rooms * 12`)
//! - `room_min` / `room_max`: inclusive bounds for room width and height
//! - `seed`: xorshift seed, fully determining the layout
//!
//! The generator never validates its configuration. A bad configuration just
//! starves placement and yields fewer (possibly zero) rooms. Callers that want
//! to reject bad input up front use [`DungeonConfig::validate`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rng::XorShift32;

/// Reasons a configuration cannot produce rooms on a given grid.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `room_min` is larger than `room_max`.
    #[error("room size range is inverted: min {min} > max {max}")]
    InvertedRoomRange { min: i32, max: i32 },

    /// Rooms must be at least one tile wide.
    #[error("room_min must be positive, got {min}")]
    NonPositiveRoomSize { min: i32 },

    /// Nothing would ever be attempted.
    #[error("max_rooms must be at least 1")]
    ZeroMaxRooms,

    /// Even the smallest room cannot fit inside the border ring.
    #[error("rooms of size {room_min} cannot fit in a {width}x{height} grid")]
    RoomTooLarge { room_min: i32, width: i32, height: i32 },
}

/// Parameters for one call to the dungeon generator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    /// Target number of rooms.
    pub max_rooms: u32,

    /// Smallest room side, inclusive.
    pub room_min: i32,

    /// Largest room side, inclusive.
    pub room_max: i32,

    /// RNG seed.
    pub seed: u32,
}

impl DungeonConfig {
    /// Placement attempts granted per requested room.
    pub const ATTEMPTS_PER_ROOM: u32 = 12;

    /// Create a configuration.
    #[must_use]
    pub const fn new(max_rooms: u32, room_min: i32, room_max: i32, seed: u32) -> Self {
        Self {
            max_rooms,
            room_min,
            room_max,
            seed,
        }
    }

    /// The single-room layout a fresh `GameState` starts with.
    #[must_use]
    pub const fn placeholder() -> Self {
        Self::new(1, 6, 10, 1)
    }

    /// Set the target room count.
    #[must_use]
    pub fn with_max_rooms(mut self, max_rooms: u32) -> Self {
        self.max_rooms = max_rooms;
        self
    }

    /// Set the inclusive room side range.
    #[must_use]
    pub fn with_room_size(mut self, min: i32, max: i32) -> Self {
        self.room_min = min;
        self.room_max = max;
        self
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Total placement attempts before the generator gives up.
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_rooms.saturating_mul(Self::ATTEMPTS_PER_ROOM)
    }

    /// Check that this configuration can place at least one room on a
    /// `width` x `height` grid.
    ///
    /// A room needs one wall column on the left and two on the right of its
    /// sampling window, so the smallest room must satisfy
    /// `room_min <= width - 3` (and likewise for height).
    pub fn validate(&self, width: i32, height: i32) -> Result<(), ConfigError> {
        if self.max_rooms == 0 {
            return Err(ConfigError::ZeroMaxRooms);
        }
        if self.room_min <= 0 {
            return Err(ConfigError::NonPositiveRoomSize { min: self.room_min });
        }
        if self.room_min > self.room_max {
            return Err(ConfigError::InvertedRoomRange {
                min: self.room_min,
                max: self.room_max,
            });
        }
        if self.room_min > width - 3 || self.room_min > height - 3 {
            return Err(ConfigError::RoomTooLarge {
                room_min: self.room_min,
                width,
                height,
            });
        }
        Ok(())
    }
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self::new(16, 4, 10, XorShift32::DEFAULT_SEED)
    }
}
