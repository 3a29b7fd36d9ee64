//! Entities placed on the dungeon grid.
//!
//! Every occupant (the player and each spawned monster) carries an `EntityId`.
//!
//! ## ID Layout
//!
//! - `0`: Reserved for the player
//! - `1..`: Non-player entities, allocated in spawn order by `GameState`
//!
//! Ids are never reused within one `GameState`, so a stale id held by the
//! caller simply fails to match anything after the entity is removed.
//!
//! ```
//! use rogue_core::core::EntityId;
//!
//! assert!(EntityId::PLAYER.is_player());
//! assert!(!EntityId(3).is_player());
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for an entity within one game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// The player's id.
    pub const PLAYER: Self = Self(0);

    /// First id available for non-player entities.
    pub const FIRST_NON_PLAYER: u32 = 1;

    /// Check if this id refers to the player.
    #[must_use]
    pub const fn is_player(self) -> bool {
        self.0 == Self::PLAYER.0
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Something standing on a grid cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Identity used for lookup and removal.
    pub id: EntityId,
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
    /// Display symbol.
    pub glyph: char,
    /// Whether moving into this entity is an interaction rather than a step.
    pub blocks: bool,
}

impl Entity {
    /// Glyph used for the player.
    pub const PLAYER_GLYPH: char = '@';

    /// Glyph used for monsters spawned by `GameState::center_player`.
    pub const MONSTER_GLYPH: char = 'g';

    /// Create an entity.
    #[must_use]
    pub const fn new(id: EntityId, x: i32, y: i32, glyph: char, blocks: bool) -> Self {
        Self {
            id,
            x,
            y,
            glyph,
            blocks,
        }
    }

    /// Create the player entity at a position.
    #[must_use]
    pub const fn player(x: i32, y: i32) -> Self {
        Self::new(EntityId::PLAYER, x, y, Self::PLAYER_GLYPH, true)
    }

    /// Check whether this entity stands on `(x, y)`.
    #[must_use]
    pub const fn is_at(&self, x: i32, y: i32) -> bool {
        self.x == x && self.y == y
    }

    /// Current position as `(x, y)`.
    #[must_use]
    pub const fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id() {
        assert!(EntityId::PLAYER.is_player());
        assert_eq!(EntityId::PLAYER.raw(), 0);
        assert!(!EntityId(EntityId::FIRST_NON_PLAYER).is_player());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", EntityId(42)), "Entity(42)");
    }

    #[test]
    fn test_player_entity() {
        let player = Entity::player(2, 3);
        assert_eq!(player.id, EntityId::PLAYER);
        assert_eq!(player.glyph, '@');
        assert!(player.blocks);
        assert_eq!(player.position(), (2, 3));
    }

    #[test]
    fn test_is_at() {
        let goblin = Entity::new(EntityId(1), 5, 7, Entity::MONSTER_GLYPH, true);
        assert!(goblin.is_at(5, 7));
        assert!(!goblin.is_at(7, 5));
    }

    #[test]
    fn test_serialization() {
        let entity = Entity::new(EntityId(9), 1, 2, 'g', true);
        let json = serde_json::to_string(&entity).unwrap();
        let deserialized: Entity = serde_json::from_str(&json).unwrap();
        assert_eq!(entity, deserialized);
    }
}
