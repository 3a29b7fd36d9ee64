//! Game state: the level grid plus everything standing on it.
//!
//! ## Contents
//!
//! - The current `Grid`, replaced wholesale on regeneration
//! - The player entity (always `EntityId::PLAYER`)
//! - Non-player entities in spawn order
//! - `visible` / `explored` masks, index-aligned with the grid's tiles
//!
//! ## Lifecycle
//!
//! `GameState::new` builds a placeholder single-room level with the player at
//! `(2, 2)`. After every regeneration `center_player` moves the player to the
//! first room, clears both masks and respawns one monster in each of the next
//! five rooms.
//!
//! Uses `im::Vector` for the entity list so snapshots clone in O(1).

use im::Vector;
use tracing::debug;

use super::action::{Direction, MoveOutcome};
use super::config::DungeonConfig;
use super::entity::{Entity, EntityId};
use crate::generator::generate;
use crate::map::{Grid, Rect};

/// Most monsters spawned by `center_player` (rooms `1..=5`).
pub const MAX_SPAWNED_MONSTERS: usize = 5;

/// Level, player, monsters and visibility masks.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) grid: Grid,
    pub(crate) player: Entity,
    pub(crate) entities: Vector<Entity>,
    pub(crate) explored: Vec<bool>,
    pub(crate) visible: Vec<bool>,
    next_entity_id: u32,
}

impl GameState {
    /// Create a placeholder state: a single-room level, player at `(2, 2)`,
    /// no monsters, nothing seen.
    ///
    /// Call [`regenerate`](Self::regenerate) or
    /// [`center_player`](Self::center_player) before play.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        let grid = generate(width, height, &DungeonConfig::placeholder());
        let area = grid.area();
        Self {
            grid,
            player: Entity::player(2, 2),
            entities: Vector::new(),
            explored: vec![false; area],
            visible: vec![false; area],
            next_entity_id: EntityId::FIRST_NON_PLAYER,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    #[must_use]
    pub fn player(&self) -> &Entity {
        &self.player
    }

    /// Non-player entities in spawn order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Currently visible mask, row-major.
    #[must_use]
    pub fn visible(&self) -> &[bool] {
        &self.visible
    }

    /// Ever-seen mask, row-major.
    #[must_use]
    pub fn explored(&self) -> &[bool] {
        &self.explored
    }

    #[must_use]
    pub fn is_visible(&self, x: i32, y: i32) -> bool {
        self.grid.index(x, y).is_some_and(|i| self.visible[i])
    }

    #[must_use]
    pub fn is_explored(&self, x: i32, y: i32) -> bool {
        self.grid.index(x, y).is_some_and(|i| self.explored[i])
    }

    // === Queries ===

    /// False off the grid or on wall.
    #[must_use]
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.grid.is_walkable(x, y)
    }

    /// The player if standing on `(x, y)`, else the first entity there in
    /// spawn order.
    #[must_use]
    pub fn entity_at(&self, x: i32, y: i32) -> Option<&Entity> {
        if self.player.is_at(x, y) {
            return Some(&self.player);
        }
        self.entities.iter().find(|e| e.is_at(x, y))
    }

    /// Look up a non-player entity by id.
    #[must_use]
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    // === Level lifecycle ===

    /// Reposition the player and repopulate monsters for the current grid.
    ///
    /// The player goes to the centre of the first room (or of
    /// `Rect::FALLBACK` when there are no rooms). Both masks are cleared. Rooms
    /// `1..=5` each get one blocking monster at their centre.
    pub fn center_player(&mut self) {
        let first = self.grid.rooms().first().copied().unwrap_or(Rect::FALLBACK);
        let (px, py) = first.center();
        self.player.x = px;
        self.player.y = py;

        self.explored.fill(false);
        self.visible.fill(false);

        self.entities.clear();
        let spawn_rooms: Vec<Rect> = self
            .grid
            .rooms()
            .iter()
            .skip(1)
            .take(MAX_SPAWNED_MONSTERS)
            .copied()
            .collect();
        for room in spawn_rooms {
            let (x, y) = room.center();
            self.spawn_entity(x, y, Entity::MONSTER_GLYPH, true);
        }
    }

    /// Replace the level with a freshly generated one of the same size, then
    /// [`center_player`](Self::center_player).
    pub fn regenerate(&mut self, config: &DungeonConfig) {
        let grid = generate(self.width(), self.height(), config);
        debug!(seed = config.seed, rooms = grid.rooms().len(), "regenerated level");
        self.set_grid(grid);
        self.center_player();
    }

    /// Install an externally built grid, resizing both masks to its area.
    ///
    /// Entities and the player are left untouched; follow with
    /// [`center_player`](Self::center_player) or
    /// [`set_player_position`](Self::set_player_position).
    pub fn set_grid(&mut self, grid: Grid) {
        let area = grid.area();
        self.grid = grid;
        self.explored = vec![false; area];
        self.visible = vec![false; area];
    }

    /// Place the player directly, bypassing movement rules.
    pub fn set_player_position(&mut self, x: i32, y: i32) {
        self.player.x = x;
        self.player.y = y;
    }

    // === Entities ===

    /// Add a non-player entity and return its new id.
    pub fn spawn_entity(&mut self, x: i32, y: i32, glyph: char, blocks: bool) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        self.entities.push_back(Entity::new(id, x, y, glyph, blocks));
        id
    }

    /// Remove a non-player entity by id.
    ///
    /// Returns the removed entity, or `None` if no such entity exists. The
    /// player cannot be removed.
    pub fn remove_entity(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(index))
    }

    // === Movement ===

    /// Step the player one cell.
    pub fn try_move(&mut self, direction: Direction) -> MoveOutcome {
        let (dx, dy) = direction.delta();
        self.try_move_by(dx, dy)
    }

    /// Step the player by `(dx, dy)`.
    ///
    /// Off-grid or wall targets leave the player in place. A blocking entity
    /// on the target is reported as [`MoveOutcome::Bumped`] and also leaves the
    /// player in place. Visibility is not recomputed here.
    pub fn try_move_by(&mut self, dx: i32, dy: i32) -> MoveOutcome {
        if dx == 0 && dy == 0 {
            return MoveOutcome::Blocked;
        }

        let nx = self.player.x + dx;
        let ny = self.player.y + dy;
        if !self.is_walkable(nx, ny) {
            return MoveOutcome::Blocked;
        }

        if let Some(occupant) = self.entity_at(nx, ny) {
            if occupant.blocks {
                return MoveOutcome::Bumped(occupant.id);
            }
        }

        self.player.x = nx;
        self.player.y = ny;
        MoveOutcome::Moved { x: nx, y: ny }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_state() -> GameState {
        let mut state = GameState::new(12, 12);
        state.set_grid(Grid::parse(
            "############\n\
             #..........#\n\
             #..........#\n\
             #..........#\n\
             #....#.....#\n\
             #..........#\n\
             #..........#\n\
             #..........#\n\
             #..........#\n\
             #..........#\n\
             #..........#\n\
             ############",
        )
        .unwrap());
        state.set_player_position(3, 3);
        state
    }

    #[test]
    fn test_new_placeholder() {
        let state = GameState::new(40, 30);

        assert_eq!(state.grid().rooms().len(), 1);
        assert_eq!(state.player().position(), (2, 2));
        assert_eq!(state.entity_count(), 0);
        assert_eq!(state.visible().len(), 40 * 30);
        assert!(state.explored().iter().all(|&e| !e));
    }

    #[test]
    fn test_center_player_single_room() {
        let mut state = GameState::new(40, 30);
        state.center_player();

        let room = state.grid().rooms()[0];
        assert_eq!(state.player().position(), room.center());
        assert_eq!(state.entity_count(), 0);
    }

    #[test]
    fn test_center_player_fallback_without_rooms() {
        let mut state = GameState::new(5, 5);
        assert!(state.grid().rooms().is_empty());

        state.center_player();
        assert_eq!(state.player().position(), (2, 2));
    }

    #[test]
    fn test_center_player_spawns_up_to_five() {
        let mut state = GameState::new(80, 40);
        state.regenerate(&DungeonConfig::default().with_seed(11));

        let rooms = state.grid().rooms().to_vec();
        let expected = rooms.len().saturating_sub(1).min(MAX_SPAWNED_MONSTERS);
        assert_eq!(state.entity_count(), expected);

        for (entity, room) in state.entities().zip(rooms.iter().skip(1)) {
            assert_eq!(entity.position(), room.center());
            assert_eq!(entity.glyph, 'g');
            assert!(entity.blocks);
        }
    }

    #[test]
    fn test_center_player_clears_masks() {
        let mut state = open_state();
        state.visible[20] = true;
        state.explored[21] = true;

        state.center_player();

        assert!(state.visible().iter().all(|&v| !v));
        assert!(state.explored().iter().all(|&v| !v));
    }

    #[test]
    fn test_is_walkable_bounds() {
        let state = open_state();
        assert!(state.is_walkable(1, 1));
        assert!(!state.is_walkable(0, 1));
        assert!(!state.is_walkable(-1, 5));
        assert!(!state.is_walkable(12, 5));
        assert!(!state.is_walkable(5, 4));
    }

    #[test]
    fn test_entity_at_prefers_player() {
        let mut state = open_state();
        state.spawn_entity(3, 3, 'g', true);

        assert_eq!(state.entity_at(3, 3).map(|e| e.id), Some(EntityId::PLAYER));
    }

    #[test]
    fn test_entity_at_first_in_spawn_order() {
        let mut state = open_state();
        let first = state.spawn_entity(6, 6, 'g', true);
        state.spawn_entity(6, 6, 'o', false);

        assert_eq!(state.entity_at(6, 6).map(|e| e.id), Some(first));
        assert!(state.entity_at(7, 7).is_none());
    }

    #[test]
    fn test_move_into_wall_is_blocked() {
        let mut state = open_state();
        state.set_player_position(1, 1);

        assert_eq!(state.try_move(Direction::Up), MoveOutcome::Blocked);
        assert_eq!(state.try_move(Direction::Left), MoveOutcome::Blocked);
        assert_eq!(state.player().position(), (1, 1));
    }

    #[test]
    fn test_move_onto_floor() {
        let mut state = open_state();
        assert_eq!(state.try_move(Direction::Right), MoveOutcome::Moved { x: 4, y: 3 });
        assert_eq!(state.try_move(Direction::Down), MoveOutcome::Moved { x: 4, y: 4 });
        assert_eq!(state.player().position(), (4, 4));
    }

    #[test]
    fn test_move_into_blocking_entity_bumps() {
        let mut state = open_state();
        let goblin = state.spawn_entity(4, 3, 'g', true);

        assert_eq!(state.try_move(Direction::Right), MoveOutcome::Bumped(goblin));
        assert_eq!(state.player().position(), (3, 3));
    }

    #[test]
    fn test_move_over_non_blocking_entity() {
        let mut state = open_state();
        state.spawn_entity(4, 3, '!', false);

        assert!(state.try_move(Direction::Right).moved());
        assert_eq!(state.player().position(), (4, 3));
    }

    #[test]
    fn test_zero_delta_is_blocked() {
        let mut state = open_state();
        assert_eq!(state.try_move_by(0, 0), MoveOutcome::Blocked);
    }

    #[test]
    fn test_remove_entity_by_id() {
        let mut state = open_state();
        let a = state.spawn_entity(5, 5, 'g', true);
        let b = state.spawn_entity(6, 6, 'g', true);

        let removed = state.remove_entity(a).unwrap();
        assert_eq!(removed.position(), (5, 5));
        assert_eq!(state.entity_count(), 1);
        assert!(state.entity(a).is_none());
        assert!(state.entity(b).is_some());

        assert!(state.remove_entity(a).is_none());
        assert!(state.remove_entity(EntityId::PLAYER).is_none());
    }

    #[test]
    fn test_ids_not_reused_after_respawn() {
        let mut state = GameState::new(80, 40);
        state.regenerate(&DungeonConfig::default().with_seed(3));
        let before: Vec<_> = state.entities().map(|e| e.id).collect();

        state.center_player();
        let after: Vec<_> = state.entities().map(|e| e.id).collect();

        assert!(after.iter().all(|id| !before.contains(id)));
    }

    #[test]
    fn test_regenerate_same_seed() {
        let config = DungeonConfig::default().with_seed(42);
        let mut a = GameState::new(60, 30);
        let mut b = GameState::new(60, 30);
        a.regenerate(&config);
        b.regenerate(&config);

        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.player(), b.player());
    }

    #[test]
    fn test_set_grid_resizes_masks() {
        let mut state = GameState::new(40, 30);
        state.set_grid(Grid::filled(5, 5));
        assert_eq!(state.visible().len(), 25);
        assert_eq!(state.explored().len(), 25);
    }

    #[test]
    fn test_mask_queries_out_of_bounds() {
        let state = open_state();
        assert!(!state.is_visible(-1, 0));
        assert!(!state.is_explored(100, 100));
    }

    #[test]
    fn test_snapshot_clone_is_independent() {
        let mut state = open_state();
        state.spawn_entity(5, 5, 'g', true);
        let snapshot = state.clone();

        state.spawn_entity(6, 6, 'g', true);
        assert_eq!(snapshot.entity_count(), 1);
        assert_eq!(state.entity_count(), 2);
    }
}
