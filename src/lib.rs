//! # rogue-core
//!
//! Deterministic dungeon generation and field-of-view for grid roguelikes.
//!
//! ## Design Principles
//!
//! 1. **Reproducible**: A seed fully determines a level. The RNG is a 32-bit
//!    xorshift with no platform-dependent behaviour.
//!
//! 2. **Plain Data**: `Grid` and `GameState` are ordinary owned values. Input
//!    handling, message logs, combat and rendering live outside this crate and
//!    call in through the functions below.
//!
//! 3. **No Failure Paths**: Out-of-bounds queries answer `false`/`None`, and a
//!    configuration that cannot place rooms just yields fewer rooms.
//!
//! ## Flow
//!
//! ```
//! use rogue_core::{compute_fov, Direction, DungeonConfig, GameState, DEFAULT_FOV_RADIUS};
//!
//! let mut state = GameState::new(80, 40);
//! state.regenerate(&DungeonConfig::default().with_seed(7));
//! compute_fov(&mut state, DEFAULT_FOV_RADIUS);
//!
//! if state.try_move(Direction::Right).moved() {
//!     compute_fov(&mut state, DEFAULT_FOV_RADIUS);
//! }
//! assert!(state.is_visible(state.player().x, state.player().y));
//! ```
//!
//! ## Modules
//!
//! - `core`: RNG, entities, configuration, movement, `GameState`
//! - `map`: `Tile`, `Rect`, `Grid`
//! - `generator`: rooms-and-corridors layout
//! - `fov`: line-of-sight and field-of-view

pub mod core;
pub mod map;
pub mod generator;
pub mod fov;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, Direction, DungeonConfig, Entity, EntityId, GameState, MoveOutcome, RngState,
    XorShift32,
};

pub use crate::map::{Grid, GridParseError, Rect, Tile};

pub use crate::generator::{generate, generate_with_rng};

pub use crate::fov::{compute_fov, line_of_sight, BresenhamLine, DEFAULT_FOV_RADIUS};
