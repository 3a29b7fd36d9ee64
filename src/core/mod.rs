//! Core types: RNG, entities, configuration, movement, game state.
//!
//! Everything here is plain owned data. The presentation layer wraps a
//! `GameState` however it likes; nothing in the core observes or notifies.

pub mod rng;
pub mod entity;
pub mod config;
pub mod action;
pub mod state;

pub use rng::{RngState, XorShift32};
pub use entity::{Entity, EntityId};
pub use config::{ConfigError, DungeonConfig};
pub use action::{Direction, MoveOutcome};
pub use state::{GameState, MAX_SPAWNED_MONSTERS};
