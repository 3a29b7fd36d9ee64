//! Procedural level generation.
//!
//! The generator is a pure function of `(width, height, DungeonConfig)`:
//! the seed inside the configuration fully determines the returned `Grid`.

pub mod dungeon;

pub use dungeon::{generate, generate_with_rng};
