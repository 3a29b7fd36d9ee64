//! Visibility: Bresenham line-of-sight and per-move field-of-view.
//!
//! `compute_fov` is called after every player move. It rewrites the
//! `visible` mask from scratch and unions into `explored`.

pub mod line;
pub mod visibility;

pub use line::{line_of_sight, BresenhamLine};
pub use visibility::{compute_fov, DEFAULT_FOV_RADIUS};
