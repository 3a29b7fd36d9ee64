//! Rooms-and-corridors layout by rejection sampling.
//!
//! ## Algorithm
//!
//! 1. Start from solid wall.
//! 2. Draw candidate rooms (`w`, `h`, `x`, `y`, in that order) until
//!    `max_rooms` are placed or `max_rooms * 12` attempts are spent. A
//!    candidate is rejected when it overlaps a placed room or leaves the grid.
//! 3. Each accepted room after the first is joined to its predecessor by an
//!    L-shaped corridor between the two centres. One draw picks the bend.
//! 4. Seal the outer ring back to wall.
//!
//! Corridors only chain consecutive rooms, so every room is reachable from
//! the first one along that chain.
//!
//! The draw order above is part of the output contract: reordering draws
//! changes every layout for every seed.

use tracing::{debug, trace};

use crate::core::{DungeonConfig, XorShift32};
use crate::map::{Grid, Rect};

/// Generate a level from a configuration's seed.
///
/// ```
/// use rogue_core::core::DungeonConfig;
/// use rogue_core::generator::generate;
///
/// let grid = generate(40, 30, &DungeonConfig::new(1, 6, 10, 1));
/// assert_eq!(grid.rooms().len(), 1);
/// ```
#[must_use]
pub fn generate(width: i32, height: i32, config: &DungeonConfig) -> Grid {
    let mut rng = XorShift32::new(config.seed);
    generate_with_rng(width, height, config, &mut rng)
}

/// Generate a level drawing from an existing stream.
///
/// `config.seed` is ignored; the layout depends only on `rng`'s state.
#[must_use]
pub fn generate_with_rng(width: i32, height: i32, config: &DungeonConfig, rng: &mut XorShift32) -> Grid {
    let mut grid = Grid::filled(width, height);
    let width = grid.width();
    let height = grid.height();
    let max_rooms = config.max_rooms as usize;
    let max_attempts = config.max_attempts();
    let mut attempts = 0u32;

    while grid.rooms().len() < max_rooms && attempts < max_attempts {
        attempts += 1;

        let w = rng.int_range(config.room_min, config.room_max);
        let h = rng.int_range(config.room_min, config.room_max);
        let x = rng.int_range(1, width.saturating_sub(w).saturating_sub(2));
        let y = rng.int_range(1, height.saturating_sub(h).saturating_sub(2));
        let room = Rect::new(x, y, w, h);

        if !room.fits_within(width, height) || grid.rooms().iter().any(|placed| room.overlaps(placed)) {
            trace!(attempt = attempts, ?room, "rejected room candidate");
            continue;
        }

        grid.carve_room(&room);

        if let Some(prev) = grid.rooms().last().copied() {
            connect(&mut grid, &prev, &room, rng);
        }

        grid.push_room(room);
    }

    if grid.rooms().len() < max_rooms {
        debug!(
            placed = grid.rooms().len(),
            wanted = max_rooms,
            attempts,
            "room placement exhausted its attempts"
        );
    }

    grid.seal_border();

    debug!(
        width,
        height,
        seed = rng.seed(),
        rooms = grid.rooms().len(),
        attempts,
        "generated dungeon"
    );

    grid
}

/// Carve an L-shaped corridor from `prev`'s centre to `room`'s centre.
fn connect(grid: &mut Grid, prev: &Rect, room: &Rect, rng: &mut XorShift32) {
    let (x1, y1) = prev.center();
    let (x2, y2) = room.center();

    if rng.next_f64() < 0.5 {
        grid.carve_h_tunnel(x1, x2, y1);
        grid.carve_v_tunnel(y1, y2, x2);
    } else {
        grid.carve_v_tunnel(y1, y2, x1);
        grid.carve_h_tunnel(x1, x2, y2);
    }
}
