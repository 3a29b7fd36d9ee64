//! Field-of-view recomputation.

use super::line::line_of_sight;
use crate::core::GameState;

/// Radius the original game used for the player's sight.
pub const DEFAULT_FOV_RADIUS: f64 = 8.0;

/// Recompute what the player currently sees.
///
/// Clears the `visible` mask, then marks every cell inside the circle of
/// `radius` around the player that has an unobstructed Bresenham trace. Newly
/// seen cells are unioned into `explored`, which only `center_player` ever
/// clears.
///
/// Returns how many cells were explored for the first time.
pub fn compute_fov(state: &mut GameState, radius: f64) -> usize {
    let GameState {
        grid,
        player,
        visible,
        explored,
        ..
    } = state;

    visible.fill(false);

    let (px, py) = player.position();
    // No cell lies farther than the grid's longer side, whatever the radius
    let reach = radius.ceil().min(f64::from(grid.width().max(grid.height()))) as i32;
    let radius_sq = radius * radius;

    let x_min = px.saturating_sub(reach).max(0);
    let x_max = px.saturating_add(reach).min(grid.width() - 1);
    let y_min = py.saturating_sub(reach).max(0);
    let y_max = py.saturating_add(reach).min(grid.height() - 1);

    let mut newly_explored = 0;
    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let dist_sq = f64::from((x - px) * (x - px) + (y - py) * (y - py));
            if dist_sq > radius_sq || !line_of_sight(grid, (px, py), (x, y), radius) {
                continue;
            }
            if let Some(i) = grid.index(x, y) {
                visible[i] = true;
                if !explored[i] {
                    explored[i] = true;
                    newly_explored += 1;
                }
            }
        }
    }

    newly_explored
}
