//! Final pass that keeps spawn candidates off solid geometry.

use super::grid::CellGrid;
use super::model::Room;

/// Moves every enemy and loot candidate that sits outside the grid or on a
/// solid cell to its room's center. Returns how many points moved.
pub(super) fn snap_spawns_to_open_cells(
    rooms: &mut [Room],
    grid: &CellGrid,
    cell_size: f64,
) -> usize {
    let mut snapped = 0;
    for room in rooms.iter_mut() {
        let (cx, cy) = (room.cx, room.cy);
        for enemy in &mut room.enemies {
            if !grid.is_open_at_point(enemy.x, enemy.y, cell_size) {
                (enemy.x, enemy.y) = (cx, cy);
                snapped += 1;
            }
        }
        for loot in &mut room.loot_positions {
            if !grid.is_open_at_point(loot.x, loot.y, cell_size) {
                (loot.x, loot.y) = (cx, cy);
                snapped += 1;
            }
        }
    }
    snapped
}
