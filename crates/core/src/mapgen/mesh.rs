//! Greedy rectangle meshing of solid cells into collision walls.

use super::grid::CellGrid;
use super::model::WallRect;

/// Covers every solid cell with exactly one rectangle. Scans row-major, grows
/// each rectangle right along its row, then down while the full width stays
/// solid and uncovered.
pub(super) fn mesh_walls(grid: &CellGrid, cell_size: f64) -> Vec<WallRect> {
    let width = grid.width();
    let height = grid.height();
    let mut visited = vec![false; width * height];
    let mut walls = Vec::new();

    for y in 0..height {
        for x in 0..width {
            if visited[y * width + x] || grid.is_open(x, y) {
                continue;
            }

            let free = |column: usize, row: usize, visited: &[bool]| {
                grid.is_solid(column, row) && !visited[row * width + column]
            };

            let mut run = 1;
            while x + run < width && free(x + run, y, &visited) {
                run += 1;
            }

            let mut rows = 1;
            while y + rows < height && (x..x + run).all(|column| free(column, y + rows, &visited)) {
                rows += 1;
            }

            for row in y..y + rows {
                visited[row * width + x..row * width + x + run].fill(true);
            }
            walls.push(WallRect::indestructible(
                x as f64 * cell_size,
                y as f64 * cell_size,
                run as f64 * cell_size,
                rows as f64 * cell_size,
            ));
        }
    }

    walls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapgen::grid::{CELL_SIZE, rasterize};
    use crate::mapgen::model::{Corridor, Room};

    fn coverage(grid: &CellGrid, walls: &[WallRect], cell_size: f64) -> Vec<u32> {
        let mut counts = vec![0_u32; grid.width() * grid.height()];
        for wall in walls {
            let left = (wall.x / cell_size) as usize;
            let top = (wall.y / cell_size) as usize;
            let columns = (wall.w / cell_size) as usize;
            let rows = (wall.h / cell_size) as usize;
            for row in top..top + rows {
                for column in left..left + columns {
                    counts[row * grid.width() + column] += 1;
                }
            }
        }
        counts
    }

    #[test]
    fn fully_solid_grid_becomes_one_wall() {
        let grid = CellGrid::solid(7, 4);
        let walls = mesh_walls(&grid, CELL_SIZE);
        assert_eq!(walls, vec![WallRect::indestructible(0.0, 0.0, 280.0, 160.0)]);
    }

    #[test]
    fn empty_grid_has_no_walls() {
        assert!(mesh_walls(&CellGrid::solid(0, 0), CELL_SIZE).is_empty());
    }

    #[test]
    fn ring_around_a_room_meshes_into_four_strips() {
        let room = Room::new(0, 40.0, 40.0, 80.0, 80.0);
        let grid = rasterize(160.0, 160.0, CELL_SIZE, &[room], &[], 48.0);
        let walls = mesh_walls(&grid, CELL_SIZE);

        assert_eq!(
            walls,
            vec![
                WallRect::indestructible(0.0, 0.0, 160.0, 40.0),
                WallRect::indestructible(0.0, 40.0, 40.0, 120.0),
                WallRect::indestructible(120.0, 40.0, 40.0, 120.0),
                WallRect::indestructible(40.0, 120.0, 80.0, 40.0),
            ]
        );
    }

    #[test]
    fn walls_cover_each_solid_cell_exactly_once() {
        let rooms = [
            Room::new(0, 40.0, 40.0, 120.0, 80.0),
            Room::new(1, 280.0, 200.0, 80.0, 160.0),
            Room::new(2, 80.0, 320.0, 40.0, 40.0),
        ];
        let corridors = [Corridor { from: 0, to: 1 }, Corridor { from: 1, to: 2 }];
        let grid = rasterize(440.0, 440.0, CELL_SIZE, &rooms, &corridors, 40.0);
        let walls = mesh_walls(&grid, CELL_SIZE);
        let counts = coverage(&grid, &walls, CELL_SIZE);

        for row in 0..grid.height() {
            for column in 0..grid.width() {
                let expected = u32::from(grid.is_solid(column, row));
                assert_eq!(counts[row * grid.width() + column], expected, "cell ({column}, {row})");
            }
        }
        assert!(walls.iter().all(|wall| !wall.destructible));
        assert!(walls.len() < grid.solid_count(), "meshing should merge neighboring cells");
    }
}
