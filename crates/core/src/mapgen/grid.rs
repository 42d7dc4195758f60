//! Binary open/solid cell grid and the rasterizer that carves rooms and
//! corridors into it.

use super::model::{Corridor, Room};

/// World units covered by one grid cell along each axis.
pub const CELL_SIZE: f64 = 40.0;

const SOLID: u8 = 1;
const OPEN: u8 = 0;

/// Row-major grid where `1` marks solid rock and `0` marks walkable floor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellGrid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl CellGrid {
    pub fn solid(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![SOLID; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Out-of-range cells count as solid.
    pub fn is_solid(&self, x: usize, y: usize) -> bool {
        x >= self.width || y >= self.height || self.cells[y * self.width + x] == SOLID
    }

    pub fn is_open(&self, x: usize, y: usize) -> bool {
        !self.is_solid(x, y)
    }

    pub fn solid_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == SOLID).count()
    }

    /// Cell containing a world-space point, if the point lies on the grid.
    pub fn cell_at_point(&self, x: f64, y: f64, cell_size: f64) -> Option<(usize, usize)> {
        if x.is_nan() || y.is_nan() || x < 0.0 || y < 0.0 {
            return None;
        }
        let column = (x / cell_size).floor() as usize;
        let row = (y / cell_size).floor() as usize;
        (column < self.width && row < self.height).then_some((column, row))
    }

    pub fn is_open_at_point(&self, x: f64, y: f64, cell_size: f64) -> bool {
        self.cell_at_point(x, y, cell_size).is_some_and(|(column, row)| self.is_open(column, row))
    }

    /// Opens every cell in the inclusive range, clipped to the grid.
    fn carve(&mut self, left: i64, top: i64, right: i64, bottom: i64) {
        let max_column = self.width as i64 - 1;
        let max_row = self.height as i64 - 1;
        let (left, right) = (left.max(0), right.min(max_column));
        let (top, bottom) = (top.max(0), bottom.min(max_row));
        if left > right || top > bottom {
            return;
        }
        for row in top as usize..=bottom as usize {
            let start = row * self.width;
            self.cells[start + left as usize..=start + right as usize].fill(OPEN);
        }
    }
}

fn cell_index(value: f64, cell_size: f64) -> i64 {
    (value / cell_size).floor() as i64
}

pub(super) fn rasterize(
    world_width: f64,
    world_height: f64,
    cell_size: f64,
    rooms: &[Room],
    corridors: &[Corridor],
    corridor_width: f64,
) -> CellGrid {
    let width = (world_width / cell_size).ceil().max(0.0) as usize;
    let height = (world_height / cell_size).ceil().max(0.0) as usize;
    let mut grid = CellGrid::solid(width, height);

    for room in rooms {
        carve_room(&mut grid, room, cell_size);
    }

    let half_width = (corridor_width / 2.0 / cell_size).ceil() as i64;
    for corridor in corridors {
        let (Some(source), Some(destination)) = (rooms.get(corridor.from), rooms.get(corridor.to))
        else {
            continue;
        };
        carve_corridor(&mut grid, source, destination, cell_size, half_width);
    }

    grid
}

fn carve_room(grid: &mut CellGrid, room: &Room, cell_size: f64) {
    let left = cell_index(room.x, cell_size);
    let top = cell_index(room.y, cell_size);
    let right = ((room.x + room.w) / cell_size).ceil() as i64 - 1;
    let bottom = ((room.y + room.h) / cell_size).ceil() as i64 - 1;
    grid.carve(left, top, right, bottom);
}

/// L-shaped corridor: along the source's center row to the destination's
/// center column, then along that column to the destination's center row.
fn carve_corridor(
    grid: &mut CellGrid,
    source: &Room,
    destination: &Room,
    cell_size: f64,
    half_width: i64,
) {
    let source_column = cell_index(source.cx, cell_size);
    let source_row = cell_index(source.cy, cell_size);
    let destination_column = cell_index(destination.cx, cell_size);
    let destination_row = cell_index(destination.cy, cell_size);

    grid.carve(
        source_column.min(destination_column) - half_width,
        source_row - half_width,
        source_column.max(destination_column) + half_width,
        source_row + half_width,
    );
    grid.carve(
        destination_column - half_width,
        source_row.min(destination_row) - half_width,
        destination_column + half_width,
        source_row.max(destination_row) + half_width,
    );
}
