//! Read-only invariant checker for finished layouts.
//!
//! Re-derives the cell grid from the layout's own rooms and corridors and
//! reports every broken invariant instead of stopping at the first one.

use std::collections::{BTreeSet, VecDeque};

use thiserror::Error;

use super::grid::CellGrid;
use super::layout::WORLD_PADDING;
use super::model::{DungeonLayout, Rect, RoomRole};

const BOUNDS_EPSILON: f64 = 1e-6;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum LayoutViolation {
    #[error("room {id} is stored at index {index}")]
    RoomIdMismatch { index: usize, id: usize },
    #[error("rooms {a} and {b} overlap within a padding of {padding}")]
    RoomOverlap { a: usize, b: usize, padding: f64 },
    #[error("corridor {index} references missing room {room}")]
    DanglingCorridor { index: usize, room: usize },
    #[error("room {room} is unreachable from room 0")]
    Unreachable { room: usize },
    #[error("expected spawn room {expected:?}, found {found:?}")]
    SpawnRoom { expected: Option<usize>, found: Option<usize> },
    #[error("expected boss room {expected:?}, found {found:?}")]
    BossRoom { expected: Option<usize>, found: Option<usize> },
    #[error("room {room} has role {found:?}, expected {expected:?}")]
    RoleMismatch { room: usize, expected: RoomRole, found: RoomRole },
    #[error("room {room} has a spawn point on solid ground at ({x}, {y})")]
    SpawnOnSolid { room: usize, x: f64, y: f64 },
    #[error("room {room} breaks the {padding} world padding")]
    OutOfBounds { room: usize, padding: f64 },
    #[error("cell ({column}, {row}) is covered by {count} walls")]
    WallOverlap { column: usize, row: usize, count: u32 },
    #[error("solid cell ({column}, {row}) has no wall")]
    UncoveredCell { column: usize, row: usize },
    #[error("wall {index} covers open cell ({column}, {row})")]
    WallOverOpenCell { index: usize, column: usize, row: usize },
    #[error("wall {index} is not aligned to the cell grid or leaves it")]
    MisalignedWall { index: usize },
}

/// Returns every invariant the layout breaks. An empty vector means the
/// layout is sound.
pub fn audit_layout(layout: &DungeonLayout) -> Vec<LayoutViolation> {
    let mut violations = Vec::new();
    check_room_ids(layout, &mut violations);
    check_room_overlap(layout, &mut violations);
    check_connectivity(layout, &mut violations);
    check_roles(layout, &mut violations);
    check_bounds(layout, &mut violations);

    let grid = layout.rasterize();
    check_spawn_points(layout, &grid, &mut violations);
    check_wall_cover(layout, &grid, &mut violations);
    violations
}

fn check_room_ids(layout: &DungeonLayout, violations: &mut Vec<LayoutViolation>) {
    for (index, room) in layout.rooms.iter().enumerate() {
        if room.id != index {
            violations.push(LayoutViolation::RoomIdMismatch { index, id: room.id });
        }
    }
}

fn check_room_overlap(layout: &DungeonLayout, violations: &mut Vec<LayoutViolation>) {
    let padding = layout.room_padding();
    for (a, left) in layout.rooms.iter().enumerate() {
        for (b, right) in layout.rooms.iter().enumerate().skip(a + 1) {
            if left.padded_bounds(padding).intersects(&right.padded_bounds(padding)) {
                violations.push(LayoutViolation::RoomOverlap { a, b, padding });
            }
        }
    }
}

fn check_connectivity(layout: &DungeonLayout, violations: &mut Vec<LayoutViolation>) {
    let room_count = layout.rooms.len();
    for (index, corridor) in layout.corridors.iter().enumerate() {
        for room in [corridor.from, corridor.to] {
            if room >= room_count {
                violations.push(LayoutViolation::DanglingCorridor { index, room });
            }
        }
    }
    if room_count == 0 {
        return;
    }

    let mut neighbors = vec![Vec::new(); room_count];
    for corridor in &layout.corridors {
        if corridor.from < room_count && corridor.to < room_count {
            neighbors[corridor.from].push(corridor.to);
            neighbors[corridor.to].push(corridor.from);
        }
    }

    let mut seen = BTreeSet::from([0]);
    let mut open = VecDeque::from([0]);
    while let Some(room) = open.pop_front() {
        for &next in &neighbors[room] {
            if seen.insert(next) {
                open.push_back(next);
            }
        }
    }
    for room in (0..room_count).filter(|room| !seen.contains(room)) {
        violations.push(LayoutViolation::Unreachable { room });
    }
}

fn check_roles(layout: &DungeonLayout, violations: &mut Vec<LayoutViolation>) {
    let rooms = &layout.rooms;
    let expected_spawn = (!rooms.is_empty()).then_some(0);
    let mut expected_boss: Option<(usize, f64)> = None;
    if let Some(spawn) = rooms.first() {
        for (index, room) in rooms.iter().enumerate().skip(1) {
            let distance = spawn.center_distance_squared(room);
            if expected_boss.is_none_or(|(_, best)| distance > best) {
                expected_boss = Some((index, distance));
            }
        }
    }
    let expected_boss = expected_boss.map(|(index, _)| index);

    if layout.spawn_room != expected_spawn {
        violations.push(LayoutViolation::SpawnRoom {
            expected: expected_spawn,
            found: layout.spawn_room,
        });
    }
    if layout.boss_room != expected_boss {
        violations.push(LayoutViolation::BossRoom {
            expected: expected_boss,
            found: layout.boss_room,
        });
    }

    for (index, room) in rooms.iter().enumerate() {
        let expected = if Some(index) == expected_spawn {
            RoomRole::Spawn
        } else if Some(index) == expected_boss {
            RoomRole::Boss
        } else if matches!(room.role, RoomRole::Loot | RoomRole::Enemy) {
            room.role
        } else {
            RoomRole::Enemy
        };
        if room.role != expected {
            violations.push(LayoutViolation::RoleMismatch {
                room: index,
                expected,
                found: room.role,
            });
        }
    }
}

fn check_bounds(layout: &DungeonLayout, violations: &mut Vec<LayoutViolation>) {
    let min = WORLD_PADDING - BOUNDS_EPSILON;
    for (index, room) in layout.rooms.iter().enumerate() {
        let bounds = room.bounds();
        let inside = bounds.x >= min
            && bounds.y >= min
            && bounds.right() + WORLD_PADDING <= layout.world_width + BOUNDS_EPSILON
            && bounds.bottom() + WORLD_PADDING <= layout.world_height + BOUNDS_EPSILON;
        if !inside {
            violations.push(LayoutViolation::OutOfBounds { room: index, padding: WORLD_PADDING });
        }
    }
}

fn check_spawn_points(
    layout: &DungeonLayout,
    grid: &CellGrid,
    violations: &mut Vec<LayoutViolation>,
) {
    for (index, room) in layout.rooms.iter().enumerate() {
        let points = room
            .enemies
            .iter()
            .map(|enemy| (enemy.x, enemy.y))
            .chain(room.loot_positions.iter().map(|loot| (loot.x, loot.y)));
        for (x, y) in points {
            if !grid.is_open_at_point(x, y, layout.cell_size) {
                violations.push(LayoutViolation::SpawnOnSolid { room: index, x, y });
            }
        }
    }
}

fn check_wall_cover(
    layout: &DungeonLayout,
    grid: &CellGrid,
    violations: &mut Vec<LayoutViolation>,
) {
    let width = grid.width();
    let mut counts = vec![0_u32; width * grid.height()];

    for (index, wall) in layout.walls.iter().enumerate() {
        let Some((left, top, columns, rows)) = wall_cells(wall.bounds(), layout.cell_size)
            .filter(|&(left, top, columns, rows)| {
                left + columns <= width && top + rows <= grid.height()
            })
        else {
            violations.push(LayoutViolation::MisalignedWall { index });
            continue;
        };
        for row in top..top + rows {
            for column in left..left + columns {
                if grid.is_open(column, row) {
                    violations.push(LayoutViolation::WallOverOpenCell { index, column, row });
                } else {
                    counts[row * width + column] += 1;
                }
            }
        }
    }

    for row in 0..grid.height() {
        for column in 0..width {
            if grid.is_open(column, row) {
                continue;
            }
            match counts[row * width + column] {
                0 => violations.push(LayoutViolation::UncoveredCell { column, row }),
                1 => {}
                count => violations.push(LayoutViolation::WallOverlap { column, row, count }),
            }
        }
    }
}

/// Cell span of a wall, or `None` when its edges are off the grid lines.
fn wall_cells(bounds: Rect, cell_size: f64) -> Option<(usize, usize, usize, usize)> {
    let to_cells = |value: f64| {
        let cells = value / cell_size;
        (cells >= 0.0 && cells.fract() == 0.0).then_some(cells as usize)
    };
    Some((to_cells(bounds.x)?, to_cells(bounds.y)?, to_cells(bounds.w)?, to_cells(bounds.h)?))
}
