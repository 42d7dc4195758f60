//! Layout-construction pipeline that composes the mapgen stages in draw order.

use log::{debug, trace};

use super::super::graph::connect_rooms;
use super::super::grid::{CELL_SIZE, rasterize};
use super::super::layout::{normalize_world, place_rooms};
use super::super::mesh::mesh_walls;
use super::super::model::DungeonLayout;
use super::super::placement::snap_spawns_to_open_cells;
use super::super::roles::assign_roles;
use super::super::seed::SeededRandom;
use super::super::tiers::{Tier, TierConfig};

pub(super) fn generate_layout(seed: u32, tier: Tier, config: &TierConfig) -> DungeonLayout {
    let mut rng = SeededRandom::new(seed);

    let placement = place_rooms(&mut rng, config);
    if placement.rooms.len() < placement.target_count as usize {
        debug!(
            "seed {seed} tier {}: placed {} of {} rooms before the attempt cap",
            tier.level(),
            placement.rooms.len(),
            placement.target_count
        );
    }
    let mut rooms = placement.rooms;
    let world = normalize_world(&mut rooms);

    let corridors = connect_rooms(&mut rng, &rooms);
    let grid = rasterize(
        world.width,
        world.height,
        CELL_SIZE,
        &rooms,
        &corridors,
        config.corridor_width,
    );
    let walls = mesh_walls(&grid, CELL_SIZE);

    let roles = assign_roles(&mut rng, &mut rooms, config);
    let snapped = snap_spawns_to_open_cells(&mut rooms, &grid, CELL_SIZE);

    let layout = DungeonLayout {
        rooms,
        corridors,
        walls,
        spawn_room: roles.spawn_room,
        boss_room: roles.boss_room,
        world_width: world.width,
        world_height: world.height,
        cell_size: CELL_SIZE,
        corridor_width: config.corridor_width,
        tier,
        seed,
    };
    trace!(
        "seed {seed} tier {}: {} rooms, {} corridors, {} walls over {}x{} cells, \
         boss {:?}, {snapped} spawn points snapped",
        tier.level(),
        layout.rooms.len(),
        layout.corridors.len(),
        layout.walls.len(),
        grid.width(),
        grid.height(),
        layout.boss_room,
    );
    layout
}
