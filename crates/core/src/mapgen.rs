//! Procedural dungeon layout generation split into one submodule per stage.

pub mod audit;
pub mod model;
pub mod tiers;

mod generator;
mod graph;
mod grid;
mod layout;
mod mesh;
mod placement;
mod roles;
mod seed;

pub use audit::{LayoutViolation, audit_layout};
pub use generator::DungeonGenerator;
pub use grid::{CELL_SIZE, CellGrid};
pub use layout::{ROOM_MARGIN, WORLD_PADDING};
pub use model::{
    Corridor, DungeonLayout, EnemyKind, EnemySpawn, LootSpawn, Rect, Room, RoomRole, WallRect,
};
pub use roles::SPAWN_INSET;
pub use seed::SeededRandom;
pub use tiers::{
    MAX_ENEMIES_PER_ROOM, MAX_GRID_CELLS, Span, Tier, TierConfig, TierConfigError, TierEntry,
    TierTable,
};

pub fn generate(seed: u32, tier: Tier) -> DungeonLayout {
    DungeonGenerator::new(seed, tier).generate()
}
