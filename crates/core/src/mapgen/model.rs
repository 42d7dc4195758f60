//! Public data models for generated layouts: rooms, corridors, walls, and spawns.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use super::grid::{CellGrid, rasterize};
use super::layout::ROOM_MARGIN;
use super::tiers::Tier;

/// Axis-aligned rectangle in world units, anchored at its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn right(self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(self) -> f64 {
        self.y + self.h
    }

    pub fn expanded(self, margin: f64) -> Self {
        Self {
            x: self.x - margin,
            y: self.y - margin,
            w: self.w + 2.0 * margin,
            h: self.h + 2.0 * margin,
        }
    }

    /// Open-interval overlap test; rectangles sharing only an edge do not intersect.
    pub fn intersects(self, other: &Self) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn contains_point(self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoomRole {
    #[default]
    Unassigned,
    Spawn,
    Boss,
    Loot,
    Enemy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Grunt,
    Archer,
    Brute,
    Wisp,
}

impl EnemyKind {
    pub const PALETTE: [EnemyKind; 4] =
        [EnemyKind::Grunt, EnemyKind::Archer, EnemyKind::Brute, EnemyKind::Wisp];

    fn code(self) -> u8 {
        match self {
            EnemyKind::Grunt => 0,
            EnemyKind::Archer => 1,
            EnemyKind::Brute => 2,
            EnemyKind::Wisp => 3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub x: f64,
    pub y: f64,
    pub kind: EnemyKind,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LootSpawn {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub cx: f64,
    pub cy: f64,
    pub role: RoomRole,
    pub enemies: Vec<EnemySpawn>,
    pub loot_positions: Vec<LootSpawn>,
}

impl Room {
    pub fn new(id: usize, x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            id,
            x,
            y,
            w,
            h,
            cx: x + w / 2.0,
            cy: y + h / 2.0,
            role: RoomRole::Unassigned,
            enemies: Vec::new(),
            loot_positions: Vec::new(),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect { x: self.x, y: self.y, w: self.w, h: self.h }
    }

    pub fn padded_bounds(&self, padding: f64) -> Rect {
        self.bounds().expanded(padding)
    }

    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        self.bounds().contains_point(x, y)
    }

    pub fn center_distance_squared(&self, other: &Room) -> f64 {
        let dx = self.cx - other.cx;
        let dy = self.cy - other.cy;
        dx * dx + dy * dy
    }

    pub(super) fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
        self.cx += dx;
        self.cy += dy;
    }
}

/// Edge of the room graph. `from` was already connected when the edge was
/// chosen and is the carve source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Corridor {
    pub from: usize,
    pub to: usize,
}

impl Corridor {
    pub fn connects(self, a: usize, b: usize) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

/// Collision rectangle. Generated walls are indestructible; the hit-point
/// fields exist for combat consumers that copy walls into their own state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WallRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub destructible: bool,
    pub hit_points: u32,
    pub max_hit_points: u32,
}

impl WallRect {
    pub fn indestructible(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h, destructible: false, hit_points: 0, max_hit_points: 0 }
    }

    pub fn bounds(&self) -> Rect {
        Rect { x: self.x, y: self.y, w: self.w, h: self.h }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DungeonLayout {
    pub rooms: Vec<Room>,
    pub corridors: Vec<Corridor>,
    pub walls: Vec<WallRect>,
    pub spawn_room: Option<usize>,
    pub boss_room: Option<usize>,
    pub world_width: f64,
    pub world_height: f64,
    pub cell_size: f64,
    pub corridor_width: f64,
    pub tier: Tier,
    pub seed: u32,
}

impl DungeonLayout {
    pub fn spawn_room(&self) -> Option<&Room> {
        self.spawn_room.and_then(|index| self.rooms.get(index))
    }

    pub fn boss_room(&self) -> Option<&Room> {
        self.boss_room.and_then(|index| self.rooms.get(index))
    }

    /// Minimum clearance kept around every room during placement.
    pub fn room_padding(&self) -> f64 {
        self.corridor_width + ROOM_MARGIN
    }

    /// Rebuilds the open/solid grid the walls were meshed from.
    pub fn rasterize(&self) -> CellGrid {
        rasterize(
            self.world_width,
            self.world_height,
            self.cell_size,
            &self.rooms,
            &self.corridors,
            self.corridor_width,
        )
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(self.seed.to_le_bytes());
        bytes.push(self.tier.level());
        for value in [self.world_width, self.world_height, self.cell_size, self.corridor_width] {
            bytes.extend(value.to_bits().to_le_bytes());
        }
        for index in [self.spawn_room, self.boss_room] {
            let encoded = index.map_or(u32::MAX, |index| index as u32);
            bytes.extend(encoded.to_le_bytes());
        }

        bytes.extend((self.rooms.len() as u32).to_le_bytes());
        for room in &self.rooms {
            bytes.extend((room.id as u32).to_le_bytes());
            for value in [room.x, room.y, room.w, room.h, room.cx, room.cy] {
                bytes.extend(value.to_bits().to_le_bytes());
            }
            bytes.push(match room.role {
                RoomRole::Unassigned => 0,
                RoomRole::Spawn => 1,
                RoomRole::Boss => 2,
                RoomRole::Loot => 3,
                RoomRole::Enemy => 4,
            });
            bytes.extend((room.enemies.len() as u32).to_le_bytes());
            for enemy in &room.enemies {
                bytes.extend(enemy.x.to_bits().to_le_bytes());
                bytes.extend(enemy.y.to_bits().to_le_bytes());
                bytes.push(enemy.kind.code());
            }
            bytes.extend((room.loot_positions.len() as u32).to_le_bytes());
            for loot in &room.loot_positions {
                bytes.extend(loot.x.to_bits().to_le_bytes());
                bytes.extend(loot.y.to_bits().to_le_bytes());
            }
        }

        bytes.extend((self.corridors.len() as u32).to_le_bytes());
        for corridor in &self.corridors {
            bytes.extend((corridor.from as u32).to_le_bytes());
            bytes.extend((corridor.to as u32).to_le_bytes());
        }

        bytes.extend((self.walls.len() as u32).to_le_bytes());
        for wall in &self.walls {
            for value in [wall.x, wall.y, wall.w, wall.h] {
                bytes.extend(value.to_bits().to_le_bytes());
            }
            bytes.push(u8::from(wall.destructible));
        }

        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}
