//! Room role assignment and per-room enemy and loot spawn candidates.

use super::model::{EnemyKind, EnemySpawn, LootSpawn, Room, RoomRole};
use super::seed::SeededRandom;
use super::tiers::TierConfig;

/// Distance kept between enemy spawn candidates and the room's edges.
pub const SPAWN_INSET: f64 = 32.0;

const LOOT_ROOM_CHANCE: f64 = 0.3;
const BOSS_EXTRA_ENEMIES: u32 = 2;
const LOOT_JITTER: f64 = 24.0;
const LOOT_SPAWNS_PER_LOOT_ROOM: usize = 1;
const LOOT_SPAWNS_PER_BOSS_ROOM: usize = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(super) struct RoleAssignment {
    pub(super) spawn_room: Option<usize>,
    pub(super) boss_room: Option<usize>,
}

pub(super) fn assign_roles(
    rng: &mut SeededRandom,
    rooms: &mut [Room],
    config: &TierConfig,
) -> RoleAssignment {
    let Some(spawn) = rooms.first() else {
        return RoleAssignment::default();
    };

    let mut boss_room: Option<(usize, f64)> = None;
    for (index, room) in rooms.iter().enumerate().skip(1) {
        let distance = spawn.center_distance_squared(room);
        if boss_room.is_none_or(|(_, best)| distance > best) {
            boss_room = Some((index, distance));
        }
    }
    let boss_room = boss_room.map(|(index, _)| index);

    for (index, room) in rooms.iter_mut().enumerate() {
        room.role = if index == 0 {
            RoomRole::Spawn
        } else if Some(index) == boss_room {
            RoomRole::Boss
        } else if rng.next_f64() < LOOT_ROOM_CHANCE {
            RoomRole::Loot
        } else {
            RoomRole::Enemy
        };
    }

    for room in rooms.iter_mut() {
        populate_room(rng, room, config);
    }

    RoleAssignment { spawn_room: Some(0), boss_room }
}

fn populate_room(rng: &mut SeededRandom, room: &mut Room, config: &TierConfig) {
    let is_boss = room.role == RoomRole::Boss;

    if matches!(room.role, RoomRole::Enemy | RoomRole::Boss) {
        let mut count = rng.int_inclusive(config.enemies_per_room.min, config.enemies_per_room.max);
        if is_boss {
            count = count.saturating_add(BOSS_EXTRA_ENEMIES);
        }
        for _ in 0..count {
            let x = room.x + SPAWN_INSET + rng.next_f64() * (room.w - 2.0 * SPAWN_INSET);
            let y = room.y + SPAWN_INSET + rng.next_f64() * (room.h - 2.0 * SPAWN_INSET);
            let kind = EnemyKind::PALETTE[rng.index(EnemyKind::PALETTE.len())];
            room.enemies.push(EnemySpawn { x, y, kind });
        }
    }

    if matches!(room.role, RoomRole::Loot | RoomRole::Boss) {
        let count = if is_boss { LOOT_SPAWNS_PER_BOSS_ROOM } else { LOOT_SPAWNS_PER_LOOT_ROOM };
        for _ in 0..count {
            let x = room.cx + rng.range_f64(-LOOT_JITTER, LOOT_JITTER);
            let y = room.cy + rng.range_f64(-LOOT_JITTER, LOOT_JITTER);
            room.loot_positions.push(LootSpawn { x, y });
        }
    }
}
