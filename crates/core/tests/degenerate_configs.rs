use dungeon_core::mapgen::{
    Corridor, MAX_ENEMIES_PER_ROOM, RoomRole, Span, Tier, TierConfig, TierConfigError,
};
use dungeon_core::{DungeonGenerator, audit_layout};

fn config_with_rooms(tier: Tier, rooms: u32) -> TierConfig {
    let mut config = TierConfig::builtin(tier);
    config.room_count = Span::new(rooms, rooms);
    config
}

#[test]
fn two_room_config_gets_exactly_one_corridor() {
    for tier in Tier::ALL {
        for seed in 0..20 {
            let generator =
                DungeonGenerator::with_config(seed, tier, config_with_rooms(tier, 2))
                    .expect("two-room config should validate");
            let layout = generator.generate();

            assert_eq!(layout.rooms.len(), 2, "seed={seed} tier={tier:?}");
            assert_eq!(layout.corridors, vec![Corridor { from: 0, to: 1 }]);
            assert_eq!(layout.rooms[0].role, RoomRole::Spawn);
            assert_eq!(layout.rooms[1].role, RoomRole::Boss);
            assert_eq!(layout.boss_room, Some(1));
            assert!(audit_layout(&layout).is_empty());
        }
    }
}

#[test]
fn single_room_config_has_spawn_but_no_boss() {
    let layout = DungeonGenerator::with_config(4, Tier::One, config_with_rooms(Tier::One, 1))
        .expect("single-room config should validate")
        .generate();

    assert_eq!(layout.rooms.len(), 1);
    assert!(layout.corridors.is_empty());
    assert_eq!(layout.spawn_room, Some(0));
    assert_eq!(layout.boss_room, None);
    assert!(layout.boss_room().is_none());
    assert!(!layout.walls.is_empty());
    assert!(audit_layout(&layout).is_empty());
}

#[test]
fn empty_config_produces_an_empty_layout() {
    let layout = DungeonGenerator::with_config(9, Tier::Two, config_with_rooms(Tier::Two, 0))
        .expect("empty room range is valid")
        .generate();

    assert!(layout.rooms.is_empty());
    assert!(layout.corridors.is_empty());
    assert!(layout.walls.is_empty());
    assert_eq!((layout.spawn_room, layout.boss_room), (None, None));
    assert_eq!((layout.world_width, layout.world_height), (0.0, 0.0));
    assert!(audit_layout(&layout).is_empty());
}

#[test]
fn oversized_counts_are_refused_before_generation() {
    let huge_rooms = config_with_rooms(Tier::One, 4_000_000_000);
    assert!(matches!(
        DungeonGenerator::with_config(1, Tier::One, huge_rooms),
        Err(TierConfigError::TooLarge { field: "room_count", .. })
    ));

    let mut huge_enemies = TierConfig::builtin(Tier::One);
    huge_enemies.enemies_per_room = Span::new(u32::MAX, u32::MAX);
    assert!(matches!(
        DungeonGenerator::with_config(1, Tier::One, huge_enemies),
        Err(TierConfigError::TooLarge { field: "enemies_per_room", .. })
    ));

    let mut huge_rooms_size = TierConfig::builtin(Tier::One);
    huge_rooms_size.room_size = Span::new(200.0, 1.0e12);
    assert!(matches!(
        DungeonGenerator::with_config(1, Tier::One, huge_rooms_size),
        Err(TierConfigError::GridTooLarge { .. })
    ));
}

#[test]
fn enemy_cap_config_generates_a_sound_layout() {
    let mut config = TierConfig::builtin(Tier::Two);
    config.enemies_per_room = Span::new(MAX_ENEMIES_PER_ROOM, MAX_ENEMIES_PER_ROOM);
    let layout = DungeonGenerator::with_config(6, Tier::Two, config)
        .expect("enemy cap is a valid configuration")
        .generate();

    let boss = layout.boss_room().expect("multi-room layout has a boss");
    assert_eq!(boss.enemies.len(), MAX_ENEMIES_PER_ROOM as usize + 2);
    assert!(audit_layout(&layout).is_empty());
}

#[test]
fn fractional_room_size_minimum_is_respected() {
    let mut config = TierConfig::builtin(Tier::One);
    config.room_size = Span::new(170.5, 240.0);
    let layout = DungeonGenerator::with_config(12, Tier::One, config)
        .expect("fractional minimum with a whole size in range is valid")
        .generate();

    for room in &layout.rooms {
        assert!(room.w >= 170.5 && room.h >= 170.5, "room {} is {}x{}", room.id, room.w, room.h);
    }
    assert!(audit_layout(&layout).is_empty());
}
